use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Persistent top bar: logo, call to action and menu hint
///
/// Once the page is scrolled the bar gets a surface background and a rule
/// underneath, like a sticky header gaining its backdrop.
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let scrolled = app.shell.is_scrolled();
        let bg = if scrolled { theme.surface } else { theme.background };

        let block = Block::default()
            .borders(if scrolled { Borders::BOTTOM } else { Borders::NONE })
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let logo = vec![
            Span::raw(" "),
            Span::styled(
                "show",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::ITALIC),
            ),
            Span::styled(
                "casy.",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        let menu_open = app.shell.is_menu_open();
        let right = vec![
            Span::styled(
                " Let's Talk ",
                Style::default()
                    .fg(theme.background)
                    .bg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                if menu_open { "✕ close " } else { "☰ menu " },
                Style::default().fg(theme.muted),
            ),
        ];

        let used: usize = logo
            .iter()
            .chain(right.iter())
            .map(|s| s.content.width())
            .sum();
        let padding = (inner.width as usize).saturating_sub(used);

        let mut spans = logo;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.extend(right);

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}
