use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::shell::NAV_ITEMS;

/// Navigation menu overlay
pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let Some(selected) = app.shell.menu() else {
            return;
        };
        let theme = &app.theme;
        let area = frame.area();
        let section = app.shell.location().route.section();

        let popup_width = 36u16.min(area.width.saturating_sub(4));
        let popup_height = (NAV_ITEMS.len() as u16 * 2 + 3).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Menu ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines = Vec::new();
        for (i, (label, index, route)) in NAV_ITEMS.iter().enumerate() {
            let current = *route == section;
            let label_style = if i == selected {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else if current {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(theme.foreground)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", index), Style::default().fg(theme.muted)),
                Span::styled(format!(" {} ", label), label_style),
            ]));
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
