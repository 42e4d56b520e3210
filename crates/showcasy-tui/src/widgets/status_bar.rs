use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match &app.mode {
            Mode::Normal => "BROWSE".to_string(),
            Mode::Editing(field) => format!("EDIT {}", field.label().to_uppercase()),
            Mode::Menu => "MENU".to_string(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} ", msg)
        } else {
            let max = app.scroll.max();
            let percent = if max == 0 {
                100
            } else {
                app.scroll.position() as u32 * 100 / max as u32
            };
            format!(
                " {} | {} | {}% ",
                mode_str,
                app.shell.location().route,
                percent
            )
        };

        let help_hint = match app.mode {
            Mode::Editing(_) => " esc:done tab:next ",
            Mode::Menu => " j/k:move enter:go esc:close ",
            Mode::Normal => " q:quit j/k:scroll tab:links m:menu t:theme ",
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.foreground).bg(theme.surface),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.surface),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.muted).bg(theme.surface),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
