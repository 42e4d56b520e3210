use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

/// The scrolled page body
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let scroll = app.scroll.position() as i32;
        let body = app.shell.visual(now);
        let body_offset = body.offset_y.round() as i32;
        let buf = frame.buffer_mut();

        for element in app.shell.body().elements() {
            let bounds = element.bounds();
            let top = bounds.top as i32 - scroll + body_offset;
            let bottom = top + bounds.height as i32;
            if bottom <= 0 || top >= area.height as i32 {
                continue;
            }

            let visual = element.visual(now);
            let opacity = (visual.opacity * body.opacity).clamp(0.0, 1.0);
            for (i, line) in element.lines().iter().enumerate() {
                // The reveal shift stays inside the element's own rows
                let slot = i as i32 + visual.offset_rows as i32;
                if slot >= bounds.height as i32 {
                    break;
                }
                let y = top + slot;
                if y < 0 || y >= area.height as i32 {
                    continue;
                }
                let faded = fade_line(line, theme, opacity);
                draw_line(buf, area, y as u16, &faded);
            }
        }
    }
}

fn draw_line(buf: &mut Buffer, area: Rect, row: u16, line: &Line<'_>) {
    buf.set_line(area.x, area.y + row, line, area.width);
}

/// Blend every span of `line` toward the page background
fn fade_line(line: &Line<'static>, theme: &Theme, opacity: f64) -> Line<'static> {
    if opacity >= 1.0 {
        return line.clone();
    }
    let spans = line
        .spans
        .iter()
        .map(|span| {
            let fg = span.style.fg.unwrap_or(theme.foreground);
            let mut style = span.style.fg(theme.fade(fg, opacity));
            if let Some(bg) = span.style.bg {
                style = style.bg(theme.fade(bg, opacity));
            }
            Span::styled(span.content.clone(), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans).style(line.style)
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;
    use crate::themes;

    #[test]
    fn test_fade_line_blends_toward_background() {
        let theme = themes::dark();
        let line = Line::from(Span::styled("hi", Style::default().fg(theme.foreground)));

        let hidden = fade_line(&line, &theme, 0.0);
        assert_eq!(hidden.spans[0].style.fg, Some(theme.background));

        let full = fade_line(&line, &theme, 1.0);
        assert_eq!(full.spans[0].style.fg, Some(theme.foreground));
    }

    #[test]
    fn test_fade_line_keeps_text() {
        let theme = themes::light();
        let line = Line::from(vec![
            Span::raw("a "),
            Span::styled("b", Style::default().bg(Color::Rgb(10, 10, 10))),
        ]);
        let faded = fade_line(&line, &theme, 0.5);
        let text: String = faded.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "a b");
        assert!(faded.spans[1].style.bg.is_some());
    }
}
