mod header;
mod menu;
mod page_view;
mod status_bar;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub use header::HeaderWidget;
pub use menu::MenuWidget;
pub use page_view::PageViewWidget;
pub use status_bar::StatusBarWidget;

use crate::app::App;

/// Header, page body and status bar areas for a terminal of `size`
pub fn layout(size: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Page body
            Constraint::Length(1), // Status bar
        ])
        .split(size);
    [chunks[0], chunks[1], chunks[2]]
}

/// Lay out the current page for this frame and draw everything
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let [header, body, status] = layout(frame.area());
    app.sync(body.width, body.height, now);

    HeaderWidget::render(frame, header, app);
    PageViewWidget::render(frame, body, app, now);
    StatusBarWidget::render(frame, status, app);
    MenuWidget::render(frame, app);
}
