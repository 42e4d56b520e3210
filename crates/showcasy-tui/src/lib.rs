pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod motion;
pub mod page;
pub mod router;
pub mod scroll;
pub mod shell;
pub mod theme;
pub mod themes;
pub mod transition;
pub mod widgets;

pub use app::App;
pub use router::{Route, Router};
pub use theme::Theme;
pub use themes::{fallback_scheme, load_theme, parse_hex_color};
