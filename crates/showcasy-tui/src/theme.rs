use ratatui::style::Color;
use showcasy_core::ColorScheme;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub scheme: ColorScheme,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub border: Color,

    // Text
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::dark()
    }
}

impl Theme {
    /// `color` drawn at `opacity` over the page background
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        blend(color, self.background, opacity)
    }
}

/// Mix `fg` over `bg`; 1.0 is pure `fg`, 0.0 is pure `bg`
///
/// Only RGB colors can be mixed. Anything else snaps to whichever side is
/// closer.
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * opacity).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if opacity >= 0.5 => fg,
        _ => bg,
    }
}
