//! Dark scheme

use ratatui::style::Color;
use showcasy_core::ColorScheme;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        scheme: ColorScheme::Dark,
        background: Color::Rgb(0x12, 0x12, 0x11),
        surface: Color::Rgb(0x1f, 0x1f, 0x1d),
        border: Color::Rgb(0x34, 0x33, 0x30),
        foreground: Color::Rgb(0xf2, 0xf0, 0xea),
        muted: Color::Rgb(0x9a, 0x96, 0x8c),
        primary: Color::Rgb(0xff, 0x7a, 0x3d),
        error: Color::Rgb(0xf0, 0x6a, 0x6a),
        success: Color::Rgb(0x6c, 0xc6, 0x86),
    }
}
