//! Light scheme: warm paper background with an orange accent

use ratatui::style::Color;
use showcasy_core::ColorScheme;

use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        scheme: ColorScheme::Light,
        background: Color::Rgb(0xf7, 0xf5, 0xf0),
        surface: Color::Rgb(0xec, 0xe9, 0xe2),
        border: Color::Rgb(0xd6, 0xd2, 0xc8),
        foreground: Color::Rgb(0x16, 0x16, 0x14),
        muted: Color::Rgb(0x6b, 0x68, 0x60),
        primary: Color::Rgb(0xe0, 0x5a, 0x1c),
        error: Color::Rgb(0xc8, 0x2d, 0x2d),
        success: Color::Rgb(0x2f, 0x8f, 0x4e),
    }
}
