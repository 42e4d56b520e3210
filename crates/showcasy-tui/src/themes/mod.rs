//! Light and dark palettes with user overrides

mod dark;
mod light;

use ratatui::style::Color;
use showcasy_core::config::{ThemeColorOverrides, ThemeConfig};
use showcasy_core::ColorScheme;
use tracing::warn;

use crate::theme::Theme;

pub use dark::default as dark;
pub use light::default as light;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Scheme used when neither a stored preference nor the terminal says otherwise
pub fn fallback_scheme(config: &ThemeConfig) -> ColorScheme {
    match config.name.parse() {
        Ok(scheme) => scheme,
        Err(_) => {
            warn!("Unknown theme '{}', falling back to dark", config.name);
            ColorScheme::Dark
        }
    }
}

/// Build the palette for `scheme` with the configured overrides applied
pub fn load_theme(config: &ThemeConfig, scheme: ColorScheme) -> Theme {
    let base = match scheme {
        ColorScheme::Light => light(),
        ColorScheme::Dark => dark(),
    };
    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 8] = [
        (&overrides.background, &mut theme.background),
        (&overrides.surface, &mut theme.surface),
        (&overrides.foreground, &mut theme.foreground),
        (&overrides.muted, &mut theme.muted),
        (&overrides.primary, &mut theme.primary),
        (&overrides.border, &mut theme.border),
        (&overrides.error, &mut theme.error),
        (&overrides.success, &mut theme.success),
    ];

    for (hex, slot) in slots {
        let Some(hex) = hex else { continue };
        match parse_hex_color(hex) {
            Some(color) => *slot = color,
            None => warn!("Ignoring invalid theme color '{}'", hex),
        }
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_theme_per_scheme() {
        let config = ThemeConfig::default();
        assert_eq!(load_theme(&config, ColorScheme::Light).scheme, ColorScheme::Light);
        assert_eq!(load_theme(&config, ColorScheme::Dark), dark());
    }

    #[test]
    fn test_overrides_apply_to_both_schemes() {
        let config = ThemeConfig {
            name: "light".to_string(),
            colors: ThemeColorOverrides {
                primary: Some("#ff0000".to_string()),
                muted: Some("nope".to_string()),
                ..Default::default()
            },
        };
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = load_theme(&config, scheme);
            assert_eq!(theme.primary, Color::Rgb(255, 0, 0));
        }
        assert_eq!(load_theme(&config, ColorScheme::Light).muted, light().muted);
    }

    #[test]
    fn test_fallback_scheme() {
        let mut config = ThemeConfig::default();
        assert_eq!(fallback_scheme(&config), ColorScheme::Dark);
        config.name = "light".to_string();
        assert_eq!(fallback_scheme(&config), ColorScheme::Light);
        config.name = "solarized".to_string();
        assert_eq!(fallback_scheme(&config), ColorScheme::Dark);
    }
}
