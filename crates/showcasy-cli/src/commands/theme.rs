use anyhow::Result;
use tracing::info;

use showcasy_core::{AppConfig, ColorScheme, PreferenceStore};

use crate::ThemeChoice;

pub fn run(config: &AppConfig, choice: ThemeChoice) -> Result<()> {
    let store = PreferenceStore::new(config.preferences_path());
    let scheme = match choice {
        ThemeChoice::Light => Some(ColorScheme::Light),
        ThemeChoice::Dark => Some(ColorScheme::Dark),
        ThemeChoice::System => None,
    };
    store.save(scheme)?;
    info!(path = %store.path().display(), "Theme preference saved");

    match scheme {
        Some(scheme) => println!("Theme set to {}.", scheme),
        None => match ColorScheme::detect_terminal() {
            Some(system) => println!("Following the terminal color scheme (currently {}).", system),
            None => println!(
                "Following the terminal color scheme (not detected, using '{}').",
                config.ui.theme.name
            ),
        },
    }

    Ok(())
}
