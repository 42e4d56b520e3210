//! Persisted light/dark preference
//!
//! The explicit user choice lives in a small JSON file in the data directory.
//! Without one, the terminal's colour scheme decides, and later changes to
//! that scheme are followed until the user picks a side.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Detect the terminal's scheme from `COLORFGBG` ("fg;bg", bg 0-6 or 8 is dark)
    pub fn detect_terminal() -> Option<Self> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| Self::from_colorfgbg(&value))
    }

    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match bg {
            0..=6 | 8 => Some(ColorScheme::Dark),
            7 | 9..=15 => Some(ColorScheme::Light),
            _ => None,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => f.write_str("light"),
            ColorScheme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(Error::Config(format!("unknown color scheme: {}", other))),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    theme: Option<ColorScheme>,
}

/// File-backed storage for the theme preference
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme, if the user ever chose one
    ///
    /// A missing file is not an error; a corrupt one is.
    pub fn load(&self) -> Result<Option<ColorScheme>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let stored: StoredPreferences = serde_json::from_str(&content)?;
        Ok(stored.theme)
    }

    /// Persist an explicit choice, or clear it with `None`
    pub fn save(&self, theme: Option<ColorScheme>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&StoredPreferences { theme })?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), ?theme, "Preferences saved");
        Ok(())
    }
}

/// Decides the active scheme from the stored choice and the system scheme
#[derive(Debug)]
pub struct ThemeResolver {
    store: PreferenceStore,
    explicit: Option<ColorScheme>,
    current: ColorScheme,
}

impl ThemeResolver {
    /// Resolve the startup scheme: stored choice, then system, then `fallback`
    pub fn new(store: PreferenceStore, system: Option<ColorScheme>, fallback: ColorScheme) -> Self {
        let explicit = match store.load() {
            Ok(theme) => theme,
            Err(e) => {
                info!("Ignoring unreadable preferences at {}: {}", store.path().display(), e);
                None
            }
        };
        let current = explicit.or(system).unwrap_or(fallback);
        Self {
            store,
            explicit,
            current,
        }
    }

    pub fn current(&self) -> ColorScheme {
        self.current
    }

    /// Whether the user has an explicit, persisted choice
    pub fn is_explicit(&self) -> bool {
        self.explicit.is_some()
    }

    /// Flip the scheme and persist it as an explicit choice
    pub fn toggle(&mut self) -> Result<ColorScheme> {
        self.set(self.current.toggled())?;
        Ok(self.current)
    }

    /// Persist an explicit choice
    pub fn set(&mut self, scheme: ColorScheme) -> Result<()> {
        self.store.save(Some(scheme))?;
        self.explicit = Some(scheme);
        self.current = scheme;
        Ok(())
    }

    /// Apply a system scheme change; ignored once the user has chosen
    ///
    /// Returns true when the active scheme changed.
    pub fn on_system_change(&mut self, system: ColorScheme) -> bool {
        if self.explicit.is_some() || self.current == system {
            return false;
        }
        debug!(%system, "Following system color scheme");
        self.current = system;
        true
    }
}
