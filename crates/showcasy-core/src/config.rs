use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub count_up: CountUpConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (preferences, outbox, log file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Animate the outgoing and incoming page on route changes
    #[serde(default = "default_true")]
    pub page_transitions: bool,
    /// Duration of each half of a page transition
    #[serde(default = "default_transition_duration")]
    pub transition_duration_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            page_transitions: default_true(),
            transition_duration_ms: default_transition_duration(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (fallback scheme) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Scheme used when neither a stored preference nor the terminal's scheme is known
    /// ("light" or "dark")
    pub name: String,
    /// Optional color overrides, applied on top of both schemes
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (scheme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "dark".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub background: Option<String>,
    /// Card / header background
    pub surface: Option<String>,
    /// Body text
    pub foreground: Option<String>,
    /// Secondary text
    pub muted: Option<String>,
    /// Accent (italic highlights, focused controls)
    pub primary: Option<String>,
    /// Divider lines
    pub border: Option<String>,
    /// Validation errors
    pub error: Option<String>,
    /// Confirmations
    pub success: Option<String>,
}

/// Easing curve applied to animated scroll and page transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// No interpolation, jump at the end
    None,
    Linear,
    /// 1 - (1-t)^3
    Cubic,
    /// 1 - (1-t)^5
    Quintic,
    /// Exponential ease-out, the curve inertial page scrolling uses
    #[default]
    EaseOut,
    /// cubic-bezier(0.25, 0.1, 0.25, 1)
    Ease,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable inertial scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one eased scroll
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Rows moved per line-scroll input
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while anything is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// When disabled every element renders fully visible from the start
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Fraction of an element's rows that must be visible to reveal it
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
    /// Reveal transition duration
    #[serde(default = "default_reveal_duration")]
    pub duration_ms: u64,
    /// Rows an unrevealed element is shifted down by
    #[serde(default = "default_reveal_shift")]
    pub shift_rows: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            threshold: default_reveal_threshold(),
            duration_ms: default_reveal_duration(),
            shift_rows: default_reveal_shift(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountUpConfig {
    /// Count-up duration
    #[serde(default = "default_count_up_duration")]
    pub duration_ms: u64,
    /// Visible fraction that starts the count
    #[serde(default = "default_count_up_threshold")]
    pub threshold: f64,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_count_up_duration(),
            threshold: default_count_up_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Submission transport: "noop" or "outbox"
    #[serde(default = "default_transport")]
    pub transport: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory fixture image paths are resolved against
    #[serde(default = "default_asset_root")]
    pub root: PathBuf,
    /// Substitute for images that fail to load
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: default_asset_root(),
            placeholder: default_placeholder(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Scrolling
    /// Scroll down
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll up
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll half page down
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    /// Scroll half page up
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    /// Scroll full page down
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    /// Scroll full page up
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to top
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to bottom
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Links
    /// Focus next link on the page
    #[serde(default = "default_key_next_link")]
    pub next_link: String,
    /// Focus previous link on the page
    #[serde(default = "default_key_prev_link")]
    pub prev_link: String,
    /// Follow the focused link
    #[serde(default = "default_key_follow")]
    pub follow: String,

    // Routes
    /// Open the navigation menu
    #[serde(default = "default_key_menu")]
    pub menu: String,
    #[serde(default = "default_key_go_home")]
    pub go_home: String,
    #[serde(default = "default_key_go_about")]
    pub go_about: String,
    #[serde(default = "default_key_go_works")]
    pub go_works: String,
    #[serde(default = "default_key_go_contact")]
    pub go_contact: String,

    // History
    /// Navigate back in history
    #[serde(default = "default_key_history_back")]
    pub history_back: String,
    /// Navigate forward in history
    #[serde(default = "default_key_history_forward")]
    pub history_forward: String,

    /// Toggle light/dark theme
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    /// Open the current project's website in the browser
    #[serde(default = "default_key_open_website")]
    pub open_website: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_link: default_key_next_link(),
            prev_link: default_key_prev_link(),
            follow: default_key_follow(),
            menu: default_key_menu(),
            go_home: default_key_go_home(),
            go_about: default_key_go_about(),
            go_works: default_key_go_works(),
            go_contact: default_key_go_contact(),
            history_back: default_key_history_back(),
            history_forward: default_key_history_forward(),
            toggle_theme: default_key_toggle_theme(),
            open_website: default_key_open_website(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_link() -> String { "<Tab>".to_string() }
fn default_key_prev_link() -> String { "<S-Tab>".to_string() }
fn default_key_follow() -> String { "<CR>".to_string() }
fn default_key_menu() -> String { "m".to_string() }
fn default_key_go_home() -> String { "1".to_string() }
fn default_key_go_about() -> String { "2".to_string() }
fn default_key_go_works() -> String { "3".to_string() }
fn default_key_go_contact() -> String { "4".to_string() }
fn default_key_history_back() -> String { "u".to_string() }
fn default_key_history_forward() -> String { "<C-r>".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_open_website() -> String { "o".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showcasy")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_transition_duration() -> u64 {
    350
}

fn default_scroll_duration() -> u64 {
    1200
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_animation_fps() -> u32 {
    60
}

fn default_reveal_threshold() -> f64 {
    0.15
}

fn default_reveal_duration() -> u64 {
    700
}

fn default_reveal_shift() -> u16 {
    2
}

fn default_count_up_duration() -> u64 {
    1500
}

fn default_count_up_threshold() -> f64 {
    0.3
}

fn default_transport() -> String {
    "noop".to_string()
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_placeholder() -> String {
    "/images/placeholder.png".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/showcasy/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showcasy")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Where the theme preference is persisted
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    /// Where the outbox transport appends submissions
    pub fn outbox_path(&self) -> PathBuf {
        self.data_dir().join("outbox.jsonl")
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("showcasy.log")
    }

    /// Asset root (with tilde expansion)
    pub fn asset_root(&self) -> PathBuf {
        expand_tilde(&self.assets.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.page_transitions);
        assert_eq!(config.scroll.animation_duration_ms, 1200);
        assert_eq!(config.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.reveal.duration_ms, 700);
        assert!((config.reveal.threshold - 0.15).abs() < f64::EPSILON);
        assert!((config.count_up.threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.contact.transport, "noop");
        assert_eq!(config.keymap.jump_to_top, "gg");
    }

    #[test]
    fn test_theme_as_string() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "light");
        assert!(config.ui.theme.colors.primary.is_none());
    }

    #[test]
    fn test_theme_as_table() {
        let toml = r##"
[ui.theme]
name = "dark"

[ui.theme.colors]
primary = "#ff5500"
"##;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.ui.theme.name, "dark");
        assert_eq!(config.ui.theme.colors.primary.as_deref(), Some("#ff5500"));
    }

    #[test]
    fn test_easing_kebab_case() {
        let config = AppConfig::from_toml("[scroll]\neasing = \"ease-out\"\nsmooth_enabled = false\n").unwrap();
        assert_eq!(config.scroll.easing, EasingType::EaseOut);
        assert!(!config.scroll.smooth_enabled);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(std::path::Path::new("~/x")), home.join("x"));
        }
        assert_eq!(
            expand_tilde(std::path::Path::new("/tmp/x")),
            PathBuf::from("/tmp/x")
        );
    }
}
