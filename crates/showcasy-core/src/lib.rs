pub mod assets;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod metric;
pub mod preference;

pub use assets::{AssetResolver, ResolvedAsset};
pub use config::{AppConfig, EasingType, ScrollConfig};
pub use content::Catalog;
pub use error::{Error, Result};
pub use metric::MetricValue;
pub use preference::{ColorScheme, PreferenceStore, ThemeResolver};
