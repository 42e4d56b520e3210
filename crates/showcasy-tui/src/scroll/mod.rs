//! Smooth scrolling for the showcasy page column
//!
//! Inertial scrolling with configurable easing. The application owns a single
//! [`SmoothScroll`] controller whose frame step runs on the motion ticker.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential, bezier)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration types and defaults (re-exported from showcasy-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation state combining atoms
//!
//! ## L2 Organism Layer
//! - `controller` - Owned controller registered with the ticker
//!
//! # Usage
//!
//! ```ignore
//! use showcasy_tui::motion::Ticker;
//! use showcasy_tui::scroll::{ScrollConfig, SmoothScroll};
//!
//! let ticker = Ticker::new();
//! let scroll = SmoothScroll::new(ScrollConfig::default(), &ticker);
//! scroll.set_max(120);
//! scroll.scroll_down();
//!
//! // Once per frame
//! ticker.tick(Instant::now());
//! let top = scroll.position();
//!
//! // At teardown
//! scroll.dispose();
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// L2 Organism Layer
pub mod controller;

// Re-exports for convenient access
pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use controller::SmoothScroll;
pub use easing::{CubicBezier, EasingType, EasingTypeExt};
