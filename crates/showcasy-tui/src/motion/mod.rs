//! Frame-driven motion: the ticker, visibility observation, reveals and count-ups

pub mod count_up;
pub mod observer;
pub mod reveal;
pub mod ticker;

pub use count_up::{CountUp, CountUpPhase, CountUpProbe};
pub use observer::{Bounds, RevealState, Subscription, Viewport, VisibilityObserver};
pub use reveal::{Reveal, RevealVisual};
pub use ticker::{CancelToken, FrameControl, Ticker};
