//! Scroll-triggered reveal of a page element

use std::time::{Duration, Instant};

use showcasy_core::config::RevealConfig;

use super::observer::{Bounds, Subscription, VisibilityObserver};
use crate::scroll::easing::cubic_ease_out;
use crate::scroll::timing::progress;

/// How a revealing element is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealVisual {
    /// Rows the content is pushed down inside its own slot
    pub offset_rows: u16,
    /// 0.0 is fully blended into the background, 1.0 is full colour
    pub opacity: f64,
}

impl RevealVisual {
    pub const VISIBLE: RevealVisual = RevealVisual {
        offset_rows: 0,
        opacity: 1.0,
    };
}

/// Element wrapper that fades and slides in the first time it scrolls into view
#[derive(Debug)]
pub struct Reveal {
    subscription: Subscription,
    delay: Duration,
    duration: Duration,
    shift_rows: u16,
}

impl Reveal {
    pub fn new(observer: &VisibilityObserver, config: &RevealConfig, delay_ms: u64) -> Self {
        Self {
            subscription: observer.observe(config.threshold),
            delay: Duration::from_millis(delay_ms),
            duration: Duration::from_millis(config.duration_ms),
            shift_rows: config.shift_rows,
        }
    }

    pub fn set_bounds(&self, bounds: Bounds, now: Instant) {
        self.subscription.set_bounds(bounds, now);
    }

    pub fn is_revealed(&self) -> bool {
        self.subscription.is_revealed()
    }

    /// Visual state at `now`; a pure function of the reveal time
    pub fn visual(&self, now: Instant) -> RevealVisual {
        let hidden = RevealVisual {
            offset_rows: self.shift_rows,
            opacity: 0.0,
        };
        let Some(at) = self.subscription.revealed_at() else {
            return hidden;
        };
        let start = at + self.delay;
        if now < start {
            return hidden;
        }
        let eased = cubic_ease_out(progress(start, now, self.duration));
        RevealVisual {
            offset_rows: (self.shift_rows as f64 * (1.0 - eased)).round() as u16,
            opacity: eased,
        }
    }

    /// Still moving at `now` (revealed but not yet settled)
    pub fn is_animating(&self, now: Instant) -> bool {
        self.subscription
            .revealed_at()
            .is_some_and(|at| now < at + self.delay + self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::observer::Viewport;

    fn config() -> RevealConfig {
        RevealConfig {
            enabled: true,
            threshold: 0.15,
            duration_ms: 700,
            shift_rows: 2,
        }
    }

    #[test]
    fn test_hidden_until_visible() {
        let observer = VisibilityObserver::new();
        let t0 = Instant::now();
        let reveal = Reveal::new(&observer, &config(), 0);
        reveal.set_bounds(Bounds::new(40, 4), t0);
        observer.set_viewport(Viewport::new(0, 20), t0);

        assert_eq!(
            reveal.visual(t0 + Duration::from_secs(5)),
            RevealVisual {
                offset_rows: 2,
                opacity: 0.0
            }
        );
        assert!(!reveal.is_animating(t0));
    }

    #[test]
    fn test_transition_after_delay() {
        let observer = VisibilityObserver::new();
        let t0 = Instant::now();
        observer.set_viewport(Viewport::new(0, 20), t0);
        let reveal = Reveal::new(&observer, &config(), 100);
        reveal.set_bounds(Bounds::new(2, 4), t0);
        assert!(reveal.is_revealed());

        // Still waiting out the delay
        assert_eq!(reveal.visual(t0 + Duration::from_millis(50)).opacity, 0.0);

        let mid = reveal.visual(t0 + Duration::from_millis(450));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(reveal.is_animating(t0 + Duration::from_millis(450)));

        assert_eq!(reveal.visual(t0 + Duration::from_millis(800)), RevealVisual::VISIBLE);
        assert!(!reveal.is_animating(t0 + Duration::from_millis(800)));
    }

    #[test]
    fn test_opacity_never_decreases() {
        let observer = VisibilityObserver::new();
        let t0 = Instant::now();
        let reveal = Reveal::new(&observer, &config(), 0);
        reveal.set_bounds(Bounds::new(30, 4), t0);

        let mut last = 0.0;
        for step in 0..40u64 {
            let now = t0 + Duration::from_millis(step * 50);
            // Scroll down past the element, then back to the top
            let top = if step < 10 { step as u16 * 4 } else { 0 };
            observer.set_viewport(Viewport::new(top, 10), now);
            let opacity = reveal.visual(now).opacity;
            assert!(opacity >= last);
            last = opacity;
        }
        assert_eq!(last, 1.0);
    }
}
