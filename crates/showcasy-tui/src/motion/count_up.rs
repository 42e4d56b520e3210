//! Eased count-up for headline metrics
//!
//! A count-up interpolates the numeric part of a metric such as `"$22.8M"`
//! from zero to its target once the element scrolls into view. Frames are
//! driven by the [`Ticker`]; the animator owns the cancel token, so dropping
//! it stops every pending frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use showcasy_core::config::CountUpConfig;
use showcasy_core::metric::ParsedMetric;
use showcasy_core::MetricValue;
use tracing::trace;

use super::observer::{Bounds, Subscription, VisibilityObserver};
use super::ticker::{CancelToken, FrameControl, Ticker};
use crate::scroll::easing::cubic_ease_out;
use crate::scroll::timing::progress;

/// Lifecycle of a count-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountUpPhase {
    Idle,
    Animating { started: Instant },
    Settled,
}

#[derive(Debug)]
struct CountUpState {
    value: MetricValue,
    duration: Duration,
    phase: CountUpPhase,
    /// Set before the first frame is scheduled
    has_started: bool,
    displayed: String,
    updates: usize,
}

impl CountUpState {
    fn new(value: MetricValue, duration: Duration) -> Self {
        let displayed = match &value {
            MetricValue::Numeric(parsed) => parsed.format_scaled(0),
            MetricValue::Literal(text) => text.clone(),
        };
        let phase = match value {
            MetricValue::Numeric(_) => CountUpPhase::Idle,
            MetricValue::Literal(_) => CountUpPhase::Settled,
        };
        Self {
            value,
            duration,
            phase,
            has_started: false,
            displayed,
            updates: 0,
        }
    }

    /// Compute one frame; `Done` once the final value has been shown
    fn frame(&mut self, now: Instant) -> FrameControl {
        let CountUpPhase::Animating { started } = self.phase else {
            return FrameControl::Done;
        };
        let MetricValue::Numeric(parsed) = &self.value else {
            return FrameControl::Done;
        };

        let p = progress(started, now, self.duration);
        let scaled = frame_value(parsed, p);
        self.displayed = parsed.format_scaled(scaled);
        self.updates += 1;

        if p < 1.0 {
            FrameControl::Continue
        } else {
            trace!(value = %self.displayed, "Count-up settled");
            self.phase = CountUpPhase::Settled;
            FrameControl::Done
        }
    }
}

/// Scaled value shown at `progress`; exactly the target once progress reaches 1
fn frame_value(parsed: &ParsedMetric, progress: f64) -> u64 {
    let target = parsed.scaled_target();
    if progress >= 1.0 {
        return target;
    }
    (cubic_ease_out(progress) * target as f64).round() as u64
}

/// Count-up animator bound to one element
pub struct CountUp {
    state: Rc<RefCell<CountUpState>>,
    ticker: Ticker,
    token: CancelToken,
    subscription: Subscription,
}

impl CountUp {
    /// Create a count-up that starts the first time the element is visible
    pub fn new(
        value: &str,
        config: &CountUpConfig,
        observer: &VisibilityObserver,
        ticker: &Ticker,
    ) -> Self {
        let state = Rc::new(RefCell::new(CountUpState::new(
            MetricValue::parse(value),
            Duration::from_millis(config.duration_ms),
        )));
        let token = CancelToken::new();

        let trigger_state = Rc::clone(&state);
        let trigger_ticker = ticker.clone();
        let trigger_token = token.clone();
        let subscription = observer.observe_with(config.threshold, move |now| {
            start(&trigger_state, &trigger_ticker, &trigger_token, now);
        });

        Self {
            state,
            ticker: ticker.clone(),
            token,
            subscription,
        }
    }

    pub fn set_bounds(&self, bounds: Bounds, now: Instant) {
        self.subscription.set_bounds(bounds, now);
    }

    /// Start the animation; returns false if it already started (or cannot animate)
    pub fn trigger(&self, now: Instant) -> bool {
        start(&self.state, &self.ticker, &self.token, now)
    }

    pub fn displayed(&self) -> String {
        self.state.borrow().displayed.clone()
    }

    pub fn phase(&self) -> CountUpPhase {
        self.state.borrow().phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase(), CountUpPhase::Animating { .. })
    }

    /// Observe this count-up's state independently of its lifetime
    pub fn probe(&self) -> CountUpProbe {
        CountUpProbe(Rc::clone(&self.state))
    }
}

impl Drop for CountUp {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl std::fmt::Debug for CountUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("CountUp")
            .field("displayed", &state.displayed)
            .field("phase", &state.phase)
            .finish()
    }
}

fn start(state: &Rc<RefCell<CountUpState>>, ticker: &Ticker, token: &CancelToken, now: Instant) -> bool {
    {
        let mut s = state.borrow_mut();
        if s.has_started || s.phase != CountUpPhase::Idle || token.is_cancelled() {
            return false;
        }
        s.has_started = true;
        s.phase = CountUpPhase::Animating { started: now };
    }

    let frame_state = Rc::clone(state);
    ticker.schedule(token.clone(), move |now| frame_state.borrow_mut().frame(now));
    true
}

/// Read-only view of a count-up's state that outlives the animator
#[derive(Debug, Clone)]
pub struct CountUpProbe(Rc<RefCell<CountUpState>>);

impl CountUpProbe {
    pub fn displayed(&self) -> String {
        self.0.borrow().displayed.clone()
    }

    /// Number of frames that changed the displayed value
    pub fn updates(&self) -> usize {
        self.0.borrow().updates
    }
}
