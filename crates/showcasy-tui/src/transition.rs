//! Exit/enter page transition in "wait" mode
//!
//! Only one body transition runs at a time. The outgoing body fades up and
//! out, then the incoming body is mounted and fades in from below.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::router::Location;
use crate::scroll::easing::CubicBezier;
use crate::scroll::timing::{is_complete, lerp, progress};

const CURVE: CubicBezier = CubicBezier::EASE;

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Exiting { start: Instant, pending: Location },
    Entering { start: Instant },
}

/// How the body is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyVisual {
    pub opacity: f64,
    /// Vertical offset in rows; negative moves the body up
    pub offset_y: f64,
}

impl BodyVisual {
    pub const REST: BodyVisual = BodyVisual {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

/// What the shell must do after a transition step
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionStep {
    /// Drop the current body and mount this one
    Swap(Location),
}

#[derive(Debug)]
pub struct PageTransition {
    enabled: bool,
    duration: Duration,
    phase: Phase,
}

impl PageTransition {
    pub fn new(enabled: bool, duration_ms: u64) -> Self {
        Self {
            enabled: enabled && duration_ms > 0,
            duration: Duration::from_millis(duration_ms),
            phase: Phase::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Begin moving to `to`
    ///
    /// Returns a swap to apply right away when transitions are disabled.
    pub fn navigate(&mut self, to: Location, now: Instant) -> Option<TransitionStep> {
        if !self.enabled {
            return Some(TransitionStep::Swap(to));
        }
        match &mut self.phase {
            Phase::Exiting { pending, .. } => {
                trace!(route = %to.route, "Retargeting running exit");
                *pending = to;
            }
            Phase::Idle | Phase::Entering { .. } => {
                self.phase = Phase::Exiting {
                    start: now,
                    pending: to,
                };
            }
        }
        None
    }

    /// Advance the transition
    pub fn update(&mut self, now: Instant) -> Option<TransitionStep> {
        match &self.phase {
            Phase::Exiting { start, pending } if is_complete(*start, now, self.duration) => {
                let to = pending.clone();
                self.phase = Phase::Entering { start: now };
                Some(TransitionStep::Swap(to))
            }
            Phase::Entering { start } if is_complete(*start, now, self.duration) => {
                self.phase = Phase::Idle;
                None
            }
            _ => None,
        }
    }

    pub fn visual(&self, now: Instant) -> BodyVisual {
        match &self.phase {
            Phase::Idle => BodyVisual::REST,
            Phase::Exiting { start, .. } => {
                let t = CURVE.apply(progress(*start, now, self.duration));
                BodyVisual {
                    opacity: lerp(1.0, 0.0, t),
                    offset_y: lerp(0.0, -1.0, t),
                }
            }
            Phase::Entering { start } => {
                let t = CURVE.apply(progress(*start, now, self.duration));
                BodyVisual {
                    opacity: lerp(0.0, 1.0, t),
                    offset_y: lerp(1.0, 0.0, t),
                }
            }
        }
    }
}
