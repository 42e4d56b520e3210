//! Per-frame callback scheduler
//!
//! Every scheduled callback carries a [`CancelToken`]. The owner of an
//! animation keeps the token and cancels it on drop; the ticker checks the
//! token before every invocation and forgets cancelled callbacks.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

/// What a frame callback wants after running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Run again next frame
    Continue,
    /// Finished, drop the callback
    Done,
}

/// Shared cancellation flag for scheduled work
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

type FrameCallback = Box<dyn FnMut(Instant) -> FrameControl>;

struct Scheduled {
    token: CancelToken,
    callback: FrameCallback,
}

/// Cheaply cloneable handle to the frame scheduler
///
/// Callbacks may schedule further callbacks while running; those start on
/// the following frame.
#[derive(Clone, Default)]
pub struct Ticker {
    queue: Rc<RefCell<Vec<Scheduled>>>,
}

impl fmt::Debug for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticker").field("live", &self.live()).finish()
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once per frame until it returns `Done` or `token` is cancelled
    pub fn schedule<F>(&self, token: CancelToken, callback: F)
    where
        F: FnMut(Instant) -> FrameControl + 'static,
    {
        if token.is_cancelled() {
            return;
        }
        self.queue.borrow_mut().push(Scheduled {
            token,
            callback: Box::new(callback),
        });
    }

    /// Advance one frame, returning how many callbacks ran
    pub fn tick(&self, now: Instant) -> usize {
        let mut running = std::mem::take(&mut *self.queue.borrow_mut());
        let mut ran = 0;

        running.retain_mut(|scheduled| {
            if scheduled.token.is_cancelled() {
                return false;
            }
            ran += 1;
            let control = (scheduled.callback)(now);
            control == FrameControl::Continue && !scheduled.token.is_cancelled()
        });

        let mut queue = self.queue.borrow_mut();
        let added = std::mem::take(&mut *queue);
        *queue = running;
        queue.extend(added);
        ran
    }

    /// Callbacks that will run next frame
    pub fn live(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|s| !s.token.is_cancelled())
            .count()
    }
}
