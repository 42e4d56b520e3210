//! L2 Organism Layer: Application-owned smooth scroll controller
//!
//! Wraps a [`ScrollAnimator`] and registers its per-frame step with the
//! [`Ticker`]. The application constructs exactly one controller, lends it to
//! the page shell, and calls [`SmoothScroll::dispose`] at teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use tracing::debug;

use super::animation::ScrollAnimator;
use super::config::ScrollConfig;
use crate::motion::{CancelToken, FrameControl, Ticker};

/// Smooth scrolling over the page column
#[derive(Debug)]
pub struct SmoothScroll {
    animator: Rc<RefCell<ScrollAnimator>>,
    token: CancelToken,
    disposed: Cell<bool>,
}

impl SmoothScroll {
    /// Create the controller and start its frame step on `ticker`
    pub fn new(config: ScrollConfig, ticker: &Ticker) -> Self {
        let animator = Rc::new(RefCell::new(ScrollAnimator::new(config)));
        let token = CancelToken::new();

        let step = Rc::clone(&animator);
        ticker.schedule(token.clone(), move |now| {
            let mut animator = step.borrow_mut();
            if animator.needs_update() {
                animator.update(now);
            }
            FrameControl::Continue
        });

        Self {
            animator,
            token,
            disposed: Cell::new(false),
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// Current (interpolated) position in rows
    pub fn position(&self) -> u16 {
        self.animator.borrow().current_scroll()
    }

    /// Where the running animation will settle
    pub fn target(&self) -> u16 {
        self.animator.borrow().target_scroll()
    }

    pub fn max(&self) -> u16 {
        self.animator.borrow().max_scroll()
    }

    /// Update the scroll limit after a relayout
    pub fn set_max(&self, max_scroll: u16) {
        self.animator.borrow_mut().set_max_scroll(max_scroll);
    }

    /// Whether the next frames will move the page
    pub fn needs_update(&self) -> bool {
        !self.disposed.get() && self.animator.borrow().needs_update()
    }

    /// Jump without easing, dropping any pending input
    pub fn jump_to(&self, position: u16) {
        if self.disposed.get() {
            return;
        }
        self.animator.borrow_mut().set_scroll(position);
    }

    /// Ease toward an absolute position
    pub fn scroll_to(&self, position: u16) {
        self.with_input(|animator| animator.scroll_to(position));
    }

    pub fn scroll_by(&self, delta: i32) {
        self.with_input(|animator| animator.scroll_by(delta));
    }

    pub fn scroll_down(&self) {
        self.with_input(ScrollAnimator::scroll_down);
    }

    pub fn scroll_up(&self) {
        self.with_input(ScrollAnimator::scroll_up);
    }

    pub fn half_page_down(&self, viewport_height: u16) {
        self.with_input(|animator| animator.scroll_half_page_down(viewport_height));
    }

    pub fn half_page_up(&self, viewport_height: u16) {
        self.with_input(|animator| animator.scroll_half_page_up(viewport_height));
    }

    pub fn page_down(&self, viewport_height: u16) {
        self.with_input(|animator| animator.scroll_full_page_down(viewport_height));
    }

    pub fn page_up(&self, viewport_height: u16) {
        self.with_input(|animator| animator.scroll_full_page_up(viewport_height));
    }

    /// Advance immediately, outside the ticker (used when the ticker is idle)
    pub fn update(&self, now: Instant) -> u16 {
        if self.disposed.get() {
            return self.position();
        }
        self.animator.borrow_mut().update(now)
    }

    /// Stop the frame step; returns false if already disposed
    pub fn dispose(&self) -> bool {
        if self.disposed.replace(true) {
            return false;
        }
        self.token.cancel();
        self.animator.borrow_mut().cancel();
        debug!("Smooth scroll disposed");
        true
    }

    fn with_input(&self, f: impl FnOnce(&mut ScrollAnimator)) {
        if self.disposed.get() {
            return;
        }
        f(&mut self.animator.borrow_mut());
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.dispose();
    }
}
