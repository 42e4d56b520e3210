//! One-shot visibility observation over the page column
//!
//! Elements are measured in rows from the top of the page. The observer keeps
//! the last known viewport and fires each observation at most once, the first
//! time enough of the element is inside it. After firing, the entry is
//! removed. A [`Subscription`] releases its entry when cancelled or dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Instant;

use tracing::trace;

/// Vertical extent of an element on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub top: u16,
    pub height: u16,
}

impl Bounds {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// The visible band of page rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub top: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Fraction of `bounds` inside the viewport
    ///
    /// Zero-height elements count as fully visible when their top row is inside.
    pub fn visible_ratio(&self, bounds: Bounds) -> f64 {
        if bounds.height == 0 {
            let inside = bounds.top >= self.top && bounds.top < self.bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        let start = bounds.top.max(self.top);
        let end = bounds.bottom().min(self.bottom());
        if end <= start {
            return 0.0;
        }
        (end - start) as f64 / bounds.height as f64
    }

    pub fn shows(&self, bounds: Bounds, threshold: f64) -> bool {
        let ratio = self.visible_ratio(bounds);
        ratio > 0.0 && ratio >= threshold
    }
}

/// Reveal state of one observed element; never goes back to `Unrevealed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed { at: Instant },
}

type OnVisible = Box<dyn FnOnce(Instant)>;

struct Entry {
    id: u64,
    bounds: Option<Bounds>,
    threshold: f64,
    state: Rc<Cell<RevealState>>,
    on_visible: Option<OnVisible>,
}

#[derive(Default)]
struct ObserverInner {
    next_id: u64,
    viewport: Option<Viewport>,
    entries: Vec<Entry>,
}

impl ObserverInner {
    /// Remove entries visible in the current viewport and mark them revealed
    fn take_visible(&mut self, now: Instant, only: Option<u64>) -> Vec<OnVisible> {
        let Some(viewport) = self.viewport else {
            return Vec::new();
        };

        let mut fired = Vec::new();
        self.entries.retain_mut(|entry| {
            if only.is_some_and(|id| id != entry.id) {
                return true;
            }
            let visible = entry
                .bounds
                .is_some_and(|bounds| viewport.shows(bounds, entry.threshold));
            if !visible {
                return true;
            }
            trace!(id = entry.id, "Element became visible");
            entry.state.set(RevealState::Revealed { at: now });
            if let Some(callback) = entry.on_visible.take() {
                fired.push(callback);
            }
            false
        });
        fired
    }
}

/// Shared handle to the page's visibility observer
#[derive(Clone, Default)]
pub struct VisibilityObserver {
    inner: Rc<RefCell<ObserverInner>>,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing an element whose bounds are not measured yet
    ///
    /// Nothing fires until [`Subscription::set_bounds`] places the element.
    pub fn observe(&self, threshold: f64) -> Subscription {
        self.register(threshold, None)
    }

    /// Observe with a callback run once, when the element first becomes visible
    pub fn observe_with<F>(&self, threshold: f64, on_visible: F) -> Subscription
    where
        F: FnOnce(Instant) + 'static,
    {
        self.register(threshold, Some(Box::new(on_visible)))
    }

    /// Observe an element at known bounds; fires at once if it is already visible
    pub fn observe_at(&self, bounds: Bounds, threshold: f64, now: Instant) -> Subscription {
        let subscription = self.observe(threshold);
        subscription.set_bounds(bounds, now);
        subscription
    }

    fn register(&self, threshold: f64, on_visible: Option<OnVisible>) -> Subscription {
        let state = Rc::new(Cell::new(RevealState::Unrevealed));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            bounds: None,
            threshold: threshold.clamp(0.0, 1.0),
            state: Rc::clone(&state),
            on_visible,
        });

        Subscription {
            id,
            state,
            observer: Rc::downgrade(&self.inner),
        }
    }

    /// Move the viewport and fire every observation that is now visible
    pub fn set_viewport(&self, viewport: Viewport, now: Instant) {
        let fired = {
            let mut inner = self.inner.borrow_mut();
            inner.viewport = Some(viewport);
            inner.take_visible(now, None)
        };
        for callback in fired {
            callback(now);
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.inner.borrow().viewport
    }

    /// Observations still waiting to fire
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Handle to one observation
///
/// Dropping it (or calling [`cancel`](Self::cancel)) detaches the observation,
/// whether or not it ever fired.
pub struct Subscription {
    id: u64,
    state: Rc<Cell<RevealState>>,
    observer: Weak<RefCell<ObserverInner>>,
}

impl Subscription {
    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state.get(), RevealState::Revealed { .. })
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        match self.state.get() {
            RevealState::Revealed { at } => Some(at),
            RevealState::Unrevealed => None,
        }
    }

    /// Whether the observation is still registered
    pub fn is_observing(&self) -> bool {
        self.observer
            .upgrade()
            .is_some_and(|inner| inner.borrow().entries.iter().any(|e| e.id == self.id))
    }

    /// Place or re-measure the element; fires at once if it is now visible
    pub fn set_bounds(&self, bounds: Bounds, now: Instant) {
        let Some(inner) = self.observer.upgrade() else {
            return;
        };
        let fired = {
            let mut inner = inner.borrow_mut();
            let Some(entry) = inner.entries.iter_mut().find(|e| e.id == self.id) else {
                return;
            };
            if entry.bounds == Some(bounds) {
                return;
            }
            entry.bounds = Some(bounds);
            inner.take_visible(now, Some(self.id))
        };
        for callback in fired {
            callback(now);
        }
    }

    /// Stop observing; the reveal state is kept as it is
    pub fn cancel(&self) {
        if let Some(inner) = self.observer.upgrade() {
            inner.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("state", &self.state.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_visible_ratio() {
        let viewport = Viewport::new(10, 20);
        assert_eq!(viewport.visible_ratio(Bounds::new(0, 5)), 0.0);
        assert_eq!(viewport.visible_ratio(Bounds::new(12, 4)), 1.0);
        assert!((viewport.visible_ratio(Bounds::new(25, 10)) - 0.5).abs() < 1e-9);
        assert_eq!(viewport.visible_ratio(Bounds::new(30, 0)), 0.0);
        assert_eq!(viewport.visible_ratio(Bounds::new(29, 0)), 1.0);
    }

    #[test]
    fn test_fires_once_and_stays_revealed() {
        let observer = VisibilityObserver::new();
        let t0 = Instant::now();
        observer.set_viewport(Viewport::new(0, 10), t0);

        let sub = observer.observe_at(Bounds::new(30, 10), 0.15, t0);
        assert_eq!(sub.state(), RevealState::Unrevealed);

        let mut history = vec![sub.is_revealed()];
        let t1 = t0 + Duration::from_millis(100);
        for (i, top) in [5u16, 25, 30, 0, 40, 0].into_iter().enumerate() {
            observer.set_viewport(Viewport::new(top, 10), t1 + Duration::from_millis(i as u64));
            history.push(sub.is_revealed());
        }

        assert_eq!(history, vec![false, false, true, true, true, true, true]);
        // Scrolling away and back does not re-fire
        assert_eq!(sub.revealed_at(), Some(t1 + Duration::from_millis(1)));
        assert!(!sub.is_observing());
    }

    #[test]
    fn test_already_visible_fires_at_mount() {
        let observer = VisibilityObserver::new();
        let t0 = Instant::now();
        observer.set_viewport(Viewport::new(0, 24), t0);

        let sub = observer.observe_at(Bounds::new(2, 3), 0.15, t0);
        assert_eq!(sub.revealed_at(), Some(t0));
        assert_eq!(observer.pending(), 0);
    }

    #[test]
    fn test_threshold_respected() {
        let observer = VisibilityObserver::new();
        let t0 = Instant::now();
        let sub = observer.observe_at(Bounds::new(18, 10), 0.3, t0);

        // 2 of 10 rows visible
        observer.set_viewport(Viewport::new(0, 20), t0);
        assert!(!sub.is_revealed());
        // 3 of 10 rows visible
        observer.set_viewport(Viewport::new(1, 20), t0);
        assert!(sub.is_revealed());
    }

    #[test]
    fn test_drop_detaches_without_firing() {
        let observer = VisibilityObserver::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let sub = observer.observe_with(0.15, move |_| flag.set(true));
        sub.set_bounds(Bounds::new(50, 5), Instant::now());
        assert_eq!(observer.pending(), 1);

        drop(sub);
        assert_eq!(observer.pending(), 0);
        observer.set_viewport(Viewport::new(50, 10), Instant::now());
        assert!(!fired.get());
    }

    #[test]
    fn test_unmeasured_element_waits_for_bounds() {
        let observer = VisibilityObserver::new();
        let t0 = Instant::now();
        observer.set_viewport(Viewport::new(0, 24), t0);

        let sub = observer.observe(0.15);
        observer.set_viewport(Viewport::new(0, 24), t0);
        assert!(!sub.is_revealed());

        sub.set_bounds(Bounds::new(4, 4), t0);
        assert!(sub.is_revealed());
    }

    #[test]
    fn test_callback_runs_once() {
        let observer = VisibilityObserver::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = observer.observe_with(0.3, move |_| counter.set(counter.get() + 1));
        sub.set_bounds(Bounds::new(0, 2), Instant::now());

        for _ in 0..3 {
            observer.set_viewport(Viewport::new(0, 10), Instant::now());
        }
        assert_eq!(calls.get(), 1);
    }
}
