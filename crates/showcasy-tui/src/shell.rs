//! Persistent frame around the routed page body
//!
//! The shell owns the router, the current [`PageBody`] and the page
//! transition. It borrows the application's [`SmoothScroll`] for every call
//! that moves the page, so a route change can reset the scroll position even
//! while a smooth scroll is running.

use std::sync::Arc;
use std::time::Instant;

use showcasy_core::config::AppConfig;
use showcasy_core::contact::Field;
use showcasy_core::{AssetResolver, Catalog};
use tracing::{debug, info};

use crate::motion::{Ticker, Viewport, VisibilityObserver};
use crate::page::{self, MountContext, PageBody};
use crate::router::{Location, Route, Router};
use crate::scroll::SmoothScroll;
use crate::theme::Theme;
use crate::transition::{BodyVisual, PageTransition, TransitionStep};

/// Entries of the navigation menu overlay: label, index shown beside it, route
pub const NAV_ITEMS: [(&str, &str, Route); 4] = [
    ("Home", "01", Route::Home),
    ("About Me", "02", Route::About),
    ("Works", "03", Route::Works),
    ("Contact", "04", Route::Contact),
];

pub struct PageShell {
    router: Router,
    transition: PageTransition,
    body: PageBody,
    /// Anchor to scroll to once the body for it is laid out
    pending_anchor: Option<String>,
    /// Highlighted menu entry while the menu is open
    menu: Option<usize>,
    scrolled: bool,
    assets: AssetResolver,
    observer: VisibilityObserver,
    ticker: Ticker,
    config: Arc<AppConfig>,
}

impl PageShell {
    /// Mount the body for `path` (which may redirect)
    pub fn new(
        catalog: Arc<Catalog>,
        config: Arc<AppConfig>,
        assets: AssetResolver,
        observer: VisibilityObserver,
        ticker: Ticker,
        path: &str,
    ) -> Self {
        let router = Router::new(catalog, path);
        let start = router.current().clone();
        let transition = PageTransition::new(
            config.ui.page_transitions,
            config.ui.transition_duration_ms,
        );
        let body = mount_body(&start.route, &router, &assets, &observer, &ticker, &config);

        Self {
            router,
            transition,
            body,
            pending_anchor: start.anchor,
            menu: None,
            scrolled: false,
            assets,
            observer,
            ticker,
            config,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The location the shell is showing or moving to
    pub fn location(&self) -> &Location {
        self.router.current()
    }

    /// The body currently drawn (the outgoing one while an exit runs)
    pub fn body(&self) -> &PageBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut PageBody {
        &mut self.body
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Window title for the current location
    pub fn title(&self) -> String {
        self.router.current().route.title(self.router.catalog())
    }

    /// Navigate to `path`, resetting the scroll position
    pub fn navigate(&mut self, path: &str, scroll: &SmoothScroll, now: Instant) {
        let from = self.router.current().route.clone();
        let location = self.router.navigate(path);
        info!(path, to = %location.route, "Navigating");
        self.go(from, location, scroll, now);
    }

    pub fn back(&mut self, scroll: &SmoothScroll, now: Instant) -> bool {
        let from = self.router.current().route.clone();
        match self.router.back() {
            Some(location) => {
                self.go(from, location, scroll, now);
                true
            }
            None => false,
        }
    }

    pub fn forward(&mut self, scroll: &SmoothScroll, now: Instant) -> bool {
        let from = self.router.current().route.clone();
        match self.router.forward() {
            Some(location) => {
                self.go(from, location, scroll, now);
                true
            }
            None => false,
        }
    }

    fn go(&mut self, from: Route, location: Location, scroll: &SmoothScroll, now: Instant) {
        self.menu = None;

        if location.route == from {
            // Same page: only the anchor moves, the body stays mounted
            match location.anchor {
                Some(anchor) => self.pending_anchor = Some(anchor),
                None => scroll.jump_to(0),
            }
            return;
        }

        scroll.jump_to(0);
        self.pending_anchor = location.anchor.clone();
        if let Some(step) = self.transition.navigate(location, now) {
            self.apply(step);
        }
    }

    fn apply(&mut self, step: TransitionStep) {
        match step {
            TransitionStep::Swap(location) => {
                debug!(route = %location.route, "Swapping page body");
                // Assigning drops the outgoing body with its observations
                self.body = mount_body(
                    &location.route,
                    &self.router,
                    &self.assets,
                    &self.observer,
                    &self.ticker,
                    &self.config,
                );
            }
        }
    }

    /// Advance the page transition
    pub fn update(&mut self, now: Instant) {
        if let Some(step) = self.transition.update(now) {
            self.apply(step);
        }
    }

    /// Lay out the body for a `width` x `height` viewport and sync scrolling
    #[allow(clippy::too_many_arguments)]
    pub fn sync(
        &mut self,
        width: u16,
        height: u16,
        theme: &Theme,
        editing: Option<Field>,
        submitting: bool,
        scroll: &SmoothScroll,
        now: Instant,
    ) {
        // The viewport goes first so freshly placed elements are measured
        // against the current scroll position
        self.observer
            .set_viewport(Viewport::new(scroll.position(), height), now);

        let total = self.body.layout(width, theme, editing, submitting, now);
        scroll.set_max(total.saturating_sub(height));

        if !self.transition.is_exiting() {
            if let Some(anchor) = self.pending_anchor.take() {
                match self.body.anchor_top(&anchor) {
                    Some(top) => scroll.scroll_to(top),
                    None => debug!(anchor = %anchor, "Anchor not on page"),
                }
            }
        }

        self.scrolled = scroll.position() > 1;
        self.observer
            .set_viewport(Viewport::new(scroll.position(), height), now);
    }

    /// Body opacity and offset from the running transition
    pub fn visual(&self, now: Instant) -> BodyVisual {
        self.transition.visual(now)
    }

    /// Whether anything on screen is still moving
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_active() || self.body.is_animating(now)
    }

    pub fn menu(&self) -> Option<usize> {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Open the menu with the current section highlighted
    pub fn open_menu(&mut self) {
        let section = self.router.current().route.section();
        let selected = NAV_ITEMS
            .iter()
            .position(|(_, _, route)| *route == section)
            .unwrap_or(0);
        self.menu = Some(selected);
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn menu_next(&mut self) {
        if let Some(i) = self.menu {
            self.menu = Some((i + 1) % NAV_ITEMS.len());
        }
    }

    pub fn menu_prev(&mut self) {
        if let Some(i) = self.menu {
            self.menu = Some(i.checked_sub(1).unwrap_or(NAV_ITEMS.len() - 1));
        }
    }

    /// Navigate to the highlighted menu entry
    pub fn choose_menu(&mut self, scroll: &SmoothScroll, now: Instant) {
        if let Some(i) = self.menu {
            let path = NAV_ITEMS[i].2.path();
            self.navigate(&path, scroll, now);
        }
    }
}

fn mount_body(
    route: &Route,
    router: &Router,
    assets: &AssetResolver,
    observer: &VisibilityObserver,
    ticker: &Ticker,
    config: &AppConfig,
) -> PageBody {
    page::mount(
        route,
        MountContext {
            catalog: router.catalog(),
            assets,
            observer,
            ticker,
            config,
        },
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use showcasy_core::ScrollConfig;

    use super::*;
    use crate::themes;

    struct Harness {
        shell: PageShell,
        scroll: SmoothScroll,
        observer: VisibilityObserver,
        ticker: Ticker,
        theme: Theme,
    }

    fn harness(path: &str, transitions: bool) -> Harness {
        harness_with(path, transitions, false)
    }

    fn harness_with(path: &str, transitions: bool, smooth: bool) -> Harness {
        let mut config = AppConfig::default();
        config.ui.page_transitions = transitions;
        config.ui.transition_duration_ms = 350;
        let observer = VisibilityObserver::new();
        let ticker = Ticker::new();
        let shell = PageShell::new(
            Arc::new(Catalog::load().unwrap()),
            Arc::new(config),
            AssetResolver::new("/nonexistent-assets".into(), "/images/placeholder.png"),
            observer.clone(),
            ticker.clone(),
            path,
        );
        let scroll_config = ScrollConfig {
            smooth_enabled: smooth,
            ..ScrollConfig::default()
        };
        let scroll = SmoothScroll::new(scroll_config, &ticker);
        Harness {
            shell,
            scroll,
            observer,
            ticker,
            theme: themes::dark(),
        }
    }

    impl Harness {
        fn sync(&mut self, now: Instant) {
            self.shell
                .sync(80, 24, &self.theme, None, false, &self.scroll, now);
        }
    }

    fn ms(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn test_navigation_resets_scroll() {
        let mut h = harness("/about", false);
        let t0 = Instant::now();
        h.sync(t0);
        h.scroll.jump_to(40);
        assert_eq!(h.scroll.position(), 40);

        h.shell.navigate("/works", &h.scroll, t0);
        assert_eq!(h.scroll.position(), 0);
        assert_eq!(h.shell.body().route(), &Route::Works);
    }

    #[test]
    fn test_navigation_cuts_running_smooth_scroll() {
        let mut h = harness_with("/about", false, true);
        let t0 = Instant::now();
        h.sync(t0);
        assert!(h.scroll.max() >= 40);

        h.scroll.scroll_to(40);
        h.ticker.tick(t0);
        h.ticker.tick(ms(t0, 100));
        let mid = h.scroll.position();
        assert!(mid > 0 && mid < 40);
        assert!(h.scroll.needs_update());

        h.shell.navigate("/works", &h.scroll, ms(t0, 100));
        assert_eq!(h.scroll.position(), 0);
        assert!(!h.scroll.needs_update());

        h.ticker.tick(ms(t0, 200));
        assert_eq!(h.scroll.position(), 0);
        assert_eq!(h.shell.body().route(), &Route::Works);
    }

    #[test]
    fn test_exit_keeps_old_body_until_complete() {
        let mut h = harness("/", true);
        let t0 = Instant::now();
        h.sync(t0);

        h.shell.navigate("/contact", &h.scroll, t0);
        assert_eq!(h.shell.location().route, Route::Contact);
        assert_eq!(h.shell.body().route(), &Route::Home);

        h.shell.update(ms(t0, 200));
        assert_eq!(h.shell.body().route(), &Route::Home);
        h.shell.update(ms(t0, 400));
        assert_eq!(h.shell.body().route(), &Route::Contact);
        assert!(h.shell.is_animating(ms(t0, 400)));

        h.shell.update(ms(t0, 800));
        assert_eq!(h.shell.visual(ms(t0, 800)), BodyVisual::REST);
    }

    #[test]
    fn test_navigating_during_exit_retargets() {
        let mut h = harness("/", true);
        let t0 = Instant::now();
        h.shell.navigate("/about", &h.scroll, t0);
        h.shell.navigate("/works", &h.scroll, ms(t0, 100));
        h.shell.update(ms(t0, 400));
        assert_eq!(h.shell.body().route(), &Route::Works);
    }

    #[test]
    fn test_swap_releases_outgoing_observations() {
        let mut h = harness("/works/wepay", false);
        let t0 = Instant::now();
        h.sync(t0);
        let before = h.observer.pending();
        assert!(before > 0);

        h.shell.navigate("/contact", &h.scroll, t0);
        // Only the contact page's observations remain, none measured yet
        h.sync(t0);
        let contact_pending = h.observer.pending();
        drop(h.shell);
        assert!(contact_pending > 0);
        assert_eq!(h.observer.pending(), 0);
        assert_eq!(h.ticker.live(), 1, "only the scroll step is left");
    }

    #[test]
    fn test_unknown_slug_shows_works() {
        let mut h = harness("/", false);
        h.shell
            .navigate("/works/does-not-exist", &h.scroll, Instant::now());
        assert_eq!(h.shell.body().route(), &Route::Works);
        assert_eq!(h.shell.title(), "Works | showcasy.");
    }

    #[test]
    fn test_anchor_scrolls_after_layout() {
        let mut h = harness("/", false);
        let t0 = Instant::now();
        h.shell.navigate("/about#approach", &h.scroll, t0);
        h.sync(t0);

        let top = h.shell.body().anchor_top("approach").unwrap();
        assert_eq!(h.scroll.position(), top.min(h.scroll.max()));
        assert!(h.shell.is_scrolled());
    }

    #[test]
    fn test_same_page_anchor_keeps_body() {
        let mut h = harness("/about", false);
        let t0 = Instant::now();
        h.sync(t0);
        let elements = h.shell.body().elements().len();

        h.shell.navigate("/about#approach", &h.scroll, t0);
        assert!(!h.shell.router().can_go_back());
        assert_eq!(h.shell.body().elements().len(), elements);
        h.sync(t0);
        assert!(h.scroll.position() > 0);
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let mut h = harness("/works/safe-space", false);
        h.shell.open_menu();
        // Case studies highlight the works entry
        assert_eq!(h.shell.menu(), Some(2));

        h.shell.menu_next();
        h.shell.menu_next();
        assert_eq!(h.shell.menu(), Some(0));
        h.shell.menu_prev();
        assert_eq!(h.shell.menu(), Some(3));

        h.shell.choose_menu(&h.scroll, Instant::now());
        assert!(!h.shell.is_menu_open());
        assert_eq!(h.shell.body().route(), &Route::Contact);
    }

    #[test]
    fn test_back_and_forward_remount() {
        let mut h = harness("/", false);
        let now = Instant::now();
        h.shell.navigate("/works", &h.scroll, now);
        assert!(h.shell.back(&h.scroll, now));
        assert_eq!(h.shell.body().route(), &Route::Home);
        assert!(!h.shell.back(&h.scroll, now));
        assert!(h.shell.forward(&h.scroll, now));
        assert_eq!(h.shell.body().route(), &Route::Works);
    }
}
