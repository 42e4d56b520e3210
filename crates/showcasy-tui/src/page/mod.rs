//! Routed page bodies
//!
//! A page body is a column of [`Element`]s. Each element owns one block and,
//! when reveals are enabled, the [`Reveal`] that fades it in. Dropping the
//! body drops every reveal and count-up it owns, which detaches their
//! observations and cancels their frame callbacks.

mod about;
pub mod block;
mod case_study;
mod contact;
mod footer;
mod home;
pub mod text;
mod works;

use std::time::Instant;

use ratatui::text::Line;
use showcasy_core::config::AppConfig;
use showcasy_core::contact::{ContactForm, Field};
use showcasy_core::content::{Metric, Project};
use showcasy_core::{AssetResolver, Catalog};
use tracing::debug;
use url::Url;

pub use block::{Block, ChipKind, LinkKind, RenderContext};

use crate::motion::{Bounds, CountUp, Reveal, RevealVisual, Ticker, VisibilityObserver};
use crate::router::Route;
use crate::theme::Theme;

/// Something the user can focus and activate
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Internal navigation
    Route(String),
    /// Opens in the system browser; `None` for placeholder links
    External(Option<Url>),
    Field(Field),
    Service(&'static str),
    Budget(&'static str),
    Submit,
}

/// One laid-out element of a page body
#[derive(Debug)]
pub struct Element {
    pub block: Block,
    reveal: Option<Reveal>,
    anchor: Option<&'static str>,
    bounds: Bounds,
    lines: Vec<Line<'static>>,
}

impl Element {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Lines from the last layout
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn visual(&self, now: Instant) -> RevealVisual {
        self.reveal
            .as_ref()
            .map_or(RevealVisual::VISIBLE, |reveal| reveal.visual(now))
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.reveal.as_ref().is_some_and(|r| r.is_animating(now))
            || self.block.count_up().is_some_and(CountUp::is_animating)
    }
}

/// The routed content between header and status bar
#[derive(Debug)]
pub struct PageBody {
    route: Route,
    elements: Vec<Element>,
    targets: Vec<Target>,
    focus: Option<usize>,
    form: Option<ContactForm>,
    height: u16,
}

impl PageBody {
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Total page height in rows after the last layout
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_target(&self) -> Option<&Target> {
        self.focus.and_then(|i| self.targets.get(i))
    }

    pub fn set_focus(&mut self, focus: Option<usize>) {
        self.focus = focus.filter(|i| *i < self.targets.len());
    }

    /// Move focus to the next target, wrapping around
    pub fn focus_next(&mut self) -> Option<usize> {
        if self.targets.is_empty() {
            return None;
        }
        let next = match self.focus {
            Some(i) => (i + 1) % self.targets.len(),
            None => 0,
        };
        self.focus = Some(next);
        self.focus
    }

    pub fn focus_prev(&mut self) -> Option<usize> {
        if self.targets.is_empty() {
            return None;
        }
        let prev = match self.focus {
            Some(0) | None => self.targets.len() - 1,
            Some(i) => i - 1,
        };
        self.focus = Some(prev);
        self.focus
    }

    /// First target whose element starts at or below `row`
    pub fn first_target_from(&self, row: u16) -> Option<usize> {
        self.elements
            .iter()
            .filter(|e| e.bounds.top >= row)
            .flat_map(|e| e.block.targets())
            .next()
    }

    /// Bounds of the element holding `target`
    pub fn target_bounds(&self, target: usize) -> Option<Bounds> {
        self.elements
            .iter()
            .find(|e| e.block.targets().contains(&target))
            .map(|e| e.bounds)
    }

    /// Top row of the element carrying `anchor`
    pub fn anchor_top(&self, anchor: &str) -> Option<u16> {
        self.elements
            .iter()
            .find(|e| e.anchor == Some(anchor))
            .map(|e| e.bounds.top)
    }

    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ContactForm> {
        self.form.as_mut()
    }

    /// Any reveal or count-up still moving
    pub fn is_animating(&self, now: Instant) -> bool {
        self.elements.iter().any(|e| e.is_animating(now))
    }

    /// Render every element at `width` and re-measure its observations
    pub fn layout(
        &mut self,
        width: u16,
        theme: &Theme,
        editing: Option<Field>,
        submitting: bool,
        now: Instant,
    ) -> u16 {
        let ctx = RenderContext {
            theme,
            focus: self.focus,
            form: self.form.as_ref(),
            editing,
            submitting,
        };

        let mut top: u16 = 0;
        for element in &mut self.elements {
            element.lines = element.block.render(&ctx, width);
            let height = element.lines.len().min(u16::MAX as usize) as u16;
            element.bounds = Bounds::new(top, height);
            top = top.saturating_add(height);
        }
        self.height = top;

        // Observations may fire (and schedule frames) here, so measure after
        // every element has its final position
        for element in &self.elements {
            if let Some(reveal) = &element.reveal {
                reveal.set_bounds(element.bounds, now);
            }
            if let Some(count_up) = element.block.count_up() {
                count_up.set_bounds(element.bounds, now);
            }
        }
        self.height
    }
}

/// Shared services a page needs while it is being built
#[derive(Clone, Copy)]
pub struct MountContext<'a> {
    pub catalog: &'a Catalog,
    pub assets: &'a AssetResolver,
    pub observer: &'a VisibilityObserver,
    pub ticker: &'a Ticker,
    pub config: &'a AppConfig,
}

/// Accumulates elements and targets for one page body
pub struct PageBuilder<'a> {
    ctx: MountContext<'a>,
    elements: Vec<Element>,
    targets: Vec<Target>,
    pending_anchor: Option<&'static str>,
}

impl<'a> PageBuilder<'a> {
    pub fn new(ctx: MountContext<'a>) -> Self {
        Self {
            ctx,
            elements: Vec::new(),
            targets: Vec::new(),
            pending_anchor: None,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.ctx.catalog
    }

    /// Register a focusable target, returning its index
    pub fn target(&mut self, target: Target) -> usize {
        self.targets.push(target);
        self.targets.len() - 1
    }

    /// Mark the next element as the scroll anchor `name`
    pub fn anchor(&mut self, name: &'static str) -> &mut Self {
        self.pending_anchor = Some(name);
        self
    }

    /// Add a block that reveals `delay_ms` after it scrolls into view
    pub fn reveal(&mut self, delay_ms: u64, block: Block) -> &mut Self {
        let config = &self.ctx.config.reveal;
        let reveal = config
            .enabled
            .then(|| Reveal::new(self.ctx.observer, config, delay_ms));
        self.push(block, reveal)
    }

    /// Add a block that is always fully visible
    pub fn plain(&mut self, block: Block) -> &mut Self {
        self.push(block, None)
    }

    pub fn gap(&mut self, rows: u16) -> &mut Self {
        self.plain(Block::Spacer(rows))
    }

    fn push(&mut self, block: Block, reveal: Option<Reveal>) -> &mut Self {
        self.elements.push(Element {
            block,
            reveal,
            anchor: self.pending_anchor.take(),
            bounds: Bounds::default(),
            lines: Vec::new(),
        });
        self
    }

    pub fn heading(&mut self, delay_ms: u64, text: &str) -> &mut Self {
        self.reveal(delay_ms, Block::Heading(text.to_string()))
    }

    pub fn paragraph(&mut self, delay_ms: u64, text: &str) -> &mut Self {
        self.reveal(delay_ms, Block::Text(text.to_string()))
    }

    pub fn link(&mut self, delay_ms: u64, label: &str, path: &str, kind: LinkKind) -> &mut Self {
        let target = self.target(Target::Route(path.to_string()));
        self.reveal(
            delay_ms,
            Block::Link {
                label: label.to_string(),
                target,
                kind,
            },
        )
    }

    pub fn image(&mut self, delay_ms: u64, path: &str, alt: &str, rows: u16) -> &mut Self {
        let asset = self.ctx.assets.resolve(path);
        self.reveal(
            delay_ms,
            Block::Image {
                asset,
                alt: alt.to_string(),
                rows,
            },
        )
    }

    pub fn card(&mut self, delay_ms: u64, project: &Project, wide: bool) -> &mut Self {
        let target = self.target(Target::Route(project.path()));
        let asset = self.ctx.assets.resolve(project.image);
        self.reveal(
            delay_ms,
            Block::Card {
                title: project.title.to_string(),
                category: project.category.to_string(),
                asset,
                target,
                wide,
            },
        )
    }

    pub fn metric(&mut self, delay_ms: u64, metric: &Metric) -> &mut Self {
        let count_up = CountUp::new(
            metric.value,
            &self.ctx.config.count_up,
            self.ctx.observer,
            self.ctx.ticker,
        );
        self.reveal(
            delay_ms,
            Block::Metric {
                count_up,
                label: metric.label.to_string(),
            },
        )
    }

    pub fn finish(self, route: Route, form: Option<ContactForm>) -> PageBody {
        debug!(
            route = %route,
            elements = self.elements.len(),
            targets = self.targets.len(),
            "Page mounted"
        );
        PageBody {
            route,
            elements: self.elements,
            targets: self.targets,
            focus: None,
            form,
            height: 0,
        }
    }
}

/// Build the body for `route`, footer included
pub fn mount(route: &Route, ctx: MountContext<'_>) -> PageBody {
    let mut builder = PageBuilder::new(ctx);
    let mut form = None;

    match route {
        Route::Home => home::build(&mut builder),
        Route::About => about::build(&mut builder),
        Route::Works => works::build(&mut builder),
        Route::CaseStudy(slug) => {
            if let Some(project) = ctx.catalog.project(slug) {
                case_study::build(&mut builder, project);
            }
        }
        Route::Contact => {
            contact::build(&mut builder);
            form = Some(ContactForm::new());
        }
    }
    footer::build(&mut builder);

    builder.finish(route.clone(), form)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::motion::Viewport;
    use crate::themes;

    struct Fixture {
        catalog: Catalog,
        assets: AssetResolver,
        observer: VisibilityObserver,
        ticker: Ticker,
        config: AppConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let config = AppConfig::default();
            Self {
                catalog: Catalog::load().unwrap(),
                assets: AssetResolver::new("/nonexistent-assets".into(), "/images/placeholder.png"),
                observer: VisibilityObserver::new(),
                ticker: Ticker::new(),
                config,
            }
        }

        fn ctx(&self) -> MountContext<'_> {
            MountContext {
                catalog: &self.catalog,
                assets: &self.assets,
                observer: &self.observer,
                ticker: &self.ticker,
                config: &self.config,
            }
        }
    }

    fn plain_text(body: &PageBody) -> String {
        body.elements()
            .iter()
            .flat_map(|e| e.lines())
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_route_mounts_with_footer() {
        let fixture = Fixture::new();
        let theme = themes::light();
        let routes = [
            Route::Home,
            Route::About,
            Route::Works,
            Route::CaseStudy("safe-space".to_string()),
            Route::Contact,
        ];
        for route in routes {
            let mut body = mount(&route, fixture.ctx());
            let height = body.layout(80, &theme, None, false, Instant::now());
            assert!(height > 20, "{} is suspiciously short", route);
            let text = plain_text(&body);
            assert!(text.contains("Want to create something awesome?"), "{}", route);
            assert!(text.contains("A freelance frontend developer currently based in Berlin"));
        }
    }

    #[test]
    fn test_layout_stacks_elements() {
        let fixture = Fixture::new();
        let mut body = mount(&Route::Works, fixture.ctx());
        body.layout(60, &themes::dark(), None, false, Instant::now());

        let mut expected_top = 0;
        for element in body.elements() {
            assert_eq!(element.bounds().top, expected_top);
            assert_eq!(element.bounds().height as usize, element.lines().len());
            expected_top += element.bounds().height;
        }
        assert_eq!(body.height(), expected_top);
    }

    #[test]
    fn test_focus_cycles_through_targets() {
        let fixture = Fixture::new();
        let mut body = mount(&Route::Home, fixture.ctx());
        let count = body.targets().len();
        assert!(count > 3);

        assert_eq!(body.focus_prev(), Some(count - 1));
        assert_eq!(body.focus_next(), Some(0));
        assert_eq!(body.focused_target(), Some(&Target::Route("/contact".to_string())));
    }

    #[test]
    fn test_about_has_approach_anchor() {
        let fixture = Fixture::new();
        let mut body = mount(&Route::About, fixture.ctx());
        body.layout(80, &themes::light(), None, false, Instant::now());
        let top = body.anchor_top("approach").unwrap();
        assert!(top > 0);
        assert!(body.anchor_top("nowhere").is_none());
    }

    #[test]
    fn test_case_study_metrics_count_when_visible() {
        let fixture = Fixture::new();
        let mut body = mount(&Route::CaseStudy("safe-space".to_string()), fixture.ctx());
        let t0 = Instant::now();
        body.layout(80, &themes::light(), None, false, t0);

        let metric = body
            .elements()
            .iter()
            .find_map(|e| e.block.count_up())
            .unwrap();
        assert_eq!(metric.displayed(), "$0.0M");

        let top = body
            .elements()
            .iter()
            .find(|e| e.block.count_up().is_some())
            .map(|e| e.bounds().top)
            .unwrap();
        fixture.observer.set_viewport(Viewport::new(top, 20), t0);
        fixture.ticker.tick(t0 + Duration::from_secs(5));

        let metric = body
            .elements()
            .iter()
            .find_map(|e| e.block.count_up())
            .unwrap();
        assert_eq!(metric.displayed(), "$22.8M");
    }

    #[test]
    fn test_dropping_body_releases_observations() {
        let fixture = Fixture::new();
        let mut body = mount(&Route::CaseStudy("wepay".to_string()), fixture.ctx());
        body.layout(80, &themes::light(), None, false, Instant::now());
        assert!(fixture.observer.pending() > 0);

        drop(body);
        assert_eq!(fixture.observer.pending(), 0);
        assert_eq!(fixture.ticker.live(), 0);
    }

    #[test]
    fn test_reveals_disabled_renders_everything_visible() {
        let mut fixture = Fixture::new();
        fixture.config.reveal.enabled = false;
        let body = mount(&Route::Home, fixture.ctx());
        let now = Instant::now();
        assert!(body
            .elements()
            .iter()
            .all(|e| e.visual(now) == RevealVisual::VISIBLE));
    }

    #[test]
    fn test_contact_page_owns_a_form() {
        let fixture = Fixture::new();
        let body = mount(&Route::Contact, fixture.ctx());
        assert!(body.form().is_some());
        assert!(body.targets().contains(&Target::Submit));
        assert!(body.targets().contains(&Target::Budget(">$50k")));
    }
}
