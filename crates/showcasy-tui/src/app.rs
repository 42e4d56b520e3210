use std::sync::Arc;
use std::time::Instant;

use showcasy_core::contact::{ContactForm, Field, SubmissionTransport};
use showcasy_core::{AppConfig, AssetResolver, Catalog, ColorScheme, ThemeResolver};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::event::SubmitResult;
use crate::input::Action;
use crate::motion::{Ticker, VisibilityObserver};
use crate::page::Target;
use crate::router::Route;
use crate::scroll::SmoothScroll;
use crate::shell::PageShell;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing: scrolling, following links
    Normal,
    /// Keystrokes go into a contact form field
    Editing(Field),
    /// Navigation menu overlay
    Menu,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Header, routed body and transitions
    pub shell: PageShell,
    /// Application-owned smooth scroll over the page body
    pub scroll: SmoothScroll,
    /// Frame scheduler shared by scroll and count-ups
    pub ticker: Ticker,
    /// Stored and system color scheme
    pub themes: ThemeResolver,
    /// Current theme
    pub theme: Theme,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Page viewport size from the last draw
    pub viewport: (u16, u16),
    /// Form instance whose submission is in flight
    pub submitting: Option<Uuid>,
    transport: Arc<dyn SubmissionTransport>,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        catalog: Arc<Catalog>,
        themes: ThemeResolver,
        transport: Arc<dyn SubmissionTransport>,
        path: &str,
    ) -> Self {
        let ticker = Ticker::new();
        let observer = VisibilityObserver::new();
        let scroll = SmoothScroll::new(config.scroll.clone(), &ticker);
        let shell = PageShell::new(
            catalog,
            Arc::clone(&config),
            AssetResolver::from_config(&config),
            observer,
            ticker.clone(),
            path,
        );
        let theme = load_theme(&config.ui.theme, themes.current());

        Self {
            config,
            shell,
            scroll,
            ticker,
            themes,
            theme,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            pending_key: None,
            viewport: (0, 0),
            submitting: None,
            transport,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Field receiving keystrokes, if any
    pub fn editing(&self) -> Option<Field> {
        match self.mode {
            Mode::Editing(field) => Some(field),
            _ => None,
        }
    }

    /// Whether the mounted contact form is the one being sent
    pub fn is_submitting(&self) -> bool {
        match (self.submitting, self.shell.body().form()) {
            (Some(id), Some(form)) => form.id() == id,
            _ => false,
        }
    }

    /// Advance transitions and every frame callback
    pub fn tick(&mut self, now: Instant) {
        self.shell.update(now);
        self.ticker.tick(now);
    }

    /// Whether the next frame should come at the animation frame rate
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.needs_update() || self.shell.is_animating(now)
    }

    /// Lay out the page for a body area of `width` x `height`
    pub fn sync(&mut self, width: u16, height: u16, now: Instant) {
        self.viewport = (width, height);
        let editing = self.editing();
        self.shell.sync(
            width,
            height,
            &self.theme,
            editing,
            self.is_submitting(),
            &self.scroll,
            now,
        );
    }

    pub fn navigate(&mut self, path: &str, now: Instant) {
        self.mode = Mode::Normal;
        self.shell.navigate(path, &self.scroll, now);
    }

    /// Apply a system color scheme change (terminal regained focus)
    pub fn on_system_scheme(&mut self, scheme: ColorScheme) {
        if self.themes.on_system_change(scheme) {
            self.apply_scheme();
        }
    }

    fn apply_scheme(&mut self) {
        self.theme = load_theme(&self.config.ui.theme, self.themes.current());
    }

    /// Perform `action`; submissions report back through `submit_tx`
    pub fn handle_action(
        &mut self,
        action: Action,
        now: Instant,
        submit_tx: &mpsc::UnboundedSender<SubmitResult>,
    ) {
        // Clear pending key on any action except PendingG
        if action != Action::PendingG {
            self.clear_pending_key();
        }
        let height = self.viewport.1;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_down(),
            Action::ScrollUp => self.scroll.scroll_up(),
            Action::ScrollHalfPageDown => self.scroll.half_page_down(height),
            Action::ScrollHalfPageUp => self.scroll.half_page_up(height),
            Action::ScrollPageDown => self.scroll.page_down(height),
            Action::ScrollPageUp => self.scroll.page_up(height),
            Action::JumpToTop => self.scroll.scroll_to(0),
            Action::JumpToBottom => self.scroll.scroll_to(self.scroll.max()),
            Action::PendingG => self.pending_key = Some('g'),
            Action::NextLink => {
                self.mode = Mode::Normal;
                self.move_focus(true);
            }
            Action::PrevLink => {
                self.mode = Mode::Normal;
                self.move_focus(false);
            }
            Action::Follow => self.follow(now, submit_tx),
            Action::OpenMenu => {
                self.shell.open_menu();
                self.mode = Mode::Menu;
            }
            Action::Go(route) => self.navigate(&route.path(), now),
            Action::HistoryBack => {
                self.mode = Mode::Normal;
                if !self.shell.back(&self.scroll, now) {
                    self.set_status("Already at the first page");
                }
            }
            Action::HistoryForward => {
                self.mode = Mode::Normal;
                if !self.shell.forward(&self.scroll, now) {
                    self.set_status("Already at the latest page");
                }
            }
            Action::ToggleTheme => match self.themes.toggle() {
                Ok(scheme) => {
                    self.apply_scheme();
                    self.set_status(format!("Theme: {}", scheme));
                }
                Err(e) => {
                    warn!("Failed to save theme preference: {}", e);
                    self.set_status(format!("Could not save theme: {}", e));
                }
            },
            Action::OpenWebsite => self.open_website(),
            Action::MenuNext => self.shell.menu_next(),
            Action::MenuPrev => self.shell.menu_prev(),
            Action::InputChar(c) => {
                if let Some(field) = self.editing() {
                    if let Some(form) = self.editable_form() {
                        form.value_mut(field).push(c);
                    }
                }
            }
            Action::Backspace => {
                if let Some(field) = self.editing() {
                    if let Some(form) = self.editable_form() {
                        form.value_mut(field).pop();
                    }
                }
            }
            Action::ExitMode => match self.mode {
                Mode::Editing(_) => self.mode = Mode::Normal,
                Mode::Menu => {
                    self.shell.close_menu();
                    self.mode = Mode::Normal;
                }
                Mode::Normal => {
                    self.shell.body_mut().set_focus(None);
                    self.clear_status();
                }
            },
            Action::Confirm => match self.mode {
                Mode::Editing(_) => {
                    self.mode = Mode::Normal;
                    self.move_focus(true);
                }
                Mode::Menu => {
                    self.mode = Mode::Normal;
                    self.shell.choose_menu(&self.scroll, now);
                }
                Mode::Normal => self.follow(now, submit_tx),
            },
            Action::None => {}
        }
    }

    /// Focus the next or previous target and bring it into view
    fn move_focus(&mut self, forward: bool) {
        let position = self.scroll.position();
        let body = self.shell.body_mut();
        let focus = match (body.focus(), forward) {
            (None, true) => body.first_target_from(position).or_else(|| body.focus_next()),
            (Some(_), true) => body.focus_next(),
            (_, false) => body.focus_prev(),
        };
        body.set_focus(focus);

        let Some(bounds) = focus.and_then(|i| body.target_bounds(i)) else {
            return;
        };
        let height = self.viewport.1;
        if bounds.top < position || bounds.bottom() > position.saturating_add(height) {
            self.scroll.scroll_to(bounds.top.saturating_sub(2));
        }
    }

    fn follow(&mut self, now: Instant, submit_tx: &mpsc::UnboundedSender<SubmitResult>) {
        let Some(target) = self.shell.body().focused_target().cloned() else {
            return;
        };
        match target {
            Target::Route(path) => self.navigate(&path, now),
            Target::External(Some(url)) => self.open_url(&url),
            Target::External(None) => debug!("Placeholder link, nothing to open"),
            Target::Field(field) => self.mode = Mode::Editing(field),
            Target::Service(service) => {
                if let Some(form) = self.editable_form() {
                    form.toggle_service(service);
                }
            }
            Target::Budget(budget) => {
                if let Some(form) = self.editable_form() {
                    form.select_budget(budget);
                }
            }
            Target::Submit => self.submit(submit_tx),
        }
    }

    fn open_website(&mut self) {
        let slug = match &self.shell.location().route {
            Route::CaseStudy(slug) => slug.clone(),
            _ => {
                self.set_status("Only case studies link to a website");
                return;
            }
        };
        let url = self
            .shell
            .router()
            .catalog()
            .project(&slug)
            .and_then(|p| p.website_url());
        match url {
            Some(url) => self.open_url(&url),
            None => self.set_status("This project has no public website"),
        }
    }

    fn open_url(&mut self, url: &Url) {
        match open::that(url.as_str()) {
            Ok(()) => self.set_status(format!("Opened {}", url)),
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.set_status(format!("Could not open browser: {}", e));
            }
        }
    }

    /// The mounted contact form, unless its values are being sent
    fn editable_form(&mut self) -> Option<&mut ContactForm> {
        if self.is_submitting() {
            self.set_status("Sending…");
            return None;
        }
        self.shell.body_mut().form_mut()
    }

    /// Validate now; deliver on a background task when valid
    fn submit(&mut self, submit_tx: &mpsc::UnboundedSender<SubmitResult>) {
        if self.is_submitting() {
            return;
        }
        let Some(form) = self.shell.body_mut().form_mut() else {
            return;
        };
        if !form.validate() {
            let count = form.errors().len();
            self.set_status(format!("Please fix {} highlighted field(s)", count));
            return;
        }

        let mut pending = form.clone();
        let id = pending.id();
        let transport = Arc::clone(&self.transport);
        let tx = submit_tx.clone();
        self.submitting = Some(id);
        self.set_status("Sending…");
        info!(form = %id, "Submitting contact form");

        tokio::spawn(async move {
            let outcome = pending.submit(transport.as_ref()).await;
            let _ = tx.send(SubmitResult::new(id, outcome));
        });
    }

    /// Apply the result of a background submission
    ///
    /// Only the form that was sent is cleared; a form mounted since then
    /// keeps whatever was typed into it.
    pub fn handle_submit_result(&mut self, result: SubmitResult) {
        let id = result.form();
        if self.submitting == Some(id) {
            self.submitting = None;
        }
        match result {
            SubmitResult::Sent { .. } => {
                let sent_form = self.shell.body_mut().form_mut().filter(|form| form.id() == id);
                if let Some(form) = sent_form {
                    form.reset();
                    if let Mode::Editing(_) = self.mode {
                        self.mode = Mode::Normal;
                    }
                } else {
                    debug!(form = %id, "Sent form is no longer mounted");
                }
                self.set_status("Thanks! Your message is on its way.");
            }
            SubmitResult::Failure { error, .. } => {
                self.set_status(format!("Sending failed: {}", error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use showcasy_core::contact::Submission;
    use showcasy_core::{PreferenceStore, Result as CoreResult};

    use super::*;

    #[derive(Default)]
    struct Recording {
        sent: Mutex<Vec<Submission>>,
        fail: bool,
    }

    #[async_trait]
    impl SubmissionTransport for Recording {
        fn name(&self) -> &str {
            "recording"
        }

        async fn send(&self, submission: &Submission) -> CoreResult<()> {
            if self.fail {
                return Err(showcasy_core::Error::Transport("offline".to_string()));
            }
            self.sent.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    fn app_with(path: &str, transport: Arc<Recording>) -> App {
        let mut config = AppConfig::default();
        config.ui.page_transitions = false;
        config.scroll.smooth_enabled = false;
        let prefs = std::env::temp_dir().join(format!("showcasy-app-{}.json", uuid::Uuid::new_v4()));
        let themes = ThemeResolver::new(PreferenceStore::new(prefs), None, ColorScheme::Dark);
        let mut app = App::new(
            Arc::new(config),
            Arc::new(Catalog::load().unwrap()),
            themes,
            transport,
            path,
        );
        app.sync(80, 24, Instant::now());
        app
    }

    fn app(path: &str) -> App {
        app_with(path, Arc::new(Recording::default()))
    }

    fn focus_target(app: &mut App, target: &Target) {
        let index = app
            .shell
            .body()
            .targets()
            .iter()
            .position(|t| t == target)
            .unwrap();
        app.shell.body_mut().set_focus(Some(index));
    }

    fn type_into(app: &mut App, field: Field, text: &str, tx: &mpsc::UnboundedSender<SubmitResult>) {
        let now = Instant::now();
        focus_target(app, &Target::Field(field));
        app.handle_action(Action::Follow, now, tx);
        assert_eq!(app.mode, Mode::Editing(field));
        for c in text.chars() {
            app.handle_action(Action::InputChar(c), now, tx);
        }
        app.handle_action(Action::ExitMode, now, tx);
    }

    #[test]
    fn test_follow_route_link() {
        let mut app = app("/");
        let (tx, _rx) = mpsc::unbounded_channel();
        app.handle_action(Action::NextLink, Instant::now(), &tx);
        app.handle_action(Action::Follow, Instant::now(), &tx);
        assert_eq!(app.shell.body().route(), &Route::Contact);
    }

    #[test]
    fn test_gg_needs_two_presses() {
        let mut app = app("/");
        let (tx, _rx) = mpsc::unbounded_channel();
        app.handle_action(Action::PendingG, Instant::now(), &tx);
        assert_eq!(app.pending_key, Some('g'));
        app.handle_action(Action::ScrollDown, Instant::now(), &tx);
        assert_eq!(app.pending_key, None);
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app("/");
        let (tx, _rx) = mpsc::unbounded_channel();
        let now = Instant::now();
        app.handle_action(Action::OpenMenu, now, &tx);
        assert_eq!(app.mode, Mode::Menu);
        app.handle_action(Action::MenuNext, now, &tx);
        app.handle_action(Action::Confirm, now, &tx);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.shell.is_menu_open());
        assert_eq!(app.shell.body().route(), &Route::About);
    }

    #[test]
    fn test_toggle_theme_persists_choice() {
        let mut app = app("/");
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(app.theme.scheme, ColorScheme::Dark);
        app.handle_action(Action::ToggleTheme, Instant::now(), &tx);
        assert_eq!(app.theme.scheme, ColorScheme::Light);
        assert!(app.themes.is_explicit());

        // System changes no longer apply once chosen
        app.on_system_scheme(ColorScheme::Dark);
        assert_eq!(app.theme.scheme, ColorScheme::Light);
    }

    #[test]
    fn test_system_scheme_followed_without_choice() {
        let mut app = app("/");
        app.on_system_scheme(ColorScheme::Light);
        assert_eq!(app.theme.scheme, ColorScheme::Light);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_transport() {
        let transport = Arc::new(Recording::default());
        let mut app = app_with("/contact", Arc::clone(&transport));
        let (tx, mut rx) = mpsc::unbounded_channel();

        type_into(&mut app, Field::Email, "not-an-email", &tx);
        type_into(&mut app, Field::Company, "Acme", &tx);
        type_into(&mut app, Field::Message, "Hello", &tx);
        focus_target(&mut app, &Target::Submit);
        app.handle_action(Action::Follow, Instant::now(), &tx);

        let form = app.shell.body().form().unwrap();
        assert_eq!(
            form.errors().keys().copied().collect::<Vec<_>>(),
            vec![Field::Name, Field::Email]
        );
        assert!(!app.is_submitting());
        assert!(rx.try_recv().is_err());
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_valid_form_sends_once_and_resets() {
        let transport = Arc::new(Recording::default());
        let mut app = app_with("/contact", Arc::clone(&transport));
        let (tx, mut rx) = mpsc::unbounded_channel();

        type_into(&mut app, Field::Name, "Ada", &tx);
        type_into(&mut app, Field::Email, "ada@example.com", &tx);
        type_into(&mut app, Field::Message, "Hello", &tx);
        focus_target(&mut app, &Target::Service("Branding"));
        app.handle_action(Action::Follow, Instant::now(), &tx);
        focus_target(&mut app, &Target::Submit);
        app.handle_action(Action::Follow, Instant::now(), &tx);
        assert!(app.is_submitting());
        // A second press while sending is ignored
        app.handle_action(Action::Follow, Instant::now(), &tx);

        let result = rx.recv().await.unwrap();
        assert!(matches!(result, SubmitResult::Sent { .. }));
        app.handle_submit_result(result);

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada");
        assert_eq!(sent[0].services, vec!["Branding".to_string()]);
        assert_eq!(app.shell.body().form().unwrap().name, "");
        assert!(!app.is_submitting());
        assert_eq!(app.submitting, None);
    }

    fn fill_valid(app: &mut App, tx: &mpsc::UnboundedSender<SubmitResult>) {
        type_into(app, Field::Name, "Ada", tx);
        type_into(app, Field::Email, "ada@example.com", tx);
        type_into(app, Field::Message, "Hello", tx);
        focus_target(app, &Target::Submit);
    }

    #[tokio::test]
    async fn test_edits_are_frozen_while_sending() {
        let mut app = app("/contact");
        let (tx, mut rx) = mpsc::unbounded_channel();

        fill_valid(&mut app, &tx);
        app.handle_action(Action::Follow, Instant::now(), &tx);
        assert!(app.is_submitting());

        type_into(&mut app, Field::Name, " Lovelace", &tx);
        assert_eq!(app.shell.body().form().unwrap().name, "Ada");

        let result = rx.recv().await.unwrap();
        app.handle_submit_result(result);
        type_into(&mut app, Field::Name, "Grace", &tx);
        assert_eq!(app.shell.body().form().unwrap().name, "Grace");
    }

    #[tokio::test]
    async fn test_sent_result_keeps_input_of_remounted_form() {
        let transport = Arc::new(Recording::default());
        let mut app = app_with("/contact", Arc::clone(&transport));
        let (tx, mut rx) = mpsc::unbounded_channel();

        fill_valid(&mut app, &tx);
        app.handle_action(Action::Follow, Instant::now(), &tx);
        assert!(app.is_submitting());

        app.handle_action(Action::Go(Route::Works), Instant::now(), &tx);
        app.handle_action(Action::Go(Route::Contact), Instant::now(), &tx);
        app.sync(80, 24, Instant::now());
        // The fresh form is not the one being sent
        assert!(!app.is_submitting());
        type_into(&mut app, Field::Name, "Grace", &tx);

        let result = rx.recv().await.unwrap();
        app.handle_submit_result(result);

        assert_eq!(app.shell.body().form().unwrap().name, "Grace");
        assert_eq!(app.submitting, None);
        assert_eq!(transport.sent.lock().unwrap()[0].name, "Ada");
        assert!(app.status_message.as_deref().unwrap().contains("on its way"));
    }

    #[tokio::test]
    async fn test_failed_send_keeps_values() {
        let transport = Arc::new(Recording {
            fail: true,
            ..Recording::default()
        });
        let mut app = app_with("/contact", transport);
        let (tx, mut rx) = mpsc::unbounded_channel();

        fill_valid(&mut app, &tx);
        app.handle_action(Action::Follow, Instant::now(), &tx);

        let result = rx.recv().await.unwrap();
        app.handle_submit_result(result);

        let form = app.shell.body().form().unwrap();
        assert_eq!(form.email, "ada@example.com");
        assert!(app.status_message.as_deref().unwrap().contains("offline"));
    }
}
