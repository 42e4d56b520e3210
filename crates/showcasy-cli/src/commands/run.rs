use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use showcasy_core::{
    contact::transport_from_config, AppConfig, Catalog, ColorScheme, PreferenceStore,
    ThemeResolver,
};
use showcasy_tui::{
    app::App,
    event::{AppEvent, EventHandler, SubmitResult},
    fallback_scheme,
    input::handle_key_event,
    keymap::Keymap,
    scroll::ScrollConfigExt,
    widgets,
};

type Backend = CrosstermBackend<io::Stdout>;

pub async fn run(config: Arc<AppConfig>, catalog: Arc<Catalog>, path: &str) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);
    let transport = transport_from_config(&config)?;

    // Stored choice, then the terminal's scheme, then the configured theme
    let themes = ThemeResolver::new(
        PreferenceStore::new(config.preferences_path()),
        ColorScheme::detect_terminal(),
        fallback_scheme(&config.ui.theme),
    );

    let mut app = App::new(config.clone(), catalog, themes, transport, path);
    info!(path, scheme = %app.themes.current(), "Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableFocusChange,
        SetTitle(app.shell.title())
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &keymap);

    // Teardown: stop the scroll step, then restore the terminal
    app.scroll.dispose();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(terminal: &mut Terminal<Backend>, app: &mut App, keymap: &Keymap) -> Result<()> {
    let event_handler = EventHandler::new(
        app.config.ui.tick_rate_ms,
        app.config.scroll.animation_tick_duration(),
    );

    // Contact submissions run on a background task and report back here
    let (submit_tx, mut submit_rx) = mpsc::unbounded_channel::<SubmitResult>();

    let mut title = app.shell.title();
    // Checked at the end of each iteration to pick the next poll interval
    let mut needs_fast_update = false;

    loop {
        // Process any completed submissions (non-blocking)
        while let Ok(result) = submit_rx.try_recv() {
            app.handle_submit_result(result);
        }

        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| widgets::draw(frame, app, now))?;

        let current = app.shell.title();
        if current != title {
            execute!(terminal.backend_mut(), SetTitle(&current))?;
            title = current;
        }

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.handle_action(action, Instant::now(), &submit_tx);
                }
                AppEvent::Resize(width, height) => {
                    // The next draw lays the page out for the new size
                    debug!(width, height, "Terminal resized");
                }
                AppEvent::FocusGained => {
                    if let Some(scheme) = ColorScheme::detect_terminal() {
                        app.on_system_scheme(scheme);
                    }
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.is_animating(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
