use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use showcasy_core::contact::SubmitOutcome;
use uuid::Uuid;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while something on screen is moving
    frame_rate: Duration,
}

/// Result of a contact form submission running on a background task
///
/// `form` is the id of the form instance that was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The transport accepted the submission
    Sent { form: Uuid },
    /// Nothing was delivered; the form keeps its values
    Failure { form: Uuid, error: String },
}

impl SubmitResult {
    pub fn new(form: Uuid, outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Sent => SubmitResult::Sent { form },
            SubmitOutcome::Failed(error) => SubmitResult::Failure { form, error },
            SubmitOutcome::Invalid => SubmitResult::Failure {
                form,
                error: "Please fix the highlighted fields".to_string(),
            },
        }
    }

    pub fn form(&self) -> Uuid {
        match self {
            SubmitResult::Sent { form } | SubmitResult::Failure { form, .. } => *form,
        }
    }
}

impl EventHandler {
    /// `frame_rate` is the poll interval used while animating
    pub fn new(tick_rate_ms: u64, frame_rate: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            frame_rate: frame_rate.max(Duration::from_millis(1)),
        }
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        Self::poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        Self::poll(self.frame_rate)
    }

    fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Only handle key press events, ignore release events
        // (crossterm 0.27+ sends release events on some systems)
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::FocusGained => Some(AppEvent::FocusGained),
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// The terminal window regained focus; the system color scheme may have changed
    FocusGained,
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;
    use crate::scroll::{ScrollConfig, ScrollConfigExt};

    #[test]
    fn test_release_events_are_dropped() {
        let mut key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(translate(Event::Key(key)), Some(AppEvent::Key(_))));

        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        assert!(translate(Event::Key(key)).is_none());
    }

    #[test]
    fn test_focus_and_resize() {
        assert!(matches!(translate(Event::FocusGained), Some(AppEvent::FocusGained)));
        assert!(translate(Event::FocusLost).is_none());
        assert!(matches!(
            translate(Event::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
    }

    #[test]
    fn test_invalid_outcome_reports_failure() {
        let form = Uuid::new_v4();
        let result = SubmitResult::new(form, SubmitOutcome::Invalid);
        assert!(matches!(result, SubmitResult::Failure { .. }));
        assert_eq!(result.form(), form);
        assert_eq!(SubmitResult::new(form, SubmitOutcome::Sent), SubmitResult::Sent { form });
    }

    #[test]
    fn test_frame_rate_from_scroll_config() {
        let config = ScrollConfig::default();
        let handler = EventHandler::new(250, config.animation_tick_duration());
        assert_eq!(handler.frame_rate, Duration::from_millis(16));
        assert_eq!(handler.tick_rate, Duration::from_millis(250));

        let handler = EventHandler::new(0, Duration::ZERO);
        assert_eq!(handler.frame_rate, Duration::from_millis(1));
        assert_eq!(handler.tick_rate, Duration::from_millis(1));
    }
}
