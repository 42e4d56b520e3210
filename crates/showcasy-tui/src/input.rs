use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};
use crate::router::Route;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextLink,
    PrevLink,
    /// Activate the focused target (link, chip, field or submit)
    Follow,
    OpenMenu,
    Go(Route),
    HistoryBack,
    HistoryForward,
    ToggleTheme,
    OpenWebsite,
    // Menu overlay
    MenuNext,
    MenuPrev,
    // Form field editing
    InputChar(char),
    Backspace,
    ExitMode,
    Confirm,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return Action::Quit;
    }

    match &app.mode {
        Mode::Editing(_) => return handle_editing_mode(key),
        Mode::Menu => return handle_menu_mode(key, keymap),
        Mode::Normal => {}
    }

    let binding = KeyBinding::from_event(&key);

    // gg requires double press
    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Keys typed while a form field has the cursor
fn handle_editing_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Tab => Action::NextLink,
        KeyCode::BackTab => Action::PrevLink,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            Action::InputChar(c)
        }
        _ => Action::None,
    }
}

/// Keys while the navigation menu is open
fn handle_menu_mode(key: KeyEvent, keymap: &Keymap) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::MenuNext,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::MenuPrev,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc | KeyCode::Char('q') => Action::ExitMode,
        _ => match keymap.get(&KeyBinding::from_event(&key)) {
            // Route shortcuts and the menu key itself still work
            Some(action @ Action::Go(_)) => action.clone(),
            Some(Action::OpenMenu) => Action::ExitMode,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_editing_mode_captures_characters() {
        assert_eq!(handle_editing_mode(key(KeyCode::Char('q'))), Action::InputChar('q'));
        assert_eq!(
            handle_editing_mode(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Action::InputChar('A')
        );
        assert_eq!(handle_editing_mode(key(KeyCode::Esc)), Action::ExitMode);
        assert_eq!(handle_editing_mode(key(KeyCode::Enter)), Action::Confirm);
        assert_eq!(handle_editing_mode(key(KeyCode::Backspace)), Action::Backspace);
    }

    #[test]
    fn test_menu_mode_keys() {
        let keymap = Keymap::default();
        assert_eq!(handle_menu_mode(key(KeyCode::Char('j')), &keymap), Action::MenuNext);
        assert_eq!(handle_menu_mode(key(KeyCode::Up), &keymap), Action::MenuPrev);
        assert_eq!(handle_menu_mode(key(KeyCode::Enter), &keymap), Action::Confirm);
        assert_eq!(handle_menu_mode(key(KeyCode::Char('m')), &keymap), Action::ExitMode);
        assert_eq!(
            handle_menu_mode(key(KeyCode::Char('2')), &keymap),
            Action::Go(Route::About)
        );
        assert_eq!(handle_menu_mode(key(KeyCode::Char('t')), &keymap), Action::None);
    }
}
