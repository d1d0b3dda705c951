use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows skipped by PageUp/PageDown
pub const PAGE_SIZE: isize = 10;

/// Picker actions from keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    First,
    Last,
    Select,
    Cancel,
    None,
}

/// Wait up to `timeout` for a key press
pub fn poll_event(timeout: Duration) -> io::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

pub fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Cancel,
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Cancel,

        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Home, _) => Action::First,
        (KeyCode::End, _) => Action::Last,

        (KeyCode::Enter, _) => Action::Select,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(key_to_action(ctrl('c')), Action::Cancel);
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Action::Cancel);
    }

    #[test]
    fn test_navigation_emacs_and_vim_style() {
        assert_eq!(key_to_action(ctrl('p')), Action::MoveUp);
        assert_eq!(key_to_action(ctrl('n')), Action::MoveDown);
        assert_eq!(key_to_action(key(KeyCode::Char('k'))), Action::MoveUp);
        assert_eq!(key_to_action(key(KeyCode::Char('j'))), Action::MoveDown);
    }

    #[test]
    fn test_navigation_arrows_and_paging() {
        assert_eq!(key_to_action(key(KeyCode::Up)), Action::MoveUp);
        assert_eq!(key_to_action(key(KeyCode::Down)), Action::MoveDown);
        assert_eq!(key_to_action(key(KeyCode::PageUp)), Action::PageUp);
        assert_eq!(key_to_action(key(KeyCode::PageDown)), Action::PageDown);
        assert_eq!(key_to_action(key(KeyCode::Home)), Action::First);
        assert_eq!(key_to_action(key(KeyCode::End)), Action::Last);
    }

    #[test]
    fn test_enter_selects() {
        assert_eq!(key_to_action(key(KeyCode::Enter)), Action::Select);
    }

    #[test]
    fn test_shifted_letters_are_ignored() {
        let shift_q = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(key_to_action(shift_q), Action::None);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key_to_action(key(KeyCode::F(1))), Action::None);
        assert_eq!(key_to_action(key(KeyCode::Char('x'))), Action::None);
    }
}
