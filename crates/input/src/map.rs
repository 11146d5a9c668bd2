//! Key mapping from terminal events to game actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Every key that maps to an action, for pull-based polling.
pub const MAPPED_KEYS: [KeyCode; 7] = [
    KeyCode::Char('w'),
    KeyCode::Char('W'),
    KeyCode::Up,
    KeyCode::Char(' '),
    KeyCode::Char('s'),
    KeyCode::Char('S'),
    KeyCode::Down,
];

/// Map a key to the action it controls.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up | KeyCode::Char(' ') => {
            Some(Action::Jump)
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Action::Duck),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_jump_keys() {
        for code in [KeyCode::Char('w'), KeyCode::Char('W'), KeyCode::Up, KeyCode::Char(' ')] {
            assert_eq!(action_for_key(code), Some(Action::Jump), "{code:?}");
        }
    }

    #[test]
    fn test_duck_keys() {
        for code in [KeyCode::Char('s'), KeyCode::Char('S'), KeyCode::Down] {
            assert_eq!(action_for_key(code), Some(Action::Duck), "{code:?}");
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(action_for_key(KeyCode::Left), None);
        assert_eq!(action_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_mapped_keys_all_resolve() {
        assert!(MAPPED_KEYS.iter().all(|&k| action_for_key(k).is_some()));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
