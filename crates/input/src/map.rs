//! Key mapping from terminal events to logical game keys.

use crate::types::InputKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard event to a game key.
pub fn map_key(key: KeyEvent) -> Option<InputKey> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputKey::LEFT)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputKey::RIGHT)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputKey::SOFT_DROP)
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputKey::RotateCw)
        }
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(InputKey::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(InputKey::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(InputKey::Pause),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(InputKey::Start),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(InputKey::LEFT));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(InputKey::RIGHT));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(InputKey::SOFT_DROP));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('A'))), Some(InputKey::LEFT));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('l'))), Some(InputKey::RIGHT));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(InputKey::RotateCw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), Some(InputKey::RotateCw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('Z'))), Some(InputKey::RotateCcw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(InputKey::HardDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(InputKey::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(InputKey::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(InputKey::Start));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('?'))), None);
    }

    #[test]
    fn test_ctrl_chords_are_not_game_keys() {
        assert_eq!(map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
