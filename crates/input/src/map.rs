//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// | Key | Action |
/// |-----|--------|
/// | ← / → | move |
/// | ↓ | soft drop |
/// | ↑ | rotate |
/// | Space | hard drop |
/// | M | mirror |
/// | S | sound on/off |
/// | R | new game |
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMirror),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::ToggleSound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        _ => None,
    }
}

/// Whether terminal auto-repeat of a held key should repeat the action.
///
/// Only movement repeats; toggles and drops fire once per press.
pub fn repeats_on_hold(action: GameAction) -> bool {
    matches!(
        action,
        GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
    )
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
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Rotate)
        );
    }

    #[test]
    fn test_action_keys_both_cases() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        for (lower, upper, action) in [
            ('m', 'M', GameAction::ToggleMirror),
            ('s', 'S', GameAction::ToggleSound),
            ('r', 'R', GameAction::Reset),
        ] {
            assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(lower))), Some(action));
            assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(upper))), Some(action));
        }
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), None);
        // Ctrl-S must not toggle sound.
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_repeats_on_hold() {
        assert!(repeats_on_hold(GameAction::MoveLeft));
        assert!(repeats_on_hold(GameAction::SoftDrop));
        assert!(!repeats_on_hold(GameAction::HardDrop));
        assert!(!repeats_on_hold(GameAction::ToggleMirror));
        assert!(!repeats_on_hold(GameAction::Reset));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
