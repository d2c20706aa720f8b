use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the front end to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Maps crossterm key events to [`KeyAction`]s; only the arrows steer
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Releases and repeats are not presses
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::Turn(Direction::Up),
            KeyCode::Down => KeyAction::Turn(Direction::Down),
            KeyCode::Left => KeyAction::Turn(Direction::Left),
            KeyCode::Right => KeyAction::Turn(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_for(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_arrows_turn() {
        let cases = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ];
        for (code, direction) in cases {
            assert_eq!(
                action_for(code, KeyModifiers::NONE),
                KeyAction::Turn(direction)
            );
        }
    }

    #[test]
    fn test_letters_do_not_steer() {
        for c in ['w', 'a', 's', 'd', 'x'] {
            assert_eq!(action_for(KeyCode::Char(c), KeyModifiers::NONE), KeyAction::None);
        }
    }

    #[test]
    fn test_quit_and_restart() {
        assert_eq!(action_for(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(action_for(KeyCode::Char('Q'), KeyModifiers::SHIFT), KeyAction::Quit);
        assert_eq!(action_for(KeyCode::Esc, KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(action_for(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit);

        assert_eq!(action_for(KeyCode::Char('r'), KeyModifiers::NONE), KeyAction::Restart);
        assert_eq!(action_for(KeyCode::Enter, KeyModifiers::NONE), KeyAction::Restart);
    }

    #[test]
    fn test_key_release_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(InputHandler::new().handle_key_event(release), KeyAction::None);
    }
}
