use ggez::input::keyboard::KeyCode;

use crate::game::{Difficulty, Direction};

/// A key press translated into what the player meant. Which screen is showing
/// decides what the session does with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Confirm,
    Choose(Difficulty),
    Restart,
    Menu,
    Quit,
}

/// Unrecognised keys map to `None`.
pub fn command_for(keycode: KeyCode) -> Option<Command> {
    let command = match keycode {
        KeyCode::Up => Command::Steer(Direction::Up),
        KeyCode::Down => Command::Steer(Direction::Down),
        KeyCode::Left => Command::Steer(Direction::Left),
        KeyCode::Right => Command::Steer(Direction::Right),
        KeyCode::Space | KeyCode::P => Command::TogglePause,
        KeyCode::Return => Command::Confirm,
        KeyCode::Key1 => Command::Choose(Difficulty::Easy),
        KeyCode::Key2 => Command::Choose(Difficulty::Medium),
        KeyCode::Key3 => Command::Choose(Difficulty::Hard),
        KeyCode::R => Command::Restart,
        KeyCode::Escape | KeyCode::M => Command::Menu,
        KeyCode::Q => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_steer() {
        assert_eq!(command_for(KeyCode::Up), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for(KeyCode::Left), Some(Command::Steer(Direction::Left)));
    }

    #[test]
    fn test_pause_keys() {
        assert_eq!(command_for(KeyCode::Space), Some(Command::TogglePause));
        assert_eq!(command_for(KeyCode::P), Some(Command::TogglePause));
    }

    #[test]
    fn test_unknown_key_is_noop() {
        assert_eq!(command_for(KeyCode::F7), None);
        assert_eq!(command_for(KeyCode::Z), None);
    }
}
