use macroquad::input::KeyCode;

use crate::config::Difficulty;
use crate::grid::Direction;

/// Everything the player can ask for, from the keyboard or the control bar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    TogglePause,
    Steer(Direction),
    SetDifficulty(Difficulty),
    /// Acknowledge the game-over notice.
    Dismiss,
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let cmd = match key {
        KeyCode::Up | KeyCode::W => Command::Steer(Direction::Up),
        KeyCode::Down | KeyCode::S => Command::Steer(Direction::Down),
        KeyCode::Left | KeyCode::A => Command::Steer(Direction::Left),
        KeyCode::Right | KeyCode::D => Command::Steer(Direction::Right),
        KeyCode::Space => Command::TogglePause,
        // Enter starts a game, or closes the notice when one is up
        KeyCode::Enter | KeyCode::KpEnter => Command::Start,
        KeyCode::Key1 => Command::SetDifficulty(Difficulty::Easy),
        KeyCode::Key2 => Command::SetDifficulty(Difficulty::Medium),
        KeyCode::Key3 => Command::SetDifficulty(Difficulty::Hard),
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for_key(KeyCode::W), Some(Command::Steer(Direction::Up)));
        assert_eq!(command_for_key(KeyCode::Left), Some(Command::Steer(Direction::Left)));
        assert_eq!(command_for_key(KeyCode::D), Some(Command::Steer(Direction::Right)));
        assert_eq!(command_for_key(KeyCode::S), Some(Command::Steer(Direction::Down)));
    }

    #[test]
    fn control_keys() {
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::TogglePause));
        assert_eq!(command_for_key(KeyCode::Enter), Some(Command::Start));
        assert_eq!(command_for_key(KeyCode::Key3), Some(Command::SetDifficulty(Difficulty::Hard)));
        assert_eq!(command_for_key(KeyCode::Q), None);
    }
}
