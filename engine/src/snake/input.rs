use super::types::Direction;

/// Abstract, already-decoded player intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Pause,
    Restart,
    Quit,
}

impl InputAction {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            InputAction::MoveUp => Some(Direction::Up),
            InputAction::MoveDown => Some(Direction::Down),
            InputAction::MoveLeft => Some(Direction::Left),
            InputAction::MoveRight => Some(Direction::Right),
            InputAction::Pause | InputAction::Restart | InputAction::Quit => None,
        }
    }

    pub fn is_movement(&self) -> bool {
        self.direction().is_some()
    }
}

impl From<Direction> for InputAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => InputAction::MoveUp,
            Direction::Down => InputAction::MoveDown,
            Direction::Left => InputAction::MoveLeft,
            Direction::Right => InputAction::MoveRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_move_actions_map_to_directions() {
        for direction in Direction::ALL {
            let action = InputAction::from(direction);
            assert!(action.is_movement());
            assert_eq!(action.direction(), Some(direction));
        }
        for action in [InputAction::Pause, InputAction::Restart, InputAction::Quit] {
            assert!(!action.is_movement());
        }
    }
}
