use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A grid cell. Coordinates are signed so a head that left the field under
/// [`WallCollisionMode::Death`] can still be represented and reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_within_bounds(&self, field_size: &FieldSize) -> bool {
        (0..field_size.width as i32).contains(&self.x) && (0..field_size.height as i32).contains(&self.y)
    }

    pub fn wrap_around(&self, field_size: &FieldSize) -> Position {
        Position::new(
            self.x.rem_euclid(field_size.width as i32),
            self.y.rem_euclid(field_size.height as i32),
        )
    }

    pub fn apply_boundary(
        &self,
        mode: WallCollisionMode,
        field_size: &FieldSize,
    ) -> Result<Position, OutOfBounds> {
        match mode {
            WallCollisionMode::WrapAround => Ok(self.wrap_around(field_size)),
            WallCollisionMode::Death => {
                if self.is_within_bounds(field_size) {
                    Ok(*self)
                } else {
                    Err(OutOfBounds { position: *self })
                }
            }
        }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit vector with y growing downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallCollisionMode {
    Death,
    WrapAround,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    BoardFull,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathReason::WallCollision => write!(f, "hit the wall"),
            DeathReason::SelfCollision => write!(f, "hit itself"),
            DeathReason::BoardFull => write!(f, "filled the board"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub position: Position,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position {} is outside the field", self.position)
    }
}

impl std::error::Error for OutOfBounds {}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldSize = FieldSize { width: 32, height: 24 };

    #[test]
    fn test_add_direction_moves_one_cell() {
        let origin = Position::new(5, 5);
        assert_eq!(origin + Direction::Up, Position::new(5, 4));
        assert_eq!(origin + Direction::Down, Position::new(5, 6));
        assert_eq!(origin + Direction::Left, Position::new(4, 5));
        assert_eq!(origin + Direction::Right, Position::new(6, 5));
    }

    #[test]
    fn test_opposite_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert!(direction.is_opposite(&direction.opposite()));
            assert!(!direction.is_opposite(&direction));
        }
    }

    #[test]
    fn test_wrap_projects_every_edge_onto_the_opposite_one() {
        let mode = WallCollisionMode::WrapAround;
        assert_eq!(Position::new(32, 7).apply_boundary(mode, &FIELD), Ok(Position::new(0, 7)));
        assert_eq!(Position::new(-1, 7).apply_boundary(mode, &FIELD), Ok(Position::new(31, 7)));
        assert_eq!(Position::new(3, 24).apply_boundary(mode, &FIELD), Ok(Position::new(3, 0)));
        assert_eq!(Position::new(3, -1).apply_boundary(mode, &FIELD), Ok(Position::new(3, 23)));
    }

    #[test]
    fn test_wall_mode_reports_out_of_bounds() {
        let mode = WallCollisionMode::Death;
        assert_eq!(Position::new(31, 23).apply_boundary(mode, &FIELD), Ok(Position::new(31, 23)));
        assert_eq!(
            Position::new(32, 0).apply_boundary(mode, &FIELD),
            Err(OutOfBounds { position: Position::new(32, 0) })
        );
        assert!(Position::new(0, -1).apply_boundary(mode, &FIELD).is_err());
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Position::new(1, 2);
        let b = Position::new(-3, 7);
        assert_eq!(a.manhattan_distance(&b), 9);
        assert_eq!(b.manhattan_distance(&a), 9);
        assert_eq!(a.manhattan_distance(&a), 0);
    }
}
