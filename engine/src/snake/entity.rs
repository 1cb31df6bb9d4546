use std::collections::{HashSet, VecDeque};

use super::food::Food;
use super::types::{DeathReason, Direction, FieldSize, Position, WallCollisionMode};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    next_direction: Direction,
    grow_pending: bool,
    field_size: FieldSize,
    wall_collision_mode: WallCollisionMode,
}

impl Snake {
    /// Lays out `length` segments to the left of the field centre, heading right.
    /// Segments wrap under `WrapAround`; the length is capped so every segment
    /// lies on the field and none overlap.
    pub fn new(field_size: FieldSize, length: usize, wall_collision_mode: WallCollisionMode) -> Self {
        let center = field_size.center();
        let max_length = match wall_collision_mode {
            WallCollisionMode::WrapAround => field_size.width,
            WallCollisionMode::Death => center.x as usize + 1,
        };
        let body = (0..length.min(max_length).max(1) as i32)
            .map(|i| {
                let segment = Position::new(center.x - i, center.y);
                match wall_collision_mode {
                    WallCollisionMode::WrapAround => segment.wrap_around(&field_size),
                    WallCollisionMode::Death => segment,
                }
            })
            .collect();

        Self::from_body(body, Direction::Right, field_size, wall_collision_mode)
    }

    /// Builds a snake from an explicit body, head first. `body` must not be empty.
    pub fn from_body(
        body: VecDeque<Position>,
        direction: Direction,
        field_size: FieldSize,
        wall_collision_mode: WallCollisionMode,
    ) -> Self {
        debug_assert!(!body.is_empty(), "Snake body should never be empty");
        Self {
            body,
            direction,
            next_direction: direction,
            grow_pending: false,
            field_size,
            wall_collision_mode,
        }
    }

    pub fn move_forward(&mut self) {
        self.direction = self.next_direction;

        let mut new_head = self.head() + self.direction;
        if self.wall_collision_mode == WallCollisionMode::WrapAround {
            new_head = new_head.wrap_around(&self.field_size);
        }

        self.body.push_front(new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Buffers `direction` for the next move unless it reverses the committed direction.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.next_direction = direction;
        true
    }

    pub fn reset_buffered_direction(&mut self) {
        self.next_direction = self.direction;
    }

    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    pub fn collision(&self) -> Option<DeathReason> {
        let head = self.head();

        if head
            .apply_boundary(self.wall_collision_mode, &self.field_size)
            .is_err()
        {
            return Some(DeathReason::WallCollision);
        }

        if self.body.iter().skip(1).any(|segment| *segment == head) {
            return Some(DeathReason::SelfCollision);
        }

        None
    }

    pub fn check_collision(&self) -> bool {
        self.collision().is_some()
    }

    pub fn ate_food(&self, food: &Food) -> bool {
        self.head() == food.position()
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    pub fn wall_collision_mode(&self) -> WallCollisionMode {
        self.wall_collision_mode
    }
}
