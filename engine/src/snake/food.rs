use std::collections::HashSet;
use std::fmt;

use crate::session_rng::SessionRng;
use crate::{log, log_warn};
use super::types::{FieldSize, Position};

pub const MAX_RANDOM_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPlacementError {
    BoardFull,
}

impl fmt::Display for FoodPlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodPlacementError::BoardFull => write!(f, "No free cell left for food"),
        }
    }
}

impl std::error::Error for FoodPlacementError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Position,
    field_size: FieldSize,
}

impl Food {
    pub fn spawn(
        field_size: FieldSize,
        avoid: &HashSet<Position>,
        rng: &mut SessionRng,
    ) -> Result<Self, FoodPlacementError> {
        let position = find_free_cell(&field_size, avoid, rng)?;
        log!("Food spawned at {}", position);
        Ok(Self { position, field_size })
    }

    pub fn at(position: Position, field_size: FieldSize) -> Self {
        Self { position, field_size }
    }

    /// Moves the food to a cell outside `avoid`. On a full board the food stays put.
    pub fn respawn(
        &mut self,
        avoid: &HashSet<Position>,
        rng: &mut SessionRng,
    ) -> Result<Position, FoodPlacementError> {
        self.position = find_free_cell(&self.field_size, avoid, rng)?;
        log!("Food respawned at {}", self.position);
        Ok(self.position)
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

fn find_free_cell(
    field_size: &FieldSize,
    avoid: &HashSet<Position>,
    rng: &mut SessionRng,
) -> Result<Position, FoodPlacementError> {
    if field_size.cell_count() == 0 {
        return Err(FoodPlacementError::BoardFull);
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let x = rng.random_range(0..field_size.width) as i32;
        let y = rng.random_range(0..field_size.height) as i32;
        let candidate = Position::new(x, y);

        if !avoid.contains(&candidate) {
            return Ok(candidate);
        }
    }

    let fallback = (0..field_size.height as i32)
        .flat_map(|y| (0..field_size.width as i32).map(move |x| Position::new(x, y)))
        .find(|candidate| !avoid.contains(candidate));

    match fallback {
        Some(position) => {
            log_warn!("Food placed by exhaustive scan at {}", position);
            Ok(position)
        }
        None => Err(FoodPlacementError::BoardFull),
    }
}
