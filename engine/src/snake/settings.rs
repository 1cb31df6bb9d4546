use std::time::Duration;

use crate::game_config::GameConfig;
use super::types::{FieldSize, WallCollisionMode};

/// Everything a session needs from the configuration, fixed for the session's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub wall_collision_mode: WallCollisionMode,
    pub initial_snake_length: usize,
    pub points_per_food: u32,
    pub player_name: String,
    pub tick_interval: Duration,
}

impl From<&GameConfig> for SnakeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            field_size: config.field_size(),
            wall_collision_mode: config.wall_collision_mode(),
            initial_snake_length: config.initial_snake_length.max(1) as usize,
            points_per_food: config.points_per_food,
            player_name: config.player_name.clone(),
            tick_interval: config.tick_interval(),
        }
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}
