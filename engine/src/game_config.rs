use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::high_score::{DEFAULT_MAX_SCORES, DEFAULT_PLAYER_NAME};
use crate::snake::{FieldSize, Position, WallCollisionMode};

pub const CONFIG_FILE_NAME: &str = "snake_config.yaml";
pub const SPEED_OPTIONS: [u32; 7] = [5, 8, 10, 15, 20, 25, 30];
pub const MAX_FPS: u32 = 1000;
const DEFAULT_SPEED_INDEX: usize = 2;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub grid_size: u32,
    pub fps: u32,
    pub wall_collision: bool,
    pub points_per_food: u32,
    pub initial_snake_length: u32,
    pub player_name: String,
    pub high_score_file: String,
    pub max_high_scores: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            grid_size: 20,
            fps: SPEED_OPTIONS[DEFAULT_SPEED_INDEX],
            wall_collision: false,
            points_per_food: 10,
            initial_snake_length: 3,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            high_score_file: "high_scores.yaml".to_string(),
            max_high_scores: DEFAULT_MAX_SCORES,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err("Window dimensions must be positive".to_string());
        }
        if self.grid_size == 0 {
            return Err("Grid size must be positive".to_string());
        }
        if self.grid_width() == 0 || self.grid_height() == 0 {
            return Err("Grid size must fit at least one cell in the window".to_string());
        }
        if self.fps == 0 {
            return Err("FPS must be positive".to_string());
        }
        if self.fps > MAX_FPS {
            return Err(format!("FPS must be at most {}", MAX_FPS));
        }
        if self.initial_snake_length < 1 {
            return Err("Initial snake length must be at least 1".to_string());
        }
        if self.initial_snake_length as usize > self.grid_width() / 2 + 1 {
            return Err("Initial snake must fit between the left edge and the center".to_string());
        }
        if self.initial_snake_length as usize >= self.field_size().cell_count() {
            return Err("Initial snake must leave room for food".to_string());
        }
        if self.max_high_scores == 0 {
            return Err("High score table must hold at least one entry".to_string());
        }
        if self.high_score_file.trim().is_empty() {
            return Err("High score file must be set".to_string());
        }
        Ok(())
    }
}

impl GameConfig {
    pub fn grid_width(&self) -> usize {
        (self.window_width / self.grid_size.max(1)) as usize
    }

    pub fn grid_height(&self) -> usize {
        (self.window_height / self.grid_size.max(1)) as usize
    }

    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.grid_width(), self.grid_height())
    }

    pub fn center(&self) -> Position {
        self.field_size().center()
    }

    pub fn wall_collision_mode(&self) -> WallCollisionMode {
        if self.wall_collision {
            WallCollisionMode::Death
        } else {
            WallCollisionMode::WrapAround
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis((1000 / self.fps.max(1) as u64).max(1))
    }

    pub fn toggle_wall_collision(&mut self) {
        self.wall_collision = !self.wall_collision;
    }

    /// Steps to the next speed option, wrapping. An unknown speed jumps to the default.
    pub fn cycle_fps(&mut self) -> u32 {
        let next_index = SPEED_OPTIONS
            .iter()
            .position(|&speed| speed == self.fps)
            .map(|index| (index + 1) % SPEED_OPTIONS.len())
            .unwrap_or(DEFAULT_SPEED_INDEX);

        self.fps = SPEED_OPTIONS[next_index];
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigSerializer, MemoryContentProvider};

    fn get_temp_file_path() -> String {
        let random_number: u32 = rand::random();
        let mut path = std::env::temp_dir();
        path.push(format!("temp_snake_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid_and_gives_32_by_24_grid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_width(), 32);
        assert_eq!(config.grid_height(), 24);
        assert_eq!(config.center(), Position::new(16, 12));
        assert_eq!(config.wall_collision_mode(), WallCollisionMode::WrapAround);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: GameConfig = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = GameConfig {
            wall_collision: true,
            player_name: "Tester".to_string(),
            ..GameConfig::default()
        };
        let manager = get_config_manager(&get_temp_file_path());

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));
        assert_eq!(manager.get_config(), Ok(config));
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config(), Ok(GameConfig::default()));
    }

    #[test]
    fn test_partial_file_fills_missing_fields_with_defaults() {
        let provider = MemoryContentProvider::with_content("fps: 20\nwall_collision: true\n");
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = manager.get_config().unwrap();
        assert_eq!(config.fps, 20);
        assert!(config.wall_collision);
        assert_eq!(config.points_per_food, 10);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let provider = MemoryContentProvider::with_content("grid_size: 0\n");
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_load_or_init_writes_defaults_when_missing() {
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(MemoryContentProvider::new(), YamlConfigSerializer::new());
        assert_eq!(manager.load_or_init(), GameConfig::default());
    }

    #[test]
    fn test_load_or_init_replaces_malformed_file() {
        let path = get_temp_file_path();
        FileContentConfigProvider::new(path.as_str())
            .set_config_content("fps: [not, a, number")
            .unwrap();

        let manager = get_config_manager(&path);
        assert_eq!(manager.load_or_init(), GameConfig::default());

        let reloaded = get_config_manager(&path);
        assert_eq!(reloaded.get_config(), Ok(GameConfig::default()));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            GameConfig { window_width: 0, ..GameConfig::default() },
            GameConfig { grid_size: 0, ..GameConfig::default() },
            GameConfig { grid_size: 1000, ..GameConfig::default() },
            GameConfig { fps: 0, ..GameConfig::default() },
            GameConfig { fps: MAX_FPS + 1, ..GameConfig::default() },
            GameConfig { initial_snake_length: 0, ..GameConfig::default() },
            GameConfig { initial_snake_length: 18, ..GameConfig::default() },
            GameConfig { max_high_scores: 0, ..GameConfig::default() },
            GameConfig { high_score_file: " ".to_string(), ..GameConfig::default() },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{:?} should be invalid", config);
        }
    }

    #[test]
    fn test_tick_interval_is_never_zero() {
        let fastest = GameConfig { fps: MAX_FPS, ..GameConfig::default() };
        assert!(fastest.validate().is_ok());
        assert_eq!(fastest.tick_interval(), Duration::from_millis(1));

        let unchecked = GameConfig { fps: 2000, ..GameConfig::default() };
        assert_eq!(unchecked.tick_interval(), Duration::from_millis(1));
        assert_eq!(GameConfig::default().tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_defaults_match_high_score_table() {
        let config = GameConfig::default();
        assert_eq!(config.player_name, DEFAULT_PLAYER_NAME);
        assert_eq!(config.max_high_scores, DEFAULT_MAX_SCORES);
    }

    #[test]
    fn test_cycle_fps_wraps_and_recovers_from_unknown_value() {
        let mut config = GameConfig::default();
        assert_eq!(config.cycle_fps(), 15);

        config.fps = 30;
        assert_eq!(config.cycle_fps(), 5);

        config.fps = 12;
        assert_eq!(config.cycle_fps(), 10);
    }

    #[test]
    fn test_toggle_wall_collision() {
        let mut config = GameConfig::default();
        config.toggle_wall_collision();
        assert_eq!(config.wall_collision_mode(), WallCollisionMode::Death);
        config.toggle_wall_collision();
        assert_eq!(config.wall_collision_mode(), WallCollisionMode::WrapAround);
    }
}
