mod food;
mod input;
mod session;
mod settings;
mod entity;
mod types;

pub use food::{Food, FoodPlacementError, MAX_RANDOM_ATTEMPTS};
pub use input::InputAction;
pub use session::{SessionControl, SessionState, SnakeSession, TickOutcome};
pub use settings::SnakeSessionSettings;
pub use entity::Snake;
pub use types::{DeathReason, Direction, FieldSize, OutOfBounds, Position, WallCollisionMode};
