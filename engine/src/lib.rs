pub mod config;
pub mod game_config;
pub mod high_score;
pub mod logger;
pub mod session_rng;
pub mod snake;

pub use game_config::GameConfig;
pub use high_score::{HighScoreLedger, ScoreEntry, ScoreRecorder};
pub use session_rng::SessionRng;
