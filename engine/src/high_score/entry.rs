use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u32,
    pub player: String,
    /// ISO-8601 local time of the game over.
    pub date: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

impl ScoreEntry {
    pub fn new(score: u32, player: &str) -> Self {
        Self::recorded_at(score, player, Local::now())
    }

    pub fn recorded_at(score: u32, player: &str, at: DateTime<Local>) -> Self {
        Self {
            score,
            player: player.to_string(),
            date: at.to_rfc3339(),
            timestamp: at.timestamp(),
        }
    }
}
