mod entry;
mod ledger;

pub use entry::ScoreEntry;
pub use ledger::{HighScoreLedger, ScoreRecorder, DEFAULT_MAX_SCORES, DEFAULT_PLAYER_NAME};
