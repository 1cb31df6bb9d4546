use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use crate::{log, log_error, log_warn};
use super::entry::ScoreEntry;

pub const DEFAULT_MAX_SCORES: usize = 10;
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Receives the final score of every finished session.
pub trait ScoreRecorder {
    /// Returns whether the score qualified for the table.
    fn record_score(&mut self, score: u32, player: &str) -> bool;

    fn best_score(&self) -> u32;
}

/// Scores sorted descending, at most `max_entries` long, rewritten to storage on every change.
pub struct HighScoreLedger<TContentProvider = FileContentConfigProvider, TSerializer = YamlConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Vec<ScoreEntry>>,
{
    entries: Vec<ScoreEntry>,
    max_entries: usize,
    content_provider: TContentProvider,
    serializer: TSerializer,
}

impl HighScoreLedger<FileContentConfigProvider, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: &str, max_entries: usize) -> Self {
        Self::load(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
            max_entries,
        )
    }
}

impl<TContentProvider, TSerializer> HighScoreLedger<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Vec<ScoreEntry>>,
{
    /// Never fails. Unreadable or malformed content loads as an empty table and
    /// is overwritten by the next successful save; missing content is created empty.
    pub fn load(content_provider: TContentProvider, serializer: TSerializer, max_entries: usize) -> Self {
        let mut ledger = Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
            content_provider,
            serializer,
        };

        match ledger.content_provider.get_config_content() {
            Ok(Some(content)) => match ledger.serializer.deserialize(&content) {
                Ok(entries) => {
                    ledger.entries = entries;
                    ledger.normalize();
                    log!("Loaded {} high scores", ledger.entries.len());
                }
                Err(e) => log_error!("Failed to load high scores: {}", e),
            },
            Ok(None) => {
                log!("High score file not found, starting with empty scores");
                if let Err(e) = ledger.save() {
                    log_warn!("Could not create high score file: {}", e);
                }
            }
            Err(e) => log_error!("Failed to load high scores: {}", e),
        }

        ledger
    }

    pub fn save(&self) -> Result<(), String> {
        let content = self.serializer.serialize(&self.entries)?;
        self.content_provider.set_config_content(&content)?;
        log!("Saved {} high scores", self.entries.len());
        Ok(())
    }

    pub fn is_high_score(&self, score: u32) -> bool {
        if self.entries.len() < self.max_entries {
            return true;
        }
        score > self.get_lowest_high_score()
    }

    /// Inserts the score and persists the table. A failed save keeps the new
    /// table in memory for the rest of the process.
    pub fn add_score(&mut self, score: u32, player: &str) -> bool {
        self.add_entry(ScoreEntry::new(score, player))
    }

    pub fn add_entry(&mut self, entry: ScoreEntry) -> bool {
        let is_new_high_score = self.is_high_score(entry.score);
        log!("Added score: {} by {}", entry.score, entry.player);

        self.entries.push(entry);
        self.normalize();

        if let Err(e) = self.save() {
            log_error!("Failed to save high scores: {}", e);
        }

        is_new_high_score
    }

    pub fn get_high_score(&self) -> u32 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    pub fn get_lowest_high_score(&self) -> u32 {
        self.entries.last().map(|e| e.score).unwrap_or(0)
    }

    pub fn get_top_scores(&self, limit: Option<usize>) -> &[ScoreEntry] {
        let limit = limit.unwrap_or(self.max_entries).min(self.entries.len());
        &self.entries[..limit]
    }

    pub fn get_player_best_score(&self, player: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.player == player)
            .map(|e| e.score)
            .max()
            .unwrap_or(0)
    }

    pub fn clear_scores(&mut self) {
        self.entries.clear();
        if let Err(e) = self.save() {
            log_error!("Failed to save high scores: {}", e);
        }
        log!("Cleared all high scores");
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn content_provider(&self) -> &TContentProvider {
        &self.content_provider
    }

    // sort_by is stable, so equal scores keep arrival order and the newest tie is cut first.
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.max_entries);
    }
}

impl<TContentProvider, TSerializer> ScoreRecorder for HighScoreLedger<TContentProvider, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Vec<ScoreEntry>>,
{
    fn record_score(&mut self, score: u32, player: &str) -> bool {
        self.add_score(score, player)
    }

    fn best_score(&self) -> u32 {
        self.get_high_score()
    }
}
