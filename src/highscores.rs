//! Best-run leaderboard, kept in LocalStorage on web

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Obstacles passed
    pub score: u32,
    /// How long the run lasted
    pub ticks: u64,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "astro_hop_highscores";

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score (if it qualifies). Returns the 1-indexed rank achieved.
    pub fn add_score(&mut self, score: u32, ticks: u64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            ticks,
            timestamp,
        };

        // Sorted descending; ties go below existing entries
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Parse a stored board, keeping only the best `MAX_HIGH_SCORES` in rank order
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut board: Self = serde_json::from_str(json)?;
        board.entries.retain(|e| e.score > 0);
        board.entries.sort_by(|a, b| b.score.cmp(&a.score));
        board.entries.truncate(MAX_HIGH_SCORES);
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(json) = crate::storage::read(STORAGE_KEY) else {
            return Self::new();
        };
        match Self::from_json(&json) {
            Ok(board) => {
                log::info!("Loaded {} high scores", board.entries.len());
                board
            }
            Err(e) => {
                log::warn!("Discarding corrupt high scores: {}", e);
                Self::new()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        match self.to_json() {
            Ok(json) if crate::storage::write(STORAGE_KEY, &json) => {
                log::debug!("High scores saved ({} entries)", self.entries.len());
            }
            Ok(_) => log::warn!("LocalStorage unavailable, high scores not saved"),
            Err(e) => log::warn!("Could not encode high scores: {}", e),
        }
    }
}
