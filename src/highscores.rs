//! High score leaderboard
//!
//! Top 5 name/score pairs, sorted descending. Storage is a collaborator: the
//! `ScoreStore` trait hides whatever key-value backend the host provides, with
//! JSON as the wire encoding.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Name the player entered at game over
    pub name: String,
    /// Final score of the run
    pub score: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
        };

        // Find insertion point (sorted descending by score)
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

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from a store, falling back to an empty board on any failure.
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.load() {
            Some(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("High score data unreadable ({err}), starting fresh");
                    Self::new()
                }
            },
            None => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save to a store. Serialization failure is logged and skipped; the
    /// leaderboard is not worth crashing over.
    pub fn save(&self, store: &mut dyn ScoreStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.save(&json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
            Err(err) => log::warn!("Failed to serialize high scores: {err}"),
        }
    }
}

/// Key-value persistence collaborator for the leaderboard.
pub trait ScoreStore {
    /// Previously saved JSON blob, if any.
    fn load(&self) -> Option<String>;
    /// Persist the JSON blob.
    fn save(&mut self, json: &str);
}

/// In-memory store for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    blob: Option<String>,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Option<String> {
        self.blob.clone()
    }

    fn save(&mut self, json: &str) {
        self.blob = Some(json.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board() -> HighScores {
        let mut scores = HighScores::new();
        for (name, score) in [("a", 50), ("b", 40), ("c", 30), ("d", 20), ("e", 10)] {
            scores.add_score(name, score);
        }
        scores
    }

    #[test]
    fn empty_board_takes_anything() {
        let scores = HighScores::new();
        assert!(scores.qualifies(0));
        assert!(scores.top_score().is_none());
    }

    #[test]
    fn insert_keeps_descending_order() {
        let mut scores = HighScores::new();
        scores.add_score("low", 5);
        scores.add_score("high", 100);
        scores.add_score("mid", 50);
        let values: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![100, 50, 5]);
    }

    #[test]
    fn sixth_entry_displaces_the_lowest() {
        let mut scores = full_board();
        let rank = scores.add_score("f", 35);
        assert_eq!(rank, Some(3));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        let values: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![50, 40, 35, 30, 20]);
        assert!(!scores.entries.iter().any(|e| e.name == "e"));
    }

    #[test]
    fn score_below_full_board_is_rejected() {
        let mut scores = full_board();
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_score("loser", 10), None);
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn round_trips_through_store() {
        let mut store = MemoryScoreStore::default();
        let mut scores = HighScores::new();
        scores.add_score("abc", 77);
        scores.save(&mut store);

        let loaded = HighScores::load(&store);
        assert_eq!(loaded.entries, scores.entries);
    }

    #[test]
    fn corrupt_store_falls_back_to_empty() {
        let mut store = MemoryScoreStore::default();
        store.save("not json");
        let loaded = HighScores::load(&store);
        assert!(loaded.is_empty());
    }
}
