//! High score leaderboard
//!
//! A bounded list of `{name, score}` entries kept in descending score order.
//! Equal scores keep arrival order (the earlier run ranks higher).

use serde::{Deserialize, Serialize};

use crate::consts::MAX_HIGH_SCORES;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    capacity: usize,
    entries: Vec<ScoreEntry>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(MAX_HIGH_SCORES)
    }
}

impl Leaderboard {
    /// Create an empty leaderboard holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Vec::new(),
        }
    }

    /// Build from stored entries, restoring order and capacity
    pub fn from_entries(mut entries: Vec<ScoreEntry>, capacity: usize) -> Self {
        // Stable sort keeps the stored order for ties
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        let mut board = Self::new(capacity);
        entries.truncate(board.capacity);
        board.entries = entries;
        board
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert an entry, keep descending order and trim to capacity.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn append(&mut self, entry: ScoreEntry) -> Option<usize> {
        // Find insertion point (after any equal scores)
        let pos = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);

        // Trim to max size
        self.entries.truncate(self.capacity);

        (pos < self.capacity).then_some(pos + 1)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
