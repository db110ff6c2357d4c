//! Score store backends
//!
//! The simulation never touches storage. At game over the host adapter
//! hands a [`ScoreEntry`] to a [`ScoreStore`]; a failing store is logged and
//! otherwise ignored.
//!
//! Backends:
//! - [`MemoryStore`]: in-process only (tests, fallbacks)
//! - `JsonFileStore`: JSON array file with temp-file + rename writes (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use crate::error::StoreError;
use crate::highscores::{Leaderboard, ScoreEntry};

/// Persist and list ranked score entries
pub trait ScoreStore {
    /// Insert an entry. Returns the rank it achieved (1-indexed), or None if
    /// it didn't make the board. On error the entry may still be visible in
    /// `list` for this process.
    fn append(&mut self, entry: ScoreEntry) -> Result<Option<usize>, StoreError>;

    /// Entries in rank order
    fn list(&self) -> Vec<ScoreEntry>;
}

/// Leaderboard that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Leaderboard,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            board: Leaderboard::new(capacity),
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.board
    }
}

impl ScoreStore for MemoryStore {
    fn append(&mut self, entry: ScoreEntry) -> Result<Option<usize>, StoreError> {
        Ok(self.board.append(entry))
    }

    fn list(&self) -> Vec<ScoreEntry> {
        self.board.entries().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_ranks() {
        let mut store = MemoryStore::new(3);
        assert_eq!(store.append(ScoreEntry::new("a", 3)).unwrap(), Some(1));
        assert_eq!(store.append(ScoreEntry::new("b", 8)).unwrap(), Some(1));
        assert_eq!(store.list()[1], ScoreEntry::new("a", 3));
        assert_eq!(store.leaderboard().capacity(), 3);
    }
}
