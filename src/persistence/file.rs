//! JSON file leaderboard (native)
//!
//! The file is a plain array of `{"name": .., "score": ..}` records.
//! Writes go to a sibling temp file first and are renamed into place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ScoreStore;
use crate::error::StoreError;
use crate::highscores::{Leaderboard, ScoreEntry};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    board: Leaderboard,
}

impl JsonFileStore {
    /// Open a store, failing on unreadable or corrupt files. A missing file
    /// is an empty leaderboard.
    pub fn try_open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, StoreError> {
        let path = path.into();
        let board = match fs::read_to_string(&path) {
            Ok(json) => {
                let entries: Vec<ScoreEntry> = serde_json::from_str(&json)?;
                log::info!("Loaded {} high scores from {}", entries.len(), path.display());
                Leaderboard::from_entries(entries, capacity)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high scores at {}, starting fresh", path.display());
                Leaderboard::new(capacity)
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, board })
    }

    /// Open a store, starting empty if the file can't be read
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        match Self::try_open(path.clone(), capacity) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Ignoring high scores at {}: {}", path.display(), e);
                Self {
                    path,
                    board: Leaderboard::new(capacity),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.board
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self.board.entries())?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("High scores saved ({} entries)", self.board.len());
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn append(&mut self, entry: ScoreEntry) -> Result<Option<usize>, StoreError> {
        let rank = self.board.append(entry);
        self.save()?;
        Ok(rank)
    }

    fn list(&self) -> Vec<ScoreEntry> {
        self.board.entries().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::try_open(dir.path().join("scores.json"), 5).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_append_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = JsonFileStore::try_open(&path, 5).unwrap();
        store.append(ScoreEntry::new("Ada", 12)).unwrap();
        store.append(ScoreEntry::new("Bo", 30)).unwrap();

        let reopened = JsonFileStore::try_open(&path, 5).unwrap();
        assert_eq!(
            reopened.list(),
            vec![ScoreEntry::new("Bo", 30), ScoreEntry::new("Ada", 12)]
        );

        // Plain array of records on disk
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[0]["name"], "Bo");
        assert_eq!(raw[0]["score"], 30);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStore::try_open(&path, 5),
            Err(StoreError::Serialize(_))
        ));
        let store = JsonFileStore::open(&path, 5);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_entry_in_memory() {
        let dir = TempDir::new().unwrap();
        // Parent directory does not exist, so the write fails
        let path = dir.path().join("missing").join("scores.json");
        let mut store = JsonFileStore::open(&path, 5);

        let result = store.append(ScoreEntry::new("Cy", 4));
        assert!(matches!(result, Err(StoreError::Io(_))));
        assert_eq!(store.list(), vec![ScoreEntry::new("Cy", 4)]);
    }
}
