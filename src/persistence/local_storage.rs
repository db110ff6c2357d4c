//! Browser LocalStorage leaderboard (wasm32)

use super::ScoreStore;
use crate::error::StoreError;
use crate::highscores::{Leaderboard, ScoreEntry};

#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
    board: Leaderboard,
}

impl LocalStorageStore {
    /// Default LocalStorage key
    pub const STORAGE_KEY: &'static str = "starfall_highscores";

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not available".to_string()))
    }

    /// Load high scores, starting fresh if storage is missing or corrupt
    pub fn load(capacity: usize) -> Self {
        Self::load_key(Self::STORAGE_KEY, capacity)
    }

    pub fn load_key(key: &str, capacity: usize) -> Self {
        let board = Self::storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
            .and_then(|json| match serde_json::from_str::<Vec<ScoreEntry>>(&json) {
                Ok(entries) => Some(entries),
                Err(e) => {
                    log::warn!("Ignoring stored high scores: {}", e);
                    None
                }
            })
            .map(|entries| {
                log::info!("Loaded {} high scores", entries.len());
                Leaderboard::from_entries(entries, capacity)
            })
            .unwrap_or_else(|| {
                log::info!("No high scores found, starting fresh");
                Leaderboard::new(capacity)
            });

        Self {
            key: key.to_string(),
            board,
        }
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(self.board.entries())?;
        Self::storage()?
            .set_item(&self.key, &json)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        log::info!("High scores saved ({} entries)", self.board.len());
        Ok(())
    }
}

impl ScoreStore for LocalStorageStore {
    fn append(&mut self, entry: ScoreEntry) -> Result<Option<usize>, StoreError> {
        let rank = self.board.append(entry);
        self.save()?;
        Ok(rank)
    }

    fn list(&self) -> Vec<ScoreEntry> {
        self.board.entries().to_vec()
    }
}
