//! Error types for the pieces of Starfall that touch the outside world.
//!
//! The simulation itself never fails: corrupt numbers and impossible
//! geometry are repaired in place. Only storage and configuration loading
//! surface errors, and callers treat both as non-fatal.

use std::io;

/// Failure to persist or load the leaderboard.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure to load a tuning file.
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
