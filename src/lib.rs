//! Starfall - a falling-star arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `game`: Host adapter that schedules ticks and forwards results to the score store
//! - `renderer`: Read-only snapshots and GPU instance data for a presentation layer
//! - `platform`: Browser/native platform glue
//! - `persistence`: Score store backends
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{StoreError, TuningError};
pub use game::Game;
pub use highscores::{Leaderboard, ScoreEntry};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference frame duration. Motion tunables are expressed per frame of this length.
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest `dt` a single tick will integrate (two reference frames)
    pub const MAX_TICK_DT: f32 = 2.0 * FRAME_DT;
    /// Largest wall-clock gap the host clock will account for in one frame
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 420.0;
    pub const CANVAS_HEIGHT: f32 = 640.0;

    /// Star defaults
    pub const PLAYER_X_RATIO: f32 = 0.3;
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// px/frame²
    pub const GRAVITY: f32 = 0.22;
    /// px/frame
    pub const MAX_VELOCITY: f32 = 6.0;
    /// Upward impulse, px/frame
    pub const FLAP_VELOCITY: f32 = -4.4;
    pub const HOVER_AMPLITUDE: f32 = 5.0;
    pub const HOVER_SPEED: f32 = 0.03;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 110.0;
    pub const PIPE_SPEED: f32 = 2.0;
    pub const GAP_MIN: f32 = 190.0;
    pub const GAP_MAX: f32 = 230.0;
    pub const GAP_MARGIN_TOP: f32 = 80.0;
    pub const GAP_MARGIN_BOTTOM: f32 = 80.0;
    pub const SPAWN_BASE_FRAMES: u32 = 110;
    pub const SPAWN_JITTER_FRAMES: u32 = 40;
    /// Upper bound for configured spawn timer frames (ten minutes)
    pub const MAX_SPAWN_FRAMES: u32 = 36_000;

    /// Shatter burst
    pub const SHATTER_COUNT: u32 = 22;
    pub const MAX_SHATTER_COUNT: u32 = 256;
    pub const SHATTER_SPEED: f32 = 4.0;
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_SIZE: f32 = 3.0;

    /// Leaderboard capacity
    pub const MAX_HIGH_SCORES: usize = 5;
}
