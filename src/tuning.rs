//! Game balance and rule policies
//!
//! Every gameplay constant lives here so a run can be reproduced from
//! `(seed, tuning, inputs)`. Defaults reproduce the browser game's feel.
//! Loaded values always pass through [`Tuning::sanitized`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Order of scoring and collision on the same tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Passes are awarded before collisions are checked: dying while
    /// crossing a pipe still counts the point.
    #[default]
    PassBeforeCollision,
    /// A fatal collision on this tick suppresses any pass on the same tick.
    CollisionFirst,
}

impl ScorePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorePolicy::PassBeforeCollision => "pass_before_collision",
            ScorePolicy::CollisionFirst => "collision_first",
        }
    }
}

/// When the generator emits a new pipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SpawnRule {
    /// Every `base_frames + [0, jitter_frames)` frames of running time
    Timer { base_frames: u32, jitter_frames: u32 },
    /// Once the newest pipe has scrolled `distance` px in from the right edge
    Spacing { distance: f32 },
}

impl Default for SpawnRule {
    fn default() -> Self {
        SpawnRule::Timer {
            base_frames: SPAWN_BASE_FRAMES,
            jitter_frames: SPAWN_JITTER_FRAMES,
        }
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Star ===
    /// Horizontal position as a fraction of canvas width
    pub player_x_ratio: f32,
    pub player_radius: f32,
    /// px/frame²
    pub gravity: f32,
    /// Velocity cap (applies both ways), px/frame
    pub max_velocity: f32,
    /// Velocity set by a flap (negative = up), px/frame
    pub flap_velocity: f32,
    pub hover_amplitude: f32,
    /// Bob offset change per frame
    pub hover_speed: f32,
    /// Withhold gravity after Start until the first flap
    pub wait_for_first_flap: bool,

    // === Pipes ===
    /// px/frame
    pub scroll_speed: f32,
    pub obstacle_width: f32,
    pub gap_min: f32,
    pub gap_max: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub spawn: SpawnRule,
    /// Extra distance past the left edge before a pipe is dropped
    pub despawn_margin: f32,

    // === Rules ===
    pub ceiling_fatal: bool,
    pub score_policy: ScorePolicy,

    // === Effects ===
    pub shatter_count: u32,
    pub shatter_speed: f32,
    /// Life lost per frame (life starts at 1.0)
    pub particle_decay: f32,

    // === Leaderboard ===
    pub leaderboard_capacity: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_x_ratio: PLAYER_X_RATIO,
            player_radius: PLAYER_RADIUS,
            gravity: GRAVITY,
            max_velocity: MAX_VELOCITY,
            flap_velocity: FLAP_VELOCITY,
            hover_amplitude: HOVER_AMPLITUDE,
            hover_speed: HOVER_SPEED,
            wait_for_first_flap: false,

            scroll_speed: PIPE_SPEED,
            obstacle_width: PIPE_WIDTH,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            margin_top: GAP_MARGIN_TOP,
            margin_bottom: GAP_MARGIN_BOTTOM,
            spawn: SpawnRule::default(),
            despawn_margin: 0.0,

            ceiling_fatal: false,
            score_policy: ScorePolicy::default(),

            shatter_count: SHATTER_COUNT,
            shatter_speed: SHATTER_SPEED,
            particle_decay: PARTICLE_DECAY,

            leaderboard_capacity: MAX_HIGH_SCORES,
        }
    }
}

/// Keep `value` if it is finite and passes `ok`, otherwise use `fallback`
fn checked(value: f32, fallback: f32, ok: impl Fn(f32) -> bool) -> f32 {
    if value.is_finite() && ok(value) {
        value
    } else {
        fallback
    }
}

impl Tuning {
    /// Star x position (constant for a run)
    pub fn player_x(&self) -> f32 {
        self.canvas_width * self.player_x_ratio
    }

    /// Vertical center line the star bobs around
    pub fn center_y(&self) -> f32 {
        self.canvas_height * 0.5
    }

    /// Repair out-of-range values so the simulation can trust every field
    pub fn sanitized(self) -> Self {
        let d = Tuning::default();

        let canvas_width = checked(self.canvas_width, d.canvas_width, |v| v > 0.0);
        let canvas_height = checked(self.canvas_height, d.canvas_height, |v| v > 0.0);
        let player_radius = checked(self.player_radius, d.player_radius, |v| v > 0.0)
            .min(canvas_height * 0.25);
        let max_velocity = checked(self.max_velocity, d.max_velocity, |v| v > 0.0);
        let flap_velocity =
            checked(self.flap_velocity, d.flap_velocity, |_| true).clamp(-max_velocity, max_velocity);

        let mut gap_min = checked(self.gap_min, d.gap_min, |v| v > 0.0);
        let mut gap_max = checked(self.gap_max, d.gap_max, |v| v > 0.0);
        if gap_min > gap_max {
            std::mem::swap(&mut gap_min, &mut gap_max);
        }

        let obstacle_width = checked(self.obstacle_width, d.obstacle_width, |v| v > 0.0);
        let spawn = match self.spawn {
            SpawnRule::Timer {
                base_frames,
                jitter_frames,
            } => SpawnRule::Timer {
                base_frames: base_frames.clamp(1, MAX_SPAWN_FRAMES),
                jitter_frames: jitter_frames.min(MAX_SPAWN_FRAMES),
            },
            SpawnRule::Spacing { distance } => SpawnRule::Spacing {
                distance: checked(distance, obstacle_width * 2.0, |v| v > 0.0).max(obstacle_width),
            },
        };

        let sanitized = Self {
            canvas_width,
            canvas_height,
            player_x_ratio: checked(self.player_x_ratio, d.player_x_ratio, |v| {
                (0.0..=1.0).contains(&v)
            }),
            player_radius,
            gravity: checked(self.gravity, d.gravity, |v| v >= 0.0),
            max_velocity,
            flap_velocity,
            hover_amplitude: checked(self.hover_amplitude, d.hover_amplitude, |v| v >= 0.0),
            hover_speed: checked(self.hover_speed, d.hover_speed, |v| v >= 0.0),
            wait_for_first_flap: self.wait_for_first_flap,
            scroll_speed: checked(self.scroll_speed, d.scroll_speed, |v| v > 0.0),
            obstacle_width,
            gap_min,
            gap_max,
            margin_top: checked(self.margin_top, d.margin_top, |v| v >= 0.0),
            margin_bottom: checked(self.margin_bottom, d.margin_bottom, |v| v >= 0.0),
            spawn,
            despawn_margin: checked(self.despawn_margin, d.despawn_margin, |v| v >= 0.0),
            ceiling_fatal: self.ceiling_fatal,
            score_policy: self.score_policy,
            shatter_count: self.shatter_count.min(MAX_SHATTER_COUNT),
            shatter_speed: checked(self.shatter_speed, d.shatter_speed, |v| v >= 0.0),
            particle_decay: checked(self.particle_decay, d.particle_decay, |v| v > 0.0),
            leaderboard_capacity: self.leaderboard_capacity.max(1),
        };

        if sanitized != self {
            log::warn!("Tuning contained out-of-range values; repaired");
        }
        sanitized
    }

    /// Parse tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Read a JSON tuning file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "starfall_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from the file named by `STARFALL_TUNING`, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var("STARFALL_TUNING") else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::load_from_path(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Failed to load tuning from {}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }
}
