//! Game state and core simulation types
//!
//! Everything a run needs lives in one owned [`GameState`]; subsystems take it
//! (or the part they touch) by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Outcome;
use super::spawner;
use crate::tuning::Tuning;

/// Name recorded for runs started without one
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for start; star bobbing, no pipes
    Idle,
    /// Active gameplay
    Running,
    /// Run over; score frozen until restart
    Ended,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::Ended => "ended",
        }
    }
}

/// The falling star
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// x is fixed for a run, y moves
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity, px/frame (positive = down)
    pub velocity: f32,
    pub gravity: f32,
    pub max_velocity: f32,
    pub flap_velocity: f32,
    /// False while bobbing before the first fall
    pub falling: bool,
    /// Idle bob offset from the center line
    pub hover_offset: f32,
    /// Idle bob direction (+1 down, -1 up)
    pub hover_dir: f32,
    /// Shattered at game over
    pub hidden: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x(), tuning.center_y()),
            radius: tuning.player_radius,
            velocity: 0.0,
            gravity: tuning.gravity,
            max_velocity: tuning.max_velocity,
            flap_velocity: tuning.flap_velocity,
            falling: false,
            hover_offset: 0.0,
            hover_dir: 1.0,
            hidden: false,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A pipe pair: blockers above `top` and below `bottom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Leading (left) edge
    pub x: f32,
    /// Bottom of the top blocker
    pub top: f32,
    /// Top of the bottom blocker
    pub bottom: f32,
    pub width: f32,
    /// Set once the trailing edge has crossed the star
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, top: f32, gap: f32, width: f32) -> Self {
        Self {
            id,
            x,
            top,
            bottom: top + gap,
            width,
            passed: false,
        }
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_center(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// px/frame
    pub vel: Vec2,
    /// 1.0 at birth, removed at 0
    pub life: f32,
    pub size: f32,
}

impl Particle {
    pub fn update(&mut self, scale: f32, decay: f32) {
        self.pos += self.vel * scale;
        self.life -= decay * scale;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Things that happened during the last tick, for hosts and tests
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started { name: String },
    Flapped,
    Scored { score: u32 },
    GameOver { name: String, score: u32, outcome: Outcome },
    Restarted,
}

/// One play session (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Runs completed since the session was created (reseeds the RNG on restart)
    pub run_index: u32,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    /// Active pipes in spawn order (= screen order, left to right)
    pub obstacles: Vec<Obstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub player_name: String,
    /// Simulation tick counter (frozen while Ended)
    pub time_ticks: u64,
    /// Frames of running time since the last spawn
    pub spawn_timer: f32,
    /// Spawn when `spawn_timer` exceeds this
    pub next_spawn_at: f32,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

/// Per-run RNG: run `n` of a session is reproducible on its own
fn run_rng(seed: u64, run_index: u32) -> Pcg32 {
    Pcg32::seed_from_u64(seed.wrapping_add((run_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)))
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut rng = run_rng(seed, 0);
        let next_spawn_at = spawner::next_spawn_threshold(&mut rng, &tuning.spawn);

        Self {
            seed,
            run_index: 0,
            rng,
            player: Player::new(&tuning),
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            obstacles: Vec::new(),
            particles: Vec::new(),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            time_ticks: 0,
            spawn_timer: 0.0,
            next_spawn_at,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Back to Idle for the next run. Player name and tuning carry over.
    pub fn reset(&mut self) {
        self.run_index += 1;
        self.rng = run_rng(self.seed, self.run_index);
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.player = Player::new(&self.tuning);
        self.obstacles.clear();
        self.particles.clear();
        self.spawn_timer = 0.0;
        self.next_spawn_at = spawner::next_spawn_threshold(&mut self.rng, &self.tuning.spawn);
    }

    /// The first pipe whose trailing edge has not yet cleared the star
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        let left = self.player.left();
        self.obstacles.iter().find(|o| o.trailing_edge() > left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_and_centered() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos.y, state.tuning.center_y());
        assert!(!state.player.falling);
        assert_eq!(state.player_name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn test_entity_ids_increase() {
        let mut state = GameState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_obstacle_geometry() {
        let o = Obstacle::new(1, 100.0, 120.0, 200.0, 40.0);
        assert_eq!(o.bottom, 320.0);
        assert_eq!(o.gap(), 200.0);
        assert_eq!(o.trailing_edge(), 140.0);
        assert_eq!(o.gap_center(), 220.0);
        assert!(!o.passed);
    }

    #[test]
    fn test_particle_dies_after_fifty_frames() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -1.0),
            life: 1.0,
            size: 3.0,
        };
        for _ in 0..49 {
            p.update(1.0, 0.02);
        }
        assert!(p.is_alive());
        p.update(1.0, 0.02);
        p.update(1.0, 0.02);
        assert!(!p.is_alive());
        assert!(p.pos.x > 50.0);
    }

    #[test]
    fn test_same_seed_same_first_threshold() {
        let a = GameState::new(42);
        let b = GameState::new(42);
        assert_eq!(a.next_spawn_at, b.next_spawn_at);
    }

    #[test]
    fn test_next_obstacle_skips_cleared_pipes() {
        let mut state = GameState::new(1);
        let px = state.player.pos.x;
        state.obstacles.push(Obstacle::new(1, px - 200.0, 100.0, 200.0, 110.0));
        state.obstacles.push(Obstacle::new(2, px + 50.0, 150.0, 200.0, 110.0));
        assert_eq!(state.next_obstacle().map(|o| o.id), Some(2));
    }
}
