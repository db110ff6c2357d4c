//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only through `tick`'s `dt`, clamped
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod input;
pub mod physics;
pub mod replay;
pub mod spawner;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Outcome, award_passes, check_collisions};
pub use input::{Action, ActionQueue, TickInput};
pub use replay::InputTape;
pub use spawner::GapBounds;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Particle, Player};
pub use tick::tick;
