//! Demo-mode pilot: a simple flap heuristic for attract screens and the
//! headless native runner.

use super::state::{GamePhase, GameState};

/// How far below the gap center the pilot aims, as a fraction of the gap.
/// A flap rises ~45 px, so aiming low keeps the arc inside the opening.
const AIM_BELOW_CENTER: f32 = 0.15;

/// Height the pilot is trying to hold this frame
pub fn target_y(state: &GameState) -> f32 {
    state
        .next_obstacle()
        .map(|o| o.gap_center() + o.gap() * AIM_BELOW_CENTER)
        .unwrap_or_else(|| state.tuning.center_y())
}

/// Whether the pilot would flap now
pub fn should_flap(state: &GameState) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }
    let player = &state.player;
    if !player.falling {
        return true;
    }
    player.velocity >= 0.0 && player.pos.y > target_y(state)
}
