//! Pipe generation, scrolling and cleanup
//!
//! Gap heights and positions come from the session RNG, so a seed fully
//! determines the pipe sequence for a given input history.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle};
use crate::tuning::{SpawnRule, Tuning};

/// Feasible gap geometry for the current canvas.
///
/// Always describes at least one passable gap: configured bounds that don't
/// fit the canvas are clamped rather than trusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapBounds {
    pub gap_min: f32,
    pub gap_max: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub canvas_height: f32,
}

impl GapBounds {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        let h = tuning.canvas_height;
        // Smallest opening the star can physically fit through
        let passable = tuning.player_radius * 2.0 + 1.0;

        let (mut margin_top, mut margin_bottom) = (tuning.margin_top, tuning.margin_bottom);
        let mut feasible = h - margin_top - margin_bottom;
        if feasible < passable {
            log::warn!(
                "Gap margins {}+{} leave no room on a {} px canvas; ignoring margins",
                margin_top,
                margin_bottom,
                h
            );
            margin_top = 0.0;
            margin_bottom = 0.0;
            feasible = h;
        }

        let gap_max = tuning.gap_max.max(passable).min(feasible);
        let gap_min = tuning.gap_min.max(passable).min(gap_max);

        Self {
            gap_min,
            gap_max,
            margin_top,
            margin_bottom,
            canvas_height: h,
        }
    }

    /// Highest allowed `top` for a gap of this height
    #[inline]
    pub fn top_max(&self, gap: f32) -> f32 {
        (self.canvas_height - gap - self.margin_bottom).max(self.margin_top)
    }

    /// Draw `(top, gap)` uniformly within the bounds
    pub fn sample(&self, rng: &mut Pcg32) -> (f32, f32) {
        let gap = if self.gap_max > self.gap_min {
            rng.random_range(self.gap_min..=self.gap_max)
        } else {
            self.gap_min
        };

        let top_max = self.top_max(gap);
        let top = if top_max > self.margin_top {
            rng.random_range(self.margin_top..=top_max)
        } else {
            self.margin_top
        };

        (top, gap)
    }
}

/// Frames until the next timed spawn
pub fn next_spawn_threshold(rng: &mut Pcg32, rule: &SpawnRule) -> f32 {
    match *rule {
        SpawnRule::Timer {
            base_frames,
            jitter_frames,
        } => {
            let jitter = if jitter_frames > 0 {
                rng.random_range(0..jitter_frames)
            } else {
                0
            };
            base_frames.saturating_add(jitter) as f32
        }
        SpawnRule::Spacing { .. } => 0.0,
    }
}

/// Advance the spawn rule by `scale` frames and append a pipe at the right
/// edge if it fires. Returns the spawned pipe's id.
pub fn maybe_spawn(state: &mut GameState, scale: f32) -> Option<u32> {
    let canvas_width = state.tuning.canvas_width;

    let due = match state.tuning.spawn {
        SpawnRule::Timer { .. } => {
            state.spawn_timer += scale;
            state.spawn_timer > state.next_spawn_at
        }
        SpawnRule::Spacing { distance } => state
            .obstacles
            .last()
            .is_none_or(|newest| newest.x < canvas_width - distance),
    };
    if !due {
        return None;
    }

    let bounds = GapBounds::from_tuning(&state.tuning);
    let (top, gap) = bounds.sample(&mut state.rng);
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle::new(
        id,
        canvas_width,
        top,
        gap,
        state.tuning.obstacle_width,
    ));

    if matches!(state.tuning.spawn, SpawnRule::Timer { .. }) {
        state.spawn_timer = 0.0;
        state.next_spawn_at = next_spawn_threshold(&mut state.rng, &state.tuning.spawn);
    }

    log::debug!("Spawned pipe {} (top {:.1}, gap {:.1})", id, top, gap);
    Some(id)
}

/// Move every pipe left by `dx`, then drop the ones fully past the left edge.
/// Remaining pipes keep their order. Returns how many were removed.
pub fn scroll_and_sweep(obstacles: &mut Vec<Obstacle>, dx: f32, despawn_margin: f32) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= dx;
    }

    let before = obstacles.len();
    obstacles.retain(|o| o.trailing_edge() > -despawn_margin);
    before - obstacles.len()
}
