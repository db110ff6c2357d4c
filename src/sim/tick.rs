//! Simulation tick and session state machine
//!
//! `tick` is the only function that mutates a [`GameState`]. Order within a
//! running tick: actions → gravity → spawn → scroll/sweep → score/collide →
//! particles.
//!
//! Phase transitions:
//! - Idle → Running on `Start` (or `Flap`)
//! - Running → Ended on a fatal collision
//! - Ended → Idle on `Restart`
//!
//! Every other action/phase combination is ignored.

use glam::Vec2;
use rand::Rng;

use super::collision::{self, Outcome};
use super::input::{Action, TickInput};
use super::physics;
use super::spawner;
use super::state::{DEFAULT_PLAYER_NAME, GameEvent, GamePhase, GameState, Particle};
use crate::consts::PARTICLE_SIZE;
use crate::tuning::ScorePolicy;

/// Advance the game state by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    let scale = physics::frame_scale(dt);

    for action in &input.actions {
        apply_action(state, action);
    }

    match state.phase {
        GamePhase::Idle => bob(state, scale),
        GamePhase::Running => run_frame(state, scale),
        // Run is over: only cosmetics keep moving
        GamePhase::Ended => {}
    }

    update_particles(state, scale);

    if state.phase != GamePhase::Ended {
        state.time_ticks += 1;
    }
}

fn apply_action(state: &mut GameState, action: &Action) {
    match (state.phase, action) {
        (GamePhase::Idle, Action::Start { name }) => start(state, name.as_deref()),
        (GamePhase::Idle, Action::Flap) => start(state, None),
        (GamePhase::Running, Action::Flap) => {
            physics::flap(&mut state.player);
            state.events.push(GameEvent::Flapped);
        }
        (GamePhase::Ended, Action::Restart) => restart(state),
        (phase, action) => {
            log::trace!("Ignoring {:?} while {}", action, phase.as_str());
        }
    }
}

fn start(state: &mut GameState, name: Option<&str>) {
    if let Some(name) = name {
        let name = name.trim();
        state.player_name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
    }

    state.phase = GamePhase::Running;
    state.player.falling = !state.tuning.wait_for_first_flap;

    log::info!(
        "Run {} started by {} (seed {})",
        state.run_index,
        state.player_name,
        state.seed
    );
    state.events.push(GameEvent::Started {
        name: state.player_name.clone(),
    });
}

fn restart(state: &mut GameState) {
    state.reset();
    log::info!("Session reset for run {}", state.run_index);
    state.events.push(GameEvent::Restarted);
}

fn bob(state: &mut GameState, scale: f32) {
    let center_y = state.tuning.center_y();
    physics::idle_bob(
        &mut state.player,
        center_y,
        state.tuning.hover_amplitude,
        state.tuning.hover_speed,
        scale,
    );
}

fn run_frame(state: &mut GameState, scale: f32) {
    // Started but waiting for the first flap: the world holds still
    if !state.player.falling {
        bob(state, scale);
        return;
    }

    physics::apply_gravity(&mut state.player, scale, state.tuning.center_y());

    spawner::maybe_spawn(state, scale);
    spawner::scroll_and_sweep(
        &mut state.obstacles,
        state.tuning.scroll_speed * scale,
        state.tuning.despawn_margin,
    );

    let outcome = match state.tuning.score_policy {
        ScorePolicy::PassBeforeCollision => {
            award_passes(state);
            check(state)
        }
        ScorePolicy::CollisionFirst => {
            let outcome = check(state);
            if !outcome.is_fatal() {
                award_passes(state);
            }
            outcome
        }
    };

    if outcome.is_fatal() {
        end_run(state, outcome);
    }
}

fn check(state: &GameState) -> Outcome {
    collision::check_collisions(
        &state.player,
        &state.obstacles,
        state.tuning.canvas_height,
        state.tuning.ceiling_fatal,
    )
}

fn award_passes(state: &mut GameState) {
    let gained = collision::award_passes(&state.player, &mut state.obstacles);
    if gained > 0 {
        state.score = state.score.saturating_add(gained);
        state.events.push(GameEvent::Scored { score: state.score });
    }
}

fn end_run(state: &mut GameState, outcome: Outcome) {
    state.phase = GamePhase::Ended;
    shatter(state);
    state.player.hidden = true;
    state.player.velocity = 0.0;

    log::info!(
        "Run {} over: {} scored {} ({:?})",
        state.run_index,
        state.player_name,
        state.score,
        outcome
    );
    state.events.push(GameEvent::GameOver {
        name: state.player_name.clone(),
        score: state.score,
        outcome,
    });
}

/// Burst the star into particles at its last position
fn shatter(state: &mut GameState) {
    let origin = state.player.pos;
    let speed = state.tuning.shatter_speed;
    for _ in 0..state.tuning.shatter_count {
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * speed,
            (state.rng.random::<f32>() - 0.5) * speed,
        );
        state.particles.push(Particle {
            pos: origin,
            vel,
            life: 1.0,
            size: PARTICLE_SIZE,
        });
    }
}

fn update_particles(state: &mut GameState, scale: f32) {
    let decay = state.tuning.particle_decay;
    for particle in state.particles.iter_mut() {
        particle.update(scale, decay);
    }
    state.particles.retain(|p| p.is_alive());
}
