//! Star physics: gravity, flap impulse, idle bob
//!
//! Motion constants are per reference frame ([`FRAME_DT`]). A tick of `dt`
//! seconds covers `frame_scale(dt)` frames; at the fixed host rate that is
//! exactly 1.0, so one tick adds `gravity` to the velocity.

use super::state::Player;
use crate::consts::{FRAME_DT, MAX_TICK_DT};

/// Convert a tick duration to reference frames, clamped against huge gaps
pub fn frame_scale(dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(MAX_TICK_DT) / FRAME_DT
}

/// Integrate gravity then position. Velocity is capped at `max_velocity` both ways.
pub fn apply_gravity(player: &mut Player, scale: f32, center_y: f32) {
    player.velocity += player.gravity * scale;
    let cap = player.max_velocity.abs();
    if player.velocity.is_finite() {
        player.velocity = player.velocity.min(cap).max(-cap);
    }
    player.pos.y += player.velocity * scale;
    sanitize(player, center_y);
}

/// Replace the velocity with the upward impulse (not additive)
pub fn flap(player: &mut Player) {
    player.velocity = player.flap_velocity;
    player.falling = true;
}

/// Triangle-wave bob around `center_y`; y never leaves `center_y ± amplitude`
pub fn idle_bob(player: &mut Player, center_y: f32, amplitude: f32, speed: f32, scale: f32) {
    player.hover_offset += speed * player.hover_dir * scale;
    if player.hover_offset >= amplitude {
        player.hover_offset = amplitude;
        player.hover_dir = -1.0;
    } else if player.hover_offset <= -amplitude {
        player.hover_offset = -amplitude;
        player.hover_dir = 1.0;
    }
    player.pos.y = center_y + player.hover_offset;
    sanitize(player, center_y);
}

/// Reset non-finite motion values to safe defaults. Returns true if anything was repaired.
pub fn sanitize(player: &mut Player, center_y: f32) -> bool {
    let mut repaired = false;

    if !player.velocity.is_finite() {
        log::warn!("Non-finite star velocity {}; reset to 0", player.velocity);
        player.velocity = 0.0;
        repaired = true;
    }
    if !player.pos.y.is_finite() {
        log::warn!("Non-finite star position {}; recentred", player.pos.y);
        player.pos.y = center_y;
        repaired = true;
    }
    if !player.hover_offset.is_finite() {
        player.hover_offset = 0.0;
        player.hover_dir = 1.0;
        repaired = true;
    }

    repaired
}
