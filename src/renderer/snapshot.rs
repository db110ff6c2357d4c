//! Read-only snapshot of everything a renderer needs

use serde::Serialize;

use crate::sim::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Remaining life, usable as opacity
    pub alpha: f32,
}

/// Post-tick state for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub particles: Vec<ParticleView>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            phase: state.phase,
            score: state.score,
            canvas_width: state.tuning.canvas_width,
            canvas_height: state.tuning.canvas_height,
            player: PlayerView {
                x: player.pos.x,
                y: player.pos.y,
                radius: player.radius,
                hidden: player.hidden,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    top: o.top,
                    bottom: o.bottom,
                    width: o.width,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    x: p.pos.x,
                    y: p.pos.y,
                    size: p.size,
                    alpha: p.life.clamp(0.0, 1.0),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
