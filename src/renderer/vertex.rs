//! Instance data for 2D rendering
//!
//! One rectangle per pipe blocker and one circle per star/particle, laid
//! out for direct upload into GPU instance buffers.

use bytemuck::{Pod, Zeroable};

use super::snapshot::RenderSnapshot;

/// Axis-aligned rectangle: top-left origin, size, color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
}

/// Filled circle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub const fn new(x: f32, y: f32, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: [x, y],
            radius,
            _pad: 0.0,
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PIPE: [f32; 4] = [0.541, 0.780, 1.0, 0.7];
    pub const STAR: [f32; 4] = [1.0, 0.918, 0.698, 1.0];
    /// Alpha is replaced by particle life
    pub const SHATTER: [f32; 4] = [1.0, 0.922, 0.667, 1.0];
}

/// Everything to draw for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInstances {
    pub rects: Vec<RectInstance>,
    pub circles: Vec<CircleInstance>,
}

impl FrameInstances {
    pub fn build(snapshot: &RenderSnapshot) -> Self {
        let mut rects = Vec::with_capacity(snapshot.obstacles.len() * 2);
        for pipe in &snapshot.obstacles {
            rects.push(RectInstance {
                origin: [pipe.x, 0.0],
                size: [pipe.width, pipe.top],
                color: colors::PIPE,
            });
            rects.push(RectInstance {
                origin: [pipe.x, pipe.bottom],
                size: [pipe.width, snapshot.canvas_height - pipe.bottom],
                color: colors::PIPE,
            });
        }

        let mut circles = Vec::with_capacity(snapshot.particles.len() + 1);
        let player = &snapshot.player;
        if !player.hidden {
            circles.push(CircleInstance::new(
                player.x,
                player.y,
                player.radius,
                colors::STAR,
            ));
        }
        for p in &snapshot.particles {
            let [r, g, b, _] = colors::SHATTER;
            circles.push(CircleInstance::new(p.x, p.y, p.size, [r, g, b, p.alpha]));
        }

        Self { rects, circles }
    }

    pub fn rect_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.rects)
    }

    pub fn circle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.circles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::sim::state::{GameState, Obstacle};
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_pipe_becomes_two_rects() {
        let mut state = GameState::new(1);
        state
            .obstacles
            .push(Obstacle::new(1, 100.0, 120.0, 200.0, 110.0));
        let frame = FrameInstances::build(&RenderSnapshot::capture(&state));

        assert_eq!(frame.rects.len(), 2);
        assert_eq!(frame.rects[0].size, [110.0, 120.0]);
        assert_eq!(frame.rects[1].origin, [100.0, 320.0]);
        assert_eq!(frame.rects[1].size, [110.0, 320.0]);
        assert_eq!(frame.circles.len(), 1);
        assert_eq!(frame.rect_bytes().len(), 2 * 32);
        assert_eq!(frame.circle_bytes().len(), 32);
    }

    #[test]
    fn test_shattered_star_draws_particles_only() {
        let mut state = GameState::new(2);
        tick(&mut state, &TickInput::start("P"), FRAME_DT);
        state.player.pos.y = state.tuning.canvas_height;
        tick(&mut state, &TickInput::default(), FRAME_DT);

        let frame = FrameInstances::build(&RenderSnapshot::capture(&state));
        assert_eq!(frame.circles.len(), state.particles.len());
        assert!(frame.circles.iter().all(|c| c.radius == 3.0 && c.color[3] < 1.0));
    }
}
