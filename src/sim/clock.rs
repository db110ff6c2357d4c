//! Fixed-step frame clock
//!
//! Converts host timestamps (e.g. `requestAnimationFrame` milliseconds) into
//! a whole number of fixed simulation steps. Long gaps are clamped so a
//! backgrounded tab resumes with at most a few steps instead of a burst.

use crate::consts::{FRAME_DT, MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current host time; returns how many fixed steps to run.
    /// The first call only establishes a baseline.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last_ms) = self.last_ms.replace(now_ms) else {
            return 0;
        };

        let elapsed = ((now_ms - last_ms) / 1000.0) as f32;
        let dt = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= FRAME_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= FRAME_DT;
            steps += 1;
        }
        // Drop any backlog we refused to simulate
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(FRAME_DT);
        }
        steps
    }

    /// Forget the last timestamp (tab hidden, window blurred)
    pub fn suspend(&mut self) {
        self.last_ms = None;
        self.accumulator = 0.0;
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / FRAME_DT).clamp(0.0, 1.0)
    }
}
