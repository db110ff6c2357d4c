//! Input tapes: record a session's per-tick input and play it back.
//!
//! A tape holds the seed, the tuning and one [`TickInput`] per fixed step.
//! Because the simulation is deterministic, replaying a tape from a fresh
//! state reproduces the recorded session exactly.

use serde::{Deserialize, Serialize};

use super::input::TickInput;
use super::state::GameState;
use super::tick::tick;
use crate::consts::FRAME_DT;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTape {
    pub seed: u64,
    pub tuning: Tuning,
    /// One entry per fixed step, in order
    pub frames: Vec<TickInput>,
}

impl InputTape {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            frames: Vec::new(),
        }
    }

    /// A blank tape matching a freshly created state
    pub fn for_state(state: &GameState) -> Self {
        Self::new(state.seed, state.tuning.clone())
    }

    pub fn record(&mut self, input: &TickInput) {
        self.frames.push(input.clone());
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Run every recorded step on a fresh state
    pub fn replay(&self) -> GameState {
        let mut state = GameState::with_tuning(self.seed, self.tuning.clone());
        for input in &self.frames {
            tick(&mut state, input, FRAME_DT);
        }
        state
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;

    #[test]
    fn test_replay_reproduces_session() {
        let mut state = GameState::new(2024);
        let mut tape = InputTape::for_state(&state);

        for i in 0..900u32 {
            let input = match i {
                0 => TickInput::start("Rec"),
                _ if state.phase == GamePhase::Ended => TickInput::restart(),
                _ if i % 21 == 0 => TickInput::flap(),
                _ => TickInput::default(),
            };
            tape.record(&input);
            tick(&mut state, &input, FRAME_DT);
        }

        let replayed = tape.replay();
        assert_eq!(replayed.phase, state.phase);
        assert_eq!(replayed.score, state.score);
        assert_eq!(replayed.run_index, state.run_index);
        assert_eq!(replayed.time_ticks, state.time_ticks);
        assert_eq!(replayed.player, state.player);
        assert_eq!(replayed.obstacles, state.obstacles);
    }

    #[test]
    fn test_tape_survives_json() {
        let mut tape = InputTape::new(5, Tuning::default());
        tape.record(&TickInput::start("J"));
        tape.record(&TickInput::default());
        tape.record(&TickInput::flap());

        let json = tape.to_json().unwrap();
        let back = InputTape::from_json(&json).unwrap();
        assert_eq!(back, tape);
        assert_eq!(back.replay().time_ticks, 3);
    }
}
