//! Host adapter
//!
//! Owns one [`GameState`], queues player actions between frames, turns host
//! timestamps into fixed steps and forwards finished runs to a [`ScoreStore`].
//! Browser and native front ends both drive the game through this type.

use crate::consts::FRAME_DT;
use crate::highscores::ScoreEntry;
use crate::persistence::ScoreStore;
use crate::renderer::RenderSnapshot;
use crate::sim::{Action, ActionQueue, FrameClock, GameEvent, GameState, InputTape, tick};
use crate::tuning::Tuning;

pub struct Game<S: ScoreStore> {
    state: GameState,
    actions: ActionQueue,
    clock: FrameClock,
    store: S,
    /// Per-step input log, when recording
    tape: Option<InputTape>,
    /// Rank achieved by the most recent finished run
    last_rank: Option<usize>,
}

impl<S: ScoreStore> Game<S> {
    pub fn new(state: GameState, store: S) -> Self {
        Self {
            state,
            actions: ActionQueue::new(),
            clock: FrameClock::new(),
            store,
            tape: None,
            last_rank: None,
        }
    }

    /// Fresh session that records every step for later replay
    pub fn with_recording(seed: u64, tuning: Tuning, store: S) -> Self {
        let state = GameState::with_tuning(seed, tuning);
        let tape = InputTape::for_state(&state);
        let mut game = Self::new(state, store);
        game.tape = Some(tape);
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn start(&mut self, name: impl Into<String>) {
        self.actions.push(Action::Start {
            name: Some(name.into()),
        });
    }

    pub fn flap(&mut self) {
        self.actions.push(Action::Flap);
    }

    pub fn restart(&mut self) {
        self.actions.push(Action::Restart);
    }

    /// Run exactly one fixed step with whatever actions are queued
    pub fn step(&mut self) {
        let input = self.actions.drain();
        if let Some(tape) = self.tape.as_mut() {
            tape.record(&input);
        }
        tick(&mut self.state, &input, FRAME_DT);
        self.dispatch_events();
    }

    /// Advance to host time `now_ms`; returns the number of steps run
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let steps = self.clock.advance(now_ms);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Stop counting wall time (tab hidden). The next frame re-baselines.
    pub fn suspend_clock(&mut self) {
        self.clock.suspend();
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    pub fn leaderboard(&self) -> Vec<ScoreEntry> {
        self.store.list()
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    /// Stop recording and hand back the tape
    pub fn take_recording(&mut self) -> Option<InputTape> {
        self.tape.take()
    }

    fn dispatch_events(&mut self) {
        for event in &self.state.events {
            match event {
                GameEvent::GameOver {
                    name,
                    score,
                    outcome,
                } => {
                    log::info!("Game over for {} with {} ({:?})", name, score, outcome);
                    match self.store.append(ScoreEntry::new(name.clone(), *score)) {
                        Ok(rank) => {
                            if let Some(rank) = rank {
                                log::info!("{} placed #{} on the leaderboard", name, rank);
                            }
                            self.last_rank = rank;
                        }
                        Err(e) => {
                            log::warn!("Failed to record score: {}", e);
                            self.last_rank = None;
                        }
                    }
                }
                GameEvent::Restarted => self.last_rank = None,
                GameEvent::Scored { score } => log::debug!("Score {}", score),
                GameEvent::Started { .. } | GameEvent::Flapped => {}
            }
        }
    }
}
