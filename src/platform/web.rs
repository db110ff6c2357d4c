//! wasm-bindgen surface for the browser host
//!
//! The page owns the canvas, the DOM and `requestAnimationFrame`. Each frame
//! it calls [`WebGame::frame`] with the rAF timestamp and paints the returned
//! snapshot (or uploads the instance buffers).

use wasm_bindgen::prelude::*;

use super::seed_from_millis;
use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::renderer::FrameInstances;
use crate::sim::GameState;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starfall starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// New session seeded from the wall clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        Self::with_seed(js_sys::Date::now())
    }

    /// Seeds arrive as JS numbers; anything up to 2^53 is exact
    pub fn with_seed(seed: f64) -> WebGame {
        let seed = seed_from_millis(seed);
        let tuning = Tuning::load();
        let store = LocalStorageStore::load(tuning.leaderboard_capacity);
        log::info!("Game initialized with seed: {}", seed);
        WebGame {
            game: Game::new(GameState::with_tuning(seed, tuning), store),
        }
    }

    /// Advance to the rAF timestamp and return the snapshot as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        self.game.frame(now_ms);
        self.game.snapshot().to_json().unwrap_or_else(|e| {
            log::error!("Snapshot failed: {}", e);
            String::from("{}")
        })
    }

    pub fn start(&mut self, name: &str) {
        self.game.start(name);
    }

    pub fn flap(&mut self) {
        self.game.flap();
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    /// Hidden tabs stop the clock so the run resumes where it left off
    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            self.game.suspend_clock();
            log::info!("Clock suspended (tab hidden)");
        }
    }

    pub fn score(&self) -> u32 {
        self.game.state().score
    }

    pub fn phase(&self) -> String {
        self.game.state().phase.as_str().to_string()
    }

    /// Rank of the last finished run, 0 if it missed the board
    pub fn last_rank(&self) -> u32 {
        self.game.last_rank().map_or(0, |r| r as u32)
    }

    pub fn leaderboard_json(&self) -> String {
        serde_json::to_string(&self.game.leaderboard()).unwrap_or_else(|_| String::from("[]"))
    }

    pub fn rect_instances(&self) -> Vec<u8> {
        FrameInstances::build(&self.game.snapshot()).rect_bytes().to_vec()
    }

    pub fn circle_instances(&self) -> Vec<u8> {
        FrameInstances::build(&self.game.snapshot()).circle_bytes().to_vec()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
