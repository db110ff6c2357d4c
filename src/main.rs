//! Starfall entry point
//!
//! The browser build starts from `platform::web`. Natively this runs the
//! autopilot headless for a fixed number of frames and records every
//! finished run to a JSON leaderboard file.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use starfall::Game;
    use starfall::persistence::JsonFileStore;
    use starfall::sim::{GamePhase, GameState, autopilot};
    use starfall::tuning::Tuning;

    env_logger::init();
    log::info!("Starfall (native) starting...");

    let seed = match std::env::var("STARFALL_SEED") {
        Ok(s) => s
            .parse::<u64>()
            .with_context(|| format!("STARFALL_SEED is not a number: {s}"))?,
        Err(_) => rand::random(),
    };
    let frames = match std::env::var("STARFALL_FRAMES") {
        Ok(s) => s
            .parse::<u32>()
            .with_context(|| format!("STARFALL_FRAMES is not a number: {s}"))?,
        Err(_) => 3600,
    };
    let scores_path =
        std::env::var("STARFALL_SCORES").unwrap_or_else(|_| "starfall_scores.json".to_string());

    let tuning = Tuning::load();
    let store = JsonFileStore::open(&scores_path, tuning.leaderboard_capacity);
    let mut game = Game::new(GameState::with_tuning(seed, tuning), store);
    log::info!("Game initialized with seed: {}", seed);

    let mut runs = 0u32;
    let mut best = 0u32;
    for _ in 0..frames {
        match game.state().phase {
            GamePhase::Idle => game.start("Autopilot"),
            GamePhase::Ended => {
                runs += 1;
                best = best.max(game.state().score);
                game.restart();
            }
            GamePhase::Running if autopilot::should_flap(game.state()) => game.flap(),
            GamePhase::Running => {}
        }
        game.step();
    }

    let state = game.state();
    println!(
        "seed {seed}: {runs} finished runs, best {best}, current run {} at {}",
        state.phase.as_str(),
        state.score
    );
    println!("Leaderboard ({}):", game.store().path().display());
    for (rank, entry) in game.leaderboard().iter().enumerate() {
        println!("{:>2}. {:<16} {}", rank + 1, entry.name, entry.score);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
