//! Neon Drift Arena - headless entry point
//!
//! Runs an autopilot session at a fixed frame rate without a window, building
//! a presentation frame once per simulated second, and logs the result.

use neon_drift_arena::autopilot::pilot;
use neon_drift_arena::consts::FPS;
use neon_drift_arena::persistence::FileScoreStore;
use neon_drift_arena::renderer::build_frame;
use neon_drift_arena::settings::SETTINGS_FILE;
use neon_drift_arena::sim::Screen;
use neon_drift_arena::{Command, Game, Settings};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Longest demo session (simulated seconds)
const SESSION_SECONDS: u32 = 60;

fn main() {
    env_logger::init();
    log::info!("Neon Drift Arena (headless) starting...");

    let settings = Settings::load_from(SETTINGS_FILE);
    let store = FileScoreStore::new(&settings.save_path);
    let seed: u64 = rand::random();
    let mut game = Game::new(store, seed);
    let mut fx_rng = Pcg32::seed_from_u64(seed ^ 0x5eed);

    game.handle_command(Command::Confirm);

    let dt = 1.0 / FPS as f32;
    let mut frames = 0u32;
    while frames < SESSION_SECONDS * FPS && game.screen() == Screen::Playing {
        let input = pilot(game.state());
        game.frame(dt, &input);
        frames += 1;

        if frames % FPS == 0 {
            let frame = build_frame(&game.snapshot(), &settings, &mut fx_rng);
            log::debug!(
                "t={}s: {} vertices, {} texts, score {}",
                frames / FPS,
                frame.vertex_count(),
                frame.texts().count(),
                game.state().score
            );
        }
    }

    let state = game.state();
    log::info!(
        "Session over after {:.1}s: score {}, level {}, best {} ({})",
        state.time_alive,
        state.score,
        state.difficulty_level,
        game.best_score(),
        if state.player.alive {
            "survived"
        } else {
            "destroyed"
        }
    );
}
