//! Game facade
//!
//! Owns the simulation state and the score store. The host calls
//! [`Game::frame`] once per rendered frame with the elapsed wall time, and
//! forwards discrete key presses through [`Game::handle_key`] or
//! [`Game::handle_command`].

use crate::consts::MAX_FRAME_DT;
use crate::highscores::BestScore;
use crate::input::{Command, InputState, Key};
use crate::persistence::ScoreStore;
use crate::sim::{GameEvent, GameState, Screen, Snapshot, apply_command, update_playing};

pub use crate::sim::Flow;

/// A game session bound to a score store
pub struct Game<S: ScoreStore> {
    state: GameState,
    store: S,
    best: BestScore,
}

impl<S: ScoreStore> Game<S> {
    /// Load the best score (best-effort) and sit on the menu
    pub fn new(store: S, seed: u64) -> Self {
        let best = BestScore::load(&store);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, best.best_score),
            store,
            best,
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Flow {
        apply_command(&mut self.state, command)
    }

    /// Edge-triggered key press; keys without a command are ignored
    pub fn handle_key(&mut self, key: Key) -> Flow {
        match Command::from_key(key) {
            Some(command) => self.handle_command(command),
            None => Flow::Continue,
        }
    }

    /// Window closed: quit from any screen
    pub fn request_quit(&mut self) -> Flow {
        log::info!("Quit requested on {:?}", self.state.screen);
        Flow::Quit
    }

    /// Advance one rendered frame; `elapsed` is wall time since the last one
    pub fn frame(&mut self, elapsed: f32, input: &InputState) {
        let dt = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        if self.state.screen == Screen::Playing {
            update_playing(&mut self.state, input, dt);
        }

        for event in self.state.drain_events() {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::LevelUp { level } => log::debug!("Level {}", level),
            GameEvent::OrbCollected { combo, points } => {
                log::debug!("Orb +{} (combo x{})", points, combo)
            }
            GameEvent::EnemyRepelled => {}
            GameEvent::PlayerKilled { score, .. } => self.persist_run(score),
        }
    }

    /// Save after every run; a failing store never interrupts play
    fn persist_run(&mut self, score: u64) {
        self.best.submit(score);
        if let Err(err) = self.best.save(&mut self.store) {
            log::warn!("Failed to save best score: {}", err);
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&self.state)
    }

    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    pub fn best_score(&self) -> u64 {
        self.best.best_score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
