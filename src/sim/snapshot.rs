//! Read-only view of a frame for presentation

use super::enemy::Enemy;
use super::orb::EnergyOrb;
use super::particle::Particle;
use super::player::Player;
use super::state::{CameraShake, GameState, Screen};

/// Everything a renderer needs, borrowed from the state
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub screen: Screen,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub orbs: &'a [EnergyOrb],
    pub particles: &'a [Particle],
    pub score: u64,
    pub best_score: u64,
    pub time_alive: f32,
    pub difficulty_level: u32,
    pub combo: u32,
    /// Combo timer still running (the HUD hides stale streaks)
    pub combo_live: bool,
    /// 0 right after a dash, 1 when ready
    pub dash_ready: f32,
    pub shake: CameraShake,
    pub grid_offset: f32,
}

impl<'a> Snapshot<'a> {
    pub fn of(state: &'a GameState) -> Self {
        Self {
            screen: state.screen,
            player: &state.player,
            enemies: &state.enemies,
            orbs: &state.orbs,
            particles: &state.particles,
            score: state.score,
            best_score: state.best_score,
            time_alive: state.time_alive,
            difficulty_level: state.difficulty_level,
            combo: state.combo,
            combo_live: state.combo_timer.active(),
            dash_ready: state.player.dash_ready_ratio(),
            shake: state.shake,
            grid_offset: state.grid_offset,
        }
    }

    /// Combo banner is shown for streaks of two or more
    pub fn show_combo(&self) -> bool {
        self.combo > 1 && self.combo_live
    }
}
