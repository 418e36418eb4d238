//! Energy orb pickups

use glam::Vec2;
use rand::Rng;

use super::collision::circles_overlap;
use super::player::Player;
use crate::consts::*;

const PULSE_RATE: f32 = 4.2;

/// A static pickup; the score it grants is computed by the tick
#[derive(Debug, Clone)]
pub struct EnergyOrb {
    pub pos: Vec2,
    pub radius: f32,
    /// Cosmetic pulse phase (radians)
    pub pulse_phase: f32,
    /// Base score before combo bonus
    pub value: u64,
}

impl EnergyOrb {
    /// Place an orb at a random spot at least `ORB_SPAWN_MARGIN` from every edge
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let margin = ORB_SPAWN_MARGIN;
        let x = rng.random_range(margin..=WIDTH as i32 - margin) as f32;
        let y = rng.random_range(margin..=HEIGHT as i32 - margin) as f32;
        Self::at(Vec2::new(x, y), rng.random_range(0.0..std::f32::consts::TAU))
    }

    pub fn at(pos: Vec2, pulse_phase: f32) -> Self {
        Self {
            pos,
            radius: ORB_RADIUS,
            pulse_phase,
            value: ORB_VALUE,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pulse_phase += dt * PULSE_RATE;
    }

    /// Draw-time radius multiplier
    pub fn pulse(&self) -> f32 {
        1.0 + 0.15 * self.pulse_phase.sin()
    }

    pub fn collides_with_player(&self, player: &Player) -> bool {
        circles_overlap(self.pos, self.radius, player.pos, player.radius)
    }
}
