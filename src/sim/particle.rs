//! Cosmetic particles (bursts and dash trails)

use glam::Vec2;

use crate::palette::Rgb;

/// Velocity retained per update (frame-rate dependent drag)
const DRAG_PER_FRAME: f32 = 0.97;

/// A short-lived visual effect with no gameplay interaction
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left to live
    pub life: f32,
    /// Life at creation, only used for fading
    pub max_life: f32,
    pub radius: f32,
    pub color: Rgb,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, radius: f32, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
            radius,
            color,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.vel *= DRAG_PER_FRAME;
        self.life -= dt;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Remaining life as a 0-1 ratio, for alpha and size
    pub fn fade(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}
