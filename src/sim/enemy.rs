//! Hostile drones
//!
//! Drones enter from just outside a random screen edge, heading roughly
//! inward, then ricochet around the arena forever. Speed scales with the
//! difficulty level at spawn time.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::collision::{bounce_in_arena, circles_overlap};
use super::player::Player;
use crate::consts::*;
use crate::palette::{ENEMY_TINTS, Rgb};

/// Screen edge a drone enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl SpawnSide {
    pub const ALL: [SpawnSide; 4] = [
        SpawnSide::Top,
        SpawnSide::Bottom,
        SpawnSide::Left,
        SpawnSide::Right,
    ];
}

/// A hostile drone
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    /// Unit heading
    pub direction: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Cosmetic blade rotation (radians/sec)
    pub spin: f32,
    /// Cosmetic blade angle (radians)
    pub angle: f32,
    pub color: Rgb,
}

impl Enemy {
    /// Spawn a drone on a random edge
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, difficulty_level: u32) -> Self {
        let side = *SpawnSide::ALL.choose(rng).unwrap_or(&SpawnSide::Top);
        Self::spawn_on(rng, side, difficulty_level)
    }

    /// Spawn a drone on a specific edge
    pub fn spawn_on<R: Rng + ?Sized>(rng: &mut R, side: SpawnSide, difficulty_level: u32) -> Self {
        let margin = ENEMY_SPAWN_MARGIN;
        let along_x = rng.random_range(0..=WIDTH as i32) as f32;
        let along_y = rng.random_range(0..=HEIGHT as i32) as f32;
        let lateral: f32 = rng.random_range(-0.6..=0.6);
        let inward: f32 = rng.random_range(0.4..=1.0);

        let (pos, direction) = match side {
            SpawnSide::Top => (Vec2::new(along_x, -margin), Vec2::new(lateral, inward)),
            SpawnSide::Bottom => (
                Vec2::new(along_x, HEIGHT + margin),
                Vec2::new(lateral, -inward),
            ),
            SpawnSide::Left => (Vec2::new(-margin, along_y), Vec2::new(inward, lateral)),
            SpawnSide::Right => (
                Vec2::new(WIDTH + margin, along_y),
                Vec2::new(-inward, lateral),
            ),
        };

        let radius = rng.random_range(ENEMY_MIN_RADIUS..=ENEMY_MAX_RADIUS) as f32;
        let base_speed: f32 = rng.random_range(140.0..=220.0);
        let per_level: f32 = rng.random_range(4.0..=9.0);
        let speed = base_speed + difficulty_level as f32 * per_level;

        Self {
            pos,
            // `inward` is at least 0.4 so this never degenerates
            direction: direction.normalize_or_zero(),
            radius,
            speed,
            spin: rng.random_range(-4.0..=4.0),
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            color: *ENEMY_TINTS.choose(rng).unwrap_or(&ENEMY_TINTS[0]),
        }
    }

    /// Move, spin, and ricochet off the arena walls
    pub fn update(&mut self, dt: f32) {
        self.pos += self.direction * self.speed * dt;
        self.angle += self.spin * dt;
        bounce_in_arena(&mut self.pos, &mut self.direction, self.radius);
    }

    pub fn collides_with_player(&self, player: &Player) -> bool {
        circles_overlap(self.pos, self.radius, player.pos, player.radius)
    }
}
