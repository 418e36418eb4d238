//! Collision detection and response for circles in a rectangular arena
//!
//! Everything in the arena is a circle: the player, drones, orbs. Overlap is
//! tested on squared distances so no square root is taken per pair.

use glam::Vec2;

use crate::consts::{HEIGHT, WIDTH};

/// Squared-distance circle overlap test (touching counts as overlap)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let r = radius_a + radius_b;
    (a - b).length_squared() <= r * r
}

/// Result of keeping a moving circle inside the arena
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    /// Circle touched the left or right wall
    pub x: bool,
    /// Circle touched the top or bottom wall
    pub y: bool,
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Clamp `pos` into `[r, W-r] x [r, H-r]` and negate the direction component
/// of every axis that crossed a wall.
///
/// The direction's magnitude is preserved since only signs change.
pub fn bounce_in_arena(pos: &mut Vec2, direction: &mut Vec2, radius: f32) -> Bounce {
    let mut bounce = Bounce::default();

    if pos.x < radius {
        pos.x = radius;
        direction.x = -direction.x;
        bounce.x = true;
    } else if pos.x > WIDTH - radius {
        pos.x = WIDTH - radius;
        direction.x = -direction.x;
        bounce.x = true;
    }

    if pos.y < radius {
        pos.y = radius;
        direction.y = -direction.y;
        bounce.y = true;
    } else if pos.y > HEIGHT - radius {
        pos.y = HEIGHT - radius;
        direction.y = -direction.y;
        bounce.y = true;
    }

    bounce
}

/// Direction pointing from `from` toward `to`, or `None` when they coincide
#[inline]
pub fn away_from(from: Vec2, to: Vec2) -> Option<Vec2> {
    let push = to - from;
    if push.length_squared() > 0.0 {
        Some(push.normalize())
    } else {
        None
    }
}
