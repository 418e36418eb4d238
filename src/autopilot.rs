//! Demo pilot
//!
//! Plays the game by producing the same held-key intent a keyboard would.
//! Drones push the avatar away (inverse-square), the nearest orb pulls it in
//! when nothing is close, and a drone inside the danger radius triggers a dash.

use glam::Vec2;

use crate::input::InputState;
use crate::sim::GameState;

/// Drones closer than this (edge to edge) trigger a dash
const DANGER_GAP: f32 = 28.0;
/// Drones farther than this are ignored
const AWARENESS_RADIUS: f32 = 180.0;
/// Axis component needed before a key is held
const AXIS_DEADZONE: f32 = 0.3;
/// Pull of the arena center (keeps the pilot off the walls)
const CENTER_PULL: f32 = 0.15;

/// Decide this frame's input from the current state
pub fn pilot(state: &GameState) -> InputState {
    let player = &state.player;
    let mut steer = Vec2::ZERO;
    let mut threatened = false;
    let mut in_danger = false;

    for enemy in &state.enemies {
        let offset = player.pos - enemy.pos;
        let dist = offset.length();
        if dist > AWARENESS_RADIUS || dist <= f32::EPSILON {
            continue;
        }
        threatened = true;
        if dist - enemy.radius - player.radius < DANGER_GAP {
            in_danger = true;
        }
        steer += offset / (dist * dist) * AWARENESS_RADIUS;
    }

    // Nothing nearby: go grab the nearest pickup
    if !threatened {
        let nearest = state.orbs.iter().min_by(|a, b| {
            let dist_a = a.pos.distance_squared(player.pos);
            let dist_b = b.pos.distance_squared(player.pos);
            dist_a
                .partial_cmp(&dist_b)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(orb) = nearest {
            steer += (orb.pos - player.pos).normalize_or_zero();
        }
    }

    let center = Vec2::new(crate::consts::WIDTH, crate::consts::HEIGHT) * 0.5;
    steer += (center - player.pos).normalize_or_zero() * CENTER_PULL;

    let dir = steer.normalize_or_zero();
    InputState {
        up: dir.y < -AXIS_DEADZONE,
        down: dir.y > AXIS_DEADZONE,
        left: dir.x < -AXIS_DEADZONE,
        right: dir.x > AXIS_DEADZONE,
        dash: in_danger && player.can_dash(),
    }
}
