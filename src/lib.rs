//! Neon Drift Arena - A single-screen arcade survival game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, per-frame step, screen flow)
//! - `game`: Facade wiring the simulation to persistence
//! - `renderer`: CPU-side scene building for the host's GPU pipeline
//! - `persistence`: Best-score storage ports
//! - `input`: Keyboard bindings

pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Flow, Game};
pub use highscores::BestScore;
pub use input::{Command, InputState, Key, KeyboardState};
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const WIDTH: f32 = 960.0;
    pub const HEIGHT: f32 = 600.0;

    /// Target frame rate of the host loop
    pub const FPS: u32 = 60;
    /// Largest delta-time fed to the simulation in one frame (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_BASE_SPEED: f32 = 280.0;
    /// Inertia smoothing rate (lerp factor per second, clamped to 1)
    pub const PLAYER_SMOOTHING: f32 = 10.0;

    /// Dash tuning
    pub const DASH_SPEED: f32 = 780.0;
    pub const DASH_DURATION: f32 = 0.12;
    pub const DASH_COOLDOWN: f32 = 1.0;
    pub const DASH_INVULN: f32 = 0.18;

    /// Enemy tuning
    pub const ENEMY_SPAWN_MARGIN: f32 = 30.0;
    pub const ENEMY_MIN_RADIUS: i32 = 10;
    pub const ENEMY_MAX_RADIUS: i32 = 22;
    pub const MAX_ENEMIES: usize = 70;
    pub const INITIAL_ENEMIES: usize = 3;
    /// Speed multiplier applied when a dashing player shoves an enemy
    pub const PUSHBACK_SLOWDOWN: f32 = 0.94;
    pub const PUSHBACK_SCORE: u64 = 2;

    /// Orb tuning
    pub const ORB_RADIUS: f32 = 10.0;
    pub const ORB_VALUE: u64 = 25;
    pub const ORB_SPAWN_MARGIN: i32 = 40;
    pub const MAX_ORBS: usize = 3;

    /// Combo window (seconds) and bonus per streak step
    pub const COMBO_WINDOW: f32 = 2.0;
    pub const COMBO_BONUS: u64 = 5;

    /// Difficulty ramp
    pub const DIFFICULTY_INTERVAL: f32 = 10.0;
    pub const LEVEL_UP_SCORE: u64 = 20;

    /// Passive score rate (points per second, truncated per frame)
    pub const PASSIVE_SCORE_RATE: f32 = 6.0;

    /// Trail emission
    pub const TRAIL_MIN_SPEED: f32 = 250.0;
    pub const TRAIL_INTERVAL: f32 = 0.018;
    pub const TRAIL_LIFE: f32 = 0.2;
}

/// RGB palette shared by the simulation (particle/enemy tints) and renderer
pub mod palette {
    pub type Rgb = [u8; 3];

    pub const BG: Rgb = [10, 12, 18];
    pub const PANEL: Rgb = [18, 22, 32];
    pub const WHITE: Rgb = [235, 240, 255];
    pub const MUTED: Rgb = [150, 160, 190];
    pub const RED: Rgb = [255, 90, 120];
    pub const GREEN: Rgb = [80, 255, 170];
    pub const BLUE: Rgb = [80, 180, 255];
    pub const YELLOW: Rgb = [255, 215, 90];
    pub const PURPLE: Rgb = [180, 110, 255];
    pub const ORANGE: Rgb = [255, 120, 80];

    /// Tints an enemy may spawn with
    pub const ENEMY_TINTS: [Rgb; 3] = [RED, PURPLE, ORANGE];
}

/// Unit vector pointing along `angle` (radians)
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Clamp a circle's center so the circle stays inside the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, consts::WIDTH - radius),
        pos.y.clamp(radius, consts::HEIGHT - radius),
    )
}
