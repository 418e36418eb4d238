//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform code:
//! - Delta-time is supplied by the caller (already clamped)
//! - Randomness comes from the run's seeded RNG only
//! - Collections are iterated in insertion order

pub mod collision;
pub mod enemy;
pub mod flow;
pub mod orb;
pub mod particle;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Bounce, bounce_in_arena, circles_overlap};
pub use enemy::{Enemy, SpawnSide};
pub use flow::{Flow, apply_command};
pub use orb::EnergyOrb;
pub use particle::Particle;
pub use player::Player;
pub use snapshot::Snapshot;
pub use state::{CameraShake, GameEvent, GameState, Screen};
pub use tick::update_playing;
pub use timer::Timer;
