//! Game state and core simulation types
//!
//! Everything a run needs lives in [`GameState`]: the entity collections,
//! scoring bookkeeping, spawn timers, the screen and the run's RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::orb::EnergyOrb;
use super::particle::Particle;
use super::player::Player;
use super::timer::Timer;
use crate::consts::*;
use crate::direction_from_angle;
use crate::palette::Rgb;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title screen
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen run with overlay
    Paused,
    /// Run ended
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Survived another difficulty interval
    LevelUp { level: u32 },
    /// Picked up an orb
    OrbCollected { combo: u32, points: u64 },
    /// Shoved a drone away while invulnerable
    EnemyRepelled,
    /// Lethal hit; the run is over
    PlayerKilled {
        score: u64,
        best_score: u64,
        new_best: bool,
    },
}

/// Cosmetic screen shake
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraShake {
    /// Max offset in pixels
    pub strength: f32,
    /// Seconds remaining
    pub time_left: f32,
}

impl CameraShake {
    /// Stronger and longer shakes win; weaker ones never cut a shake short
    pub fn add(&mut self, strength: f32, duration: f32) {
        self.strength = self.strength.max(strength);
        self.time_left = self.time_left.max(duration);
    }

    pub fn update(&mut self, dt: f32) {
        if self.time_left > 0.0 {
            self.time_left = (self.time_left - dt).max(0.0);
            if self.time_left == 0.0 {
                self.strength = 0.0;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.time_left > 0.0 && self.strength > 0.0
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current screen
    pub screen: Screen,
    /// The avatar (replaced on every reset)
    pub player: Player,
    /// Live drones, oldest first
    pub enemies: Vec<Enemy>,
    /// Live pickups
    pub orbs: Vec<EnergyOrb>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Score for this run
    pub score: u64,
    /// Best score across runs
    pub best_score: u64,
    /// Survival time for this run (seconds)
    pub time_alive: f32,
    /// Consecutive pickup streak
    pub combo: u32,
    /// Streak resets when this expires
    pub combo_timer: Timer,
    pub spawn_enemy_timer: Timer,
    pub spawn_orb_timer: Timer,
    /// Starts at 1, +1 every `DIFFICULTY_INTERVAL` seconds
    pub difficulty_level: u32,
    /// Survival time of the next level-up
    pub next_difficulty_time: f32,
    pub shake: CameraShake,
    /// Background scroll (pixels)
    pub grid_offset: f32,
    /// Events recorded by the last ticks, drained by the caller
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game on the menu screen with a fresh run behind it
    pub fn new(seed: u64, best_score: u64) -> Self {
        let mut state = Self {
            screen: Screen::Menu,
            player: Player::new(),
            enemies: Vec::new(),
            orbs: Vec::new(),
            particles: Vec::new(),
            score: 0,
            best_score,
            time_alive: 0.0,
            combo: 0,
            combo_timer: Timer::new(),
            spawn_enemy_timer: Timer::new(),
            spawn_orb_timer: Timer::new(),
            difficulty_level: 1,
            next_difficulty_time: DIFFICULTY_INTERVAL,
            shake: CameraShake::default(),
            grid_offset: 0.0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };

        state.reset_run();
        state
    }

    /// Throw the current run away and set up a new one (screen is untouched)
    pub fn reset_run(&mut self) {
        self.player = Player::new();
        self.enemies.clear();
        self.orbs.clear();
        self.particles.clear();

        self.score = 0;
        self.time_alive = 0.0;
        self.combo = 0;
        self.combo_timer = Timer::new();

        self.spawn_enemy_timer.start(0.6);
        self.spawn_orb_timer.start(2.2);

        self.difficulty_level = 1;
        self.next_difficulty_time = DIFFICULTY_INTERVAL;

        for _ in 0..INITIAL_ENEMIES {
            self.spawn_enemy();
        }
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn spawn_enemy(&mut self) {
        let enemy = Enemy::spawn(&mut self.rng, self.difficulty_level);
        self.enemies.push(enemy);
    }

    pub fn spawn_orb(&mut self) {
        let orb = EnergyOrb::spawn(&mut self.rng);
        self.orbs.push(orb);
    }

    /// Delay before the next drone: shrinks with difficulty, floored at 0.28s
    pub fn next_enemy_interval(&mut self) -> f32 {
        let jitter: f32 = self.rng.random_range(-0.08..=0.12);
        (1.0 - self.difficulty_level as f32 * 0.045 + jitter).max(0.28)
    }

    pub fn next_orb_interval(&mut self) -> f32 {
        self.rng.random_range(2.0..=3.4)
    }

    /// Radial burst of particles
    pub fn spawn_burst(&mut self, pos: Vec2, color: Rgb, count: usize, speed: f32) {
        self.particles.reserve(count);
        for _ in 0..count {
            let dir = direction_from_angle(self.rng.random_range(0.0..std::f32::consts::TAU));
            let vel = dir * self.rng.random_range(speed * 0.4..=speed);
            let life: f32 = self.rng.random_range(0.25..=0.55);
            let radius: f32 = self.rng.random_range(2.0..=4.0);
            self.particles
                .push(Particle::new(pos, vel, life, radius, color));
        }
    }

    /// Keep only the newest `MAX_ENEMIES` drones
    pub fn enforce_enemy_cap(&mut self) {
        if self.enemies.len() > MAX_ENEMIES {
            let excess = self.enemies.len() - MAX_ENEMIES;
            self.enemies.drain(..excess);
        }
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
