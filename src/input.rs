//! Keyboard bindings
//!
//! The host reports which physical keys are held (for movement and dash) and
//! which were just pressed (for screen commands). This module folds both into
//! the small set of intents the simulation understands.

use std::collections::HashSet;

use glam::Vec2;

/// Physical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    LShift,
    RShift,
    P,
    R,
    Enter,
    Escape,
}

impl Key {
    pub const MOVE_UP: [Key; 2] = [Key::W, Key::Up];
    pub const MOVE_DOWN: [Key; 2] = [Key::S, Key::Down];
    pub const MOVE_LEFT: [Key; 2] = [Key::A, Key::Left];
    pub const MOVE_RIGHT: [Key; 2] = [Key::D, Key::Right];
    pub const DASH: [Key; 3] = [Key::Space, Key::LShift, Key::RShift];
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn any_held(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.is_held(*k))
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Held-key intent for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub dash: bool,
}

impl InputState {
    pub fn from_keyboard(keys: &KeyboardState) -> Self {
        Self {
            up: keys.any_held(&Key::MOVE_UP),
            down: keys.any_held(&Key::MOVE_DOWN),
            left: keys.any_held(&Key::MOVE_LEFT),
            right: keys.any_held(&Key::MOVE_RIGHT),
            dash: keys.any_held(&Key::DASH),
        }
    }

    /// Raw 8-way intent; each axis is -1, 0 or 1 (screen y points down)
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Discrete screen commands from edge-triggered key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter: start, resume, retry
    Confirm,
    /// Escape: back to menu, or quit from the menu
    Cancel,
    /// P: toggle pause
    Pause,
    /// R: fresh run
    Restart,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Enter => Some(Command::Confirm),
            Key::Escape => Some(Command::Cancel),
            Key::P => Some(Command::Pause),
            Key::R => Some(Command::Restart),
            _ => None,
        }
    }
}
