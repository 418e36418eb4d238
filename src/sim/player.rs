//! The player's avatar: inertial movement and the dash

use glam::Vec2;

use super::timer::Timer;
use crate::clamp_to_arena;
use crate::consts::*;
use crate::input::InputState;

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub base_speed: f32,
    pub alive: bool,
    /// Forced high-speed movement while active
    pub dash_timer: Timer,
    /// Blocks re-triggering the dash while active
    pub dash_cooldown: Timer,
    /// Immunity to lethal hits while active
    pub invuln_timer: Timer,
    /// Last nonzero input direction (dash heading)
    pub dash_direction: Vec2,
    /// Unspent time toward the next trail particle
    pub trail_accum: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            base_speed: PLAYER_BASE_SPEED,
            alive: true,
            dash_timer: Timer::new(),
            dash_cooldown: Timer::new(),
            invuln_timer: Timer::new(),
            dash_direction: Vec2::X,
            trail_accum: 0.0,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this frame's held input to the velocity and maybe start a dash.
    ///
    /// The smoothing factor `clamp(dt * 10, 0, 1)` is a per-frame lerp, so the
    /// feel depends on the frame rate.
    pub fn handle_input(&mut self, dt: f32, input: &InputState) {
        let direction = input.direction().normalize_or_zero();
        if direction != Vec2::ZERO {
            self.dash_direction = direction;
        }

        if self.dash_timer.active() {
            self.vel = self.dash_direction * DASH_SPEED;
        } else {
            let target = direction * self.base_speed;
            let t = (dt * PLAYER_SMOOTHING).clamp(0.0, 1.0);
            self.vel = self.vel.lerp(target, t);
        }

        if input.dash && self.can_dash() {
            if self.dash_direction.length_squared() == 0.0 {
                self.dash_direction = Vec2::X;
            }
            self.dash_timer.start(DASH_DURATION);
            self.dash_cooldown.start(DASH_COOLDOWN);
            self.invuln_timer.start(DASH_INVULN);
        }
    }

    /// Advance timers, integrate, keep inside the arena
    pub fn update(&mut self, dt: f32) {
        self.dash_timer.update(dt);
        self.dash_cooldown.update(dt);
        self.invuln_timer.update(dt);

        self.pos += self.vel * dt;
        self.pos = clamp_to_arena(self.pos, self.radius);
    }

    pub fn can_dash(&self) -> bool {
        !self.dash_timer.active() && !self.dash_cooldown.active()
    }

    pub fn can_be_hit(&self) -> bool {
        !self.invuln_timer.active()
    }

    /// 0 right after a dash, 1 when the dash is ready again
    pub fn dash_ready_ratio(&self) -> f32 {
        if self.dash_cooldown.active() {
            (1.0 - self.dash_cooldown.time_left() / DASH_COOLDOWN).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right() -> InputState {
        InputState {
            right: true,
            ..Default::default()
        }
    }

    fn dash() -> InputState {
        InputState {
            dash: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_heading_is_right() {
        let p = Player::new();
        assert_eq!(p.dash_direction, Vec2::X);
        assert!(p.alive);
        assert!(p.can_be_hit());
        assert_eq!(p.dash_ready_ratio(), 1.0);
    }

    #[test]
    fn test_inertia_lerps_toward_target() {
        let mut p = Player::new();
        p.handle_input(0.05, &right());
        // factor = 0.5 -> halfway to 280
        assert!((p.vel.x - 140.0).abs() < 1e-3);
        assert_eq!(p.vel.y, 0.0);

        // Large dt clamps factor to 1
        p.handle_input(0.5, &right());
        assert!((p.vel.x - 280.0).abs() < 1e-3);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let mut p = Player::new();
        let input = InputState {
            up: true,
            left: true,
            ..Default::default()
        };
        p.handle_input(1.0, &input);
        assert!((p.vel.length() - PLAYER_BASE_SPEED).abs() < 1e-2);
        assert!((p.dash_direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_heading_persists_without_input() {
        let mut p = Player::new();
        let input = InputState {
            down: true,
            ..Default::default()
        };
        p.handle_input(0.016, &input);
        p.handle_input(0.016, &InputState::default());
        assert_eq!(p.dash_direction, Vec2::Y);
    }

    #[test]
    fn test_dash_starts_all_timers() {
        let mut p = Player::new();
        p.handle_input(0.016, &dash());
        assert!(p.dash_timer.active());
        assert!(p.dash_cooldown.active());
        assert!(p.invuln_timer.active());
        assert!(!p.can_be_hit());
        assert_eq!(p.dash_ready_ratio(), 0.0);
    }

    #[test]
    fn test_dash_overrides_velocity() {
        let mut p = Player::new();
        p.handle_input(0.016, &dash());
        // Velocity is forced on the frame after triggering
        p.handle_input(0.016, &InputState::default());
        assert_eq!(p.vel, Vec2::X * DASH_SPEED);
    }

    #[test]
    fn test_dash_not_retriggered_during_cooldown() {
        let mut p = Player::new();
        let dt = 1.0 / 60.0;
        p.handle_input(dt, &dash());
        p.update(dt);

        // Hold dash for ~0.9s: cooldown still running, timers never restart
        for _ in 0..54 {
            let before = p.dash_cooldown.time_left();
            p.handle_input(dt, &dash());
            assert!(p.dash_cooldown.time_left() <= before);
            p.update(dt);
        }
        assert!(!p.dash_timer.active());
        assert!(p.dash_cooldown.active());
    }

    #[test]
    fn test_invulnerability_window() {
        let mut p = Player::new();
        p.handle_input(0.01, &dash());
        p.update(0.17);
        assert!(!p.can_be_hit());
        p.update(0.02);
        assert!(p.can_be_hit());
    }

    #[test]
    fn test_dash_available_after_cooldown() {
        let mut p = Player::new();
        p.handle_input(0.01, &dash());
        p.update(1.0);
        assert!(p.can_dash());
        p.handle_input(0.01, &dash());
        assert!(p.dash_timer.active());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn position_always_clamped(
                x in -2000.0f32..3000.0,
                y in -2000.0f32..3000.0,
                vx in -5000.0f32..5000.0,
                vy in -5000.0f32..5000.0,
                dt in 0.0f32..0.05
            ) {
                let mut p = Player::new();
                p.pos = Vec2::new(x, y);
                p.vel = Vec2::new(vx, vy);
                p.update(dt);
                prop_assert!(p.pos.x >= p.radius && p.pos.x <= WIDTH - p.radius);
                prop_assert!(p.pos.y >= p.radius && p.pos.y <= HEIGHT - p.radius);
            }
        }
    }
}
