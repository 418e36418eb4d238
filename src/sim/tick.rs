//! Per-frame simulation step
//!
//! Core game loop that advances a run by one frame. The order of the stages
//! matters: pickups score before the lethal-collision check, so an orb
//! grabbed on the killing frame still counts toward the best score.

use glam::Vec2;
use rand::Rng;

use super::collision::away_from;
use super::particle::Particle;
use super::state::{GameEvent, GameState, Screen};
use crate::consts::*;
use crate::input::InputState;
use crate::palette::{BLUE, GREEN, RED, YELLOW};

/// Background scroll speed (pixels/sec)
const GRID_SCROLL_SPEED: f32 = 18.0;

/// Advance a run by `dt` seconds.
///
/// Callers clamp `dt` to `[0, MAX_FRAME_DT]`. Only meaningful while the
/// screen is [`Screen::Playing`]; other screens are left untouched.
pub fn update_playing(state: &mut GameState, input: &InputState, dt: f32) {
    if state.screen != Screen::Playing {
        return;
    }

    // Clocks
    state.time_alive += dt;
    state.grid_offset += GRID_SCROLL_SPEED * dt;

    update_difficulty(state);

    state.combo_timer.update(dt);
    if !state.combo_timer.active() {
        state.combo = 0;
    }

    state.player.handle_input(dt, input);
    state.player.update(dt);

    update_spawners(state, dt);

    for enemy in &mut state.enemies {
        enemy.update(dt);
    }
    for orb in &mut state.orbs {
        orb.update(dt);
    }
    for particle in &mut state.particles {
        particle.update(dt);
    }
    state.particles.retain(Particle::is_alive);

    emit_trail(state, dt);

    collect_orbs(state);

    // Truncated every frame: at 60 FPS this rounds to zero
    state.score += (dt * PASSIVE_SCORE_RATE) as u64;

    resolve_enemy_hits(state);

    state.enforce_enemy_cap();

    state.shake.update(dt);
}

/// Level up once the survival clock crosses the next threshold
fn update_difficulty(state: &mut GameState) {
    if state.time_alive >= state.next_difficulty_time {
        state.difficulty_level += 1;
        state.next_difficulty_time += DIFFICULTY_INTERVAL;
        state.score += LEVEL_UP_SCORE;
        let pos = state.player.pos;
        state.spawn_burst(pos, YELLOW, 10, 120.0);

        log::debug!("Difficulty level {}", state.difficulty_level);
        state.events.push(GameEvent::LevelUp {
            level: state.difficulty_level,
        });
    }
}

fn update_spawners(state: &mut GameState, dt: f32) {
    state.spawn_enemy_timer.update(dt);
    state.spawn_orb_timer.update(dt);

    if !state.spawn_enemy_timer.active() {
        state.spawn_enemy();
        let next = state.next_enemy_interval();
        state.spawn_enemy_timer.start(next);
    }

    // The orb timer stays expired while the arena is full, so a new orb
    // appears on the first frame a slot frees up
    if !state.spawn_orb_timer.active() && state.orbs.len() < MAX_ORBS {
        state.spawn_orb();
        let next = state.next_orb_interval();
        state.spawn_orb_timer.start(next);
    }
}

/// Drop short-lived sparks behind a fast-moving player
fn emit_trail(state: &mut GameState, dt: f32) {
    let speed = state.player.vel.length();
    if speed <= TRAIL_MIN_SPEED {
        return;
    }

    state.player.trail_accum += dt;
    while state.player.trail_accum >= TRAIL_INTERVAL {
        state.player.trail_accum -= TRAIL_INTERVAL;

        let backward = state.player.vel.normalize_or_zero();
        let rng = state.rng();
        let offset: f32 = rng.random_range(4.0..=16.0);
        let vel = Vec2::new(
            rng.random_range(-20.0..=20.0),
            rng.random_range(-20.0..=20.0),
        );
        let pos = state.player.pos - backward * offset;
        state
            .particles
            .push(Particle::new(pos, vel, TRAIL_LIFE, 3.0, BLUE));
    }
}

/// Consume every orb touching the player, growing the combo for each
fn collect_orbs(state: &mut GameState) {
    let mut i = 0;
    while i < state.orbs.len() {
        if !state.orbs[i].collides_with_player(&state.player) {
            i += 1;
            continue;
        }

        let orb = state.orbs.remove(i);
        state.combo += 1;
        state.combo_timer.start(COMBO_WINDOW);

        let points = orb.value + (state.combo as u64 - 1) * COMBO_BONUS;
        state.score += points;

        state.spawn_burst(orb.pos, GREEN, 14, 150.0);
        state.shake.add(4.0, 0.08);

        log::debug!("Orb collected: +{} (combo x{})", points, state.combo);
        state.events.push(GameEvent::OrbCollected {
            combo: state.combo,
            points,
        });
    }
}

/// First lethal hit ends the run; invulnerable contacts shove drones away
fn resolve_enemy_hits(state: &mut GameState) {
    for i in 0..state.enemies.len() {
        if !state.enemies[i].collides_with_player(&state.player) {
            continue;
        }

        if state.player.can_be_hit() {
            kill_player(state);
            break;
        }

        let player_pos = state.player.pos;
        let enemy = &mut state.enemies[i];
        if let Some(dir) = away_from(player_pos, enemy.pos) {
            enemy.direction = dir;
        }
        enemy.speed *= PUSHBACK_SLOWDOWN;
        state.score += PUSHBACK_SCORE;
        state.events.push(GameEvent::EnemyRepelled);
    }
}

fn kill_player(state: &mut GameState) {
    state.player.alive = false;
    let pos = state.player.pos;
    state.spawn_burst(pos, RED, 32, 260.0);
    state.shake.add(10.0, 0.25);
    state.screen = Screen::GameOver;

    let new_best = state.score > state.best_score;
    state.best_score = state.best_score.max(state.score);

    log::info!(
        "Run over: score {} after {:.1}s (level {}){}",
        state.score,
        state.time_alive,
        state.difficulty_level,
        if new_best { " - new best!" } else { "" }
    );
    state.events.push(GameEvent::PlayerKilled {
        score: state.score,
        best_score: state.best_score,
        new_best,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::Enemy;
    use crate::sim::orb::EnergyOrb;

    const DT: f32 = 1.0 / 60.0;

    /// A playing state with no drones and spawners pushed far out
    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        state.screen = Screen::Playing;
        state.enemies.clear();
        state.spawn_enemy_timer.start(1000.0);
        state.spawn_orb_timer.start(1000.0);
        state
    }

    fn drone_at(pos: Vec2) -> Enemy {
        Enemy {
            pos,
            direction: Vec2::X,
            radius: 12.0,
            speed: 0.0,
            spin: 0.0,
            angle: 0.0,
            color: RED,
        }
    }

    fn dash() -> InputState {
        InputState {
            dash: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_not_playing_is_noop() {
        let mut state = GameState::new(1, 0);
        let before = state.time_alive;
        update_playing(&mut state, &InputState::default(), DT);
        assert_eq!(state.time_alive, before);
        assert_eq!(state.screen, Screen::Menu);
    }

    #[test]
    fn test_lethal_collision_ends_run() {
        let mut state = quiet_state(42);
        state.best_score = 7;
        let pos = state.player.pos;
        state.enemies.push(drone_at(pos));
        assert!(state.player.can_be_hit());

        update_playing(&mut state, &InputState::default(), DT);

        assert_eq!(state.screen, Screen::GameOver);
        assert!(!state.player.alive);
        assert!(state.best_score >= 7);
        assert!(state.shake.is_active());
        let events = state.drain_events();
        assert!(matches!(
            events.last(),
            Some(GameEvent::PlayerKilled { new_best: false, best_score: 7, .. })
        ));
    }

    #[test]
    fn test_first_lethal_hit_stops_processing() {
        let mut state = quiet_state(4);
        let pos = state.player.pos;
        state.enemies.push(drone_at(pos));
        state.enemies.push(drone_at(pos + Vec2::new(5.0, 0.0)));

        update_playing(&mut state, &InputState::default(), DT);

        let kills = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerKilled { .. }))
            .count();
        assert_eq!(kills, 1);
        // Second drone untouched by pushback
        assert_eq!(state.enemies[1].speed, 0.0);
    }

    #[test]
    fn test_new_best_on_death() {
        let mut state = quiet_state(8);
        state.best_score = 50;
        state.score = 120;
        let pos = state.player.pos;
        state.enemies.push(drone_at(pos));

        update_playing(&mut state, &InputState::default(), DT);
        assert_eq!(state.best_score, 120);
        assert!(matches!(
            state.drain_events().last(),
            Some(GameEvent::PlayerKilled { new_best: true, .. })
        ));
    }

    #[test]
    fn test_invulnerable_player_repels_enemies() {
        let mut state = quiet_state(10);
        let pos = state.player.pos;
        let mut left = drone_at(pos - Vec2::new(10.0, 0.0));
        left.speed = 200.0;
        let mut right = drone_at(pos + Vec2::new(10.0, 0.0));
        right.speed = 200.0;
        state.enemies.push(left);
        state.enemies.push(right);

        // Trigger the dash this frame: invulnerable before collisions run
        update_playing(&mut state, &dash(), DT);

        assert_eq!(state.screen, Screen::Playing);
        assert!(state.player.alive);
        assert_eq!(state.score, 2 * PUSHBACK_SCORE);
        for e in &state.enemies {
            assert!((e.speed - 200.0 * PUSHBACK_SLOWDOWN).abs() < 1e-3);
            // Heading points away from the player
            assert!(e.direction.dot(e.pos - state.player.pos) > 0.0);
        }
    }

    #[test]
    fn test_pushback_compounds_across_frames() {
        let mut state = quiet_state(12);
        let pos = state.player.pos;
        let mut e = drone_at(pos + Vec2::new(5.0, 0.0));
        e.speed = 100.0;
        state.enemies.push(e);

        update_playing(&mut state, &dash(), DT);
        // Pin the drone back onto the player to overlap again
        state.enemies[0].pos = state.player.pos + Vec2::new(5.0, 0.0);
        update_playing(&mut state, &InputState::default(), DT);

        let expected = 100.0 * PUSHBACK_SLOWDOWN * PUSHBACK_SLOWDOWN;
        assert!((state.enemies[0].speed - expected).abs() < 1e-3);
        assert_eq!(state.score, 2 * PUSHBACK_SCORE);
    }

    #[test]
    fn test_orb_pickup_and_combo() {
        let mut state = quiet_state(20);
        let pos = state.player.pos;
        state.orbs.push(EnergyOrb::at(pos, 0.0));
        state.orbs.push(EnergyOrb::at(pos + Vec2::new(5.0, 0.0), 0.0));
        state.orbs.push(EnergyOrb::at(Vec2::new(60.0, 60.0), 0.0));

        update_playing(&mut state, &InputState::default(), DT);

        // 25 + (25 + 5)
        assert_eq!(state.score, 55);
        assert_eq!(state.combo, 2);
        assert!(state.combo_timer.active());
        assert_eq!(state.orbs.len(), 1);
        assert_eq!(state.orbs[0].pos, Vec2::new(60.0, 60.0));

        // Consumed orbs are gone; nothing more to collect
        update_playing(&mut state, &InputState::default(), DT);
        assert_eq!(state.score, 55);
    }

    #[test]
    fn test_combo_expires() {
        let mut state = quiet_state(21);
        let pos = state.player.pos;
        state.orbs.push(EnergyOrb::at(pos, 0.0));
        update_playing(&mut state, &InputState::default(), DT);
        assert_eq!(state.combo, 1);

        // 2.0s window elapses
        for _ in 0..41 {
            update_playing(&mut state, &InputState::default(), 0.05);
        }
        assert_eq!(state.combo, 0);

        state.orbs.push(EnergyOrb::at(state.player.pos, 0.0));
        let before = state.score;
        update_playing(&mut state, &InputState::default(), DT);
        assert_eq!(state.score - before, ORB_VALUE);
        assert_eq!(state.combo, 1);
    }

    #[test]
    fn test_level_up_crossing_ten_seconds() {
        let mut state = quiet_state(30);
        state.time_alive = 9.99;
        let before = state.score;

        update_playing(&mut state, &InputState::default(), 0.02);

        assert_eq!(state.difficulty_level, 2);
        assert_eq!(state.next_difficulty_time, 20.0);
        let passive = (0.02 * PASSIVE_SCORE_RATE) as u64;
        assert_eq!(state.score - before, LEVEL_UP_SCORE + passive);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::LevelUp { level: 2 })
        );
    }

    #[test]
    fn test_passive_score_truncates_per_frame() {
        let mut state = quiet_state(31);
        for _ in 0..660 {
            update_playing(&mut state, &InputState::default(), DT);
        }
        // 11 simulated seconds at 60 FPS: dt * 6 = 0.1 truncates to zero
        // every frame; only the level-up bonus lands
        assert_eq!(state.score, LEVEL_UP_SCORE);
    }

    #[test]
    fn test_enemy_spawn_timer() {
        let mut state = GameState::new(40, 0);
        state.screen = Screen::Playing;
        let initial = state.enemies.len();
        // Initial timer is 0.6s
        for _ in 0..13 {
            update_playing(&mut state, &InputState::default(), 0.05);
            if state.screen != Screen::Playing {
                return;
            }
        }
        assert!(state.enemies.len() > initial);
        assert!(state.spawn_enemy_timer.active());
    }

    #[test]
    fn test_orb_spawns_capped() {
        let mut state = quiet_state(41);
        state.spawn_orb_timer.start(0.0);
        // Keep orbs far from the player so nothing is collected
        state.player.pos = Vec2::new(16.0, 16.0);
        for _ in 0..3 {
            state.orbs.push(EnergyOrb::at(Vec2::new(900.0, 500.0), 0.0));
        }
        update_playing(&mut state, &InputState::default(), DT);
        assert_eq!(state.orbs.len(), MAX_ORBS);
        assert!(!state.spawn_orb_timer.active());

        state.orbs.pop();
        update_playing(&mut state, &InputState::default(), DT);
        assert_eq!(state.orbs.len(), MAX_ORBS);
        assert!(state.spawn_orb_timer.active());
    }

    #[test]
    fn test_trail_emission() {
        let mut state = quiet_state(50);
        state.player.vel = Vec2::new(300.0, 0.0);
        let input = InputState {
            right: true,
            ..Default::default()
        };
        // Speed stays above 250 while holding right (lerps toward 280)
        update_playing(&mut state, &input, 0.04);
        let trail: Vec<_> = state
            .particles
            .iter()
            .filter(|p| p.max_life == TRAIL_LIFE)
            .collect();
        assert_eq!(trail.len(), 2);
        for p in trail {
            // Behind the player (player moves +x)
            assert!(p.pos.x < state.player.pos.x);
        }
        assert!(state.player.trail_accum < TRAIL_INTERVAL);
    }

    #[test]
    fn test_no_trail_when_slow() {
        let mut state = quiet_state(51);
        update_playing(&mut state, &InputState::default(), 0.05);
        assert!(state.particles.is_empty());
        assert_eq!(state.player.trail_accum, 0.0);
    }

    #[test]
    fn test_dash_grants_exact_invulnerability() {
        let mut state = quiet_state(60);
        update_playing(&mut state, &dash(), 0.01);
        assert!(state.player.dash_timer.active());
        assert!(state.player.dash_cooldown.active());
        assert!(!state.player.can_be_hit());

        // 0.16s more: still inside the 0.18s window
        for _ in 0..16 {
            update_playing(&mut state, &InputState::default(), 0.01);
        }
        assert!(!state.player.can_be_hit());
        update_playing(&mut state, &InputState::default(), 0.011);
        assert!(state.player.can_be_hit());
    }

    #[test]
    fn test_shake_decays_to_zero() {
        let mut state = quiet_state(70);
        state.shake.add(4.0, 0.08);
        for _ in 0..2 {
            update_playing(&mut state, &InputState::default(), 0.05);
        }
        assert_eq!(state.shake.time_left, 0.0);
        assert_eq!(state.shake.strength, 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn invariants_hold_over_random_play(
                seed in 0u64..500,
                moves in proptest::collection::vec(0u8..32, 50..300)
            ) {
                let mut state = GameState::new(seed, 0);
                state.screen = Screen::Playing;
                let mut last_level = state.difficulty_level;
                let mut last_score = state.score;

                for bits in moves {
                    let input = InputState {
                        up: bits & 1 != 0,
                        down: bits & 2 != 0,
                        left: bits & 4 != 0,
                        right: bits & 8 != 0,
                        dash: bits & 16 != 0,
                    };
                    update_playing(&mut state, &input, MAX_FRAME_DT);

                    prop_assert!(state.enemies.len() <= MAX_ENEMIES);
                    prop_assert!(state.orbs.len() <= MAX_ORBS);
                    prop_assert!(state.difficulty_level >= last_level);
                    prop_assert!(state.score >= last_score);
                    prop_assert!(state.enemies.iter().all(|e| e.pos.is_finite()));
                    prop_assert!(state.orbs.iter().all(|o| o.pos.is_finite()));
                    prop_assert!(state.particles.iter().all(|p| p.pos.is_finite()));
                    last_level = state.difficulty_level;
                    last_score = state.score;

                    if state.screen == Screen::GameOver {
                        prop_assert!(!state.player.alive);
                        prop_assert!(state.best_score >= state.score);
                        break;
                    }
                }
            }
        }
    }
}
