//! Obstacle and power-up spawning
//!
//! A fixed-interval accumulator drops fans from the top edge. Fall speed
//! follows a step schedule over the difficulty level.

use rand::Rng;

use super::rect::Rect;
use super::state::{GameState, Obstacle, ObstacleKind, PowerUp, PowerUpKind};
use crate::consts::{FIRST_LEVEL_SPEED_MULTIPLIER, MAX_SPAWNS_PER_STEP, SPEED_MULTIPLIER_STEP};
use crate::tuning::Tuning;

/// Fall speed multiplier for a difficulty level.
///
/// Level 0 runs slow, level 1 is nominal, and each level after adds a fixed step.
pub fn speed_multiplier(level: u32) -> f32 {
    if level == 0 {
        FIRST_LEVEL_SPEED_MULTIPLIER
    } else {
        1.0 + (level - 1) as f32 * SPEED_MULTIPLIER_STEP
    }
}

/// Difficulty level reached after `elapsed` seconds
pub fn difficulty_for_time(elapsed: f32, tuning: &Tuning) -> u32 {
    let level = (elapsed / tuning.difficulty_period).floor().max(0.0) as u32;
    level.min(tuning.max_difficulty)
}

/// Advance the spawn accumulator and emit whatever is due.
///
/// Returns the number of obstacles spawned. A long `dt` can spawn several,
/// up to [`MAX_SPAWNS_PER_STEP`]; the rest of the backlog is discarded.
pub fn run_spawner(state: &mut GameState, tuning: &Tuning, dt: f32) -> u32 {
    state.spawn_timer += dt;
    if state.spawn_timer.is_nan() {
        state.spawn_timer = 0.0;
        return 0;
    }
    if state.spawn_timer < tuning.spawn_interval {
        return 0;
    }

    let due = (state.spawn_timer / tuning.spawn_interval).floor();
    state.spawn_timer = if state.spawn_timer.is_finite() {
        state.spawn_timer.rem_euclid(tuning.spawn_interval)
    } else {
        0.0
    };

    let count = if due.is_finite() && due < MAX_SPAWNS_PER_STEP as f32 {
        due as u32
    } else {
        log::warn!("Spawn backlog of {} capped at {}", due, MAX_SPAWNS_PER_STEP);
        MAX_SPAWNS_PER_STEP
    };
    for _ in 0..count {
        spawn_obstacle(state, tuning);
    }
    count
}

/// Drop one obstacle at the top edge, maybe with a power-up alongside
pub fn spawn_obstacle(state: &mut GameState, tuning: &Tuning) {
    let size = sample(&mut state.rng, tuning.obstacle_size_min, tuning.obstacle_size_max);
    let x = sample(&mut state.rng, 0.0, tuning.field_width - size);
    let base_speed = sample(&mut state.rng, tuning.obstacle_speed_min, tuning.obstacle_speed_max)
        * tuning.obstacle_speed_scale;
    let vel_y = base_speed * speed_multiplier(state.difficulty);

    let kind = if state.rng.random_bool(tuning.diagonal_chance) {
        let magnitude = sample(&mut state.rng, tuning.diagonal_speed_min, tuning.diagonal_speed_max);
        let vel_x = if state.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        ObstacleKind::Diagonal { vel_x }
    } else {
        ObstacleKind::Straight
    };

    let id = state.next_entity_id();
    log::debug!("Spawn obstacle {} {:?} size={:.0} x={:.0} vy={:.2}", id, kind, size, x, vel_y);
    state.obstacles.push(Obstacle {
        id,
        kind,
        rect: Rect::new(x, -size, size, size),
        vel_y,
        retired: false,
    });

    if state.rng.random_bool(tuning.powerup_chance) {
        spawn_powerup(state, tuning, PowerUpKind::DoubleScore);
    }
}

/// Drop a power-up at a random column along the top edge
pub fn spawn_powerup(state: &mut GameState, tuning: &Tuning, kind: PowerUpKind) {
    let size = tuning.powerup_size;
    let x = sample(&mut state.rng, 0.0, tuning.field_width - size);
    let id = state.next_entity_id();
    log::debug!("Spawn power-up {} {:?} x={:.0}", id, kind, x);
    state.powerups.push(PowerUp {
        id,
        kind,
        rect: Rect::new(x, -size, size, size),
        vel_y: tuning.powerup_speed,
    });
}

/// Uniform sample in `[min, max)`, tolerating an empty range
fn sample(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_schedule() {
        assert_eq!(speed_multiplier(0), 0.7);
        assert_eq!(speed_multiplier(1), 1.0);
        assert!((speed_multiplier(2) - 1.2).abs() < 1e-6);
        assert!((speed_multiplier(5) - 1.8).abs() < 1e-6);
        for level in 0..10 {
            assert!(speed_multiplier(level + 1) >= speed_multiplier(level));
        }
    }

    #[test]
    fn test_difficulty_for_time() {
        let tuning = Tuning::default();
        assert_eq!(difficulty_for_time(0.0, &tuning), 0);
        assert_eq!(difficulty_for_time(14.99, &tuning), 0);
        assert_eq!(difficulty_for_time(15.0, &tuning), 1);
        assert_eq!(difficulty_for_time(61.0, &tuning), 4);
        assert_eq!(difficulty_for_time(10_000.0, &tuning), 5);
    }

    #[test]
    fn test_spawner_accumulates() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 1);
        assert_eq!(run_spawner(&mut state, &tuning, 0.5), 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(run_spawner(&mut state, &tuning, 0.1), 1);
        assert_eq!(state.obstacles.len(), 1);
        // Excess carries over
        assert!(state.spawn_timer < tuning.spawn_interval);
    }

    #[test]
    fn test_large_delta_spawns_many() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 1);
        let spawned = run_spawner(&mut state, &tuning, 5.2);
        assert_eq!(spawned, 10);
        assert_eq!(state.obstacles.len(), 10);
    }

    #[test]
    fn test_huge_delta_is_bounded() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 1);
        assert_eq!(run_spawner(&mut state, &tuning, 1.0e8), MAX_SPAWNS_PER_STEP);
        assert_eq!(state.obstacles.len(), MAX_SPAWNS_PER_STEP as usize);
        assert!(state.spawn_timer >= 0.0 && state.spawn_timer < tuning.spawn_interval);

        // Still ticks normally afterwards
        state.spawn_timer = 0.0;
        assert_eq!(run_spawner(&mut state, &tuning, 0.6), 1);
    }

    #[test]
    fn test_infinite_delta_is_bounded() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 1);
        assert_eq!(run_spawner(&mut state, &tuning, f32::INFINITY), MAX_SPAWNS_PER_STEP);
        assert_eq!(state.spawn_timer, 0.0);
        assert_eq!(run_spawner(&mut state, &tuning, 0.1), 0);
    }

    #[test]
    fn test_obstacles_within_bounds() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 42);
        for _ in 0..500 {
            spawn_obstacle(&mut state, &tuning);
        }
        for o in &state.obstacles {
            assert!(o.rect.size.x >= tuning.obstacle_size_min);
            assert!(o.rect.size.x < tuning.obstacle_size_max);
            assert!(o.rect.left() >= 0.0);
            assert!(o.rect.right() <= tuning.field_width);
            assert_eq!(o.rect.bottom(), 0.0);
            assert!(o.vel_y > 0.0);
            if let ObstacleKind::Diagonal { vel_x } = o.kind {
                assert!(vel_x.abs() >= tuning.diagonal_speed_min);
                assert!(vel_x.abs() <= tuning.diagonal_speed_max);
            }
        }
        // 500 rolls at 9% - at least one diagonal
        assert!(state.obstacles.iter().any(|o| o.is_diagonal()));
        for p in &state.powerups {
            assert_eq!(p.vel_y, tuning.powerup_speed);
            assert!(p.rect.right() <= tuning.field_width);
        }
    }

    #[test]
    fn test_speed_scales_with_difficulty() {
        let mut tuning = Tuning::default();
        tuning.obstacle_speed_min = 2.0;
        tuning.obstacle_speed_max = 2.0;
        tuning.obstacle_speed_scale = 1.0;
        let mut state = GameState::new(&tuning, 3);
        spawn_obstacle(&mut state, &tuning);
        state.difficulty = 3;
        spawn_obstacle(&mut state, &tuning);
        assert!((state.obstacles[0].vel_y - 1.4).abs() < 1e-5);
        assert!((state.obstacles[1].vel_y - 2.8).abs() < 1e-5);
    }

    #[test]
    fn test_powerup_always_with_full_chance() {
        let mut tuning = Tuning::default();
        tuning.powerup_chance = 1.0;
        let mut state = GameState::new(&tuning, 3);
        spawn_obstacle(&mut state, &tuning);
        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.powerups[0].kind, PowerUpKind::DoubleScore);
    }
}
