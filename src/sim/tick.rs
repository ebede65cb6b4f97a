//! Per-frame simulation tick
//!
//! Core game loop: clocks, player input, spawning, motion, then collisions.

use serde::{Deserialize, Serialize};

use super::collision::{CollisionReport, resolve_collisions};
use super::rect::Rect;
use super::spawn::{difficulty_for_time, run_spawner};
use super::state::{GameState, ObstacleKind, Projectile};
use crate::consts::{BREACH_MARGIN, PROJECTILE_CULL_MARGIN, PROJECTILE_SPAWN_OFFSET, REFERENCE_FPS};
use crate::tuning::Tuning;

/// Input snapshot for a single step, captured once by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputIntent {
    pub move_left: bool,
    pub move_right: bool,
    /// Fire held (keyboard or pointer button)
    pub firing: bool,
    /// Absolute horizontal target from the pointer
    pub pointer_x: Option<f32>,
}

/// Things that happened during a tick (for audio/effects on the host side)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub shot_fired: bool,
    pub spawned: u32,
    pub leveled_up: bool,
    pub double_score_expired: bool,
    pub collisions: CollisionReport,
}

/// Advance the game state by one frame of `dt` seconds.
///
/// A no-op once the run is over.
pub fn tick(state: &mut GameState, tuning: &Tuning, input: &InputIntent, dt: f32) -> TickEvents {
    let mut events = TickEvents::default();
    if !state.is_running() {
        return events;
    }
    let dt = dt.max(0.0);

    // Session clocks
    state.elapsed += dt;
    let level = difficulty_for_time(state.elapsed, tuning);
    if level > state.difficulty {
        log::info!("Difficulty up: level {} at {:.1}s", level + 1, state.elapsed);
        state.difficulty = level;
        events.leveled_up = true;
    }

    if state.double_score_remaining > 0.0 {
        state.double_score_remaining -= dt;
        if state.double_score_remaining <= 0.0 {
            state.double_score_remaining = 0.0;
            events.double_score_expired = true;
            log::debug!("Double score expired");
        }
    }

    let scale = motion_scale(tuning, dt);
    move_player(state, tuning, input, scale);
    events.shot_fired = try_fire(state, tuning, input);

    events.spawned = run_spawner(state, tuning, dt);
    advance_entities(state, tuning, scale);
    events.collisions = resolve_collisions(state, tuning);

    events
}

/// Displacement multiplier applied to per-frame velocities
pub fn motion_scale(tuning: &Tuning, dt: f32) -> f32 {
    if tuning.frame_locked_motion {
        1.0
    } else {
        dt * REFERENCE_FPS
    }
}

/// Pointer target first, then keyboard nudges, then clamp
fn move_player(state: &mut GameState, tuning: &Tuning, input: &InputIntent, scale: f32) {
    let player = &mut state.player;
    if let Some(x) = input.pointer_x {
        player.pos.x = x;
    }
    if input.move_left {
        player.pos.x -= player.speed * scale;
    }
    if input.move_right {
        player.pos.x += player.speed * scale;
    }
    player.clamp_to_field(tuning.field_width);
}

/// Fire if held and the cadence allows; returns whether a shot left
fn try_fire(state: &mut GameState, tuning: &Tuning, input: &InputIntent) -> bool {
    if !input.firing {
        return false;
    }
    if let Some(last) = state.last_shot {
        if state.elapsed - last < tuning.fire_interval {
            return false;
        }
    }

    let size = tuning.projectile_size;
    let id = state.next_entity_id();
    let origin = state.player.pos;
    state.projectiles.push(Projectile {
        id,
        rect: Rect::new(
            origin.x - size / 2.0,
            origin.y + PROJECTILE_SPAWN_OFFSET,
            size,
            size,
        ),
        vel_y: -tuning.projectile_speed,
    });
    state.last_shot = Some(state.elapsed);
    log::debug!("Shot {} at x={:.0}", id, origin.x);
    true
}

/// Linear motion for every entity, wall bounces, and off-field culling
pub fn advance_entities(state: &mut GameState, tuning: &Tuning, scale: f32) {
    for projectile in &mut state.projectiles {
        projectile.rect.pos.y += projectile.vel_y * scale;
    }
    state
        .projectiles
        .retain(|p| p.rect.bottom() > -PROJECTILE_CULL_MARGIN);

    let width = tuning.field_width;
    for obstacle in state.obstacles.iter_mut().filter(|o| !o.retired) {
        obstacle.rect.pos.y += obstacle.vel_y * scale;
        if let ObstacleKind::Diagonal { ref mut vel_x } = obstacle.kind {
            obstacle.rect.pos.x += *vel_x * scale;
            // Elastic bounce off the side walls only
            if obstacle.rect.left() < 0.0 {
                obstacle.rect.pos.x = 0.0;
                *vel_x = vel_x.abs();
            } else if obstacle.rect.right() > width {
                obstacle.rect.pos.x = width - obstacle.rect.size.x;
                *vel_x = -vel_x.abs();
            }
        }
    }

    let expire_y = tuning.field_height + BREACH_MARGIN;
    for powerup in &mut state.powerups {
        powerup.rect.pos.y += powerup.vel_y * scale;
    }
    state.powerups.retain(|p| p.rect.top() < expire_y);
}
