//! Collision resolution
//!
//! Runs once per step after motion, in a fixed order:
//! 1. obstacles breaching the bottom edge
//! 2. projectiles vs obstacles
//! 3. obstacles vs player
//! 4. power-ups vs player
//!
//! Each phase builds the surviving set and swaps it in wholesale, so an
//! entity can only be consumed by one event per step.

use super::rect::overlaps;
use super::state::{GameState, Obstacle, PowerUp, PowerUpKind, Projectile};
use crate::consts::{BREACH_MARGIN, RETIRE_OFFSET};
use crate::tuning::Tuning;

/// What happened during one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Obstacles that fell past the bottom edge
    pub breaches: u32,
    /// Obstacles destroyed by projectiles
    pub kills: u32,
    /// Obstacles that struck the player
    pub player_hits: u32,
    /// Power-ups collected
    pub pickups: u32,
    pub score_gained: u64,
}

/// Resolve every interaction for this step
pub fn resolve_collisions(state: &mut GameState, tuning: &Tuning) -> CollisionReport {
    let mut report = CollisionReport::default();

    resolve_breaches(state, tuning, &mut report);
    if !state.is_running() {
        return report;
    }

    resolve_projectile_hits(state, tuning, &mut report);

    resolve_player_hits(state, tuning, &mut report);
    if !state.is_running() {
        return report;
    }

    resolve_pickups(state, tuning, &mut report);
    report
}

/// Obstacles whose top passed the breach line cost a life each.
/// Retired obstacles are dropped without penalty.
fn resolve_breaches(state: &mut GameState, tuning: &Tuning, report: &mut CollisionReport) {
    let breach_y = tuning.field_height + BREACH_MARGIN;
    let mut kept: Vec<Obstacle> = Vec::with_capacity(state.obstacles.len());

    for obstacle in std::mem::take(&mut state.obstacles) {
        if obstacle.rect.top() <= breach_y {
            kept.push(obstacle);
            continue;
        }
        if obstacle.retired {
            continue;
        }
        report.breaches += 1;
        log::debug!("Obstacle {} breached", obstacle.id);
        state.lose_life();
    }

    state.obstacles = kept;
}

/// First overlapping projectile wins; both are removed and the hit scores.
fn resolve_projectile_hits(state: &mut GameState, tuning: &Tuning, report: &mut CollisionReport) {
    let award = if state.double_score_active() {
        tuning.base_score * 2
    } else {
        tuning.base_score
    };

    let mut consumed = vec![false; state.projectiles.len()];
    let mut kept: Vec<Obstacle> = Vec::with_capacity(state.obstacles.len());

    for obstacle in std::mem::take(&mut state.obstacles) {
        if obstacle.retired {
            kept.push(obstacle);
            continue;
        }

        let hit = state
            .projectiles
            .iter()
            .enumerate()
            .find(|(i, p)| !consumed[*i] && overlaps(&p.rect, &obstacle.rect))
            .map(|(i, _)| i);

        match hit {
            Some(i) => {
                consumed[i] = true;
                state.score += award;
                report.kills += 1;
                report.score_gained += award;
                log::debug!("Obstacle {} destroyed (+{})", obstacle.id, award);
            }
            None => kept.push(obstacle),
        }
    }

    state.obstacles = kept;
    if report.kills > 0 {
        let projectiles: Vec<Projectile> = std::mem::take(&mut state.projectiles)
            .into_iter()
            .zip(consumed)
            .filter_map(|(p, used)| (!used).then_some(p))
            .collect();
        state.projectiles = projectiles;
    }
}

/// Obstacles touching the player cost a life and are parked below the field
fn resolve_player_hits(state: &mut GameState, tuning: &Tuning, report: &mut CollisionReport) {
    let player = state.player.bounds();
    let retire_y = tuning.field_height + RETIRE_OFFSET;

    for i in 0..state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        if obstacle.retired || !overlaps(&player, &obstacle.rect) {
            continue;
        }
        obstacle.retired = true;
        obstacle.rect.pos.y = retire_y;
        log::debug!("Obstacle {} hit the player", obstacle.id);

        report.player_hits += 1;
        state.lose_life();
        if !state.is_running() {
            break;
        }
    }
}

/// Power-ups touching the player apply their effect and vanish
fn resolve_pickups(state: &mut GameState, tuning: &Tuning, report: &mut CollisionReport) {
    let player = state.player.bounds();
    let mut kept: Vec<PowerUp> = Vec::with_capacity(state.powerups.len());

    for powerup in std::mem::take(&mut state.powerups) {
        if !overlaps(&player, &powerup.rect) {
            kept.push(powerup);
            continue;
        }
        match powerup.kind {
            PowerUpKind::DoubleScore => {
                state.double_score_remaining = tuning.double_score_duration;
            }
        }
        report.pickups += 1;
        log::debug!("Collected {:?}", powerup.kind);
    }

    state.powerups = kept;
}
