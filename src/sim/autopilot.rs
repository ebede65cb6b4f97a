//! Idle/demo mode - AI plays the game
//!
//! Produces an [`InputIntent`] from the current state so a host can run
//! attract-mode or soak tests without a human.

use super::state::GameState;
use super::tick::InputIntent;
use crate::tuning::Tuning;

/// Choose the next input for the demo player.
///
/// Always fires. Tracks the lowest live obstacle; when nothing threatens the
/// lower half of the field it detours to the nearest falling power-up.
pub fn intent(state: &GameState, tuning: &Tuning) -> InputIntent {
    let threat = state
        .obstacles
        .iter()
        .filter(|o| !o.retired)
        .max_by(|a, b| {
            a.rect
                .bottom()
                .partial_cmp(&b.rect.bottom())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let threat_is_close = threat
        .map(|o| o.rect.bottom() > tuning.field_height / 2.0)
        .unwrap_or(false);

    let pickup = if threat_is_close {
        None
    } else {
        state.powerups.iter().min_by(|a, b| {
            let da = (a.rect.center().x - state.player.pos.x).abs();
            let db = (b.rect.center().x - state.player.pos.x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    };

    let pointer_x = pickup
        .map(|p| p.rect.center().x)
        .or_else(|| threat.map(|o| o.rect.center().x));

    InputIntent {
        move_left: false,
        move_right: false,
        firing: true,
        pointer_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Obstacle, ObstacleKind, PowerUp, PowerUpKind};

    fn push_obstacle(state: &mut GameState, x: f32, y: f32) {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Straight,
            rect: Rect::new(x, y, 80.0, 80.0),
            vel_y: 2.0,
            retired: false,
        });
    }

    fn push_powerup(state: &mut GameState, x: f32, y: f32) {
        let id = state.next_entity_id();
        state.powerups.push(PowerUp {
            id,
            kind: PowerUpKind::DoubleScore,
            rect: Rect::new(x, y, 35.0, 35.0),
            vel_y: 2.0,
        });
    }

    #[test]
    fn test_idle_field_just_fires() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning, 1);
        let input = intent(&state, &tuning);
        assert!(input.firing);
        assert_eq!(input.pointer_x, None);
    }

    #[test]
    fn test_tracks_lowest_obstacle() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 1);
        push_obstacle(&mut state, 100.0, 50.0);
        push_obstacle(&mut state, 600.0, 120.0);
        let input = intent(&state, &tuning);
        assert_eq!(input.pointer_x, Some(640.0));
    }

    #[test]
    fn test_prefers_pickup_when_safe() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 1);
        push_obstacle(&mut state, 600.0, 0.0);
        push_powerup(&mut state, 200.0, 100.0);
        let input = intent(&state, &tuning);
        assert_eq!(input.pointer_x, Some(217.5));
    }

    #[test]
    fn test_ignores_pickup_under_threat() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning, 1);
        push_obstacle(&mut state, 600.0, 300.0);
        push_powerup(&mut state, 200.0, 100.0);
        let input = intent(&state, &tuning);
        assert_eq!(input.pointer_x, Some(640.0));
    }
}
