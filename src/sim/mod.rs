//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Single-threaded, one step at a time
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, resolve_collisions};
pub use rect::{Rect, overlaps};
pub use spawn::{difficulty_for_time, run_spawner, speed_multiplier};
pub use state::{
    GamePhase, GameState, Obstacle, ObstacleKind, Player, PowerUp, PowerUpKind, Projectile,
};
pub use tick::{InputIntent, TickEvents, advance_entities, tick};
