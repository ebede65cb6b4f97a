//! Fan Frenzy - A falling-fan arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, game state)
//! - `session`: Frame-step entry point for the host loop
//! - `tuning`: Data-driven game balance
//! - `hud`: Text formatting for the HUD layer

pub mod hud;
pub mod session;
pub mod sim;
pub mod tuning;

pub use hud::HudText;
pub use session::{GameSession, StepResult};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Frame rate that per-frame velocities are expressed against
    pub const REFERENCE_FPS: f32 = 60.0;

    /// Player defaults - centre sits 80 units above the bottom edge
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const PLAYER_BOTTOM_OFFSET: f32 = 80.0;
    pub const PLAYER_SPEED: f32 = 6.0;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: f32 = 40.0;
    pub const PROJECTILE_SPEED: f32 = 4.5;
    /// Spawn offset below the player centre (fired from the forehead)
    pub const PROJECTILE_SPAWN_OFFSET: f32 = 10.0;
    /// Projectiles are culled once their bottom edge is this far above the field
    pub const PROJECTILE_CULL_MARGIN: f32 = 10.0;
    /// Minimum seconds between shots
    pub const FIRE_INTERVAL: f32 = 0.22;

    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 0.51;
    /// Most obstacles a single step may spawn, however long its delta
    pub const MAX_SPAWNS_PER_STEP: u32 = 256;
    pub const OBSTACLE_SIZE_MIN: f32 = 76.0;
    pub const OBSTACLE_SIZE_MAX: f32 = 110.0;
    pub const OBSTACLE_SPEED_MIN: f32 = 1.6;
    pub const OBSTACLE_SPEED_MAX: f32 = 3.2;
    /// Global slow-down applied to every sampled fall speed
    pub const OBSTACLE_SPEED_SCALE: f32 = 0.85 * 0.97;
    pub const DIAGONAL_CHANCE: f64 = 0.09;
    pub const DIAGONAL_SPEED_MIN: f32 = 0.25;
    pub const DIAGONAL_SPEED_MAX: f32 = 1.5;

    /// Power-up defaults
    pub const POWERUP_CHANCE: f64 = 0.05;
    pub const POWERUP_SIZE: f32 = 35.0;
    pub const POWERUP_SPEED: f32 = 2.0;
    pub const DOUBLE_SCORE_DURATION: f32 = 10.0;

    /// Obstacles breach (and power-ups expire) this far below the field
    pub const BREACH_MARGIN: f32 = 40.0;
    /// Where an obstacle that hit the player is parked
    pub const RETIRE_OFFSET: f32 = 100.0;

    /// Scoring
    pub const BASE_SCORE: u64 = 10;
    pub const STARTING_LIVES: u8 = 3;

    /// Difficulty schedule
    pub const DIFFICULTY_PERIOD: f32 = 15.0;
    pub const MAX_DIFFICULTY: u32 = 5;
    /// Fall speed multiplier at level 0
    pub const FIRST_LEVEL_SPEED_MULTIPLIER: f32 = 0.7;
    /// Added per level from level 2 onward (level 1 is 1.0)
    pub const SPEED_MULTIPLIER_STEP: f32 = 0.2;
}
