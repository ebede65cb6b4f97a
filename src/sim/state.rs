//! Game state and core simulation types
//!
//! Everything a step mutates lives in [`GameState`]. Entities are flat
//! records; kind-specific data rides on closed enums.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Out of lives; absorbing until reset
    GameOver,
}

/// The player's head, anchored near the bottom of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Centre point
    pub pos: Vec2,
    pub half_extents: Vec2,
    /// Horizontal units per frame
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let half = tuning.player_size / 2.0;
        Self {
            pos: Vec2::new(tuning.field_width / 2.0, tuning.player_y()),
            half_extents: Vec2::splat(half),
            speed: tuning.player_speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.half_extents)
    }

    /// Keep the full body inside `[0, field_width]`
    pub fn clamp_to_field(&mut self, field_width: f32) {
        let hw = self.half_extents.x;
        self.pos.x = self.pos.x.clamp(hw, (field_width - hw).max(hw));
    }
}

/// A pear fired upward by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub rect: Rect,
    /// Vertical velocity (negative = upward)
    pub vel_y: f32,
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Falls straight down
    #[default]
    Straight,
    /// Drifts sideways, bouncing off the side walls
    Diagonal { vel_x: f32 },
}

/// A falling fan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Fall speed (positive = downward)
    pub vel_y: f32,
    /// Already hit the player; ignored by all further resolution
    #[serde(default)]
    pub retired: bool,
}

impl Obstacle {
    pub fn is_diagonal(&self) -> bool {
        matches!(self.kind, ObstacleKind::Diagonal { .. })
    }

    pub fn vel_x(&self) -> f32 {
        match self.kind {
            ObstacleKind::Straight => 0.0,
            ObstacleKind::Diagonal { vel_x } => vel_x,
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Hits score double for a while
    DoubleScore,
}

/// A falling pickup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub rect: Rect,
    pub vel_y: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Seconds of play while running
    pub elapsed: f32,
    /// Derived from `elapsed`; only ever rises
    pub difficulty: u32,
    /// Double-score countdown (active iff > 0)
    pub double_score_remaining: f32,
    /// Spawner accumulator
    pub spawn_timer: f32,
    /// Game time of the last shot
    pub last_shot: Option<f32>,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<PowerUp>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh running state with the given seed
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            lives: tuning.starting_lives,
            elapsed: 0.0,
            difficulty: 0,
            double_score_remaining: 0.0,
            spawn_timer: 0.0,
            last_shot: None,
            player: Player::new(tuning),
            projectiles: Vec::new(),
            obstacles: Vec::new(),
            powerups: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn double_score_active(&self) -> bool {
        self.double_score_remaining > 0.0
    }

    /// Lose one life, ending the run at zero
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 && self.phase == GamePhase::Running {
            log::info!(
                "Game over: score {} after {:.1}s (level {})",
                self.score,
                self.elapsed,
                self.difficulty + 1
            );
            self.phase = GamePhase::GameOver;
        }
    }
}
