//! Game balance and play field configuration
//!
//! Every gameplay constant can be overridden from a JSON document. Missing
//! fields fall back to the values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    /// Tuning file could not be read
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    /// Tuning document is not valid JSON for [`Tuning`]
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// Values parsed but are out of range
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Per-frame velocities (parity) vs. elapsed-time scaled motion
    pub frame_locked_motion: bool,

    // === Player ===
    pub player_size: f32,
    pub player_bottom_offset: f32,
    pub player_speed: f32,

    // === Projectiles ===
    pub projectile_size: f32,
    pub projectile_speed: f32,
    pub fire_interval: f32,

    // === Obstacles ===
    pub spawn_interval: f32,
    pub obstacle_size_min: f32,
    pub obstacle_size_max: f32,
    pub obstacle_speed_min: f32,
    pub obstacle_speed_max: f32,
    pub obstacle_speed_scale: f32,
    pub diagonal_chance: f64,
    pub diagonal_speed_min: f32,
    pub diagonal_speed_max: f32,

    // === Power-ups ===
    pub powerup_chance: f64,
    pub powerup_size: f32,
    pub powerup_speed: f32,
    pub double_score_duration: f32,

    // === Scoring and difficulty ===
    pub base_score: u64,
    pub starting_lives: u8,
    pub difficulty_period: f32,
    pub max_difficulty: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            frame_locked_motion: true,

            player_size: PLAYER_SIZE,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            player_speed: PLAYER_SPEED,

            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            fire_interval: FIRE_INTERVAL,

            spawn_interval: SPAWN_INTERVAL,
            obstacle_size_min: OBSTACLE_SIZE_MIN,
            obstacle_size_max: OBSTACLE_SIZE_MAX,
            obstacle_speed_min: OBSTACLE_SPEED_MIN,
            obstacle_speed_max: OBSTACLE_SPEED_MAX,
            obstacle_speed_scale: OBSTACLE_SPEED_SCALE,
            diagonal_chance: DIAGONAL_CHANCE,
            diagonal_speed_min: DIAGONAL_SPEED_MIN,
            diagonal_speed_max: DIAGONAL_SPEED_MAX,

            powerup_chance: POWERUP_CHANCE,
            powerup_size: POWERUP_SIZE,
            powerup_speed: POWERUP_SPEED,
            double_score_duration: DOUBLE_SCORE_DURATION,

            base_score: BASE_SCORE,
            starting_lives: STARTING_LIVES,
            difficulty_period: DIFFICULTY_PERIOD,
            max_difficulty: MAX_DIFFICULTY,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from disk, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({})", e);
                Self::default()
            }
        }
    }

    /// Pretty JSON for saving or inspection
    pub fn to_json(&self) -> String {
        // Serializing plain numeric fields cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_size", self.player_size),
            ("projectile_size", self.projectile_size),
            ("fire_interval", self.fire_interval),
            ("spawn_interval", self.spawn_interval),
            ("obstacle_size_min", self.obstacle_size_min),
            ("powerup_size", self.powerup_size),
            ("difficulty_period", self.difficulty_period),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let ranges = [
            ("obstacle_size", self.obstacle_size_min, self.obstacle_size_max),
            ("obstacle_speed", self.obstacle_speed_min, self.obstacle_speed_max),
            ("diagonal_speed", self.diagonal_speed_min, self.diagonal_speed_max),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(TuningError::Invalid(format!(
                    "{name} range is inverted ({min} > {max})"
                )));
            }
        }

        for (name, p) in [
            ("diagonal_chance", self.diagonal_chance),
            ("powerup_chance", self.powerup_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }

        if self.obstacle_size_max >= self.field_width
            || self.powerup_size >= self.field_width
            || self.player_size > self.field_width
        {
            return Err(TuningError::Invalid(
                "entities must fit inside the field width".to_string(),
            ));
        }

        if self.starting_lives == 0 {
            return Err(TuningError::Invalid(
                "starting_lives must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Player centre height
    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_bottom_offset
    }
}
