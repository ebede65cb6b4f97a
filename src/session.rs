//! Game session: the host-facing frame entry point
//!
//! Owns the tuning and the whole simulation state. The host calls
//! [`GameSession::step`] once per display frame and renders the returned view.

use serde::Serialize;

use crate::sim::{
    GamePhase, GameState, InputIntent, Obstacle, Player, PowerUp, Projectile, TickEvents, tick,
};
use crate::tuning::Tuning;

/// Default run seed
pub const DEFAULT_SEED: u64 = 0x5EED_F4A5;

/// Read-only view of the session after a step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult<'a> {
    pub player: &'a Player,
    pub projectiles: &'a [Projectile],
    pub obstacles: &'a [Obstacle],
    pub powerups: &'a [PowerUp],
    pub score: u64,
    pub lives: u8,
    pub elapsed: f32,
    pub difficulty: u32,
    pub double_score_active: bool,
    pub double_score_remaining: f32,
    pub running: bool,
}

impl<'a> StepResult<'a> {
    fn from_state(state: &'a GameState) -> Self {
        Self {
            player: &state.player,
            projectiles: &state.projectiles,
            obstacles: &state.obstacles,
            powerups: &state.powerups,
            score: state.score,
            lives: state.lives,
            elapsed: state.elapsed,
            difficulty: state.difficulty,
            double_score_active: state.double_score_active(),
            double_score_remaining: state.double_score_remaining,
            running: state.is_running(),
        }
    }
}

/// One game from reset to game over (and beyond, via reset)
#[derive(Debug, Clone)]
pub struct GameSession {
    tuning: Tuning,
    state: GameState,
    last_events: TickEvents,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Tuning::default(), DEFAULT_SEED)
    }
}

impl GameSession {
    /// Start a session. Tuning that fails validation is replaced by the defaults.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({})", e);
                Tuning::default()
            }
        };
        let state = GameState::new(&tuning, seed);
        log::info!("New session (seed {:#x})", seed);
        Self {
            tuning,
            state,
            last_events: TickEvents::default(),
        }
    }

    /// Advance one frame. Once the run is over this returns the frozen view.
    pub fn step(&mut self, dt: f32, input: &InputIntent) -> StepResult<'_> {
        self.last_events = tick(&mut self.state, &self.tuning, input, dt);
        StepResult::from_state(&self.state)
    }

    /// Start over with the same seed, discarding every entity
    pub fn reset(&mut self) {
        self.reset_with_seed(self.state.seed);
    }

    /// Start over with a new seed
    pub fn reset_with_seed(&mut self, seed: u64) {
        log::info!("Session reset (seed {:#x})", seed);
        self.state = GameState::new(&self.tuning, seed);
        self.last_events = TickEvents::default();
    }

    /// Current view without stepping
    pub fn view(&self) -> StepResult<'_> {
        StepResult::from_state(&self.state)
    }

    /// Events from the most recent step
    pub fn last_events(&self) -> TickEvents {
        self.last_events
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
