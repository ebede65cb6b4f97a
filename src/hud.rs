//! HUD text formatting
//!
//! Pure string helpers for whatever draws the overlay. Nothing here feeds
//! back into the simulation.

use crate::session::StepResult;

/// Clock-style `m:ss`
pub fn clock(secs: f32) -> String {
    let secs = secs.max(0.0);
    let minutes = (secs / 60.0).floor() as u32;
    let seconds = (secs % 60.0).floor() as u32;
    format!("{}:{:02}", minutes, seconds)
}

/// Stopwatch-style `m:ss.cc` for the big timer
pub fn stopwatch(secs: f32) -> String {
    let secs = secs.max(0.0);
    let centis = ((secs % 1.0) * 100.0).floor() as u32;
    format!("{}.{:02}", clock(secs), centis.min(99))
}

/// Levels are shown 1-based
pub fn level_label(level: u32) -> String {
    format!("Level {}", level + 1)
}

/// Banner for the double-score modifier, hidden when inactive
pub fn double_score_label(active: bool, remaining: f32) -> Option<String> {
    active.then(|| format!("Double Points! {}s", remaining.ceil() as u32))
}

/// All HUD lines for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub lives: String,
    pub time: String,
    pub big_timer: String,
    pub level: String,
    pub double_score: Option<String>,
    /// Shown over the field once the run ends
    pub game_over: Option<String>,
}

impl HudText {
    pub fn from_result(result: &StepResult<'_>) -> Self {
        Self {
            score: format!("Score: {}", result.score),
            lives: format!("Lives: {}", result.lives),
            time: format!("Time: {}", clock(result.elapsed)),
            big_timer: stopwatch(result.elapsed),
            level: level_label(result.difficulty),
            double_score: double_score_label(
                result.double_score_active,
                result.double_score_remaining,
            ),
            game_over: (!result.running)
                .then(|| format!("Game over! Final score: {}", result.score)),
        }
    }

    /// Single-line summary for logs
    pub fn summary(&self) -> String {
        let mut line = format!("{} | {} | {} | {}", self.score, self.lives, self.time, self.level);
        if let Some(ds) = &self.double_score {
            line.push_str(" | ");
            line.push_str(ds);
        }
        line
    }
}
