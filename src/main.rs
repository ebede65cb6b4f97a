//! Fan Frenzy headless host
//!
//! Runs a session at a fixed 60 Hz with the demo autopilot and prints the
//! final frame as JSON. Usage: `fan-frenzy [tuning.json]`

use fan_frenzy::sim::autopilot;
use fan_frenzy::{GameSession, HudText, Tuning};

/// Host frame rate
const FRAME_DT: f32 = 1.0 / 60.0;
/// Longest demo run in simulated seconds
const MAX_RUN_SECS: f32 = 300.0;
/// How often to log the HUD
const REPORT_EVERY_FRAMES: u32 = 5 * 60;
/// Host-side clamp on frame deltas
const MAX_FRAME_DT: f32 = 0.1;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut session = GameSession::new(tuning, seed);

    let max_frames = (MAX_RUN_SECS / FRAME_DT) as u32;
    for frame in 1..=max_frames {
        let input = autopilot::intent(session.state(), session.tuning());
        let result = session.step(FRAME_DT.min(MAX_FRAME_DT), &input);

        if frame % REPORT_EVERY_FRAMES == 0 {
            log::info!("{}", HudText::from_result(&result).summary());
        }
        if !result.running {
            break;
        }
    }

    let result = session.view();
    if let Some(banner) = HudText::from_result(&result).game_over {
        log::info!("{}", banner);
    }
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}
