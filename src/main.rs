//! Chainshot entry point
//!
//! Headless demo runner: drives the simulation with a scripted autopilot at
//! the fixed tick rate, drains sound events into the logging sink, and
//! records the final score on the high score table.
//!
//! Usage: `chainshot [seed] [max_ticks]`

use std::path::Path;

use rand::Rng;

use chainshot::audio::{AudioSink, LogSink};
use chainshot::consts::*;
use chainshot::renderer::sprite_batch;
use chainshot::sim::{GamePhase, GameState, TickInput, col_of, tick};
use chainshot::{HighScores, Settings};

const HIGH_SCORE_FILE: &str = "high_scores.txt";
const SETTINGS_FILE: &str = "settings.json";

/// Scripted input policy: chase the nearest live target's column and keep
/// the trigger held.
fn autopilot(state: &GameState) -> TickInput {
    let player_x = state.player.pos.x;

    let mut target_x: Option<f32> = None;
    let mut best = f32::MAX;
    for seg in state.chain.segments.iter().filter(|s| s.exists) {
        let d = (seg.pos.x - player_x).abs();
        if d < best {
            best = d;
            target_x = Some(seg.pos.x);
        }
    }
    for head in state.heads.heads.iter().filter(|h| h.exists) {
        let d = (head.pos.x - player_x).abs();
        if d < best {
            best = d;
            target_x = Some(head.pos.x);
        }
    }

    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };
    if let Some(x) = target_x {
        if col_of(x) < col_of(player_x) {
            input.left = true;
        } else if col_of(x) > col_of(player_x) {
            input.right = true;
        }
    }
    input
}

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    let max_ticks: u64 = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(120 * 300);

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let mut scores = HighScores::load(Path::new(HIGH_SCORE_FILE));
    if let Some(top) = scores.top_score() {
        log::info!("score to beat: {top}");
    }
    let mut sink = LogSink;
    let audible = settings.effective_sfx() > 0.0;

    log::info!("chainshot demo: seed={seed} max_ticks={max_ticks}");
    let mut state = GameState::new(seed);

    while state.phase != GamePhase::GameOver && state.time_ticks < max_ticks {
        let input = autopilot(&state);
        tick(&mut state, &input, SIM_DT);

        if audible {
            for &sound in &state.sounds {
                sink.play(sound);
            }
        }
        if settings.show_fps && state.time_ticks % 600 == 0 {
            log::debug!(
                "t={} score={} level={} lives={} sprites={}",
                state.time_ticks,
                state.player.score,
                state.level,
                state.player.lives,
                sprite_batch(&state).len()
            );
        }
    }

    log::info!(
        "demo finished: score={} level={} lives={} ticks={}",
        state.player.score,
        state.level,
        state.player.lives,
        state.time_ticks
    );

    if state.phase == GamePhase::GameOver {
        if let Some(rank) = scores.add_score(&settings.player_name, state.player.score) {
            log::info!("high score! rank {rank} for {}", settings.player_name);
            scores.save(Path::new(HIGH_SCORE_FILE));
        }
    }
}
