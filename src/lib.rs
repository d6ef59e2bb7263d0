//! Chainshot - a grid arcade game of splitting enemy chains
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring)
//! - `renderer`: Semantic sprite extraction for the drawing layer
//! - `audio`: Sound event vocabulary and sink boundary
//! - `highscores`: Leaderboard with text-file persistence
//! - `settings`: Player preferences

pub mod audio;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions (pixels)
    pub const FIELD_W: f32 = 960.0;
    pub const FIELD_H: f32 = 960.0;
    /// Grid cell size (pixels); every actor occupies one cell-sized box
    pub const CELL: f32 = 32.0;
    pub const GAME_ROWS: usize = 30;
    pub const GAME_COLS: usize = 30;

    /// Top edge of the bottom band. Chain impacts below this line leave
    /// hazardous obstacles, and the detached-head spawner arms here.
    pub const BOTTOM_BAND_Y: f32 = FIELD_H - 6.0 * CELL;
    /// Lowest row an actor can occupy before the banded descent reverses
    pub const DESCENT_FLOOR_Y: f32 = FIELD_H - CELL;

    /// Player movement speed (pixels per second, scaled by frame time)
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Upper edge of the band reserved for the player (bottom 5 rows)
    pub const PLAYER_MIN_Y: f32 =
        (GAME_COLS as f32 - 5.0) / GAME_COLS as f32 * (FIELD_H - CELL);
    pub const START_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 6;
    pub const MAX_SCORE: u32 = 999_999;
    /// Seconds of invulnerability after taking a hit
    pub const INVULN_TIME: f32 = 2.0;
    /// Seconds between walk-cycle frames
    pub const ANIM_FRAME_TIME: f32 = 0.1;
    pub const PLAYER_FRAMES: u8 = 4;
    /// Cumulative score thresholds that grant an extra life
    pub const LIFE_THRESHOLDS: [u32; 3] = [10_000, 20_000, 50_000];

    /// Projectile step gate (seconds) and per-step rise (pixels)
    pub const PROJECTILE_GATE: f32 = 0.02;
    pub const PROJECTILE_STEP: f32 = 20.0;

    /// Chain layout and per-tick sub-pixel steps. Steps are constant per
    /// tick, not scaled by frame time: perceived speed is a function of the
    /// tick rate and that coupling is contractual.
    pub const CHAIN_LEN: usize = 12;
    pub const CHAIN_STEP: f32 = 0.1;
    pub const HEAD_POOL: usize = 12;
    pub const HEAD_STEP: f32 = 0.11;
    /// Seconds between detached-head spawns once armed
    pub const HEAD_SPAWN_COOLDOWN: f32 = 5.0;

    /// Obstacle field capacity (hard cap; overflow appends are dropped)
    pub const MAX_OBSTACLES: usize = 50;
    /// Initial obstacle count is drawn from [MIN_OBSTACLES, MIN + SPREAD]
    pub const MIN_OBSTACLES: usize = 20;
    pub const OBSTACLE_SPREAD: usize = 10;

    /// Roaming enemy per-tick steps
    pub const DROPPER_STEP: f32 = 0.1;
    pub const BOUNCER_STEP: f32 = 0.05;
    pub const SWEEPER_STEP: f32 = 0.2;
    /// Seconds the diagonal bouncer lingers on screen after a lethal hit
    pub const BOUNCER_LINGER: f32 = 0.5;
}

