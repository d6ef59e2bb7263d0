//! Game state and core simulation types
//!
//! One mutable aggregate owns every entity for a round; the per-tick update
//! pass in [`super::tick`] is its only writer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::chain::{Chain, HeadPool};
use super::enemies::{Bouncer, Dropper, Sweeper};
use super::field::ObstacleField;
use crate::audio::SoundEffect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused; a paused tick mutates nothing
    Paused,
    /// Run ended; terminal
    GameOver,
}

/// The player ship
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Top-left pixel position, clamped to the reserved bottom band
    pub pos: Vec2,
    pub lives: u8,
    pub score: u32,
    pub invulnerable: bool,
    /// Seconds of invulnerability remaining
    pub invuln_remaining: f32,
    /// Walk-cycle frame for the renderer
    pub anim_frame: u8,
    /// Seconds accumulated toward the next frame flip
    pub anim_clock: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(
                (GAME_COLS / 2) as f32 * CELL,
                (GAME_COLS - 1) as f32 * CELL,
            ),
            lives: START_LIVES,
            score: 0,
            invulnerable: false,
            invuln_remaining: 0.0,
            anim_frame: 0,
            anim_clock: 0.0,
        }
    }

    /// Apply one hit: lose a life and start the invulnerability window
    pub fn take_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.invulnerable = true;
        self.invuln_remaining = INVULN_TIME;
    }

    /// Decay invulnerability and advance the walk cycle
    pub fn update_timers(&mut self, dt: f32) {
        if self.invulnerable {
            self.invuln_remaining -= dt;
            if self.invuln_remaining <= 0.0 {
                self.invulnerable = false;
                self.invuln_remaining = 0.0;
            }
        }
        self.anim_clock += dt;
        if self.anim_clock >= ANIM_FRAME_TIME {
            self.anim_clock = 0.0;
            self.anim_frame = (self.anim_frame + 1) % PLAYER_FRAMES;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The single in-flight projectile
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec2,
    pub exists: bool,
}

impl Projectile {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            exists: false,
        }
    }

    /// Muzzle position for a shot fired from the player's current cell
    pub fn muzzle(player: &Player) -> Vec2 {
        player.pos + Vec2::new(CELL / 2.0 - 4.0, -CELL / 2.0)
    }
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete per-round simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The one RNG stream every placement draws from
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// 1-based level counter within the round
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,

    pub player: Player,
    pub projectile: Projectile,
    pub chain: Chain,
    pub heads: HeadPool,
    pub field: ObstacleField,
    pub dropper: Dropper,
    pub bouncer: Bouncer,
    pub sweeper: Sweeper,

    /// Chain start row for the current level (top 10 rows)
    pub start_row: usize,
    /// Seconds accumulated toward the next projectile step
    pub projectile_clock: f32,
    /// Highest score at which an extra life was granted. A single watermark:
    /// crossing two thresholds in one tick still grants one life.
    pub life_watermark: u32,
    /// Sound events raised this tick, drained by the audio boundary
    pub sounds: Vec<SoundEffect>,
}

impl GameState {
    /// Create a fresh round from the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let start_row = rng.random_range(0..10);

        let mut field = ObstacleField::new();
        field.spawn_random(&mut rng, start_row);

        let state = Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            level: 1,
            time_ticks: 0,
            player: Player::new(),
            projectile: Projectile::new(),
            chain: Chain::new(start_row, Self::start_col()),
            heads: HeadPool::new(),
            field,
            dropper: Dropper::new(),
            bouncer: Bouncer::new(),
            sweeper: Sweeper::new(),
            start_row,
            projectile_clock: 0.0,
            life_watermark: 0,
            sounds: Vec::new(),
        };
        log::info!("new round: seed={seed} start_row={start_row}");
        state
    }

    /// Column of the chain's leftmost starting slot
    pub fn start_col() -> usize {
        GAME_COLS - CHAIN_LEN
    }
}
