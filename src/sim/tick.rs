//! Fixed timestep simulation tick
//!
//! One tick advances every entity in a fixed order; the tick is the unit of
//! atomicity. The order of the projectile passes is a correctness contract,
//! not an artifact: a projectile is consumed by its first scoring contact
//! and every later pass must observe `exists = false`. Chain segments are
//! tested before detached heads, before roaming enemies, before obstacles.

use crate::audio::SoundEffect;
use crate::consts::*;
use rand::Rng;

use super::grid::cells_overlap;
use super::state::{GamePhase, GameState, Projectile};

/// Input intents for a single tick, sampled once by the platform layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire intent; refused while a projectile is in flight
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.sounds.clear();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Playing => {}
    }

    if state.player.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.sounds.push(SoundEffect::GameOver);
        log::info!(
            "round over: score={} level={}",
            state.player.score,
            state.level
        );
        return;
    }

    state.time_ticks += 1;
    state.player.update_timers(dt);

    if input.fire && !state.projectile.exists {
        state.projectile.pos = Projectile::muzzle(&state.player);
        state.projectile.exists = true;
        state.sounds.push(SoundEffect::Fire);
    }

    move_player(state, input, dt);
    projectile_vs_chain(state);
    state.chain.advance(&state.field);

    state.heads.tick_spawn(dt, state.chain.bottom_reached);
    state.heads.advance(&state.field);
    projectile_vs_heads(state);

    state.dropper.update(&mut state.field);
    state.bouncer.update(
        dt,
        &mut state.player,
        &mut state.projectile,
        &mut state.field,
        &mut state.sounds,
    );
    state
        .sweeper
        .update(&mut state.player, &mut state.projectile, &mut state.field);

    step_projectile(state, dt);
    projectile_vs_obstacles(state);

    if !state.player.invulnerable {
        resolve_player_contact(state);
    }

    check_level_clear(state);
    grant_extra_lives(state);

    state.player.lives = state.player.lives.min(MAX_LIVES);
    state.player.score = state.player.score.min(MAX_SCORE);
}

/// Axis-aligned movement scaled by frame time, clamped to the field and the
/// reserved bottom band. A standing non-hazardous obstacle blocks by rolling
/// the whole move back.
fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let prev = state.player.pos;
    let step = PLAYER_SPEED * dt;
    if input.left {
        state.player.pos.x -= step;
    }
    if input.right {
        state.player.pos.x += step;
    }
    if input.up {
        state.player.pos.y -= step;
    }
    if input.down {
        state.player.pos.y += step;
    }
    state.player.pos.x = state.player.pos.x.clamp(0.0, FIELD_W - CELL);
    state.player.pos.y = state.player.pos.y.clamp(PLAYER_MIN_Y, FIELD_H - CELL);

    if state.field.blocks_player(state.player.pos) {
        state.player.pos = prev;
    }
}

/// Projectile against the main chain. An impact in the bottom band leaves a
/// hazardous obstacle on the cell; the chain severs at the hit slot.
fn projectile_vs_chain(state: &mut GameState) {
    for i in 0..CHAIN_LEN {
        if !state.projectile.exists {
            return;
        }
        let seg = state.chain.segments[i];
        if !seg.exists || !cells_overlap(state.projectile.pos, seg.pos) {
            continue;
        }
        if seg.pos.y >= BOTTOM_BAND_Y {
            state.field.append(seg.pos, true);
        }
        let was_head = state.chain.sever(i);
        state.player.score += if was_head { 20 } else { 10 };
        state.projectile.exists = false;
        if was_head {
            state.sounds.push(SoundEffect::Kill);
        }
    }
}

/// Projectile against the detached-head pool. The impact cell always turns
/// into a hazardous obstacle; no chain reaction.
fn projectile_vs_heads(state: &mut GameState) {
    if !state.projectile.exists {
        return;
    }
    if let Some(i) = state.heads.hit_test(state.projectile.pos) {
        let pos = state.heads.heads[i].pos;
        state.field.append(pos, true);
        state.player.score += 20;
        state.heads.heads[i].exists = false;
        state.projectile.exists = false;
        state.sounds.push(SoundEffect::Kill);
    }
}

/// Gated upward motion: a step fires only when 20 ms of simulated time have
/// accrued since the last one; leftover time is not banked.
fn step_projectile(state: &mut GameState, dt: f32) {
    state.projectile_clock += dt;
    if !state.projectile.exists || state.projectile_clock < PROJECTILE_GATE {
        return;
    }
    state.projectile_clock = 0.0;
    state.projectile.pos.y -= PROJECTILE_STEP;
    if state.projectile.pos.y < -CELL {
        state.projectile.exists = false;
    }
}

/// Projectile against the obstacle field. Hazardous cells consume the shot
/// without taking damage; ordinary cells absorb two hits.
fn projectile_vs_obstacles(state: &mut GameState) {
    for i in 0..state.field.cells.len() {
        if !state.projectile.exists {
            return;
        }
        let cell = state.field.cells[i];
        if !cell.exists || !cells_overlap(state.projectile.pos, cell.pos) {
            continue;
        }
        if !cell.hazardous && state.field.register_hit(i) {
            state.player.score += 1;
        }
        state.projectile.exists = false;
    }
}

/// Contact damage from chain segments, detached heads, and hazardous
/// obstacles. The first contact found applies; invulnerability was already
/// checked by the caller.
fn resolve_player_contact(state: &mut GameState) {
    let pos = state.player.pos;
    let contact = state
        .chain
        .segments
        .iter()
        .any(|s| s.exists && cells_overlap(pos, s.pos))
        || state
            .heads
            .heads
            .iter()
            .any(|h| h.exists && cells_overlap(pos, h.pos))
        || state
            .field
            .cells
            .iter()
            .any(|c| c.exists && c.hazardous && cells_overlap(pos, c.pos));
    if contact {
        state.player.take_hit();
        state.sounds.push(SoundEffect::PlayerHit);
    }
}

/// Level transition once no chain segment and no detached head remains.
/// Player score and lives persist; everything else is relaid.
fn check_level_clear(state: &mut GameState) {
    if state.chain.any_alive() || state.heads.any_alive() {
        return;
    }
    state.sounds.push(SoundEffect::LevelUp);
    state.level += 1;
    state.start_row = state.rng.random_range(0..10);
    state.chain.reset(state.start_row, GameState::start_col());
    state.heads.reset();
    let regenerated = state.field.level_reset();
    state.player.score += 5 * regenerated;
    state.dropper.reset();
    state.bouncer.reset();
    state.sweeper.reset();
    log::info!(
        "level {}: start_row={} regenerated={}",
        state.level,
        state.start_row,
        regenerated
    );
}

/// Extra life on first crossing of each score threshold. A single watermark
/// tracks the last grant, so a score jump across two thresholds in one tick
/// still grants exactly one life.
fn grant_extra_lives(state: &mut GameState) {
    let score = state.player.score;
    let crossed = LIFE_THRESHOLDS
        .iter()
        .any(|&t| score >= t && state.life_watermark < t);
    if crossed {
        state.player.lives += 1;
        state.life_watermark = score;
        state.sounds.push(SoundEffect::LevelUp);
    }
}
