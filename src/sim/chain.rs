//! The segmented enemy chain and the detached-head pool
//!
//! The chain is a fixed array of slots; topology changes (a hit severing the
//! chain into two independently moving sub-chains) are expressed purely
//! through per-slot flags, never by reallocating. The leading slot of every
//! contiguous run of live segments carries the head flag.

use glam::Vec2;

use super::field::ObstacleField;
use super::grid::{cell_origin, cells_overlap};
use crate::consts::*;

/// One chain slot
#[derive(Debug, Clone, Copy, Default)]
pub struct Segment {
    pub pos: Vec2,
    /// Leading segment of a live sub-chain
    pub is_head: bool,
    pub leftward: bool,
    pub exists: bool,
}

/// The main chain: [`CHAIN_LEN`] slots sharing one banded descent flag
#[derive(Debug, Clone)]
pub struct Chain {
    pub segments: [Segment; CHAIN_LEN],
    /// Banded vertical direction, shared by every segment this tick.
    /// Toggles when any segment crosses the descent floor or the top of the
    /// band, producing the synchronized zig-zag.
    pub descending: bool,
    /// Latched once slot 0 enters the bottom band; arms the detached-head
    /// spawner for the rest of the level.
    pub bottom_reached: bool,
}

impl Chain {
    pub fn new(start_row: usize, start_col: usize) -> Self {
        let mut chain = Self {
            segments: [Segment::default(); CHAIN_LEN],
            descending: true,
            bottom_reached: false,
        };
        chain.reset(start_row, start_col);
        chain
    }

    /// Lay the chain out at full length: one row, slot 0 the head, all
    /// segments moving leftward.
    pub fn reset(&mut self, start_row: usize, start_col: usize) {
        for (i, seg) in self.segments.iter_mut().enumerate() {
            *seg = Segment {
                pos: cell_origin(start_col + i, start_row),
                is_head: i == 0,
                leftward: true,
                exists: true,
            };
        }
        self.descending = true;
        self.bottom_reached = false;
    }

    /// Advance every live segment one tick: bounce off field edges and
    /// standing obstacles (flip horizontal direction, step one full cell
    /// along the banded vertical direction), otherwise creep sideways.
    pub fn advance(&mut self, field: &ObstacleField) {
        for i in 0..CHAIN_LEN {
            if !self.segments[i].exists {
                continue;
            }
            let pos = self.segments[i].pos;
            let bounced =
                pos.x < 0.0 || pos.x > FIELD_W - CELL || field.overlaps_any(pos);
            if bounced {
                let seg = &mut self.segments[i];
                seg.leftward = !seg.leftward;
                if seg.pos.y >= DESCENT_FLOOR_Y {
                    self.descending = false;
                }
                if seg.pos.y <= BOTTOM_BAND_Y {
                    self.descending = true;
                }
                let step = if self.descending { CELL } else { -CELL };
                self.segments[i].pos.y += step;
            }
            let seg = &mut self.segments[i];
            seg.pos.x += if seg.leftward { -CHAIN_STEP } else { CHAIN_STEP };
        }

        if self.segments[0].exists && self.segments[0].pos.y >= BOTTOM_BAND_Y {
            self.bottom_reached = true;
        }
    }

    /// Destroy slot `index` and sever the chain there. The next slot (if
    /// any) becomes the head of the trailing sub-chain. When the destroyed
    /// slot was itself a head, its whole sub-chain is annihilated: every
    /// subsequent contiguous live segment dies with it.
    ///
    /// Returns true when the destroyed slot was a head.
    pub fn sever(&mut self, index: usize) -> bool {
        let was_head = self.segments[index].is_head;
        self.segments[index].exists = false;
        if index + 1 < CHAIN_LEN {
            self.segments[index + 1].is_head = true;
        }
        if was_head {
            let mut j = index + 1;
            while j < CHAIN_LEN && self.segments[j].exists {
                self.segments[j].exists = false;
                j += 1;
            }
        }
        was_head
    }

    pub fn any_alive(&self) -> bool {
        self.segments.iter().any(|s| s.exists)
    }
}

/// A solitary head actor, spawned from the pool
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHead {
    pub pos: Vec2,
    pub exists: bool,
    pub leftward: bool,
}

/// Capped pool of detached heads. Slots activate in order, one per cooldown
/// window while the spawner is armed; exhaustion makes further spawn
/// attempts a no-op.
#[derive(Debug, Clone)]
pub struct HeadPool {
    pub heads: [DetachedHead; HEAD_POOL],
    /// Slots activated so far this level
    pub spawned: usize,
    /// Banded vertical direction, tracked separately from the main chain
    pub descending: bool,
    /// Seconds since the last spawn
    pub cooldown: f32,
}

impl HeadPool {
    pub fn new() -> Self {
        let mut pool = Self {
            heads: [DetachedHead::default(); HEAD_POOL],
            spawned: 0,
            descending: true,
            cooldown: 0.0,
        };
        pool.reset();
        pool
    }

    pub fn reset(&mut self) {
        for head in &mut self.heads {
            *head = DetachedHead {
                pos: cell_origin(GAME_COLS - 1, GAME_ROWS - 3),
                exists: false,
                leftward: true,
            };
        }
        self.spawned = 0;
        self.descending = true;
        self.cooldown = 0.0;
    }

    /// Tick the spawn cooldown; activate the next slot when armed, the
    /// cooldown has elapsed, and the pool is not exhausted.
    pub fn tick_spawn(&mut self, dt: f32, armed: bool) {
        self.cooldown += dt;
        if armed && self.cooldown > HEAD_SPAWN_COOLDOWN {
            if self.spawned < HEAD_POOL {
                self.heads[self.spawned].exists = true;
                self.spawned += 1;
                log::debug!("detached head {} spawned", self.spawned);
            }
            self.cooldown = 0.0;
        }
    }

    /// Same bounce rule as the chain, with the pool's own banded direction
    /// and a slightly faster creep.
    pub fn advance(&mut self, field: &ObstacleField) {
        for i in 0..HEAD_POOL {
            if !self.heads[i].exists {
                continue;
            }
            let pos = self.heads[i].pos;
            let bounced =
                pos.x < 0.0 || pos.x > FIELD_W - CELL || field.overlaps_any(pos);
            if bounced {
                let head = &mut self.heads[i];
                head.leftward = !head.leftward;
                if head.pos.y >= DESCENT_FLOOR_Y {
                    self.descending = false;
                }
                if head.pos.y <= BOTTOM_BAND_Y {
                    self.descending = true;
                }
                let step = if self.descending { CELL } else { -CELL };
                self.heads[i].pos.y += step;
            }
            let head = &mut self.heads[i];
            head.pos.x += if head.leftward { -HEAD_STEP } else { HEAD_STEP };
        }
    }

    pub fn any_alive(&self) -> bool {
        self.heads.iter().any(|h| h.exists)
    }

    /// First live head overlapping `pos`, if any
    pub fn hit_test(&self, pos: Vec2) -> Option<usize> {
        self.heads
            .iter()
            .position(|h| h.exists && cells_overlap(pos, h.pos))
    }
}

impl Default for HeadPool {
    fn default() -> Self {
        Self::new()
    }
}
