//! The destructible obstacle field
//!
//! A fixed-capacity, append-only collection of cell-sized obstacles.
//! Records are never removed or compacted within a round; destruction only
//! clears the `exists` flag so indices stay stable for the whole level.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::grid::{cells_overlap, row_of};
use crate::consts::*;

/// One obstacle cell
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Top-left pixel position
    pub pos: Vec2,
    /// Projectile hits absorbed so far (0 or 1 while standing)
    pub hits: u8,
    pub exists: bool,
    /// Hazardous cells are lethal to the player and immune to projectiles
    pub hazardous: bool,
}

impl Obstacle {
    fn new(pos: Vec2, hazardous: bool) -> Self {
        Self {
            pos,
            hits: 0,
            exists: true,
            hazardous,
        }
    }
}

/// Append-only obstacle collection, capacity [`MAX_OBSTACLES`]
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    pub cells: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            cells: Vec::with_capacity(MAX_OBSTACLES),
        }
    }

    /// Populate the field for a new round: a random number of obstacles at
    /// random pixel positions, re-rolling the vertical coordinate until it
    /// lands outside the 3-row band centered on the chain's start row.
    pub fn spawn_random(&mut self, rng: &mut Pcg32, avoid_row: usize) {
        self.cells.clear();
        let count = MIN_OBSTACLES + rng.random_range(0..=OBSTACLE_SPREAD);
        for _ in 0..count {
            let x = rng.random_range(0..(FIELD_W - CELL) as u32) as f32;
            let y = loop {
                let y = rng.random_range(0..(FIELD_H - 3.0 * CELL) as u32) as f32;
                if (row_of(y) - avoid_row as i32).abs() > 1 {
                    break y;
                }
            };
            self.cells.push(Obstacle::new(Vec2::new(x, y), false));
        }
    }

    /// Append a new obstacle. Past capacity the record is silently dropped;
    /// the cap is hard and existing cells are never disturbed.
    pub fn append(&mut self, pos: Vec2, hazardous: bool) {
        if self.cells.len() < MAX_OBSTACLES {
            self.cells.push(Obstacle::new(pos, hazardous));
        } else {
            log::debug!("obstacle field full, dropping append at {pos:?}");
        }
    }

    /// Record a projectile hit on cell `index`. Returns true when the cell
    /// is destroyed (second hit); the caller awards the score.
    pub fn register_hit(&mut self, index: usize) -> bool {
        let cell = &mut self.cells[index];
        cell.hits += 1;
        if cell.hits >= 2 {
            cell.exists = false;
            return true;
        }
        false
    }

    /// Level transition: every cell stands again, hazard and damage state
    /// cleared. Returns how many cells had been destroyed (the caller grants
    /// regeneration score per cell).
    pub fn level_reset(&mut self) -> u32 {
        let mut regenerated = 0;
        for cell in &mut self.cells {
            if !cell.exists {
                regenerated += 1;
            }
            cell.exists = true;
            cell.hazardous = false;
            cell.hits = 0;
        }
        regenerated
    }

    /// Does any standing obstacle overlap a cell-sized box at `pos`?
    pub fn overlaps_any(&self, pos: Vec2) -> bool {
        self.cells
            .iter()
            .any(|c| c.exists && cells_overlap(pos, c.pos))
    }

    /// First standing non-hazardous obstacle overlapping `pos`, if any.
    /// Hazardous cells damage the player instead of blocking movement.
    pub fn blocks_player(&self, pos: Vec2) -> bool {
        self.cells
            .iter()
            .any(|c| c.exists && !c.hazardous && cells_overlap(pos, c.pos))
    }

    /// Standing obstacles inside the bottom band (dropper eligibility)
    pub fn bottom_band_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.exists && c.pos.y >= BOTTOM_BAND_Y)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_count_and_avoid_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ObstacleField::new();
        field.spawn_random(&mut rng, 4);

        assert!(field.cells.len() >= MIN_OBSTACLES);
        assert!(field.cells.len() <= MIN_OBSTACLES + OBSTACLE_SPREAD);
        for cell in &field.cells {
            let row = (cell.pos.y / CELL) as i32;
            assert!(!(3..=5).contains(&row), "obstacle in avoided band: row {row}");
            assert!(cell.exists);
            assert!(!cell.hazardous);
            assert_eq!(cell.hits, 0);
        }
    }

    #[test]
    fn test_first_hit_damages_second_destroys() {
        let mut field = ObstacleField::new();
        field.append(Vec2::new(96.0, 96.0), false);

        assert!(!field.register_hit(0));
        assert_eq!(field.cells[0].hits, 1);
        assert!(field.cells[0].exists);

        assert!(field.register_hit(0));
        assert!(!field.cells[0].exists);
    }

    #[test]
    fn test_append_past_capacity_is_dropped() {
        let mut field = ObstacleField::new();
        for i in 0..MAX_OBSTACLES {
            field.append(Vec2::new(i as f32, 0.0), false);
        }
        field.append(Vec2::new(999.0, 999.0), true);

        assert_eq!(field.cells.len(), MAX_OBSTACLES);
        assert!(field.cells.iter().all(|c| c.pos.x < 999.0));
    }

    #[test]
    fn test_level_reset_counts_destroyed() {
        let mut field = ObstacleField::new();
        field.append(Vec2::new(0.0, 0.0), false);
        field.append(Vec2::new(64.0, 0.0), true);
        field.append(Vec2::new(128.0, 0.0), false);
        field.register_hit(0);
        field.register_hit(0);

        assert_eq!(field.level_reset(), 1);
        for cell in &field.cells {
            assert!(cell.exists);
            assert!(!cell.hazardous);
            assert_eq!(cell.hits, 0);
        }
    }

    #[test]
    fn test_blocking_ignores_hazardous() {
        let mut field = ObstacleField::new();
        field.append(Vec2::new(100.0, 100.0), true);
        assert!(field.overlaps_any(Vec2::new(100.0, 100.0)));
        assert!(!field.blocks_player(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_bottom_band_count() {
        let mut field = ObstacleField::new();
        field.append(Vec2::new(0.0, BOTTOM_BAND_Y), false);
        field.append(Vec2::new(64.0, BOTTOM_BAND_Y + CELL), false);
        field.append(Vec2::new(128.0, BOTTOM_BAND_Y - CELL), false);
        assert_eq!(field.bottom_band_count(), 2);

        field.register_hit(0);
        field.register_hit(0);
        assert_eq!(field.bottom_band_count(), 1);
    }
}
