//! The three roaming enemies
//!
//! Each is an independent actor with its own movement and interaction
//! rules: the dropper descends a fixed column and seeds an obstacle trail,
//! the diagonal bouncer patrols a rectangle eating obstacles, and the
//! horizontal bouncer sweeps one row marking obstacles hazardous.

use glam::Vec2;

use super::field::ObstacleField;
use super::grid::cells_overlap;
use super::state::{Player, Projectile};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Descends a fixed column once the bottom band holds exactly three
/// obstacles, seeding a 3-cell trail partway down. Cannot be shot.
#[derive(Debug, Clone, Copy)]
pub struct Dropper {
    pub pos: Vec2,
    pub exists: bool,
    /// Trail already seeded this descent
    pub trail_dropped: bool,
}

impl Dropper {
    /// Column the dropper falls through, and the row where the trail lands
    const COLUMN: f32 = 15.0 * CELL;
    const TRAIL_Y: f32 = 15.0 * CELL;

    pub fn new() -> Self {
        Self {
            pos: Vec2::new(Self::COLUMN, 0.0),
            exists: false,
            trail_dropped: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn update(&mut self, field: &mut ObstacleField) {
        if !self.exists && field.bottom_band_count() == 3 {
            self.exists = true;
        }
        if !self.exists {
            return;
        }

        self.pos.y += DROPPER_STEP;

        if !self.trail_dropped && self.pos.y >= Self::TRAIL_Y {
            for i in 0..3 {
                let y = self.pos.y + (CELL + 2.0) * i as f32;
                field.append(Vec2::new(self.pos.x, y), false);
            }
            self.trail_dropped = true;
        }

        if self.pos.y > FIELD_H - CELL {
            self.exists = false;
        }
    }
}

impl Default for Dropper {
    fn default() -> Self {
        Self::new()
    }
}

/// Patrols a rectangular sub-region bouncing on both axes, eats obstacles
/// it overlaps, and strikes the player at most once per activation. Shot
/// bounty is tiered by vertical distance from the player, and the corpse
/// lingers briefly before despawning.
#[derive(Debug, Clone, Copy)]
pub struct Bouncer {
    pub pos: Vec2,
    pub exists: bool,
    pub rightward: bool,
    pub downward: bool,
    /// Post-death lingering display
    pub dying: bool,
    pub linger: f32,
    /// Bounty tier of the killing shot, for the renderer (0 low..2 high)
    pub bounty_tier: u8,
    /// Player already struck this activation
    pub has_struck: bool,
}

impl Bouncer {
    const PATROL_RIGHT: f32 = 20.0 * CELL;
    const PATROL_TOP: f32 = FIELD_H - 10.0 * CELL;

    pub fn new() -> Self {
        Self {
            pos: Vec2::new(0.0, 20.0 * CELL),
            exists: true,
            rightward: true,
            downward: true,
            dying: false,
            linger: 0.0,
            bounty_tier: 0,
            has_struck: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn update(
        &mut self,
        dt: f32,
        player: &mut Player,
        projectile: &mut Projectile,
        field: &mut ObstacleField,
        sounds: &mut Vec<SoundEffect>,
    ) {
        if !self.exists {
            return;
        }

        if !self.dying && projectile.exists && cells_overlap(projectile.pos, self.pos) {
            projectile.exists = false;
            let dy = player.pos.y - self.pos.y;
            let (tier, bounty) = if dy < 100.0 {
                (2, 900)
            } else if dy < 150.0 {
                (1, 600)
            } else {
                (0, 300)
            };
            self.bounty_tier = tier;
            player.score += bounty;
            self.dying = true;
            self.linger = 0.0;
        }

        if self.dying {
            self.linger += dt;
            if self.linger > BOUNCER_LINGER {
                self.exists = false;
                self.dying = false;
            }
            return;
        }

        if self.pos.x >= Self::PATROL_RIGHT {
            self.rightward = false;
        } else if self.pos.x <= 0.0 {
            self.rightward = true;
        }
        if self.pos.y <= Self::PATROL_TOP {
            self.downward = true;
        } else if self.pos.y >= DESCENT_FLOOR_Y {
            self.downward = false;
        }
        self.pos.x += if self.rightward { BOUNCER_STEP } else { -BOUNCER_STEP };
        self.pos.y += if self.downward { BOUNCER_STEP } else { -BOUNCER_STEP };

        if !self.has_struck
            && !player.invulnerable
            && cells_overlap(player.pos, self.pos)
        {
            player.take_hit();
            sounds.push(SoundEffect::PlayerHit);
            self.has_struck = true;
        }

        for cell in &mut field.cells {
            if cell.exists && cells_overlap(self.pos, cell.pos) {
                cell.exists = false;
            }
        }
    }
}

impl Default for Bouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sweeps the full field width on one row, marking every obstacle it
/// overlaps hazardous. Fixed bounty when shot; never touches the player.
#[derive(Debug, Clone, Copy)]
pub struct Sweeper {
    pub pos: Vec2,
    pub exists: bool,
    pub rightward: bool,
}

impl Sweeper {
    const ROW_Y: f32 = 26.0 * CELL;
    const BOUNTY: u32 = 1000;

    pub fn new() -> Self {
        Self {
            pos: Vec2::new(0.0, Self::ROW_Y),
            exists: true,
            rightward: true,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn update(
        &mut self,
        player: &mut Player,
        projectile: &mut Projectile,
        field: &mut ObstacleField,
    ) {
        if !self.exists {
            return;
        }

        // The sprite spans two cells, so the right margin is wider
        if self.pos.x < 0.0 || self.pos.x > FIELD_W - 2.0 * CELL {
            self.rightward = !self.rightward;
        }
        self.pos.x += if self.rightward { SWEEPER_STEP } else { -SWEEPER_STEP };

        if projectile.exists && cells_overlap(projectile.pos, self.pos) {
            projectile.exists = false;
            self.exists = false;
            player.score += Self::BOUNTY;
            return;
        }

        for cell in &mut field.cells {
            if cell.exists && cells_overlap(self.pos, cell.pos) {
                cell.hazardous = true;
            }
        }
    }
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(pos: Vec2) -> Player {
        let mut player = Player::new();
        player.pos = pos;
        player
    }

    #[test]
    fn test_dropper_needs_exactly_three_band_obstacles() {
        let mut field = ObstacleField::new();
        let mut dropper = Dropper::new();

        field.append(Vec2::new(0.0, BOTTOM_BAND_Y), false);
        field.append(Vec2::new(64.0, BOTTOM_BAND_Y), false);
        dropper.update(&mut field);
        assert!(!dropper.exists, "two obstacles must not trigger");

        field.append(Vec2::new(128.0, BOTTOM_BAND_Y), false);
        dropper.update(&mut field);
        assert!(dropper.exists);
    }

    #[test]
    fn test_dropper_four_band_obstacles_do_not_trigger() {
        let mut field = ObstacleField::new();
        for i in 0..4 {
            field.append(Vec2::new(i as f32 * 64.0, BOTTOM_BAND_Y), false);
        }
        let mut dropper = Dropper::new();
        dropper.update(&mut field);
        assert!(!dropper.exists);
    }

    #[test]
    fn test_dropper_trail_seeds_three_cells_once() {
        let mut field = ObstacleField::new();
        let mut dropper = Dropper::new();
        dropper.exists = true;
        dropper.pos.y = Dropper::TRAIL_Y - DROPPER_STEP / 2.0;

        dropper.update(&mut field);
        assert!(dropper.trail_dropped);
        assert_eq!(field.cells.len(), 3);
        assert!(field.cells.iter().all(|c| !c.hazardous));
        assert!(field.cells.iter().all(|c| c.pos.x == Dropper::COLUMN));

        dropper.update(&mut field);
        assert_eq!(field.cells.len(), 3, "trail must seed once per descent");
    }

    #[test]
    fn test_dropper_despawns_off_bottom() {
        let mut field = ObstacleField::new();
        let mut dropper = Dropper::new();
        dropper.exists = true;
        dropper.trail_dropped = true;
        dropper.pos.y = FIELD_H - CELL;

        dropper.update(&mut field);
        assert!(!dropper.exists);
    }

    #[test]
    fn test_bouncer_bounty_tiers() {
        for (dy, expected) in [(50.0, 900), (120.0, 600), (300.0, 300)] {
            let mut bouncer = Bouncer::new();
            let mut player = player_at(Vec2::new(480.0, bouncer.pos.y + dy));
            let mut projectile = Projectile {
                pos: bouncer.pos,
                exists: true,
            };
            let mut field = ObstacleField::new();
            let mut sounds = Vec::new();

            bouncer.update(SIM_DT, &mut player, &mut projectile, &mut field, &mut sounds);

            assert_eq!(player.score, expected);
            assert!(!projectile.exists);
            assert!(bouncer.dying);
            assert!(bouncer.exists, "corpse lingers before despawn");
        }
    }

    #[test]
    fn test_bouncer_linger_then_despawn() {
        let mut bouncer = Bouncer::new();
        let mut player = player_at(Vec2::new(480.0, 900.0));
        let mut projectile = Projectile {
            pos: bouncer.pos,
            exists: true,
        };
        let mut field = ObstacleField::new();
        let mut sounds = Vec::new();
        bouncer.update(SIM_DT, &mut player, &mut projectile, &mut field, &mut sounds);

        let frozen = bouncer.pos;
        let mut ticks = 0;
        while bouncer.exists {
            bouncer.update(SIM_DT, &mut player, &mut projectile, &mut field, &mut sounds);
            ticks += 1;
            assert!(ticks < 120, "bouncer never despawned");
        }
        assert_eq!(bouncer.pos, frozen, "no movement while dying");
        assert!(ticks as f32 * SIM_DT >= BOUNCER_LINGER);
    }

    #[test]
    fn test_bouncer_strikes_player_once_per_activation() {
        let mut bouncer = Bouncer::new();
        let mut player = player_at(bouncer.pos);
        let mut projectile = Projectile::new();
        let mut field = ObstacleField::new();
        let mut sounds = Vec::new();

        bouncer.update(SIM_DT, &mut player, &mut projectile, &mut field, &mut sounds);
        assert_eq!(player.lives, START_LIVES - 1);
        assert!(player.invulnerable);
        assert_eq!(sounds, vec![SoundEffect::PlayerHit]);

        // Even after invulnerability lapses, the latch holds
        player.invulnerable = false;
        player.pos = bouncer.pos;
        bouncer.update(SIM_DT, &mut player, &mut projectile, &mut field, &mut sounds);
        assert_eq!(player.lives, START_LIVES - 1);

        bouncer.reset();
        assert!(!bouncer.has_struck);
    }

    #[test]
    fn test_bouncer_eats_obstacles() {
        let mut bouncer = Bouncer::new();
        let mut field = ObstacleField::new();
        field.append(bouncer.pos, false);
        field.append(bouncer.pos, true);
        let mut player = player_at(Vec2::ZERO);
        let mut projectile = Projectile::new();
        let mut sounds = Vec::new();

        bouncer.update(SIM_DT, &mut player, &mut projectile, &mut field, &mut sounds);

        assert!(field.cells.iter().all(|c| !c.exists));
    }

    #[test]
    fn test_sweeper_marks_hazardous_and_bounces() {
        let mut sweeper = Sweeper::new();
        let mut field = ObstacleField::new();
        field.append(sweeper.pos, false);
        let mut player = player_at(Vec2::ZERO);
        let mut projectile = Projectile::new();

        sweeper.update(&mut player, &mut projectile, &mut field);
        assert!(field.cells[0].hazardous);
        assert!(field.cells[0].exists, "marking must not remove the cell");

        sweeper.pos.x = FIELD_W - 2.0 * CELL + 1.0;
        sweeper.update(&mut player, &mut projectile, &mut field);
        assert!(!sweeper.rightward);
    }

    #[test]
    fn test_sweeper_bounty() {
        let mut sweeper = Sweeper::new();
        let mut player = player_at(Vec2::ZERO);
        let mut projectile = Projectile {
            pos: sweeper.pos,
            exists: true,
        };
        let mut field = ObstacleField::new();

        sweeper.update(&mut player, &mut projectile, &mut field);

        assert!(!sweeper.exists);
        assert!(!projectile.exists);
        assert_eq!(player.score, 1000);
    }
}
