//! Render boundary: semantic sprite extraction
//!
//! The simulation never talks to a drawing surface. Each frame the platform
//! layer asks for a sprite batch: entity kind, pixel position, and a visual
//! state index (damage frame, head vs body, bounty tier, walk frame). What
//! a frame index looks like on screen is entirely the drawing layer's
//! business.

use glam::Vec2;

use crate::sim::GameState;

/// Entity classes the drawing layer knows how to depict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Projectile,
    ChainBody,
    ChainHead,
    DetachedHead,
    Obstacle,
    Dropper,
    Bouncer,
    Sweeper,
}

/// One draw request
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Visual state index; meaning depends on `kind`
    pub frame: u8,
}

/// Obstacle frames: 0 intact, 1 damaged; +2 when hazardous
fn obstacle_frame(hits: u8, hazardous: bool) -> u8 {
    hits.min(1) + if hazardous { 2 } else { 0 }
}

/// Collect every visible entity in draw order (field first, player last)
pub fn sprite_batch(state: &GameState) -> Vec<Sprite> {
    let mut batch = Vec::new();

    for cell in &state.field.cells {
        if cell.exists {
            batch.push(Sprite {
                kind: EntityKind::Obstacle,
                pos: cell.pos,
                frame: obstacle_frame(cell.hits, cell.hazardous),
            });
        }
    }

    for seg in &state.chain.segments {
        if seg.exists {
            batch.push(Sprite {
                kind: if seg.is_head {
                    EntityKind::ChainHead
                } else {
                    EntityKind::ChainBody
                },
                pos: seg.pos,
                frame: 0,
            });
        }
    }

    for head in &state.heads.heads {
        if head.exists {
            batch.push(Sprite {
                kind: EntityKind::DetachedHead,
                pos: head.pos,
                frame: 0,
            });
        }
    }

    if state.dropper.exists {
        batch.push(Sprite {
            kind: EntityKind::Dropper,
            pos: state.dropper.pos,
            frame: 0,
        });
    }
    if state.bouncer.exists {
        // Frame 0 alive; 1..=3 show the bounty tier while the corpse lingers
        batch.push(Sprite {
            kind: EntityKind::Bouncer,
            pos: state.bouncer.pos,
            frame: if state.bouncer.dying {
                1 + state.bouncer.bounty_tier
            } else {
                0
            },
        });
    }
    if state.sweeper.exists {
        batch.push(Sprite {
            kind: EntityKind::Sweeper,
            pos: state.sweeper.pos,
            frame: 0,
        });
    }

    if state.projectile.exists {
        batch.push(Sprite {
            kind: EntityKind::Projectile,
            pos: state.projectile.pos,
            frame: 0,
        });
    }

    batch.push(Sprite {
        kind: EntityKind::Player,
        pos: state.player.pos,
        frame: state.player.anim_frame,
    });

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_skips_dead_entities() {
        let mut state = GameState::new(4);
        let visible = sprite_batch(&state).len();

        state.chain.sever(0); // annihilates the whole starting run
        let after = sprite_batch(&state).len();
        assert!(after < visible);
        assert!(
            sprite_batch(&state)
                .iter()
                .all(|s| !matches!(s.kind, EntityKind::ChainBody | EntityKind::ChainHead))
        );
    }

    #[test]
    fn test_player_drawn_last() {
        let state = GameState::new(4);
        let batch = sprite_batch(&state);
        assert_eq!(batch.last().map(|s| s.kind), Some(EntityKind::Player));
    }

    #[test]
    fn test_obstacle_frames() {
        assert_eq!(obstacle_frame(0, false), 0);
        assert_eq!(obstacle_frame(1, false), 1);
        assert_eq!(obstacle_frame(0, true), 2);
        assert_eq!(obstacle_frame(1, true), 3);
    }

    #[test]
    fn test_bouncer_death_frame_carries_tier() {
        let mut state = GameState::new(4);
        state.bouncer.dying = true;
        state.bouncer.bounty_tier = 2;
        let batch = sprite_batch(&state);
        let sprite = batch
            .iter()
            .find(|s| s.kind == EntityKind::Bouncer)
            .expect("bouncer visible while lingering");
        assert_eq!(sprite.frame, 3);
    }
}
