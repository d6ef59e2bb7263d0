//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed entity update order (the tick is the unit of atomicity)
//! - No rendering or platform dependencies

pub mod chain;
pub mod enemies;
pub mod field;
pub mod grid;
pub mod state;
pub mod tick;

pub use chain::{Chain, DetachedHead, HeadPool, Segment};
pub use enemies::{Bouncer, Dropper, Sweeper};
pub use field::{Obstacle, ObstacleField};
pub use grid::{cell_origin, cells_overlap, col_of, row_of};
pub use state::{GamePhase, GameState, Player, Projectile};
pub use tick::{TickInput, tick};
