//! Grid geometry: cell conversions and the overlap test
//!
//! Every actor in the simulation occupies a cell-sized axis-aligned box
//! anchored at its top-left corner. All contact resolution reduces to one
//! predicate over those boxes.

use glam::Vec2;

use crate::consts::CELL;

/// Overlap test between two cell-sized boxes anchored at `a` and `b`.
///
/// Strict inequalities: boxes that merely share an edge do not overlap, so
/// actors aligned on adjacent cells never register contact.
#[inline]
pub fn cells_overlap(a: Vec2, b: Vec2) -> bool {
    a.x < b.x + CELL && a.x + CELL > b.x && a.y < b.y + CELL && a.y + CELL > b.y
}

/// Top-left pixel position of the cell at (`col`, `row`)
#[inline]
pub fn cell_origin(col: usize, row: usize) -> Vec2 {
    Vec2::new(col as f32 * CELL, row as f32 * CELL)
}

/// Row index of a pixel y coordinate
#[inline]
pub fn row_of(y: f32) -> i32 {
    (y / CELL) as i32
}

/// Column index of a pixel x coordinate
#[inline]
pub fn col_of(x: f32) -> i32 {
    (x / CELL) as i32
}
