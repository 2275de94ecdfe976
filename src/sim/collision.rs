//! Overlap tests for grid-aligned squares
//!
//! Every entity is an axis-aligned square with edge `CELL_SIZE`, so the AABB
//! intersection test collapses to a per-axis origin-distance check.

use glam::IVec2;

use crate::consts::CELL_SIZE;

/// Two cell-sized squares overlap iff their origins are strictly closer than
/// one cell size on both axes. Squares that merely share an edge do not
/// overlap.
#[inline]
pub fn cells_overlap(a: IVec2, b: IVec2) -> bool {
    (a.x - b.x).abs() < CELL_SIZE && (a.y - b.y).abs() < CELL_SIZE
}
