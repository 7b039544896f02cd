//! Release-time reconciliation of visual positions with grid cells
//!
//! During a gesture pieces carry a continuous visual position. On release each
//! displaced piece is settled on the cell nearest to where it is drawn. A piece
//! only leaves its occupied cell if that nearest cell is vacant, so snapping
//! can never break the one-free-slot invariant.

use crate::math::vector::Vector2;
use crate::spatial::cell::Cell;
use crate::spatial::grid::{Grid, PieceId};

/// Result of settling one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    /// The settled piece
    pub piece: PieceId,
    /// Cell the piece rests on after snapping
    pub cell: Cell,
}

/// Settle pieces onto the valid cells nearest to their visual positions
///
/// Pieces are handled in the order given; an earlier piece leaving its cell
/// can free that cell for a later one.
pub fn snap_to_nearest(grid: &mut Grid, positions: &[(PieceId, Vector2)]) -> Vec<Settled> {
    let mut settled = Vec::with_capacity(positions.len());
    for &(piece, position) in positions {
        let Some(current) = grid.cell_of(piece) else {
            continue;
        };
        let nearest = grid.nearest_cell(position);
        let cell = if nearest != current && grid.occupancy(nearest).is_none() {
            match grid.move_occupant(current, nearest) {
                Ok(()) => nearest,
                Err(_) => current,
            }
        } else {
            current
        };
        settled.push(Settled { piece, cell });
    }
    settled
}
