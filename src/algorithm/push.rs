//! Single-cell chain push resolution
//!
//! A push moves one piece one cell along an axis. When the target cell is
//! occupied, the occupant is pushed first in the same direction, so a straight
//! line of pieces travels together as long as the line ends in the free slot.
//! Occupancy only changes after the next link has moved, which makes a
//! refused push leave the grid exactly as it was.

use bitvec::prelude::*;

use crate::spatial::cell::Direction;
use crate::spatial::grid::{Grid, PieceId};

/// Resolves pushes and remembers which pieces moved during the current gesture
#[derive(Debug, Clone, Default)]
pub struct PushResolver {
    moved: BitVec,
}

impl PushResolver {
    /// Create a resolver tracking `piece_count` pieces
    pub fn new(piece_count: usize) -> Self {
        Self {
            moved: bitvec![0; piece_count],
        }
    }

    /// Forget all "moved this gesture" marks
    pub fn begin_gesture(&mut self) {
        self.moved.fill(false);
    }

    /// Check if a piece moved since the last `begin_gesture`
    pub fn was_moved(&self, piece: PieceId) -> bool {
        self.moved.get(piece.0).as_deref() == Some(&true)
    }

    /// Pieces moved since the last `begin_gesture`, in id order
    pub fn moved_pieces(&self) -> Vec<PieceId> {
        self.moved.iter_ones().map(PieceId).collect()
    }

    /// Move `piece` one cell in `direction`, pushing any line of pieces ahead
    ///
    /// Returns false and changes nothing when the line runs into the board
    /// edge before reaching the free slot.
    pub fn try_move(&mut self, grid: &mut Grid, piece: PieceId, direction: Direction) -> bool {
        let Some(from) = grid.cell_of(piece) else {
            return false;
        };
        let target = from.step(direction);
        if !grid.is_in_bounds(target) {
            return false;
        }
        if let Some(occupant) = grid.occupancy(target) {
            if !self.try_move(grid, occupant, direction) {
                return false;
            }
        }
        if grid.move_occupant(from, target).is_err() {
            return false;
        }
        self.mark_moved(piece);
        true
    }

    fn mark_moved(&mut self, piece: PieceId) {
        if piece.0 >= self.moved.len() {
            self.moved.resize(piece.0 + 1, false);
        }
        self.moved.set(piece.0, true);
    }
}

/// Pieces that would move together if `piece` were pushed in `direction`
///
/// The chain starts with `piece` and follows occupied cells until the first
/// vacant one. Returns `None` when the board edge comes first. Never mutates.
pub fn push_chain(grid: &Grid, piece: PieceId, direction: Direction) -> Option<Vec<PieceId>> {
    let mut cell = grid.cell_of(piece)?;
    let mut chain = vec![piece];
    loop {
        cell = cell.step(direction);
        if !grid.is_in_bounds(cell) {
            return None;
        }
        match grid.occupancy(cell) {
            Some(next) => chain.push(next),
            None => return Some(chain),
        }
    }
}

