//! Cell occupancy for the sliding pieces
//!
//! The grid is the single owner of which piece sits where. It keeps a dense
//! occupancy array for O(1) neighbor lookup and a reverse index from piece to
//! cell; `move_occupant` is the only operation that changes either.

use ndarray::Array2;

use crate::io::error::{PuzzleError, Result};
use crate::math::vector::Vector2;
use crate::spatial::board::Board;
use crate::spatial::cell::Cell;

/// Stable identifier of a piece, also its index in the level's piece list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

/// Occupancy state of a board
#[derive(Debug, Clone)]
pub struct Grid {
    board: Board,
    occupancy: Array2<Option<PieceId>>,
    piece_cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid covering `board`
    pub fn new(board: Board) -> Self {
        Self {
            board,
            occupancy: Array2::from_elem((board.height(), board.width()), None),
            piece_cells: Vec::new(),
        }
    }

    /// Place a new piece on a free cell and return its identifier
    ///
    /// Identifiers are handed out in placement order starting at zero.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `cell` is not on the board and `CellOccupied`
    /// if another piece already sits there.
    pub fn place(&mut self, cell: Cell) -> Result<PieceId> {
        let id = PieceId(self.piece_cells.len());
        let slot = self.slot_mut(cell)?;
        if slot.is_some() {
            return Err(PuzzleError::CellOccupied { cell });
        }
        *slot = Some(id);
        self.piece_cells.push(cell);
        Ok(id)
    }

    /// The board this grid covers
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Number of pieces on the grid
    pub fn piece_count(&self) -> usize {
        self.piece_cells.len()
    }

    /// Check if a cell lies on the board
    pub const fn is_in_bounds(&self, cell: Cell) -> bool {
        self.board.contains(cell)
    }

    /// Piece occupying `cell`, if any
    pub fn occupancy(&self, cell: Cell) -> Option<PieceId> {
        cell.index()
            .and_then(|index| self.occupancy.get(index))
            .copied()
            .flatten()
    }

    /// Cell currently held by `piece`
    pub fn cell_of(&self, piece: PieceId) -> Option<Cell> {
        self.piece_cells.get(piece.0).copied()
    }

    /// Cells currently held by every piece, indexed by piece
    pub fn piece_cells(&self) -> &[Cell] {
        &self.piece_cells
    }

    /// Every cell without a piece, in row-major order
    pub fn vacant_cells(&self) -> Vec<Cell> {
        self.board
            .cells()
            .filter(|&cell| self.occupancy(cell).is_none())
            .collect()
    }

    /// Relocate the occupant of `from` into `to`
    ///
    /// Moving from an empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either cell is off the board and `CellOccupied`
    /// if `to` already holds a piece. Occupancy is unchanged on error.
    pub fn move_occupant(&mut self, from: Cell, to: Cell) -> Result<()> {
        for cell in [from, to] {
            if !self.board.contains(cell) {
                return Err(PuzzleError::OutOfBounds { cell });
            }
        }
        if self.occupancy(to).is_some() {
            return Err(PuzzleError::CellOccupied { cell: to });
        }

        let Some(piece) = self.slot_mut(from)?.take() else {
            return Ok(());
        };
        *self.slot_mut(to)? = Some(piece);
        if let Some(cell) = self.piece_cells.get_mut(piece.0) {
            *cell = to;
        }
        Ok(())
    }

    /// Cell whose center is closest to `point`
    ///
    /// Scans in row-major order and keeps the first cell on exact ties.
    pub fn nearest_cell(&self, point: Vector2) -> Cell {
        let mut closest = Cell::new(0, 0);
        let mut smallest = f64::INFINITY;
        for cell in self.board.cells() {
            let distance = point.distance(self.board.cell_center(cell));
            if distance < smallest {
                smallest = distance;
                closest = cell;
            }
        }
        closest
    }

    fn slot_mut(&mut self, cell: Cell) -> Result<&mut Option<PieceId>> {
        cell.index()
            .and_then(|index| self.occupancy.get_mut(index))
            .ok_or(PuzzleError::OutOfBounds { cell })
    }
}
