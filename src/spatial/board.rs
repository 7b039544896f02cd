//! Board extent, buffer-edge margin and pattern-region mapping

use crate::io::configuration::PIECE_SPACING;
use crate::math::vector::Vector2;
use crate::spatial::cell::Cell;

/// Rectangular board made of the pattern region plus an optional margin ring
///
/// With buffer edges enabled the playable board is two cells wider and taller
/// than the pattern region, and the pattern region starts at `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Columns of the scored pattern region
    pub pattern_width: usize,
    /// Rows of the scored pattern region
    pub pattern_height: usize,
    /// Whether a one-cell margin surrounds the pattern region
    pub buffer_edges: bool,
}

impl Board {
    /// Create a board for the given pattern region
    pub const fn new(pattern_width: usize, pattern_height: usize, buffer_edges: bool) -> Self {
        Self {
            pattern_width,
            pattern_height,
            buffer_edges,
        }
    }

    /// Margin on each side, in cells
    pub const fn edge(&self) -> usize {
        if self.buffer_edges { 1 } else { 0 }
    }

    /// Total columns including the margin
    pub const fn width(&self) -> usize {
        self.pattern_width + 2 * self.edge()
    }

    /// Total rows including the margin
    pub const fn height(&self) -> usize {
        self.pattern_height + 2 * self.edge()
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Check if a cell lies on the board
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height()
            && (cell.col as usize) < self.width()
    }

    /// The cell left vacant at level setup: the last cell in row-major order
    pub const fn free_cell(&self) -> Cell {
        Cell::new(self.height() as i32 - 1, self.width() as i32 - 1)
    }

    /// Board cell covering pattern position `(row, col)`
    pub const fn pattern_to_board(&self, row: usize, col: usize) -> Cell {
        let edge = self.edge();
        Cell::new((row + edge) as i32, (col + edge) as i32)
    }

    /// Check if a cell belongs to the pattern region
    pub const fn in_pattern_region(&self, cell: Cell) -> bool {
        let edge = self.edge() as i32;
        cell.row >= edge
            && cell.col >= edge
            && cell.row < edge + self.pattern_height as i32
            && cell.col < edge + self.pattern_width as i32
    }

    /// Board-plane center of a cell
    pub fn cell_center(&self, cell: Cell) -> Vector2 {
        Vector2::new(
            f64::from(cell.col) * PIECE_SPACING,
            f64::from(cell.row) * PIECE_SPACING,
        )
    }

    /// Check if a board-plane point lies within the board rectangle
    ///
    /// The rectangle extends half a cell pitch beyond the outermost centers.
    pub fn contains_point(&self, point: Vector2) -> bool {
        let half = PIECE_SPACING * 0.5;
        let max_x = (self.width() as f64).mul_add(PIECE_SPACING, -half);
        let max_y = (self.height() as f64).mul_add(PIECE_SPACING, -half);
        point.x >= -half && point.y >= -half && point.x < max_x && point.y < max_y
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let width = self.width() as i32;
        let height = self.height() as i32;
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }
}
