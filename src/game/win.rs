//! Target pattern comparison

use crate::algorithm::generation::TargetPattern;
use crate::game::piece::Piece;
use crate::spatial::grid::Grid;

/// Check if the pattern region shows the target colors
///
/// Every scored pattern position must map to an occupied board cell whose
/// piece has the target color. A vacancy or a single wrong color fails.
pub fn is_solved(grid: &Grid, pieces: &[Piece], pattern: &TargetPattern) -> bool {
    matching_cells(grid, pieces, pattern) == pattern.scored_cells().count()
}

/// Number of scored positions currently showing their target color
pub fn matching_cells(grid: &Grid, pieces: &[Piece], pattern: &TargetPattern) -> usize {
    let board = grid.board();
    pattern
        .scored_cells()
        .filter(|&((row, col), target)| {
            grid.occupancy(board.pattern_to_board(row, col))
                .and_then(|id| pieces.get(id.0))
                .is_some_and(|piece| piece.color == target)
        })
        .count()
}
