//! Tests for release-time snapping of displaced pieces

#[cfg(test)]
mod tests {
    use slidetile::algorithm::snap::{Settled, snap_to_nearest};
    use slidetile::math::vector::Vector2;
    use slidetile::spatial::board::Board;
    use slidetile::spatial::cell::Cell;
    use slidetile::spatial::grid::{Grid, PieceId};

    fn row_grid() -> Grid {
        let mut grid = Grid::new(Board::new(3, 1, false));
        for col in 0..2 {
            assert!(grid.place(Cell::new(0, col)).is_ok());
        }
        grid
    }

    // Tests that a piece drawn nearer a vacant cell moves there
    // Verified by always keeping the current cell
    #[test]
    fn test_snaps_into_vacant_nearest_cell() {
        let mut grid = row_grid();
        let settled = snap_to_nearest(&mut grid, &[(PieceId(1), Vector2::new(1.7, 0.0))]);
        assert_eq!(
            settled,
            vec![Settled {
                piece: PieceId(1),
                cell: Cell::new(0, 2)
            }]
        );
        assert_eq!(grid.vacant_cells(), vec![Cell::new(0, 1)]);
    }

    // Tests that a piece never snaps onto an occupied cell
    // Verified by dropping the vacancy check in snap_to_nearest
    #[test]
    fn test_occupied_nearest_cell_keeps_piece() {
        let mut grid = row_grid();
        let settled = snap_to_nearest(&mut grid, &[(PieceId(0), Vector2::new(0.9, 0.0))]);
        assert_eq!(settled.first().map(|s| s.cell), Some(Cell::new(0, 0)));
        assert_eq!(grid.vacant_cells(), vec![Cell::new(0, 2)]);
    }

    // Tests that an earlier snap can free the cell a later piece needs
    // Verified by snapping in reverse order
    #[test]
    fn test_sequential_snaps_chain() {
        let mut grid = row_grid();
        let positions = [
            (PieceId(1), Vector2::new(1.6, 0.0)),
            (PieceId(0), Vector2::new(0.6, 0.0)),
        ];
        let settled = snap_to_nearest(&mut grid, &positions);
        assert_eq!(
            settled.iter().map(|s| s.cell).collect::<Vec<_>>(),
            vec![Cell::new(0, 2), Cell::new(0, 1)]
        );
        assert_eq!(grid.vacant_cells(), vec![Cell::new(0, 0)]);
    }
}
