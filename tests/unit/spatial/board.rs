//! Tests for board extent, buffer edges and pattern-region mapping

#[cfg(test)]
mod tests {
    use slidetile::math::vector::Vector2;
    use slidetile::spatial::board::Board;
    use slidetile::spatial::cell::Cell;

    // Tests that buffer edges add a one-cell ring around the pattern region
    // Verified by adding a single edge instead of two in width()
    #[test]
    fn test_buffered_dimensions() {
        let board = Board::new(2, 2, true);
        assert_eq!(board.edge(), 1);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 4);
        assert_eq!(board.cell_count(), 16);
        assert_eq!(board.free_cell(), Cell::new(3, 3));
        assert_eq!(board.pattern_to_board(0, 0), Cell::new(1, 1));
        assert_eq!(board.pattern_to_board(1, 1), Cell::new(2, 2));
    }

    // Tests that unbuffered boards coincide with the pattern region
    // Verified by ignoring buffer_edges in edge()
    #[test]
    fn test_unbuffered_dimensions() {
        let board = Board::new(3, 2, false);
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.free_cell(), Cell::new(1, 2));
        assert_eq!(board.pattern_to_board(1, 2), Cell::new(1, 2));
        assert!(board.in_pattern_region(Cell::new(1, 2)));
    }

    // Tests pattern-region membership excludes the margin ring
    // Verified by using <= for the upper row bound
    #[test]
    fn test_pattern_region_excludes_margin() {
        let board = Board::new(2, 2, true);
        assert!(board.in_pattern_region(Cell::new(1, 1)));
        assert!(board.in_pattern_region(Cell::new(2, 2)));
        assert!(!board.in_pattern_region(Cell::new(0, 1)));
        assert!(!board.in_pattern_region(Cell::new(3, 2)));
    }

    // Tests board bounds for cells and continuous points
    // Verified by removing the half-cell allowance in contains_point
    #[test]
    fn test_bounds() {
        let board = Board::new(2, 2, true);
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(3, 3)));
        assert!(!board.contains(Cell::new(-1, 0)));
        assert!(!board.contains(Cell::new(0, 4)));

        assert!(board.contains_point(Vector2::new(-0.5, -0.5)));
        assert!(board.contains_point(Vector2::new(3.4, 3.4)));
        assert!(!board.contains_point(Vector2::new(3.5, 0.0)));
        assert!(!board.contains_point(Vector2::new(0.0, -0.6)));
    }

    // Tests cell centers and row-major iteration order
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_centers_and_iteration() {
        let board = Board::new(2, 1, false);
        assert_eq!(board.cell_center(Cell::new(0, 1)), Vector2::new(1.0, 0.0));

        let cells: Vec<Cell> = Board::new(2, 2, false).cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }
}
