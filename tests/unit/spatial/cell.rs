//! Tests for cell coordinates and push directions

#[cfg(test)]
mod tests {
    use slidetile::math::vector::{Axis, Vector2};
    use slidetile::spatial::cell::{Cell, Direction};

    // Tests that stepping follows row-down, column-right orientation
    // Verified by swapping the Up and Down offsets
    #[test]
    fn test_step_offsets() {
        let origin = Cell::new(1, 1);
        assert_eq!(origin.step(Direction::Up), Cell::new(0, 1));
        assert_eq!(origin.step(Direction::Down), Cell::new(2, 1));
        assert_eq!(origin.step(Direction::Left), Cell::new(1, 0));
        assert_eq!(origin.step(Direction::Right), Cell::new(1, 2));
    }

    // Tests that stepping off the top-left corner yields no array index
    // Verified by casting negative coordinates with `as usize`
    #[test]
    fn test_negative_cells_have_no_index() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.index(), Some([0, 0]));
        assert_eq!(corner.step(Direction::Up).index(), None);
        assert_eq!(corner.step(Direction::Left).index(), None);
    }

    // Tests direction axis and sign consistency
    // Verified by returning Horizontal for Up in axis()
    #[test]
    fn test_direction_properties() {
        for direction in Direction::ALL {
            let (row, col) = direction.offset();
            assert!((f64::from(row + col) - direction.sign()).abs() < f64::EPSILON);
            assert_eq!(
                Direction::from_axis(direction.axis(), direction.sign()),
                Some(direction)
            );
        }
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
    }

    // Tests drag reduction including zero drags and axis ties
    // Verified by returning Some for zero amounts in from_axis
    #[test]
    fn test_from_drag() {
        assert_eq!(
            Direction::from_drag(Vector2::new(0.4, 0.1)),
            Some(Direction::Right)
        );
        assert_eq!(
            Direction::from_drag(Vector2::new(-0.3, 0.3)),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::from_drag(Vector2::new(0.2, -0.2)),
            Some(Direction::Up)
        );
        assert_eq!(Direction::from_drag(Vector2::ZERO), None);
    }

    // Tests human-readable formatting
    // Verified by swapping row and column in Display
    #[test]
    fn test_display() {
        assert_eq!(Cell::new(2, 5).to_string(), "(2, 5)");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
