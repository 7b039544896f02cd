//! Tests for board-plane vectors and dominant-axis reduction

#[cfg(test)]
mod tests {
    use slidetile::math::vector::{Axis, Vector2};

    // Tests that a strictly larger horizontal component selects the horizontal axis
    // Verified by swapping the comparison operands in dominant_axis
    #[test]
    fn test_dominant_axis_prefers_larger_component() {
        assert_eq!(
            Vector2::new(0.7, -0.2).dominant_axis(),
            (Axis::Horizontal, 0.7)
        );
        assert_eq!(
            Vector2::new(0.1, -0.4).dominant_axis(),
            (Axis::Vertical, -0.4)
        );
    }

    // Tests that equal magnitudes resolve to the vertical axis
    // Verified by changing the strict comparison to >=
    #[test]
    fn test_dominant_axis_tie_goes_vertical() {
        assert_eq!(
            Vector2::new(0.5, -0.5).dominant_axis(),
            (Axis::Vertical, -0.5)
        );
        assert_eq!(Vector2::ZERO.dominant_axis(), (Axis::Vertical, 0.0));
    }

    // Tests per-axis component access and replacement
    // Verified by swapping match arms in with_component
    #[test]
    fn test_component_round_trip() {
        let v = Vector2::new(1.5, -2.0);
        assert!((v.component(Axis::Horizontal) - 1.5).abs() < f64::EPSILON);
        assert!((v.component(Axis::Vertical) + 2.0).abs() < f64::EPSILON);

        let replaced = v.with_component(Axis::Vertical, 3.0);
        assert_eq!(replaced, Vector2::new(1.5, 3.0));
    }

    // Tests Euclidean distance and arithmetic operators
    // Verified by using Manhattan distance instead of hypot
    #[test]
    fn test_distance_and_operators() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);

        let mut c = a + b;
        c += Vector2::new(1.0, 1.0);
        assert_eq!(c, Vector2::new(4.0, 5.0));
        assert_eq!(c - b, Vector2::new(1.0, 1.0));
        assert_eq!(b * 2.0, Vector2::new(6.0, 8.0));
    }
}
