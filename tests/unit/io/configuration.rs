//! Tests for game constants and defaults

#[cfg(test)]
mod tests {
    use slidetile::io::configuration::{
        DEFAULT_LEVELS, DEFAULT_PALETTE, DEFAULT_SEED, FIRST_LEVEL, MAX_INDIVIDUAL_PROGRESS_BARS,
        MOVEMENT_STEP_LIMIT, OUTPUT_SUFFIX, PIECE_SPACING, PUSH_COMMIT_THRESHOLD, SCRIPT_EXTENSION,
    };

    // Tests gesture constants relative to the cell pitch
    // Verified by setting the step limit above the commit threshold
    #[test]
    fn test_gesture_constants() {
        assert!((PIECE_SPACING - 1.0).abs() < f64::EPSILON);
        assert!((MOVEMENT_STEP_LIMIT - 0.1).abs() < f64::EPSILON);
        assert!((PUSH_COMMIT_THRESHOLD - 0.5).abs() < f64::EPSILON);
        assert!(MOVEMENT_STEP_LIMIT < PUSH_COMMIT_THRESHOLD);
    }

    // Tests the default level progression ends on margin-free boards
    // Verified by changing buffer flags in DEFAULT_LEVELS
    #[test]
    fn test_default_levels() {
        assert_eq!(DEFAULT_LEVELS.len(), 5);
        assert_eq!(DEFAULT_LEVELS.first(), Some(&(2, 2, true, 120, 50)));
        assert_eq!(DEFAULT_LEVELS.last(), Some(&(4, 4, false, 300, 200)));
    }

    // Tests remaining defaults
    // Verified by changing constant values
    #[test]
    fn test_defaults() {
        assert_eq!(FIRST_LEVEL, 1);
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_PALETTE.len(), 4);
        assert_eq!(OUTPUT_SUFFIX, "_result");
        assert_eq!(SCRIPT_EXTENSION, "json");
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
