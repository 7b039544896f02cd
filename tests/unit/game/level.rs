//! Tests for level specs and the level table

#[cfg(test)]
mod tests {
    use slidetile::PuzzleError;
    use slidetile::game::level::{LevelSpec, LevelTable};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    // Tests the default progression of board sizes and budgets
    // Verified by reordering DEFAULT_LEVELS
    #[test]
    fn test_default_table() {
        let table = LevelTable::default();
        assert_eq!(table.len(), 5);
        assert!(!table.is_empty());
        assert_eq!(
            table.spec_for(1),
            LevelSpec::new(2, 2, true, Duration::from_secs(120), 50)
        );
        assert_eq!(
            table.spec_for(4),
            LevelSpec::new(3, 3, false, Duration::from_secs(300), 200)
        );
    }

    // Tests that level numbers outside the table clamp instead of failing
    // Verified by using len - 1 as the upper clamp bound
    #[test]
    fn test_clamping() {
        let table = LevelTable::default();
        assert_eq!(table.clamp_level(0), 1);
        assert_eq!(table.clamp_level(5), 5);
        assert_eq!(table.clamp_level(99), 5);
        assert_eq!(table.spec_for(99), table.spec_for(5));
        assert_eq!(table.spec_for(0), table.spec_for(1));
    }

    // Tests validation of empty tables and degenerate boards
    // Verified by accepting a single-cell board in validate
    #[test]
    fn test_validation() {
        assert!(matches!(
            LevelTable::new(Vec::new()),
            Err(PuzzleError::InvalidLevelSpec { .. })
        ));

        let single_cell = LevelSpec::new(1, 1, false, Duration::from_secs(10), 1);
        assert!(single_cell.validate().is_err());
        assert!(LevelTable::new(vec![single_cell]).is_err());

        let smallest = LevelSpec::new(2, 1, false, Duration::from_secs(10), 1);
        assert!(smallest.validate().is_ok());
        assert_eq!(LevelSpec::new(1, 1, true, Duration::ZERO, 0).board().cell_count(), 9);
    }

    // Tests loading a table from JSON with fractional time limits
    // Verified by parsing time_limit as whole seconds
    #[test]
    fn test_from_json_path() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"[{{"pattern_width":3,"pattern_height":2,"buffer_edges":false,"time_limit":30.5,"max_moves":12}}]"#
        )
        .expect("Failed to write level table");

        let table = LevelTable::from_json_path(file.path()).expect("Failed to load table");
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.spec_for(1),
            LevelSpec::new(3, 2, false, Duration::from_secs_f64(30.5), 12)
        );
    }

    // Tests that malformed or invalid tables are reported, not defaulted
    // Verified by falling back to the default table on parse errors
    #[test]
    fn test_from_json_path_errors() {
        let mut malformed = NamedTempFile::new().expect("Failed to create temp file");
        write!(malformed, "not json").expect("Failed to write");
        assert!(matches!(
            LevelTable::from_json_path(malformed.path()),
            Err(PuzzleError::Serialization { .. })
        ));

        let mut empty = NamedTempFile::new().expect("Failed to create temp file");
        write!(empty, "[]").expect("Failed to write");
        assert!(LevelTable::from_json_path(empty.path()).is_err());

        let missing = std::path::Path::new("/nonexistent/levels.json");
        assert!(matches!(
            LevelTable::from_json_path(missing),
            Err(PuzzleError::FileSystem { .. })
        ));
    }
}
