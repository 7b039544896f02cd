//! Tests for multi-script progress display

#[cfg(test)]
mod tests {
    use slidetile::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use slidetile::io::progress::ProgressManager;
    use std::path::Path;

    // Tests the full lifecycle for a single script
    // Verified by setting wrong initial state
    #[test]
    fn test_single_script_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.start_script(0, Path::new("solve.json"), 10);
        pm.update_events(0, 5);
        pm.update_events(0, 10);
        pm.complete_script(0, "Solved");
        pm.finish();
    }

    // Tests that calls before initialization are ignored
    // Verified by indexing bars directly in bar_for
    #[test]
    fn test_uninitialized_manager_ignores_updates() {
        let pm = ProgressManager::default();
        pm.start_script(3, Path::new("late.json"), 4);
        pm.update_events(3, 1);
        pm.complete_script(3, "Playing");
        pm.finish();
    }

    // Tests batch mode reuses bars beyond the individual limit
    // Verified by creating one bar per script
    #[test]
    fn test_batch_mode_round_robin() {
        let mut pm = ProgressManager::new();
        let count = MAX_INDIVIDUAL_PROGRESS_BARS * 2 + 1;
        pm.initialize(count);
        for index in 0..count {
            pm.start_script(index, Path::new("batch.json"), 2);
            pm.update_events(index, 2);
            pm.complete_script(index, "OutOfMoves");
        }
        pm.finish();
    }
}
