//! Multi-script progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display while replaying scripts
///
/// Shows one bar per script for small batches and adds an overall batch bar
/// once there are more scripts than individual bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    script_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static EVENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:20} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Scripts: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            script_bars: Vec::new(),
        }
    }

    /// Initialize progress bars based on script count
    pub fn initialize(&mut self, script_count: usize) {
        if script_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(script_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..script_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(EVENT_STYLE.clone());
            self.script_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Configure a bar for the script at `index`
    pub fn start_script(&self, index: usize, path: &Path, event_count: usize) {
        if let Some(bar) = self.bar_for(index) {
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_prefix(name);
            bar.set_length(event_count as u64);
            bar.set_position(0);
            bar.set_message(String::new());
        }
    }

    /// Report how many events of a script have been applied
    pub fn update_events(&self, index: usize, applied: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position(applied as u64);
        }
    }

    /// Mark a script as finished with a short outcome label
    pub fn complete_script(&self, index: usize, outcome: &str) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_message(format!("✓ {outcome}"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All scripts replayed");
        }
        let _ = self.multi_progress.clear();
    }

    // Bars are reused round-robin once the batch outgrows them
    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        if self.script_bars.is_empty() {
            return None;
        }
        self.script_bars.get(index % self.script_bars.len())
    }
}
