//! Player progress persistence
//!
//! The controller only needs a small key-value contract: best time per level
//! and the highest unlocked level. Absent or unreadable entries read as "no
//! record" and level one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::io::configuration::FIRST_LEVEL;
use crate::io::error::{PuzzleError, Result, file_system};

/// Storage for best times and the unlocked level
pub trait ProgressStore {
    /// Best recorded time for `level`, `None` if there is no record
    fn best_time(&self, level: u32) -> Option<Duration>;

    /// Record a best time for `level`
    fn set_best_time(&mut self, level: u32, time: Duration);

    /// Highest level the player may start
    fn unlocked_level(&self) -> u32;

    /// Store the highest level the player may start
    fn set_unlocked_level(&mut self, level: u32);

    /// Forget all progress
    fn reset_all(&mut self);
}

/// Serializable progress snapshot shared by the store implementations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Highest unlocked level
    pub unlocked_level: u32,
    /// Best time in seconds, keyed by level
    pub best_times: BTreeMap<u32, f64>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            unlocked_level: FIRST_LEVEL,
            best_times: BTreeMap::new(),
        }
    }
}

impl ProgressRecord {
    fn best_time(&self, level: u32) -> Option<Duration> {
        self.best_times
            .get(&level)
            .and_then(|&secs| Duration::try_from_secs_f64(secs).ok())
    }

    fn unlocked_level(&self) -> u32 {
        self.unlocked_level.max(FIRST_LEVEL)
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    record: ProgressRecord,
}

impl MemoryProgressStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn best_time(&self, level: u32) -> Option<Duration> {
        self.record.best_time(level)
    }

    fn set_best_time(&mut self, level: u32, time: Duration) {
        self.record.best_times.insert(level, time.as_secs_f64());
    }

    fn unlocked_level(&self) -> u32 {
        self.record.unlocked_level()
    }

    fn set_unlocked_level(&mut self, level: u32) {
        self.record.unlocked_level = level;
    }

    fn reset_all(&mut self) {
        self.record = ProgressRecord::default();
    }
}

/// Write-through store backed by a JSON file
///
/// A missing or malformed file opens as empty progress. Write failures are
/// logged and do not interrupt play.
#[derive(Debug, Clone)]
pub struct JsonProgressStore {
    path: PathBuf,
    record: ProgressRecord,
}

impl JsonProgressStore {
    /// Open the store at `path`, falling back to defaults if unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = match Self::read(&path) {
            Ok(record) => record,
            Err(err) => {
                if path.exists() {
                    warn!(path = %path.display(), error = %err, "ignoring unreadable progress file");
                }
                ProgressRecord::default()
            }
        };
        Self { path, record }
    }

    /// File backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current progress snapshot
    pub const fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Write the current progress to disk
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or the file cannot be
    /// written.
    pub fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.record).map_err(|e| PuzzleError::Serialization {
                path: self.path.clone(),
                source: e,
            })?;
        std::fs::write(&self.path, json).map_err(|e| file_system(&self.path, "write progress", e))
    }

    fn read(path: &Path) -> Result<ProgressRecord> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| file_system(path, "read progress", e))?;
        serde_json::from_str(&contents).map_err(|e| PuzzleError::Serialization {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn persist(&self) {
        if let Err(err) = self.save() {
            warn!(path = %self.path.display(), error = %err, "failed to persist progress");
        }
    }
}

impl ProgressStore for JsonProgressStore {
    fn best_time(&self, level: u32) -> Option<Duration> {
        self.record.best_time(level)
    }

    fn set_best_time(&mut self, level: u32, time: Duration) {
        self.record.best_times.insert(level, time.as_secs_f64());
        self.persist();
    }

    fn unlocked_level(&self) -> u32 {
        self.record.unlocked_level()
    }

    fn set_unlocked_level(&mut self, level: u32) {
        self.record.unlocked_level = level;
        self.persist();
    }

    fn reset_all(&mut self) {
        self.record = ProgressRecord::default();
        self.persist();
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for Box<S> {
    fn best_time(&self, level: u32) -> Option<Duration> {
        (**self).best_time(level)
    }

    fn set_best_time(&mut self, level: u32, time: Duration) {
        (**self).set_best_time(level, time);
    }

    fn unlocked_level(&self) -> u32 {
        (**self).unlocked_level()
    }

    fn set_unlocked_level(&mut self, level: u32) {
        (**self).set_unlocked_level(level);
    }

    fn reset_all(&mut self) {
        (**self).reset_all();
    }
}
