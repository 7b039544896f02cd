//! Level specifications and the ordered level table

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::io::configuration::DEFAULT_LEVELS;
use crate::io::error::{PuzzleError, Result, file_system};
use crate::spatial::board::Board;

/// Parameters of one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Columns of the scored pattern region
    pub pattern_width: usize,
    /// Rows of the scored pattern region
    pub pattern_height: usize,
    /// Whether a one-cell margin surrounds the pattern region
    pub buffer_edges: bool,
    /// Time budget
    #[serde(with = "duration_secs")]
    pub time_limit: Duration,
    /// Move budget
    pub max_moves: u32,
}

impl LevelSpec {
    /// Create a level spec
    pub const fn new(
        pattern_width: usize,
        pattern_height: usize,
        buffer_edges: bool,
        time_limit: Duration,
        max_moves: u32,
    ) -> Self {
        Self {
            pattern_width,
            pattern_height,
            buffer_edges,
            time_limit,
            max_moves,
        }
    }

    /// Board this level is played on
    pub const fn board(&self) -> Board {
        Board::new(self.pattern_width, self.pattern_height, self.buffer_edges)
    }

    /// Check that the level can be generated and played
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevelSpec` for an empty pattern region or a board with
    /// fewer than two cells.
    pub fn validate(&self) -> Result<()> {
        if self.pattern_width == 0 || self.pattern_height == 0 {
            return Err(PuzzleError::InvalidLevelSpec {
                reason: format!(
                    "pattern region {}x{} is empty",
                    self.pattern_width, self.pattern_height
                ),
            });
        }
        if self.board().cell_count() < 2 {
            return Err(PuzzleError::InvalidLevelSpec {
                reason: "board needs at least one piece besides the free slot".to_string(),
            });
        }
        Ok(())
    }
}

/// Ordered, non-empty table of levels; index 0 is player level 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelSpec>", into = "Vec<LevelSpec>")]
pub struct LevelTable {
    levels: Vec<LevelSpec>,
}

impl LevelTable {
    /// Create a table from validated specs
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevelSpec` if the table is empty or any entry is invalid.
    pub fn new(levels: Vec<LevelSpec>) -> Result<Self> {
        if levels.is_empty() {
            return Err(PuzzleError::InvalidLevelSpec {
                reason: "level table is empty".to_string(),
            });
        }
        for spec in &levels {
            spec.validate()?;
        }
        Ok(Self { levels })
    }

    /// Load a table from a JSON array of level specs
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes an invalid table.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| file_system(path, "read level table", e))?;
        let levels: Vec<LevelSpec> =
            serde_json::from_str(&contents).map_err(|e| PuzzleError::Serialization {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::new(levels)
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Clamp a player level into `1..=len`
    pub fn clamp_level(&self, level: u32) -> u32 {
        let max = u32::try_from(self.levels.len()).unwrap_or(u32::MAX);
        level.clamp(1, max)
    }

    /// Spec for a player level, clamped to the table bounds
    pub fn spec_for(&self, level: u32) -> LevelSpec {
        let index = self.clamp_level(level) as usize - 1;
        self.levels
            .get(index)
            .or_else(|| self.levels.last())
            .copied()
            .unwrap_or_else(|| default_spec(0))
    }

    /// All specs in order
    pub fn levels(&self) -> &[LevelSpec] {
        &self.levels
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self {
            levels: (0..DEFAULT_LEVELS.len()).map(default_spec).collect(),
        }
    }
}

impl TryFrom<Vec<LevelSpec>> for LevelTable {
    type Error = PuzzleError;

    fn try_from(levels: Vec<LevelSpec>) -> Result<Self> {
        Self::new(levels)
    }
}

impl From<LevelTable> for Vec<LevelSpec> {
    fn from(table: LevelTable) -> Self {
        table.levels
    }
}

fn default_spec(index: usize) -> LevelSpec {
    let (width, height, buffer_edges, secs, max_moves) = DEFAULT_LEVELS
        .get(index)
        .copied()
        .unwrap_or((2, 2, true, 120, 50));
    LevelSpec::new(
        width,
        height,
        buffer_edges,
        Duration::from_secs(secs),
        max_moves,
    )
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
