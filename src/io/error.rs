//! Error types for level construction, grid mutation and persistence

use std::fmt;
use std::path::PathBuf;

use crate::spatial::cell::Cell;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Target cell lies outside the board
    ///
    /// Raised by the grid; push resolution turns it into a refused move.
    OutOfBounds {
        /// The offending cell
        cell: Cell,
    },

    /// Target cell already holds a piece
    CellOccupied {
        /// The occupied cell
        cell: Cell,
    },

    /// The color palette has no entries
    EmptyPalette,

    /// The color supply cannot fill every non-free cell of the board
    ColorSupplyExhausted {
        /// Colors required to fill the board
        needed: usize,
        /// Colors actually available
        available: usize,
    },

    /// A level table entry cannot produce a playable board
    InvalidLevelSpec {
        /// Description of what's wrong with the entry
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// File being read or written
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell } => write!(f, "Cell {cell} is outside the board"),
            Self::CellOccupied { cell } => write!(f, "Cell {cell} is already occupied"),
            Self::EmptyPalette => write!(f, "Color palette is empty"),
            Self::ColorSupplyExhausted { needed, available } => {
                write!(
                    f,
                    "Color supply exhausted: {needed} colors needed, {available} available"
                )
            }
            Self::InvalidLevelSpec { reason } => write!(f, "Invalid level spec: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "Malformed JSON in '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PuzzleError {
    PuzzleError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
