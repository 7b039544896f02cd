//! Spatial data structures for the puzzle board
//!
//! This module contains:
//! - Cell coordinates and push directions
//! - Board extent and pattern-region mapping
//! - Grid occupancy and nearest-cell resolution

/// Board extent and pattern-region mapping
pub mod board;
/// Cell coordinates and axis-aligned directions
pub mod cell;
/// Piece occupancy and nearest-cell lookup
pub mod grid;

pub use board::Board;
pub use cell::{Cell, Direction};
pub use grid::{Grid, PieceId};
