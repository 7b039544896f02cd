//! Sliding-piece color pattern puzzle engine
//!
//! Colored pieces fill a rectangular board except for a single free cell.
//! Dragging a piece pushes the line of pieces ahead of it one cell at a time;
//! the goal is to make the scored pattern region show a randomly generated
//! target pattern within a move and time budget.

#![forbid(unsafe_code)]

/// Push resolution, snapping and level generation
pub mod algorithm;
/// Statistics over generated color supplies
pub mod analysis;
/// Levels, sessions, gestures and the session controller
pub mod game;
/// Errors, configuration, persistence and the command-line interface
pub mod io;
/// Board-plane vector math
pub mod math;
/// Cells, boards and grid occupancy
pub mod spatial;

pub use io::error::{PuzzleError, Result};
