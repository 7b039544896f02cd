//! Mathematical utilities for continuous board-plane positions

/// Two-dimensional vectors and dominant-axis reduction
pub mod vector;
