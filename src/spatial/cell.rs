//! Discrete cell coordinates and the four push directions

use crate::math::vector::{Axis, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One addressable board position
///
/// Coordinates are signed so that stepping off the board produces a value
/// that bounds checks can reject instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row index, growing downward
    pub row: i32,
    /// Column index, growing rightward
    pub col: i32,
}

impl Cell {
    /// Create a cell from row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring cell one step in `direction`
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Array index for in-bounds cells, `None` for negative coordinates
    pub fn index(self) -> Option<[usize; 2]> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some([row, col])
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit axis-aligned movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0
    Up,
    /// Toward the last row
    Down,
    /// Toward column 0
    Left,
    /// Toward the last column
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(row, col)` delta of one step
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Board-plane axis this direction moves along
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// `+1.0` when moving toward larger coordinates, `-1.0` otherwise
    pub const fn sign(self) -> f64 {
        match self {
            Self::Down | Self::Right => 1.0,
            Self::Up | Self::Left => -1.0,
        }
    }

    /// Direction for a signed scalar along an axis, `None` for zero
    pub fn from_axis(axis: Axis, amount: f64) -> Option<Self> {
        if amount == 0.0 || amount.is_nan() {
            return None;
        }
        let positive = amount > 0.0;
        Some(match (axis, positive) {
            (Axis::Horizontal, true) => Self::Right,
            (Axis::Horizontal, false) => Self::Left,
            (Axis::Vertical, true) => Self::Down,
            (Axis::Vertical, false) => Self::Up,
        })
    }

    /// Reduce a continuous drag vector to a direction
    ///
    /// Uses the dominant axis of `drag`; a zero drag has no direction.
    pub fn from_drag(drag: Vector2) -> Option<Self> {
        let (axis, amount) = drag.dominant_axis();
        Self::from_axis(axis, amount)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}
