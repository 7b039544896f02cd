//! Board-plane vectors used for continuous piece and pointer positions
//!
//! One unit equals one cell pitch. `x` grows with columns and `y` grows with
//! rows, so the center of cell `(row, col)` sits at `(col, row)` scaled by the
//! piece spacing.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// Axis of the board plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along rows (the `x` component, column index changes)
    Horizontal,
    /// Along columns (the `y` component, row index changes)
    Vertical,
}

/// Continuous position or displacement on the board plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Vector2 {
    /// The zero vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Component along the given axis
    pub const fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Replace the component along the given axis
    #[must_use]
    pub const fn with_component(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Horizontal => Self { x: value, y: self.y },
            Axis::Vertical => Self { x: self.x, y: value },
        }
    }

    /// Reduce to the dominant axis
    ///
    /// The horizontal axis wins only when its magnitude is strictly larger;
    /// ties go to the vertical axis. Returns the axis and the signed scalar
    /// along it.
    pub fn dominant_axis(self) -> (Axis, f64) {
        if self.x.abs() > self.y.abs() {
            (Axis::Horizontal, self.x)
        } else {
            (Axis::Vertical, self.y)
        }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
