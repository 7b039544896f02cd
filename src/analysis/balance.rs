//! Color supply statistics
//!
//! Counts how many pieces of each palette color a supply holds and compares
//! them against the target pattern's demand.

use serde::Serialize;

use crate::algorithm::generation::TargetPattern;
use crate::game::piece::{ColorId, Palette};

/// Per-color supply and demand for one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplyBalance {
    /// Pieces of each palette color in the supply
    pub supplied: Vec<usize>,
    /// Cells of each palette color in the target pattern
    pub demanded: Vec<usize>,
}

impl SupplyBalance {
    /// Measure a supply against a pattern
    pub fn measure(supply: &[ColorId], pattern: &TargetPattern, palette: &Palette) -> Self {
        Self {
            supplied: count_colors(supply.iter().copied(), palette.len()),
            demanded: count_colors(pattern.colors(), palette.len()),
        }
    }

    /// Check if every target color is available at least as often as needed
    pub fn covers_target(&self) -> bool {
        self.supplied
            .iter()
            .zip(&self.demanded)
            .all(|(supplied, demanded)| supplied >= demanded)
    }

    /// Difference between the most and least supplied colors
    pub fn spread(&self) -> usize {
        let max = self.supplied.iter().max().copied().unwrap_or(0);
        let min = self.supplied.iter().min().copied().unwrap_or(0);
        max - min
    }

    /// Supply remaining after the target is satisfied, per color
    pub fn surplus(&self) -> Vec<usize> {
        self.supplied
            .iter()
            .zip(&self.demanded)
            .map(|(supplied, demanded)| supplied.saturating_sub(*demanded))
            .collect()
    }
}

/// Count occurrences of each color, indexed by palette position
pub fn count_colors(colors: impl IntoIterator<Item = ColorId>, palette_len: usize) -> Vec<usize> {
    let mut counts = vec![0; palette_len];
    for color in colors {
        if let Some(count) = counts.get_mut(color.index()) {
            *count += 1;
        }
    }
    counts
}
