//! Piece colors and the palette they index into

use serde::{Deserialize, Serialize};

use crate::io::configuration::DEFAULT_PALETTE;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::grid::PieceId;

/// Index of a color in the level palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorId(pub u16);

impl ColorId {
    /// Position of this color in its palette
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered set of RGBA piece colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<[u8; 4]>,
}

impl Palette {
    /// Create a palette from RGBA entries
    ///
    /// # Errors
    ///
    /// Returns `EmptyPalette` when `colors` is empty and `InvalidParameter`
    /// when it has more entries than a `ColorId` can address.
    pub fn new(colors: Vec<[u8; 4]>) -> Result<Self> {
        if colors.is_empty() {
            return Err(PuzzleError::EmptyPalette);
        }
        if colors.len() > usize::from(u16::MAX) {
            return Err(crate::io::error::invalid_parameter(
                "palette",
                &colors.len(),
                &"too many colors",
            ));
        }
        Ok(Self { colors })
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// RGBA value of a color
    pub fn rgba(&self, color: ColorId) -> Option<[u8; 4]> {
        self.colors.get(color.index()).copied()
    }

    /// Every color id in palette order
    pub fn ids(&self) -> impl Iterator<Item = ColorId> + use<> {
        (0..self.colors.len()).map(|index| ColorId(index as u16))
    }

    /// Color id at `index` modulo the palette length
    pub fn cycle(&self, index: usize) -> ColorId {
        ColorId((index % self.colors.len()) as u16)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// A movable colored unit
///
/// Color and identity stay fixed for the whole level; position lives in the
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Identifier shared with the grid
    pub id: PieceId,
    /// Color drawn from the level supply
    pub color: ColorId,
}
