//! Random target patterns and a matching supply of piece colors
//!
//! A level is built in three steps: draw the target pattern, extend its colors
//! into a supply covering every non-free board cell, then deal the supply onto
//! the board without replacement. Reachability of the target from the dealt
//! layout is not verified; the balanced supply keeps every target color
//! available in sufficient numbers but does not prove a solution exists.

use ndarray::Array2;
use rand::Rng;
use tracing::debug;

use crate::analysis::balance::SupplyBalance;
use crate::game::level::LevelSpec;
use crate::game::piece::{ColorId, Palette, Piece};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::board::Board;
use crate::spatial::grid::Grid;

/// How colors beyond the target pattern are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyStrategy {
    /// Cycle through the palette so color counts differ by at most one
    Even {
        /// Start the cycle at a random palette index instead of the first
        random_offset: bool,
    },
    /// Draw each extra color independently and uniformly
    Uniform,
}

impl Default for SupplyStrategy {
    fn default() -> Self {
        Self::Even {
            random_offset: false,
        }
    }
}

/// Colors the pattern region must show to win
///
/// Sized to the pattern region. Without buffer edges the last cell is `None`
/// and takes no part in the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPattern {
    cells: Array2<Option<ColorId>>,
}

impl TargetPattern {
    /// Wrap a `(rows, cols)` array of target colors
    pub const fn from_array(cells: Array2<Option<ColorId>>) -> Self {
        Self { cells }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Target color at pattern position `(row, col)`
    pub fn color_at(&self, row: usize, col: usize) -> Option<ColorId> {
        self.cells.get([row, col]).copied().flatten()
    }

    /// Every scored position with its color, in row-major order
    pub fn scored_cells(&self) -> impl Iterator<Item = ((usize, usize), ColorId)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|(position, color)| color.map(|color| (position, color)))
    }

    /// Target colors in row-major order, skipping unscored positions
    pub fn colors(&self) -> Vec<ColorId> {
        self.scored_cells().map(|(_, color)| color).collect()
    }

    /// Underlying array
    pub const fn cells(&self) -> &Array2<Option<ColorId>> {
        &self.cells
    }
}

/// Output of pattern generation for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLevel {
    /// Target colors for the pattern region
    pub pattern: TargetPattern,
    /// One color per non-free board cell: target colors first, then extras
    pub supply: Vec<ColorId>,
}

/// Produces target patterns and color supplies
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternGenerator {
    strategy: SupplyStrategy,
}

impl PatternGenerator {
    /// Create a generator with the given extra-color strategy
    pub const fn new(strategy: SupplyStrategy) -> Self {
        Self { strategy }
    }

    /// Strategy used for extra colors
    pub const fn strategy(&self) -> SupplyStrategy {
        self.strategy
    }

    /// Generate a target pattern and the full color supply for `spec`
    ///
    /// # Errors
    ///
    /// Returns `InvalidLevelSpec` for an unplayable spec and
    /// `ColorSupplyExhausted` if the supply ends up unable to cover the board.
    pub fn generate<R: Rng>(
        &self,
        spec: &LevelSpec,
        palette: &Palette,
        rng: &mut R,
    ) -> Result<GeneratedLevel> {
        spec.validate()?;
        let board = spec.board();
        let palette_len = palette.len();
        if palette_len == 0 {
            return Err(PuzzleError::EmptyPalette);
        }

        let height = spec.pattern_height;
        let width = spec.pattern_width;
        let mut supply = Vec::with_capacity(board.cell_count().saturating_sub(1));
        let mut cells = Array2::from_elem((height, width), None);
        for ((row, col), slot) in cells.indexed_iter_mut() {
            // The last pattern cell doubles as the free slot without a margin.
            let is_last = row + 1 == height && col + 1 == width;
            if is_last && !spec.buffer_edges {
                continue;
            }
            let color = palette.cycle(rng.random_range(0..palette_len));
            *slot = Some(color);
            supply.push(color);
        }

        let extra = board
            .cell_count()
            .saturating_sub(supply.len())
            .saturating_sub(1);
        match self.strategy {
            SupplyStrategy::Even { random_offset } => {
                let offset = if random_offset {
                    rng.random_range(0..palette_len)
                } else {
                    0
                };
                supply.extend((0..extra).map(|i| palette.cycle(offset + i)));
            }
            SupplyStrategy::Uniform => {
                supply.extend((0..extra).map(|_| palette.cycle(rng.random_range(0..palette_len))));
            }
        }

        let pattern = TargetPattern::from_array(cells);
        let balance = SupplyBalance::measure(&supply, &pattern, palette);
        if !balance.covers_target() || supply.len() + 1 != board.cell_count() {
            return Err(PuzzleError::ColorSupplyExhausted {
                needed: board.cell_count() - 1,
                available: supply.len(),
            });
        }
        debug!(
            width,
            height,
            buffer_edges = spec.buffer_edges,
            supply = supply.len(),
            spread = balance.spread(),
            "generated level pattern"
        );

        Ok(GeneratedLevel { pattern, supply })
    }
}

/// Deal a color supply onto a fresh board
///
/// Visits cells in row-major order, leaving the board's free cell empty, and
/// gives each visited cell a color drawn at random from the remaining supply.
/// Pieces get ids in placement order.
///
/// # Errors
///
/// Returns `ColorSupplyExhausted` if the supply does not hold exactly one color
/// per non-free cell.
pub fn place_pieces<R: Rng>(
    board: Board,
    supply: &[ColorId],
    rng: &mut R,
) -> Result<(Grid, Vec<Piece>)> {
    let needed = board.cell_count().saturating_sub(1);
    if supply.len() != needed {
        return Err(PuzzleError::ColorSupplyExhausted {
            needed,
            available: supply.len(),
        });
    }

    let mut remaining = supply.to_vec();
    let mut grid = Grid::new(board);
    let mut pieces = Vec::with_capacity(needed);
    let free_cell = board.free_cell();
    for cell in board.cells().filter(|&cell| cell != free_cell) {
        if remaining.is_empty() {
            return Err(PuzzleError::ColorSupplyExhausted {
                needed,
                available: supply.len(),
            });
        }
        let color = remaining.swap_remove(rng.random_range(0..remaining.len()));
        let id = grid.place(cell)?;
        pieces.push(Piece { id, color });
    }

    Ok((grid, pieces))
}
