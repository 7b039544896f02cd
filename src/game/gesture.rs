//! Press, drag and release handling for a single pointer gesture
//!
//! Pieces have two positions while a gesture is active: the grid cell, which
//! is ground truth, and a visual offset from that cell's center that follows
//! the pointer continuously. The held piece may only leave its cell center in
//! a direction where a push chain exists. Once it has travelled past half a
//! cell the push is committed through [`PushResolver::try_move`] and the
//! offsets of the whole chain are rebased onto their new cells.

use crate::algorithm::push::{PushResolver, push_chain};
use crate::algorithm::snap::{Settled, snap_to_nearest};
use crate::io::configuration::{MOVEMENT_STEP_LIMIT, PIECE_SPACING, PUSH_COMMIT_THRESHOLD};
use crate::math::vector::{Axis, Vector2};
use crate::spatial::cell::{Cell, Direction};
use crate::spatial::grid::{Grid, PieceId};

/// Summary of a finished gesture
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GestureSummary {
    /// Pieces displaced during the gesture and where they settled
    pub settled: Vec<Settled>,
    /// Pieces whose cell at release differs from their cell at press
    pub counted_moves: u32,
}

#[derive(Debug, Clone)]
struct ActiveGesture {
    held: PieceId,
    last_point: Vector2,
    start_cells: Vec<Cell>,
    axis: Option<Axis>,
}

/// Tracks the active gesture and the visual offsets it produces
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    resolver: PushResolver,
    offsets: Vec<Vector2>,
    active: Option<ActiveGesture>,
}

impl GestureTracker {
    /// Create a tracker for `piece_count` pieces
    pub fn new(piece_count: usize) -> Self {
        Self {
            resolver: PushResolver::new(piece_count),
            offsets: vec![Vector2::ZERO; piece_count],
            active: None,
        }
    }

    /// Check if a gesture is in progress
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Piece grabbed by the active gesture
    pub fn held_piece(&self) -> Option<PieceId> {
        self.active.as_ref().map(|active| active.held)
    }

    /// Visual displacement of a piece from its cell center
    pub fn offset(&self, piece: PieceId) -> Vector2 {
        self.offsets.get(piece.0).copied().unwrap_or_default()
    }

    /// Where a piece is drawn: its cell center plus its visual offset
    pub fn visual_position(&self, grid: &Grid, piece: PieceId) -> Option<Vector2> {
        grid.cell_of(piece)
            .map(|cell| grid.board().cell_center(cell) + self.offset(piece))
    }

    /// Pieces displaced by pushes since the gesture began
    pub fn moved_pieces(&self) -> Vec<PieceId> {
        self.resolver.moved_pieces()
    }

    /// Begin a gesture on the piece under `point`
    ///
    /// Ignored while another gesture is active, when `point` is off the board,
    /// or when it lands on the free slot.
    pub fn press(&mut self, grid: &Grid, point: Vector2) -> Option<PieceId> {
        if self.active.is_some() || !grid.board().contains_point(point) {
            return None;
        }
        let held = grid.occupancy(grid.nearest_cell(point))?;

        self.resolver.begin_gesture();
        self.clear_offsets();
        self.active = Some(ActiveGesture {
            held,
            last_point: point,
            start_cells: grid.piece_cells().to_vec(),
            axis: None,
        });
        Some(held)
    }

    /// Follow the pointer to `point`
    ///
    /// The displacement since the previous sample is reduced to its dominant
    /// axis, clamped to one cell and replayed in steps of at most
    /// [`MOVEMENT_STEP_LIMIT`]. Travel beyond one cell per sample is dropped.
    /// Returns the number of one-cell pushes committed.
    pub fn drag(&mut self, grid: &mut Grid, point: Vector2) -> usize {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };
        let delta = point - active.last_point;
        active.last_point = point;
        let held = active.held;

        let Some(direction) = Direction::from_drag(delta) else {
            return 0;
        };
        let axis = direction.axis();
        let switched_axis = active.axis.is_some_and(|previous| previous != axis);
        active.axis = Some(axis);
        if switched_axis {
            self.clear_offsets();
        }

        let mut remaining = delta.component(axis).abs().min(PIECE_SPACING);
        let mut commits = 0;
        while remaining > 0.0 {
            let step = remaining.min(MOVEMENT_STEP_LIMIT);
            remaining -= step;
            if self.advance(grid, held, direction, step) {
                commits += 1;
            }
        }
        commits
    }

    /// End the gesture, snapping every displaced piece and counting moves
    ///
    /// Returns `None` when no gesture was active.
    pub fn release(&mut self, grid: &mut Grid) -> Option<GestureSummary> {
        let active = self.active.take()?;
        let positions: Vec<(PieceId, Vector2)> = self
            .resolver
            .moved_pieces()
            .into_iter()
            .filter_map(|piece| Some((piece, self.visual_position(grid, piece)?)))
            .collect();
        let settled = snap_to_nearest(grid, &positions);

        let counted_moves = settled
            .iter()
            .filter(|settled| active.start_cells.get(settled.piece.0) != Some(&settled.cell))
            .count();
        self.clear_offsets();
        self.resolver.begin_gesture();

        Some(GestureSummary {
            settled,
            counted_moves: u32::try_from(counted_moves).unwrap_or(u32::MAX),
        })
    }

    fn advance(&mut self, grid: &mut Grid, held: PieceId, direction: Direction, step: f64) -> bool {
        let axis = direction.axis();
        let sign = direction.sign();
        let current = self.offset(held).component(axis) * sign;
        let proposed = current + step;

        if proposed <= 0.0 {
            self.set_progress(held, axis, proposed * sign);
            return false;
        }

        let Some(chain) = push_chain(grid, held, direction) else {
            self.set_progress(held, axis, current.max(0.0) * sign);
            return false;
        };

        for &piece in &chain {
            let progress = self.offset(piece).component(axis) * sign;
            if piece == held || progress < proposed {
                self.set_progress(piece, axis, proposed * sign);
            }
        }

        if proposed > PUSH_COMMIT_THRESHOLD && self.resolver.try_move(grid, held, direction) {
            for &piece in &chain {
                let rebased = self.offset(piece).component(axis) - sign * PIECE_SPACING;
                self.set_progress(piece, axis, rebased);
            }
            return true;
        }
        false
    }

    fn set_progress(&mut self, piece: PieceId, axis: Axis, value: f64) {
        if piece.0 >= self.offsets.len() {
            self.offsets.resize(piece.0 + 1, Vector2::ZERO);
        }
        if let Some(offset) = self.offsets.get_mut(piece.0) {
            *offset = offset.with_component(axis, value);
        }
    }

    fn clear_offsets(&mut self) {
        self.offsets.fill(Vector2::ZERO);
    }
}
