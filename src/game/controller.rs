//! Play session orchestration
//!
//! The controller owns the level table, the palette, the progress store and,
//! while a level runs, the grid, pieces, target pattern and session counters.
//! An external driver feeds it ticks and pointer events; presentation reads
//! the exposed state after each call.
//!
//! State machine: `Idle -> Playing -> {Solved, OutOfTime, OutOfMoves}`, and
//! back to `Idle` only through [`SessionController::return_to_menu`] or by
//! starting another level.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::algorithm::generation::{PatternGenerator, TargetPattern, place_pieces};
use crate::game::gesture::{GestureSummary, GestureTracker};
use crate::game::level::{LevelSpec, LevelTable};
use crate::game::piece::{ColorId, Palette, Piece};
use crate::game::session::{Outcome, Session, SessionState};
use crate::game::win::is_solved;
use crate::io::configuration::FIRST_LEVEL;
use crate::io::error::Result;
use crate::io::store::ProgressStore;
use crate::math::vector::Vector2;
use crate::spatial::cell::Cell;
use crate::spatial::grid::{Grid, PieceId};

/// Read-only view of one piece for presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceView {
    /// Piece identifier
    pub id: PieceId,
    /// Piece color
    pub color: ColorId,
    /// Cell the piece occupies
    pub cell: Cell,
    /// Continuous position including any in-gesture offset
    pub position: Vector2,
}

#[derive(Debug, Clone)]
struct ActiveLevel {
    grid: Grid,
    pieces: Vec<Piece>,
    pattern: TargetPattern,
    gestures: GestureTracker,
    session: Session,
}

/// Single owner of the running puzzle
#[derive(Debug)]
pub struct SessionController<S: ProgressStore> {
    levels: LevelTable,
    palette: Palette,
    generator: PatternGenerator,
    store: S,
    rng: StdRng,
    player_level: u32,
    active: Option<ActiveLevel>,
}

impl<S: ProgressStore> SessionController<S> {
    /// Create an idle controller
    ///
    /// The player level starts at the store's unlocked level.
    pub fn new(levels: LevelTable, palette: Palette, store: S, seed: u64) -> Self {
        let player_level = levels.clamp_level(store.unlocked_level());
        Self {
            levels,
            palette,
            generator: PatternGenerator::default(),
            store,
            rng: StdRng::seed_from_u64(seed),
            player_level,
            active: None,
        }
    }

    /// Use a different generator for subsequent levels
    #[must_use]
    pub fn with_generator(mut self, generator: PatternGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Current externally visible state
    pub fn state(&self) -> SessionState {
        self.active
            .as_ref()
            .map_or(SessionState::Idle, |level| level.session.outcome.into())
    }

    /// Level the next `start_level` will build
    pub const fn player_level(&self) -> u32 {
        self.player_level
    }

    /// Highest level the player may select
    pub fn unlocked_level(&self) -> u32 {
        self.levels.clamp_level(self.store.unlocked_level())
    }

    /// Choose which unlocked level to play next, clamped to `1..=unlocked`
    pub fn select_level(&mut self, level: u32) -> u32 {
        self.player_level = level.clamp(FIRST_LEVEL, self.unlocked_level());
        self.player_level
    }

    /// Spec of the level that would be built now
    pub fn current_spec(&self) -> LevelSpec {
        self.levels.spec_for(self.player_level)
    }

    /// Build and enter the current player level
    ///
    /// Discards any running level and its session.
    ///
    /// # Errors
    ///
    /// Returns an error if the level cannot be generated from the palette,
    /// which is a setup fault rather than a gameplay outcome.
    #[instrument(skip_all)]
    pub fn start_level(&mut self) -> Result<()> {
        self.active = None;
        let level = self.levels.clamp_level(self.player_level);
        let spec = self.levels.spec_for(level);

        let generated = self
            .generator
            .generate(&spec, &self.palette, &mut self.rng)?;
        let (grid, pieces) = place_pieces(spec.board(), &generated.supply, &mut self.rng)?;
        info!(
            level,
            width = spec.pattern_width,
            height = spec.pattern_height,
            buffer_edges = spec.buffer_edges,
            pieces = pieces.len(),
            "level started"
        );

        self.active = Some(ActiveLevel {
            gestures: GestureTracker::new(pieces.len()),
            grid,
            pieces,
            pattern: generated.pattern,
            session: Session::new(level, spec),
        });
        Ok(())
    }

    /// Leave the current level and go idle
    pub fn return_to_menu(&mut self) {
        if self.active.take().is_some() {
            debug!("returned to menu");
        }
    }

    /// Advance the session clock by one frame
    pub fn tick(&mut self, delta: Duration) {
        let Some(level) = self.active.as_mut() else {
            return;
        };
        if level.session.advance(delta) {
            info!(elapsed = ?level.session.elapsed, "out of time");
            // Settle anything mid-push so the board rests on whole cells.
            level.gestures.release(&mut level.grid);
        }
    }

    /// Pointer pressed at a board-plane point
    ///
    /// Returns the grabbed piece, if any.
    pub fn press(&mut self, point: Vector2) -> Option<PieceId> {
        let level = self.playing_mut()?;
        level.gestures.press(&level.grid, point)
    }

    /// Pointer moved to a board-plane point while pressed
    ///
    /// Returns the number of one-cell pushes committed by this sample.
    pub fn drag(&mut self, point: Vector2) -> usize {
        let Some(level) = self.playing_mut() else {
            return 0;
        };
        level.gestures.drag(&mut level.grid, point)
    }

    /// Pointer released: snap, count moves, then check budget and win
    ///
    /// Returns the gesture summary when a gesture was active.
    pub fn release(&mut self) -> Option<GestureSummary> {
        let level = self.playing_mut()?;
        let summary = level.gestures.release(&mut level.grid)?;

        if level.session.record_moves(summary.counted_moves) {
            info!(moves = level.session.moves_made, "out of moves");
            return Some(summary);
        }
        if summary.counted_moves > 0 {
            debug!(
                moves = summary.counted_moves,
                total = level.session.moves_made,
                "gesture counted"
            );
        }
        if is_solved(&level.grid, &level.pieces, &level.pattern) {
            self.on_solved();
        }
        Some(summary)
    }

    /// Forget all stored progress and go back to the first level
    pub fn reset_progress(&mut self) {
        self.store.reset_all();
        self.player_level = FIRST_LEVEL;
    }

    /// Session of the running or finished level
    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref().map(|level| &level.session)
    }

    /// Time left in the running level, zero when idle
    pub fn time_left(&self) -> Duration {
        self.session().map_or(Duration::ZERO, Session::time_left)
    }

    /// Moves left in the running level, zero when idle
    pub fn moves_remaining(&self) -> u32 {
        self.session().map_or(0, Session::moves_remaining)
    }

    /// Whether the last solve stored a new best time
    pub fn did_set_new_record(&self) -> bool {
        self.session().is_some_and(|session| session.new_record)
    }

    /// Stored best time for a level
    pub fn best_time(&self, level: u32) -> Option<Duration> {
        self.store.best_time(level)
    }

    /// Target pattern of the running level
    pub fn target_pattern(&self) -> Option<&TargetPattern> {
        self.active.as_ref().map(|level| &level.pattern)
    }

    /// Grid of the running level
    pub fn grid(&self) -> Option<&Grid> {
        self.active.as_ref().map(|level| &level.grid)
    }

    /// Pieces of the running level, indexed by id
    pub fn pieces(&self) -> &[Piece] {
        self.active
            .as_ref()
            .map(|level| level.pieces.as_slice())
            .unwrap_or_default()
    }

    /// Presentation view of every piece
    pub fn piece_views(&self) -> Vec<PieceView> {
        let Some(level) = self.active.as_ref() else {
            return Vec::new();
        };
        level
            .pieces
            .iter()
            .filter_map(|piece| {
                let cell = level.grid.cell_of(piece.id)?;
                let position = level.gestures.visual_position(&level.grid, piece.id)?;
                Some(PieceView {
                    id: piece.id,
                    color: piece.color,
                    cell,
                    position,
                })
            })
            .collect()
    }

    /// Palette the pieces' colors index into
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Level table in use
    pub const fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Progress store in use
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn playing_mut(&mut self) -> Option<&mut ActiveLevel> {
        self.active
            .as_mut()
            .filter(|level| level.session.outcome == Outcome::InProgress)
    }

    fn on_solved(&mut self) {
        let Some(level) = self.active.as_mut() else {
            return;
        };
        let session = &mut level.session;
        let out_of_budget = matches!(session.outcome, Outcome::OutOfTime | Outcome::OutOfMoves);
        session.outcome = Outcome::Solved;

        let is_record = self
            .store
            .best_time(session.level)
            .is_none_or(|best| session.elapsed < best);
        if is_record {
            self.store.set_best_time(session.level, session.elapsed);
            session.new_record = true;
        }

        let unlocked = self.store.unlocked_level();
        if session.level == unlocked && !out_of_budget {
            self.store.set_unlocked_level(unlocked + 1);
            self.player_level = self.levels.clamp_level(unlocked + 1);
        }
        info!(
            level = session.level,
            elapsed = ?session.elapsed,
            moves = session.moves_made,
            new_record = session.new_record,
            "puzzle solved"
        );
    }
}
