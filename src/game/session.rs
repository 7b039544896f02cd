//! Per-playthrough counters and outcome classification

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::level::LevelSpec;

/// Result of a session so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Still playing
    InProgress,
    /// Target pattern reached
    Solved,
    /// Time budget exceeded
    OutOfTime,
    /// Move budget exceeded
    OutOfMoves,
}

impl Outcome {
    /// Check if no further input is accepted
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Controller state as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No level running
    Idle,
    /// Level running and accepting input
    Playing,
    /// Finished by matching the target
    Solved,
    /// Finished by running out of time
    OutOfTime,
    /// Finished by running out of moves
    OutOfMoves,
}

impl From<Outcome> for SessionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => Self::Playing,
            Outcome::Solved => Self::Solved,
            Outcome::OutOfTime => Self::OutOfTime,
            Outcome::OutOfMoves => Self::OutOfMoves,
        }
    }
}

/// Transient state of one playthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Player level being played
    pub level: u32,
    /// Spec the level was built from
    pub spec: LevelSpec,
    /// Time spent so far
    pub elapsed: Duration,
    /// Counted moves so far
    pub moves_made: u32,
    /// Current outcome
    pub outcome: Outcome,
    /// Whether this session stored a new best time
    pub new_record: bool,
}

impl Session {
    /// Fresh session at zero time and zero moves
    pub const fn new(level: u32, spec: LevelSpec) -> Self {
        Self {
            level,
            spec,
            elapsed: Duration::ZERO,
            moves_made: 0,
            outcome: Outcome::InProgress,
            new_record: false,
        }
    }

    /// Advance the clock; flips to `OutOfTime` once the limit is exceeded
    ///
    /// Returns true if this call ended the session.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed > self.spec.time_limit {
            self.outcome = Outcome::OutOfTime;
            return true;
        }
        false
    }

    /// Add counted moves; flips to `OutOfMoves` once the budget is exceeded
    ///
    /// Returns true if this call ended the session.
    pub fn record_moves(&mut self, moves: u32) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        self.moves_made = self.moves_made.saturating_add(moves);
        if self.moves_made > self.spec.max_moves {
            self.outcome = Outcome::OutOfMoves;
            return true;
        }
        false
    }

    /// Remaining time, floored at zero
    pub const fn time_left(&self) -> Duration {
        self.spec.time_limit.saturating_sub(self.elapsed)
    }

    /// Remaining moves, floored at zero
    pub const fn moves_remaining(&self) -> u32 {
        self.spec.max_moves.saturating_sub(self.moves_made)
    }
}
