//! Gesture scripts and replay reports
//!
//! A script is a JSON document listing the events an external driver would
//! feed the controller: pointer samples, frame ticks and level transitions.
//! Replaying one produces a report of the final session and board.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::analysis::balance::SupplyBalance;
use crate::game::controller::SessionController;
use crate::game::piece::ColorId;
use crate::game::session::SessionState;
use crate::io::error::{PuzzleError, Result, file_system, invalid_parameter};
use crate::io::store::ProgressStore;
use crate::math::vector::Vector2;
use crate::spatial::cell::Cell;

/// One driver event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Build and enter the current player level
    StartLevel,
    /// Leave the level
    ReturnToMenu,
    /// Pointer pressed at a board-plane point
    Press {
        /// Horizontal coordinate
        x: f64,
        /// Vertical coordinate
        y: f64,
    },
    /// Pointer moved while pressed
    Drag {
        /// Horizontal coordinate
        x: f64,
        /// Vertical coordinate
        y: f64,
    },
    /// Pointer released
    Release,
    /// Frame time elapsed
    Tick {
        /// Frame duration in seconds
        seconds: f64,
    },
}

/// A replayable sequence of driver events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// Level to select before starting, defaults to the player level
    #[serde(default)]
    pub level: Option<u32>,
    /// Seed override for level generation
    #[serde(default)]
    pub seed: Option<u64>,
    /// Events in the order they are applied
    pub events: Vec<ScriptEvent>,
}

impl GestureScript {
    /// Load a script from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid script.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| file_system(path, "read script", e))?;
        serde_json::from_str(&contents).map_err(|e| PuzzleError::Serialization {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Final state after replaying a script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Level that was played
    pub level: u32,
    /// Controller state at the end
    pub state: SessionState,
    /// Counted moves
    pub moves_made: u32,
    /// Moves left in the budget
    pub moves_remaining: u32,
    /// Session time in seconds
    pub elapsed_secs: f64,
    /// Whether a new best time was stored
    pub new_record: bool,
    /// Piece colors per board cell, `None` for the free slot
    pub board: Vec<Vec<Option<ColorId>>>,
    /// Target colors per pattern cell
    pub target: Vec<Vec<Option<ColorId>>>,
    /// Color supply against target demand
    pub balance: Option<SupplyBalance>,
}

/// Apply a script to a controller
///
/// Selects the script's level (if any) and starts it, then applies every event
/// in order. `on_event` is called with the number of events applied so far.
///
/// # Errors
///
/// Returns an error if a level cannot be generated or a tick is negative or
/// not finite.
pub fn replay<S: ProgressStore>(
    controller: &mut SessionController<S>,
    script: &GestureScript,
    mut on_event: impl FnMut(usize),
) -> Result<ReplayReport> {
    if let Some(level) = script.level {
        controller.select_level(level);
    }
    controller.start_level()?;

    for (index, event) in script.events.iter().enumerate() {
        match *event {
            ScriptEvent::StartLevel => controller.start_level()?,
            ScriptEvent::ReturnToMenu => controller.return_to_menu(),
            ScriptEvent::Press { x, y } => {
                controller.press(Vector2::new(x, y));
            }
            ScriptEvent::Drag { x, y } => {
                controller.drag(Vector2::new(x, y));
            }
            ScriptEvent::Release => {
                controller.release();
            }
            ScriptEvent::Tick { seconds } => {
                let delta = Duration::try_from_secs_f64(seconds)
                    .map_err(|e| invalid_parameter("tick", &seconds, &e))?;
                controller.tick(delta);
            }
        }
        on_event(index + 1);
    }

    Ok(report(controller))
}

/// Snapshot the controller into a report
pub fn report<S: ProgressStore>(controller: &SessionController<S>) -> ReplayReport {
    let session = controller.session();
    let pieces = controller.pieces();
    let board: Vec<Vec<Option<ColorId>>> = controller.grid().map_or_else(Vec::new, |grid| {
        let board = grid.board();
        (0..board.height() as i32)
            .map(|row| {
                (0..board.width() as i32)
                    .map(|col| {
                        grid.occupancy(Cell::new(row, col))
                            .and_then(|id| pieces.get(id.0))
                            .map(|piece| piece.color)
                    })
                    .collect()
            })
            .collect()
    });
    let target: Vec<Vec<Option<ColorId>>> =
        controller.target_pattern().map_or_else(Vec::new, |pattern| {
            pattern
                .cells()
                .rows()
                .into_iter()
                .map(|row| row.to_vec())
                .collect()
        });
    let balance = controller.target_pattern().map(|pattern| {
        let supply: Vec<ColorId> = pieces.iter().map(|piece| piece.color).collect();
        SupplyBalance::measure(&supply, pattern, controller.palette())
    });

    ReplayReport {
        level: session.map_or(controller.player_level(), |session| session.level),
        state: controller.state(),
        moves_made: session.map_or(0, |session| session.moves_made),
        moves_remaining: controller.moves_remaining(),
        elapsed_secs: session.map_or(0.0, |session| session.elapsed.as_secs_f64()),
        new_record: controller.did_set_new_record(),
        board,
        target,
        balance,
    }
}
