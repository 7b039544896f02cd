//! Game rules: levels, pieces, gestures, sessions and the controller
//!
//! - [`level`]: level specs and the clamped level table
//! - [`piece`]: piece colors and palette
//! - [`gesture`]: press/drag/release handling with continuous offsets
//! - [`session`]: per-playthrough counters and outcomes
//! - [`win`]: target pattern comparison
//! - [`controller`]: the state machine tying it all together

/// Session orchestration and state machine
pub mod controller;
/// Pointer gesture tracking
pub mod gesture;
/// Level specs and level table
pub mod level;
/// Piece colors and palette
pub mod piece;
/// Session counters and outcomes
pub mod session;
/// Win condition evaluation
pub mod win;

pub use controller::{PieceView, SessionController};
pub use level::{LevelSpec, LevelTable};
pub use piece::{ColorId, Palette, Piece};
pub use session::{Outcome, Session, SessionState};
