//! Input/output boundaries: errors, configuration, persistence and the CLI

/// Command-line interface for replaying gesture scripts
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Multi-script progress display
pub mod progress;
/// Gesture script format and replay reports
pub mod script;
/// Player progress persistence
pub mod store;
