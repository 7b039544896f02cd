//! Game constants and runtime configuration defaults

/// Distance between neighboring cell centers on the board plane
pub const PIECE_SPACING: f64 = 1.0;

// A fast gesture is replayed in steps no longer than this so that every cell
// boundary it crosses goes through push resolution.
/// Maximum displacement applied per drag resolution step
pub const MOVEMENT_STEP_LIMIT: f64 = PIECE_SPACING * 0.1;

/// Fraction of a cell pitch a piece must travel before its push commits
pub const PUSH_COMMIT_THRESHOLD: f64 = PIECE_SPACING * 0.5;

/// Level a fresh player starts on
pub const FIRST_LEVEL: u32 = 1;

/// Fixed seed for reproducible level generation
pub const DEFAULT_SEED: u64 = 42;

/// Default piece colors as RGBA
pub const DEFAULT_PALETTE: [[u8; 4]; 4] = [
    [0xE5, 0x39, 0x35, 0xFF],
    [0x1E, 0x88, 0xE5, 0xFF],
    [0xFD, 0xD8, 0x35, 0xFF],
    [0x43, 0xA0, 0x47, 0xFF],
];

/// Default level table as `(width, height, buffer_edges, time_limit_secs, max_moves)`
pub const DEFAULT_LEVELS: [(usize, usize, bool, u64, u32); 5] = [
    (2, 2, true, 120, 50),
    (3, 3, true, 180, 150),
    (4, 4, true, 300, 400),
    (3, 3, false, 300, 200),
    (4, 4, false, 300, 200),
];

// Output settings
/// Suffix added to replay report filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// File extension of gesture scripts and reports
pub const SCRIPT_EXTENSION: &str = "json";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
