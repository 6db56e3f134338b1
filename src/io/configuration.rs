//! Search constants and runtime configuration defaults

// Color presence tracking
/// Smallest symbol accepted as a color
pub const ALPHABET_MIN: u8 = b'0';
/// Number of consecutive symbols, starting at `ALPHABET_MIN`, tracked per row or column
pub const ALPHABET_SIZE: usize = 80;

/// Marker stored in cells that hold no color
pub const EMPTY_CELL: u8 = b' ';

/// First marker used when rendering a tiling's structural signature
pub const SIGNATURE_MARKER_BASE: char = 'A';

/// Filler symbol for the placeholder stones used while enumerating tilings
pub const PLACEHOLDER_SYMBOL: u8 = b'A';

// Demonstration puzzle generation
/// Colors handed out to the rows of a demonstration board, in order
pub const PUZZLE_PALETTE: &[u8] = b"BDGYRVOMPSTWCFIKL";
/// Number of random row or column swaps applied to a demonstration board
pub const SHUFFLE_ROUNDS: usize = 10;

// Default values for configurable parameters
/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;

// Process exit codes
/// Exit code for rejected input (wrong stone lengths, bad arguments)
pub const EXIT_INPUT_ERROR: u8 = 1;
/// Exit code for broken internal invariants such as an unsupported color symbol
pub const EXIT_FATAL_ERROR: u8 = 3;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
