//! Error types shared by the searches and the command-line front end

use std::fmt;

/// Main error type for all puzzle operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// No stones were supplied
    NoStones,

    /// A stone specification without any color symbols
    EmptyStone {
        /// Position of the stone in the supplied inventory
        index: usize,
    },

    /// Total stone length cannot fill a square board
    NotSquare {
        /// Sum of all stone lengths
        total: usize,
    },

    /// A single stone is longer than the board is wide
    StoneTooLong {
        /// Symbols of the offending stone
        stone: String,
        /// Length of the offending stone
        length: usize,
        /// Side length of the board derived from the inventory
        board_size: usize,
    },

    /// A color symbol lies outside the range tracked by the duplicate detector
    ///
    /// Breaks the validity predicate itself; the whole run stops on it.
    AlphabetOverflow {
        /// The unsupported symbol
        symbol: u8,
    },

    /// Attempted to write into a cell that already holds a color
    CellOccupied {
        /// Row of the occupied cell
        row: usize,
        /// Column of the occupied cell
        col: usize,
    },

    /// A run leaves the board
    OutOfBounds {
        /// Row of the first cell outside the board
        row: usize,
        /// Column of the first cell outside the board
        col: usize,
        /// Side length of the board
        board_size: usize,
    },

    /// Stones handed to the coloring solver do not match the tiling's placements
    InventoryMismatch {
        /// Description of the mismatch
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An internal consistency check failed
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl PuzzleError {
    /// Whether the error describes stones that cannot form a square board
    ///
    /// These are detected before any search starts and leave the run with an
    /// empty, but well defined, result.
    pub const fn is_input_shape(&self) -> bool {
        matches!(
            self,
            Self::NoStones
                | Self::EmptyStone { .. }
                | Self::NotSquare { .. }
                | Self::StoneTooLong { .. }
        )
    }

    /// Whether the error signals a broken invariant that invalidates the whole run
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::AlphabetOverflow { .. } | Self::Computation { .. })
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStones => write!(f, "No stones given"),
            Self::EmptyStone { index } => {
                write!(f, "Stone #{} has no colors", index + 1)
            }
            Self::NotSquare { total } => {
                write!(
                    f,
                    "Stones do not fit into a squared board (total length {total})"
                )
            }
            Self::StoneTooLong {
                stone,
                length,
                board_size,
            } => {
                write!(
                    f,
                    "Stone {stone} (length {length}) does not fit into the board of size {board_size}"
                )
            }
            Self::AlphabetOverflow { symbol } => {
                let first = crate::io::configuration::ALPHABET_MIN;
                let size = crate::io::configuration::ALPHABET_SIZE;
                write!(
                    f,
                    "Color symbol {:?} is outside the supported range starting at {:?} with {size} symbols",
                    char::from(*symbol),
                    char::from(first)
                )
            }
            Self::CellOccupied { row, col } => {
                write!(f, "Cell ({row},{col}) is already occupied")
            }
            Self::OutOfBounds {
                row,
                col,
                board_size,
            } => {
                write!(
                    f,
                    "Cell ({row},{col}) lies outside the board of size {board_size}"
                )
            }
            Self::InventoryMismatch { reason } => {
                write!(f, "Stones do not match the tiling: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
