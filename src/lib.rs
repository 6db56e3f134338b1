//! Tiling and coloring search for square stone puzzles
//!
//! Given stones (fixed-length strips of colors) whose total length is a square
//! number, the crate enumerates every way to cut the square board into runs
//! matching the stone lengths, reduces those tilings under the eight
//! symmetries of the square, and searches for stone assignments in which no
//! row or column repeats a color.

#![forbid(unsafe_code)]

/// Tiling enumeration, symmetry reduction and coloring search
pub mod algorithm;
/// Command-line front end, configuration, reporting and error handling
pub mod io;
/// Placements, boards and tilings
pub mod spatial;

pub use algorithm::coloring::{Coloring, Solver};
pub use algorithm::stones::Stone;
pub use io::error::{PuzzleError, Result};
pub use spatial::{Board, Placement, Tiling};
