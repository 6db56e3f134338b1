//! Board geometry and the data structures the searches operate on
//!
//! This module contains spatial-related functionality including:
//! - Segment placements and their canonical order
//! - The game board and its row/column validity predicate
//! - Tilings and the symmetry operations of the square

/// Game board with transactional writes and validity checking
pub mod grid;
/// Tilings, structural signatures and symmetry operations
pub mod layout;
/// Location and reading direction of a single run of cells
pub mod placement;

pub use grid::Board;
pub use layout::Tiling;
pub use placement::Placement;
