//! Tilings of the square board and the symmetry operations acting on them
//!
//! A tiling is the color-free skeleton of a solution: which runs of cells
//! will receive a stone. Completed tilings keep their placements sorted so
//! that equality and signatures do not depend on discovery order.

use std::fmt;

use crate::io::configuration::SIGNATURE_MARKER_BASE;
use crate::io::error::{PuzzleError, Result, computation_error};
use crate::spatial::placement::Placement;

/// Non-overlapping placements on a board of fixed size
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tiling {
    size: usize,
    placements: Vec<Placement>,
    filled: usize,
}

impl Tiling {
    /// Create a tiling without placements
    pub const fn new(board_size: usize) -> Self {
        Self {
            size: board_size,
            placements: Vec::new(),
            filled: 0,
        }
    }

    /// Build a tiling from a sequence of placements
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as `add`
    pub fn from_placements(
        board_size: usize,
        placements: impl IntoIterator<Item = Placement>,
    ) -> Result<Self> {
        let mut tiling = Self::new(board_size);
        for placement in placements {
            tiling.add(placement)?;
        }
        Ok(tiling)
    }

    /// Side length of the board
    pub const fn board_size(&self) -> usize {
        self.size
    }

    /// Placements in canonical order once the tiling is full, insertion order before
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placements
    pub const fn len(&self) -> usize {
        self.placements.len()
    }

    /// Test if the tiling has no placements
    pub const fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Test if the placements cover as many cells as the board has
    pub const fn is_full(&self) -> bool {
        self.filled == self.size * self.size
    }

    /// Append a placement, normalizing the tiling once it becomes full
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the run leaves the board, `CellOccupied` if it
    /// shares a cell with an earlier placement, or a computation error if the
    /// placements would cover more cells than the board has
    pub fn add(&mut self, placement: Placement) -> Result<()> {
        if !placement.fits(self.size) {
            let (row, col) = placement.last_cell();
            return Err(PuzzleError::OutOfBounds {
                row,
                col,
                board_size: self.size,
            });
        }
        if let Some((row, col)) = placement.cells().find(|&cell| self.covers(cell)) {
            return Err(PuzzleError::CellOccupied { row, col });
        }
        if self.filled + placement.length > self.size * self.size {
            return Err(computation_error(
                "tiling",
                &format!("{placement} overfills a board of size {}", self.size),
            ));
        }

        self.filled += placement.length;
        self.placements.push(placement);
        if self.is_full() {
            self.normalize();
        }
        Ok(())
    }

    fn covers(&self, cell: (usize, usize)) -> bool {
        self.placements
            .iter()
            .any(|placement| placement.cells().any(|covered| covered == cell))
    }

    fn normalize(&mut self) {
        self.placements.sort_unstable();
    }

    /// Structural fingerprint of the tiling
    ///
    /// Renders the board row by row with every cell of the `i`-th placement
    /// marked by the `i`-th letter. Colors play no part in it.
    pub fn signature(&self) -> String {
        let mut cells = vec![' '; self.size * self.size];
        for (index, placement) in self.placements.iter().enumerate() {
            let marker = u32::try_from(index)
                .ok()
                .and_then(|index| char::from_u32(u32::from(SIGNATURE_MARKER_BASE) + index))
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            for (row, col) in placement.cells() {
                if let Some(cell) = cells.get_mut(row * self.size + col) {
                    *cell = marker;
                }
            }
        }
        cells.into_iter().collect()
    }

    /// Rotate the tiling a quarter turn counter-clockwise
    ///
    /// Cell `(row, col)` moves to `(N-1-col, row)`. A horizontal run turns
    /// into a vertical one whose top cell comes from the run's last cell.
    pub fn rotate_90(&mut self) {
        let size = self.size;
        for placement in &mut self.placements {
            let anchor_col = if placement.horizontal {
                placement.col + placement.length - 1
            } else {
                placement.col
            };
            let (row, col) = (size - 1 - anchor_col, placement.row);
            placement.row = row;
            placement.col = col;
            placement.horizontal = !placement.horizontal;
        }
        self.normalize();
    }

    /// Mirror the tiling about its horizontal midline
    pub fn flip_horizontal(&mut self) {
        let size = self.size;
        for placement in &mut self.placements {
            let extent = if placement.horizontal {
                1
            } else {
                placement.length
            };
            placement.row = size - (placement.row + extent);
        }
        self.normalize();
    }

    /// Mirror the tiling about its vertical midline
    pub fn flip_vertical(&mut self) {
        let size = self.size;
        for placement in &mut self.placements {
            let extent = if placement.horizontal {
                placement.length
            } else {
                1
            };
            placement.col = size - (placement.col + extent);
        }
        self.normalize();
    }

    /// Structural rendering with one letter per cell
    ///
    /// Horizontal runs use upper-case and vertical runs lower-case letters;
    /// the letter encodes the run length.
    fn structure(&self) -> Vec<char> {
        let mut cells = vec![' '; self.size * self.size];
        for placement in &self.placements {
            let base = if placement.horizontal { b'A' } else { b'a' };
            let offset = u8::try_from(placement.length % 26).unwrap_or(0);
            let marker = char::from(base + offset);
            for (row, col) in placement.cells() {
                if let Some(cell) = cells.get_mut(row * self.size + col) {
                    *cell = marker;
                }
            }
        }
        cells
    }
}

impl fmt::Display for Tiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for placement in &self.placements {
            writeln!(f, "{placement}")?;
        }
        let structure = self.structure();
        for row in structure.chunks(self.size.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
