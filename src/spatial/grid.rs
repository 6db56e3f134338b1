//! Square game board with transactional run writes and the row/column validity predicate
//!
//! Searches mutate a single board in place: a run is written before recursing
//! and cleared again on the way back. Writing into an occupied cell is an
//! error, so a symbol can never be overwritten by another symbol directly.

use ndarray::{Array2, ArrayView1};
use std::fmt;

use crate::algorithm::bitset::ColorBitset;
use crate::algorithm::stones::Stone;
use crate::io::configuration::EMPTY_CELL;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::placement::Placement;

/// N×N matrix of color symbols with a running count of occupied cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<u8>,
    size: usize,
    filled: usize,
}

impl Board {
    /// Create an empty board
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), EMPTY_CELL),
            size,
            filled: 0,
        }
    }

    /// Side length of the board
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of occupied cells
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Symbol at a cell, `None` for empty or off-board cells
    pub fn symbol(&self, row: usize, col: usize) -> Option<u8> {
        self.cells
            .get((row, col))
            .copied()
            .filter(|&symbol| symbol != EMPTY_CELL)
    }

    /// Test if a cell is on the board and holds no color
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)) == Some(&EMPTY_CELL)
    }

    /// Write a single symbol into an empty cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for off-board cells, `CellOccupied` if the cell
    /// already holds a color, and `AlphabetOverflow` if the symbol is the
    /// empty marker
    pub fn assign_cell(&mut self, row: usize, col: usize, symbol: u8) -> Result<()> {
        if symbol == EMPTY_CELL {
            return Err(PuzzleError::AlphabetOverflow { symbol });
        }
        let board_size = self.size;
        let cell = self.cells.get_mut((row, col)).ok_or(PuzzleError::OutOfBounds {
            row,
            col,
            board_size,
        })?;
        if *cell != EMPTY_CELL {
            return Err(PuzzleError::CellOccupied { row, col });
        }
        *cell = symbol;
        self.filled += 1;
        Ok(())
    }

    /// Clear a single cell, returning the symbol it held
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for off-board cells
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<Option<u8>> {
        let board_size = self.size;
        let cell = self.cells.get_mut((row, col)).ok_or(PuzzleError::OutOfBounds {
            row,
            col,
            board_size,
        })?;
        if *cell == EMPTY_CELL {
            return Ok(None);
        }
        let previous = *cell;
        *cell = EMPTY_CELL;
        self.filled -= 1;
        Ok(Some(previous))
    }

    /// Test if `stone` can be written into the run: same length, on the board, all cells empty
    pub fn can_assign(&self, placement: &Placement, stone: &Stone) -> bool {
        stone.len() == placement.length
            && placement
                .cells()
                .all(|(row, col)| self.is_empty_at(row, col))
    }

    /// Write `stone` into the run, back-to-front for reversed placements
    ///
    /// Nothing is written unless the whole run is available.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` on a length mismatch, `AlphabetOverflow` if
    /// the stone holds a symbol outside the color alphabet, `OutOfBounds` if
    /// the run leaves the board and `CellOccupied` if any target cell holds a
    /// color
    pub fn assign(&mut self, placement: &Placement, stone: &Stone) -> Result<()> {
        if stone.len() != placement.length {
            return Err(invalid_parameter(
                "stone",
                &stone.value(),
                &format!("length differs from placement length {}", placement.length),
            ));
        }
        for &symbol in stone.symbols() {
            ColorBitset::check(symbol)?;
        }
        for (row, col) in placement.cells() {
            if row >= self.size || col >= self.size {
                return Err(PuzzleError::OutOfBounds {
                    row,
                    col,
                    board_size: self.size,
                });
            }
            if !self.is_empty_at(row, col) {
                return Err(PuzzleError::CellOccupied { row, col });
            }
        }

        for ((row, col), symbol) in placement.cells().zip(stone.reading(placement.reversed)) {
            self.assign_cell(row, col, symbol)?;
        }
        Ok(())
    }

    /// Clear the cells written by the matching `assign`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the run leaves the board
    pub fn unassign(&mut self, placement: &Placement, stone: &Stone) -> Result<()> {
        for (row, col) in placement.cells().take(stone.len()) {
            self.clear_cell(row, col)?;
        }
        Ok(())
    }

    /// Symbols along a run in the placement's reading direction
    ///
    /// Returns `None` if the run leaves the board or crosses an empty cell.
    pub fn read_run(&self, placement: &Placement) -> Option<Stone> {
        let mut symbols = placement
            .cells()
            .map(|(row, col)| self.symbol(row, col))
            .collect::<Option<Vec<u8>>>()?;
        if placement.reversed {
            symbols.reverse();
        }
        Some(Stone::new(symbols))
    }

    /// Test that no row and no column holds the same color twice
    ///
    /// Empty cells are ignored. Runs one pass per row and one per column.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetOverflow` if a cell holds a symbol outside the
    /// supported color range
    pub fn is_valid(&self) -> Result<bool> {
        for row in self.cells.rows() {
            if !line_is_valid(row)? {
                return Ok(false);
            }
        }
        for col in self.cells.columns() {
            if !line_is_valid(col)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Validity restricted to the rows and columns crossed by `placement`
    ///
    /// Equivalent to `is_valid` when the board was valid before the run was
    /// written, since no other line changed.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetOverflow` if a checked cell holds an unsupported symbol
    pub fn is_valid_around(&self, placement: &Placement) -> Result<bool> {
        let (last_row, last_col) = placement.last_cell();
        let rows = placement.row..=last_row.min(self.size.saturating_sub(1));
        let cols = placement.col..=last_col.min(self.size.saturating_sub(1));

        for row in rows {
            if row < self.size && !line_is_valid(self.cells.row(row))? {
                return Ok(false);
            }
        }
        for col in cols {
            if col < self.size && !line_is_valid(self.cells.column(col))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Test if every cell holds a color
    pub const fn is_full(&self) -> bool {
        self.filled == self.size * self.size
    }

    /// Exchange the contents of two rows
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either row is off the board
    pub fn swap_rows(&mut self, first: usize, second: usize) -> Result<()> {
        self.check_line(first.max(second))?;
        for col in 0..self.size {
            self.cells.swap((first, col), (second, col));
        }
        Ok(())
    }

    /// Exchange the contents of two columns
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either column is off the board
    pub fn swap_cols(&mut self, first: usize, second: usize) -> Result<()> {
        self.check_line(first.max(second))?;
        for row in 0..self.size {
            self.cells.swap((row, first), (row, second));
        }
        Ok(())
    }

    fn check_line(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(PuzzleError::OutOfBounds {
                row: index,
                col: index,
                board_size: self.size,
            });
        }
        Ok(())
    }

    /// Row-major serialization of all cells, empty cells as spaces
    pub fn signature(&self) -> String {
        self.cells.iter().copied().map(char::from).collect()
    }
}

fn line_is_valid(line: ArrayView1<'_, u8>) -> Result<bool> {
    let mut seen = ColorBitset::new();
    let mut valid = true;
    // Every symbol is range-checked even after a duplicate was found
    for &symbol in line {
        if symbol != EMPTY_CELL && !seen.insert(symbol)? {
            valid = false;
        }
    }
    Ok(valid)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(4 * self.size);
        writeln!(f, "{border}")?;
        for row in self.cells.rows() {
            write!(f, "|")?;
            for &symbol in row {
                write!(f, " {} |", char::from(symbol))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{border}")?;

        match self.is_valid() {
            Ok(true) if self.is_full() => write!(f, "Board is valid and full."),
            Ok(true) => write!(f, "Board is valid."),
            Ok(false) => write!(f, "BOARD IS NOT VALID."),
            Err(error) => write!(f, "BOARD IS NOT VALID: {error}"),
        }
    }
}
