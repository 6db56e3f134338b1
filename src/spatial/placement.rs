//! Location and reading direction of a single run of board cells

use std::cmp::Ordering;
use std::fmt;

/// A run of `length` cells starting at `(row, col)`
///
/// Horizontal runs extend to the right, vertical runs extend downwards.
/// `reversed` states whether a stone's symbols are written back-to-front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Number of cells covered
    pub length: usize,
    /// Row of the first cell
    pub row: usize,
    /// Column of the first cell
    pub col: usize,
    /// Whether the run extends to the right instead of downwards
    pub horizontal: bool,
    /// Whether stones are read back-to-front into this run
    pub reversed: bool,
}

impl Placement {
    /// Create a placement in natural reading order
    pub const fn new(length: usize, row: usize, col: usize, horizontal: bool) -> Self {
        Self {
            length,
            row,
            col,
            horizontal,
            reversed: false,
        }
    }

    /// Horizontal placement in natural reading order
    pub const fn horizontal(length: usize, row: usize, col: usize) -> Self {
        Self::new(length, row, col, true)
    }

    /// Vertical placement in natural reading order
    pub const fn vertical(length: usize, row: usize, col: usize) -> Self {
        Self::new(length, row, col, false)
    }

    /// Same run with the opposite reading direction
    #[must_use]
    pub const fn flipped_reading(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }

    /// Coordinates of the `index`-th cell of the run
    pub const fn cell(&self, index: usize) -> (usize, usize) {
        if self.horizontal {
            (self.row, self.col + index)
        } else {
            (self.row + index, self.col)
        }
    }

    /// All cells of the run, starting at the anchor
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let placement = *self;
        (0..placement.length).map(move |index| placement.cell(index))
    }

    /// Cell diagonally opposite the anchor
    pub const fn last_cell(&self) -> (usize, usize) {
        self.cell(self.length.saturating_sub(1))
    }

    /// Test if the whole run lies on a board of the given size
    pub const fn fits(&self, board_size: usize) -> bool {
        let (row, col) = self.last_cell();
        self.length > 0 && row < board_size && col < board_size
    }
}

impl Ord for Placement {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.col, self.horizontal, self.length, self.reversed).cmp(&(
            other.row,
            other.col,
            other.horizontal,
            other.length,
            other.reversed,
        ))
    }
}

impl PartialOrd for Placement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.horizontal { 'H' } else { 'V' };
        let run: String = std::iter::repeat_n(marker, self.length).collect();
        write!(f, "At ({},{}): {run}", self.row, self.col)?;
        if self.reversed {
            write!(f, " (reversed)")?;
        }
        Ok(())
    }
}
