//! Exhaustive enumeration of tilings for a multiset of segment lengths
//!
//! Cells are visited in row-major order. At the first empty cell every still
//! available length is tried as a vertical and as a horizontal run anchored
//! there; occupied cells are skipped without branching. Every exactly
//! covering arrangement is reported, including ones that are symmetric
//! copies of each other.

use log::{debug, info, warn};
use std::ops::ControlFlow;

use crate::algorithm::stones::Stone;
use crate::io::configuration::PLACEHOLDER_SYMBOL;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::{Board, Placement, Tiling};

/// Backtracking tiling search over one board size
#[derive(Debug, Clone)]
pub struct TilingGenerator {
    board_size: usize,
    /// Remaining runs per length, indexed by length
    available: Vec<usize>,
}

impl TilingGenerator {
    /// Prepare a search for the given segment lengths
    ///
    /// The board size is the square root of the total length.
    ///
    /// # Errors
    ///
    /// Returns an input-shape error if there are no lengths, a length is
    /// zero, the total is not a perfect square, or a length exceeds the
    /// board size
    pub fn from_lengths(lengths: &[usize]) -> Result<Self> {
        if lengths.is_empty() {
            return Err(PuzzleError::NoStones);
        }
        if let Some(index) = lengths.iter().position(|&length| length == 0) {
            return Err(PuzzleError::EmptyStone { index });
        }

        let total: usize = lengths.iter().sum();
        let board_size = total.isqrt();
        if board_size * board_size != total {
            warn!("Stones do not fit into a squared board (total length {total})");
            return Err(PuzzleError::NotSquare { total });
        }

        let mut available = vec![0; board_size + 1];
        for &length in lengths {
            let Some(count) = available.get_mut(length) else {
                let stone = Stone::uniform(length, PLACEHOLDER_SYMBOL).value();
                warn!("Stone of length {length} does not fit into the board");
                return Err(PuzzleError::StoneTooLong {
                    stone,
                    length,
                    board_size,
                });
            };
            *count += 1;
        }

        Ok(Self {
            board_size,
            available,
        })
    }

    /// Prepare a search for the lengths of the given stones
    ///
    /// # Errors
    ///
    /// Same as `from_lengths`; an over-long stone is reported with its colors
    pub fn from_stones(stones: &[Stone]) -> Result<Self> {
        let lengths: Vec<usize> = stones.iter().map(Stone::len).collect();
        Self::from_lengths(&lengths).map_err(|error| match error {
            PuzzleError::StoneTooLong {
                length, board_size, ..
            } => {
                let stone = stones
                    .iter()
                    .find(|stone| stone.len() == length)
                    .map(Stone::value)
                    .unwrap_or_default();
                PuzzleError::StoneTooLong {
                    stone,
                    length,
                    board_size,
                }
            }
            other => other,
        })
    }

    /// Side length of the board being tiled
    pub const fn board_size(&self) -> usize {
        self.board_size
    }

    /// Collect every tiling
    ///
    /// # Errors
    ///
    /// Only fails if the board's transactional contract is violated, which
    /// indicates a bug in the search rather than bad input
    pub fn find_all(&self) -> Result<Vec<Tiling>> {
        let mut tilings = Vec::new();
        self.for_each(|tiling| {
            tilings.push(tiling.clone());
            ControlFlow::Continue(())
        })?;
        Ok(tilings)
    }

    /// Report every tiling to `visit` in discovery order
    ///
    /// The search stops early when `visit` returns `ControlFlow::Break`.
    /// Returns the number of tilings reported.
    ///
    /// # Errors
    ///
    /// Same as `find_all`
    pub fn for_each<F>(&self, visit: F) -> Result<usize>
    where
        F: FnMut(&Tiling) -> ControlFlow<()>,
    {
        let placeholders = (0..=self.board_size)
            .map(|length| Stone::uniform(length, PLACEHOLDER_SYMBOL))
            .collect();
        let mut search = TilingSearch {
            board: Board::new(self.board_size),
            available: self.available.clone(),
            placeholders,
            current: Vec::new(),
            visit,
            found: 0,
            nodes: 0,
        };
        // An empty board can only come from zero-length input, which is rejected
        if self.board_size > 0 && search.search(0)?.is_break() {
            debug!("Tiling search stopped early after {} tilings", search.found);
        }

        debug!(
            "Tiling search on board size {} visited {} nodes",
            self.board_size, search.nodes
        );
        info!("Found {} tilings", search.found);
        Ok(search.found)
    }
}

/// Enumerate all tilings for a multiset of segment lengths
///
/// # Errors
///
/// Returns an input-shape error if the lengths cannot tile a square board
pub fn find_tilings(lengths: &[usize]) -> Result<Vec<Tiling>> {
    TilingGenerator::from_lengths(lengths)?.find_all()
}

struct TilingSearch<F> {
    board: Board,
    available: Vec<usize>,
    placeholders: Vec<Stone>,
    current: Vec<Placement>,
    visit: F,
    found: usize,
    nodes: u64,
}

impl<F> TilingSearch<F>
where
    F: FnMut(&Tiling) -> ControlFlow<()>,
{
    fn search(&mut self, step: usize) -> Result<ControlFlow<()>> {
        let size = self.board.size();
        if step >= size * size {
            return Ok(ControlFlow::Continue(()));
        }
        self.nodes += 1;

        let (row, col) = (step / size, step % size);
        if !self.board.is_empty_at(row, col) {
            // Covered by an earlier vertical run, nothing can start here
            return self.search(step + 1);
        }

        for length in 1..=size {
            if self.available.get(length).copied().unwrap_or(0) == 0 {
                continue;
            }
            for horizontal in [false, true] {
                let placement = Placement::new(length, row, col, horizontal);
                // Horizontal runs cover the cells they would otherwise skip through
                let next_step = if horizontal { step + length } else { step + 1 };
                if self.try_placement(placement, next_step)?.is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn try_placement(&mut self, placement: Placement, next_step: usize) -> Result<ControlFlow<()>> {
        let Some(stone) = self.placeholders.get(placement.length) else {
            return Ok(ControlFlow::Continue(()));
        };
        if !self.board.can_assign(&placement, stone) {
            return Ok(ControlFlow::Continue(()));
        }

        self.board.assign(&placement, stone)?;
        self.set_available(placement.length, -1);
        self.current.push(placement);

        let flow = if self.board.is_full() {
            self.emit()
        } else {
            self.search(next_step)
        };

        self.current.pop();
        self.set_available(placement.length, 1);
        if let Some(stone) = self.placeholders.get(placement.length) {
            self.board.unassign(&placement, stone)?;
        }
        flow
    }

    fn set_available(&mut self, length: usize, delta: isize) {
        if let Some(count) = self.available.get_mut(length) {
            *count = count.saturating_add_signed(delta);
        }
    }

    fn emit(&mut self) -> Result<ControlFlow<()>> {
        let tiling = Tiling::from_placements(self.board.size(), self.current.iter().copied())?;
        self.found += 1;
        Ok((self.visit)(&tiling))
    }
}
