//! Assignment of colored stones to the placements of a tiling
//!
//! Placements are filled in the tiling's canonical order. At each placement
//! every stone of matching length is tried in natural and in reversed reading
//! direction; a branch is cut as soon as a row or column crossed by the new
//! run holds a color twice.

use log::{debug, info};
use std::ops::ControlFlow;

use crate::algorithm::stones::{Stone, StoneBag};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::{Board, Placement, Tiling};

/// Stones assigned to every placement of a tiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    board_size: usize,
    assignments: Vec<(Placement, Stone)>,
}

impl Coloring {
    /// Create a coloring without assignments
    pub const fn new(board_size: usize) -> Self {
        Self {
            board_size,
            assignments: Vec::new(),
        }
    }

    /// Side length of the board
    pub const fn board_size(&self) -> usize {
        self.board_size
    }

    /// Placement and stone pairs in tiling order
    pub fn assignments(&self) -> &[(Placement, Stone)] {
        &self.assignments
    }

    /// Number of assigned stones
    pub const fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Test if no stone is assigned
    pub const fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Append an assignment
    pub fn push(&mut self, placement: Placement, stone: Stone) {
        self.assignments.push((placement, stone));
    }

    fn pop(&mut self) {
        self.assignments.pop();
    }

    /// Board obtained by writing every assignment
    ///
    /// # Errors
    ///
    /// Returns the board's error if two assignments overlap or a run leaves
    /// the board
    pub fn to_board(&self) -> Result<Board> {
        let mut board = Board::new(self.board_size);
        for (placement, stone) in &self.assignments {
            board.assign(placement, stone)?;
        }
        Ok(board)
    }
}

/// Exhaustive stone assignment search for one tiling
#[derive(Debug, Clone)]
pub struct Solver {
    tiling: Tiling,
    stones: Vec<Stone>,
}

impl Solver {
    /// Prepare a search of `stones` over `tiling`
    ///
    /// # Errors
    ///
    /// Returns `InventoryMismatch` unless there is exactly one stone per
    /// placement with matching lengths
    pub fn new(tiling: &Tiling, stones: &[Stone]) -> Result<Self> {
        if stones.len() != tiling.len() {
            return Err(PuzzleError::InventoryMismatch {
                reason: format!(
                    "{} stones for {} placements",
                    stones.len(),
                    tiling.len()
                ),
            });
        }

        let stone_lengths = StoneBag::new(stones).lengths();
        let mut placement_lengths: Vec<usize> =
            tiling.placements().iter().map(|p| p.length).collect();
        placement_lengths.sort_unstable();
        if stone_lengths != placement_lengths {
            return Err(PuzzleError::InventoryMismatch {
                reason: format!(
                    "stone lengths {stone_lengths:?} differ from placement lengths {placement_lengths:?}"
                ),
            });
        }

        Ok(Self {
            tiling: tiling.clone(),
            stones: stones.to_vec(),
        })
    }

    /// Tiling being colored
    pub const fn tiling(&self) -> &Tiling {
        &self.tiling
    }

    /// Report every coloring to `visit` in discovery order
    ///
    /// The search stops early when `visit` returns `ControlFlow::Break`.
    /// Returns the number of colorings reported.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetOverflow` if a stone uses an unsupported color
    pub fn search<F>(&self, visit: F) -> Result<usize>
    where
        F: FnMut(&Coloring) -> ControlFlow<()>,
    {
        let mut search = ColoringSearch {
            placements: self.tiling.placements(),
            board: Board::new(self.tiling.board_size()),
            bag: StoneBag::new(&self.stones),
            current: Coloring::new(self.tiling.board_size()),
            visit,
            found: 0,
            nodes: 0,
        };
        if search.search(0)?.is_break() {
            debug!("Coloring search stopped early after {} colorings", search.found);
        }

        debug!(
            "Coloring search over {} placements visited {} nodes",
            self.tiling.len(),
            search.nodes
        );
        info!("Found {} colorings", search.found);
        Ok(search.found)
    }

    /// Collect every coloring
    ///
    /// # Errors
    ///
    /// Same as `search`
    pub fn find_all(&self) -> Result<Vec<Coloring>> {
        let mut colorings = Vec::new();
        self.search(|coloring| {
            colorings.push(coloring.clone());
            ControlFlow::Continue(())
        })?;
        Ok(colorings)
    }

    /// Collect at most `limit` colorings
    ///
    /// # Errors
    ///
    /// Same as `search`
    pub fn find_at_most(&self, limit: usize) -> Result<Vec<Coloring>> {
        let mut colorings = Vec::new();
        if limit == 0 {
            return Ok(colorings);
        }
        self.search(|coloring| {
            colorings.push(coloring.clone());
            if colorings.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(colorings)
    }

    /// First coloring found, if any
    ///
    /// # Errors
    ///
    /// Same as `search`
    pub fn find_first(&self) -> Result<Option<Coloring>> {
        Ok(self.find_at_most(1)?.into_iter().next())
    }

    /// Number of colorings without keeping them
    ///
    /// # Errors
    ///
    /// Same as `search`
    pub fn count(&self) -> Result<usize> {
        self.search(|_| ControlFlow::Continue(()))
    }
}

struct ColoringSearch<'a, F> {
    placements: &'a [Placement],
    board: Board,
    bag: StoneBag,
    current: Coloring,
    visit: F,
    found: usize,
    nodes: u64,
}

impl<F> ColoringSearch<'_, F>
where
    F: FnMut(&Coloring) -> ControlFlow<()>,
{
    /// Every board reaching this point is valid: the empty board trivially,
    /// all others were checked right after their last write.
    fn search(&mut self, index: usize) -> Result<ControlFlow<()>> {
        self.nodes += 1;
        let Some(&placement) = self.placements.get(index) else {
            // One stone was consumed per placement, so the bag is empty here
            self.found += 1;
            return Ok((self.visit)(&self.current));
        };

        for slot in 0..self.bag.count_of_length(placement.length) {
            let Some(stone) = self.bag.take(placement.length, slot) else {
                break;
            };
            let flow = self.try_stone(placement, &stone, index);
            self.bag.put_back(slot, stone);
            if flow?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn try_stone(
        &mut self,
        placement: Placement,
        stone: &Stone,
        index: usize,
    ) -> Result<ControlFlow<()>> {
        for oriented in [placement, placement.flipped_reading()] {
            if self.try_orientation(oriented, stone, index)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn try_orientation(
        &mut self,
        placement: Placement,
        stone: &Stone,
        index: usize,
    ) -> Result<ControlFlow<()>> {
        self.board.assign(&placement, stone)?;

        let flow = match self.board.is_valid_around(&placement) {
            Ok(true) => {
                self.current.push(placement, stone.clone());
                let flow = self.search(index + 1);
                self.current.pop();
                flow
            }
            Ok(false) => Ok(ControlFlow::Continue(())),
            Err(error) => Err(error),
        };

        // Cleared on every path so an error cannot leave a stale run behind
        self.board.unassign(&placement, stone)?;
        flow
    }
}

/// Collect every coloring of `tiling` with `stones`
///
/// # Errors
///
/// Same as `Solver::new` and `Solver::search`
pub fn find_colorings(tiling: &Tiling, stones: &[Stone]) -> Result<Vec<Coloring>> {
    Solver::new(tiling, stones)?.find_all()
}
