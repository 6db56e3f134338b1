//! Demonstration puzzles cut from shuffled Latin squares
//!
//! A cyclic Latin square is valid by construction, and swapping whole rows or
//! columns keeps it valid. Cutting such a board along a tiling therefore
//! always yields a solvable stone set. A puzzle is kept when its stones are
//! pairwise distinct.

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

use crate::algorithm::coloring::{Coloring, Solver};
use crate::algorithm::stones::Stone;
use crate::io::configuration::{PUZZLE_PALETTE, SHUFFLE_ROUNDS};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::{Board, Tiling};

/// A stone set together with one known solution
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Stones handed to the player
    pub stones: Vec<Stone>,
    /// The coloring the stones were cut from
    pub solution: Coloring,
    /// Board of the known solution
    pub board: Board,
    /// Colorings of the stones across all candidate tilings
    pub solution_count: usize,
}

/// Seeded generator for reproducible demonstration puzzles
pub struct PuzzleGenerator {
    rng: StdRng,
}

impl PuzzleGenerator {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Latin square over the palette with rows and columns randomly swapped
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the palette has too few colors for the board
    pub fn shuffled_board(&mut self, size: usize) -> Result<Board> {
        let mut board = latin_board(size)?;
        if size == 0 {
            return Ok(board);
        }

        for _ in 0..SHUFFLE_ROUNDS {
            let swap_rows = self.rng.random_range(0..size) > size / 2;
            let first = self.rng.random_range(0..size);
            let second = self.rng.random_range(0..size);
            if swap_rows {
                board.swap_rows(first, second)?;
            } else {
                board.swap_cols(first, second)?;
            }
        }
        Ok(board)
    }

    /// One puzzle attempt per tiling, keeping those with pairwise distinct stones
    ///
    /// Solution counts are taken over all of `tilings`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a tiling is too large for the palette,
    /// or any error of the coloring search
    pub fn generate(&mut self, tilings: &[Tiling]) -> Result<Vec<Puzzle>> {
        let mut puzzles = Vec::new();
        for tiling in tilings {
            let board = self.shuffled_board(tiling.board_size())?;
            let solution = cut_along(&board, tiling)?;
            let stones: Vec<Stone> = solution
                .assignments()
                .iter()
                .map(|(_, stone)| stone.clone())
                .collect();

            let distinct: HashSet<&Stone> = stones.iter().collect();
            if distinct.len() != stones.len() {
                debug!("Skipping tiling with repeated stones");
                continue;
            }

            let solution_count = count_solutions(&stones, tilings)?;
            if solution_count == 0 {
                continue;
            }
            puzzles.push(Puzzle {
                stones,
                solution,
                board,
                solution_count,
            });
        }

        info!(
            "Generated {} puzzles from {} tilings",
            puzzles.len(),
            tilings.len()
        );
        Ok(puzzles)
    }
}

/// Cyclic Latin square with `cell(r, c) = palette[(r + c + 1) mod size]`
///
/// # Errors
///
/// Returns `InvalidParameter` if the palette has too few colors for the board
pub fn latin_board(size: usize) -> Result<Board> {
    if size >= PUZZLE_PALETTE.len() {
        return Err(invalid_parameter(
            "board size",
            &size,
            &format!(
                "exceeds maximum board size {}",
                PUZZLE_PALETTE.len().saturating_sub(1)
            ),
        ));
    }

    let mut board = Board::new(size);
    for row in 0..size {
        for col in 0..size {
            let color = PUZZLE_PALETTE
                .get((row + col + 1) % size)
                .copied()
                .ok_or_else(|| computation_error("latin_board", &"palette index out of range"))?;
            board.assign_cell(row, col, color)?;
        }
    }
    Ok(board)
}

/// Read the stones a full board shows along the placements of a tiling
///
/// # Errors
///
/// Returns a computation error if a placement crosses an empty cell or
/// leaves the board
pub fn cut_along(board: &Board, tiling: &Tiling) -> Result<Coloring> {
    let mut coloring = Coloring::new(tiling.board_size());
    for placement in tiling.placements() {
        let stone = board.read_run(placement).ok_or_else(|| {
            computation_error("cut_along", &format!("{placement} does not lie on a full board"))
        })?;
        coloring.push(*placement, stone);
    }
    Ok(coloring)
}

fn count_solutions(stones: &[Stone], tilings: &[Tiling]) -> Result<usize> {
    let mut total = 0;
    for tiling in tilings {
        total += Solver::new(tiling, stones)?.count()?;
    }
    Ok(total)
}
