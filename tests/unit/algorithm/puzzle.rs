//! Tests for Latin square boards and demonstration puzzle generation

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use stonegrid::algorithm::puzzle::{PuzzleGenerator, cut_along, latin_board};
    use stonegrid::algorithm::tiling::find_tilings;
    use stonegrid::{Board, Placement, Solver, Stone, Tiling};

    // Cell (r, c) holds palette color (r + c + 1) mod N
    #[test]
    fn test_latin_board_layout() {
        let board = latin_board(3).expect("Failed to build board");
        assert_eq!(board.signature(), "DGBGBDBDG");
        assert!(board.is_full());
        assert_eq!(board.is_valid(), Ok(true));
    }

    #[test]
    fn test_latin_board_size_limit() {
        let largest = latin_board(16).expect("Failed to build board");
        assert_eq!(largest.is_valid(), Ok(true));
        assert!(largest.is_full());

        assert!(latin_board(17).is_err());
        assert!(PuzzleGenerator::new(1).shuffled_board(17).is_err());
    }

    #[test]
    fn test_shuffled_board_stays_latin() {
        let mut generator = PuzzleGenerator::new(7);
        for size in 1..=6 {
            let board = generator.shuffled_board(size).expect("Failed to shuffle board");
            assert!(board.is_full());
            assert_eq!(board.is_valid(), Ok(true));
        }
    }

    // Equal seeds produce equal boards
    #[test]
    fn test_shuffle_is_reproducible() {
        let first = PuzzleGenerator::new(42).shuffled_board(5);
        let second = PuzzleGenerator::new(42).shuffled_board(5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cut_along_rows() {
        let board = latin_board(3).expect("Failed to build board");
        let tiling = Tiling::from_placements(3, (0..3).map(|row| Placement::horizontal(3, row, 0)))
            .expect("Failed to build tiling");
        let coloring = cut_along(&board, &tiling).expect("Failed to cut board");

        let stones: Vec<Stone> = coloring.assignments().iter().map(|(_, s)| s.clone()).collect();
        assert_eq!(stones, vec![Stone::from("DGB"), Stone::from("GBD"), Stone::from("BDG")]);
        assert_eq!(coloring.to_board(), Ok(board));
    }

    #[test]
    fn test_cut_along_requires_full_board() {
        let tiling = Tiling::from_placements(2, [Placement::horizontal(2, 0, 0), Placement::horizontal(2, 1, 0)])
            .expect("Failed to build tiling");
        let mut board = Board::new(2);
        assert_eq!(board.assign_cell(0, 0, b'R'), Ok(()));
        assert!(cut_along(&board, &tiling).is_err());
    }

    #[test]
    fn test_generate_three_by_three() {
        let tilings = find_tilings(&[3, 3, 3]).expect("Failed to find tilings");
        let puzzles = PuzzleGenerator::new(42)
            .generate(&tilings)
            .expect("Failed to generate puzzles");
        assert_eq!(puzzles.len(), 2);

        for puzzle in &puzzles {
            assert_eq!(puzzle.stones.len(), 3);
            let distinct: HashSet<&Stone> = puzzle.stones.iter().collect();
            assert_eq!(distinct.len(), 3);

            assert!(puzzle.board.is_full());
            assert_eq!(puzzle.board.is_valid(), Ok(true));
            assert_eq!(puzzle.solution.to_board().as_ref(), Ok(&puzzle.board));
            assert!(puzzle.solution_count >= 1);
        }
    }

    #[test]
    fn test_generated_solution_count_matches_solver() {
        let tilings = find_tilings(&[3, 3, 3]).expect("Failed to find tilings");
        let puzzles = PuzzleGenerator::new(3)
            .generate(&tilings)
            .expect("Failed to generate puzzles");
        for puzzle in &puzzles {
            let total: usize = tilings
                .iter()
                .map(|tiling| {
                    Solver::new(tiling, &puzzle.stones)
                        .and_then(|solver| solver.count())
                        .unwrap_or(0)
                })
                .sum();
            assert_eq!(puzzle.solution_count, total);
        }
    }

    // Single cells repeat colors, so no puzzle survives
    #[test]
    fn test_generate_skips_repeated_stones() {
        let tilings = find_tilings(&[1, 1, 1, 1]).expect("Failed to find tilings");
        let puzzles = PuzzleGenerator::new(42)
            .generate(&tilings)
            .expect("Failed to generate puzzles");
        assert!(puzzles.is_empty());
    }
}
