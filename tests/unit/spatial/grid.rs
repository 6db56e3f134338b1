//! Tests for board writes, the validity predicate and board signatures

#[cfg(test)]
mod tests {
    use stonegrid::{Board, Placement, PuzzleError, Stone};

    fn row(index: usize) -> Placement {
        Placement::horizontal(3, index, 0)
    }

    // Three rotated rows fill a 3x3 board without repeating a color
    #[test]
    fn test_small_game_is_valid_and_full() {
        let mut board = Board::new(3);
        assert_eq!(board.is_valid(), Ok(true));
        assert!(!board.is_full());

        for (index, stone) in ["RGB", "GBR", "BRG"].into_iter().enumerate() {
            assert_eq!(board.assign(&row(index), &Stone::from(stone)), Ok(()));
            assert_eq!(board.is_valid(), Ok(true));
        }

        assert!(board.is_full());
        assert_eq!(board.filled(), 9);
        assert_eq!(board.signature(), "RGBGBRBRG");
    }

    #[test]
    fn test_reversed_assignment_writes_back_to_front() {
        let mut board = Board::new(3);
        let placement = Placement::vertical(3, 0, 2).flipped_reading();
        assert_eq!(board.assign(&placement, &Stone::from("RGB")), Ok(()));
        assert_eq!(board.symbol(0, 2), Some(b'B'));
        assert_eq!(board.symbol(1, 2), Some(b'G'));
        assert_eq!(board.symbol(2, 2), Some(b'R'));
        assert_eq!(board.read_run(&placement), Some(Stone::from("RGB")));
        assert_eq!(
            board.read_run(&Placement::vertical(3, 0, 2)),
            Some(Stone::from("BGR"))
        );
    }

    // Occupied targets are rejected and leave the board untouched
    #[test]
    fn test_assign_rejects_occupied_cells() {
        let mut board = Board::new(3);
        assert_eq!(board.assign(&row(0), &Stone::from("RGB")), Ok(()));

        let crossing = Placement::vertical(3, 0, 1);
        assert!(!board.can_assign(&crossing, &Stone::from("DYB")));
        assert_eq!(
            board.assign(&crossing, &Stone::from("DYB")),
            Err(PuzzleError::CellOccupied { row: 0, col: 1 })
        );
        assert_eq!(board.filled(), 3);
        assert!(board.is_empty_at(1, 1));
    }

    #[test]
    fn test_assign_rejects_runs_leaving_the_board() {
        let mut board = Board::new(3);
        let placement = Placement::horizontal(2, 0, 2);
        assert!(!board.can_assign(&placement, &Stone::from("RG")));
        assert_eq!(
            board.assign(&placement, &Stone::from("RG")),
            Err(PuzzleError::OutOfBounds {
                row: 0,
                col: 3,
                board_size: 3
            })
        );
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_assign_rejects_length_mismatch() {
        let mut board = Board::new(3);
        assert!(!board.can_assign(&row(0), &Stone::from("RG")));
        assert!(board.assign(&row(0), &Stone::from("RG")).is_err());
        assert_eq!(board.filled(), 0);
    }

    // Unassign is the exact inverse of assign
    #[test]
    fn test_unassign_restores_board() {
        let mut board = Board::new(3);
        let stone = Stone::from("RGB");
        let original = board.clone();

        assert_eq!(board.assign(&row(1), &stone), Ok(()));
        assert_ne!(board, original);
        assert_eq!(board.unassign(&row(1), &stone), Ok(()));
        assert_eq!(board, original);
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_duplicate_in_row_is_invalid() {
        let mut board = Board::new(3);
        assert_eq!(board.assign_cell(1, 0, b'R'), Ok(()));
        assert_eq!(board.assign_cell(1, 2, b'R'), Ok(()));
        assert_eq!(board.is_valid(), Ok(false));
    }

    #[test]
    fn test_duplicate_in_column_is_invalid() {
        let mut board = Board::new(3);
        assert_eq!(board.assign(&row(0), &Stone::from("RGB")), Ok(()));
        assert_eq!(board.assign(&row(2), &Stone::from("BGR")), Ok(()));
        assert_eq!(board.is_valid(), Ok(false));
        assert_eq!(board.is_valid_around(&row(2)), Ok(false));
    }

    // The local check only looks at lines crossed by the run
    #[test]
    fn test_validity_around_placement() {
        let mut board = Board::new(4);
        assert_eq!(board.assign_cell(0, 0, b'R'), Ok(()));
        assert_eq!(board.assign_cell(0, 3, b'R'), Ok(()));
        let placement = Placement::vertical(2, 2, 1);
        assert_eq!(board.assign(&placement, &Stone::from("GB")), Ok(()));

        assert_eq!(board.is_valid(), Ok(false));
        assert_eq!(board.is_valid_around(&placement), Ok(true));
        assert_eq!(board.is_valid_around(&Placement::horizontal(4, 0, 0)), Ok(false));
    }

    #[test]
    fn test_unsupported_symbol_is_an_error() {
        let mut board = Board::new(2);
        assert_eq!(board.assign_cell(0, 0, b'!'), Ok(()));
        assert_eq!(
            board.is_valid(),
            Err(PuzzleError::AlphabetOverflow { symbol: b'!' })
        );
    }

    #[test]
    fn test_empty_marker_cannot_be_assigned() {
        let mut board = Board::new(2);
        assert_eq!(
            board.assign_cell(0, 0, b' '),
            Err(PuzzleError::AlphabetOverflow { symbol: b' ' })
        );
        assert_eq!(board.filled(), 0);
    }

    // Stone symbols are checked before the first cell is written
    #[test]
    fn test_stone_with_unsupported_symbol_writes_nothing() {
        let mut board = Board::new(3);
        let result = board.assign(&row(0), &Stone::from("R B"));
        assert_eq!(result, Err(PuzzleError::AlphabetOverflow { symbol: b' ' }));
        assert!(result.is_err_and(|error| error.is_fatal()));
        assert_eq!(board.filled(), 0);
        assert_eq!(board.signature(), "         ");

        assert_eq!(
            board.assign(&row(1), &Stone::from("R!B")),
            Err(PuzzleError::AlphabetOverflow { symbol: b'!' })
        );
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_swaps_keep_latin_square_valid() {
        let mut board = Board::new(3);
        for (index, stone) in ["RGB", "GBR", "BRG"].into_iter().enumerate() {
            assert_eq!(board.assign(&row(index), &Stone::from(stone)), Ok(()));
        }
        assert_eq!(board.swap_rows(0, 2), Ok(()));
        assert_eq!(board.swap_cols(0, 1), Ok(()));
        assert_eq!(board.signature(), "RBGBGRGRB");
        assert_eq!(board.is_valid(), Ok(true));
        assert!(board.is_full());
        assert!(board.swap_rows(0, 3).is_err());
    }

    #[test]
    fn test_signature_marks_empty_cells() {
        let mut board = Board::new(2);
        assert_eq!(board.signature(), "    ");
        assert_eq!(board.assign_cell(1, 0, b'G'), Ok(()));
        assert_eq!(board.signature(), "  G ");
        assert_eq!(board.clear_cell(1, 0), Ok(Some(b'G')));
        assert_eq!(board.clear_cell(1, 0), Ok(None));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2);
        assert_eq!(board.assign(&Placement::horizontal(2, 0, 0), &Stone::from("RG")), Ok(()));
        assert_eq!(board.assign(&Placement::horizontal(2, 1, 0), &Stone::from("GR")), Ok(()));
        assert_eq!(
            board.to_string(),
            "--------\n| R | G |\n| G | R |\n--------\nBoard is valid and full."
        );
    }
}
