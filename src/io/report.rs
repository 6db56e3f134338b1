//! Human-readable rendering of colorings, tilings and puzzles

use std::borrow::Cow;
use std::fmt::Write;

use crate::algorithm::coloring::Coloring;
use crate::algorithm::puzzle::Puzzle;
use crate::io::error::Result;

const COLOR_NAMES: [(u8, &str); 17] = [
    (b'B', "blue"),
    (b'C', "cyan"),
    (b'D', "black"),
    (b'F', "fuchsia"),
    (b'G', "green"),
    (b'I', "indigo"),
    (b'K', "khaki"),
    (b'L', "lime"),
    (b'M', "magenta"),
    (b'O', "orange"),
    (b'P', "pink"),
    (b'R', "red"),
    (b'S', "silver"),
    (b'T', "teal"),
    (b'V', "violet"),
    (b'W', "white"),
    (b'Y', "yellow"),
];

/// Name of a color symbol, or the symbol itself if it has no name
pub fn color_name(symbol: u8) -> Cow<'static, str> {
    COLOR_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map_or_else(
            || Cow::Owned(char::from(symbol).to_string()),
            |(_, name)| Cow::Borrowed(*name),
        )
}

/// List every stone of a coloring with 1-based coordinates and color names
///
/// Colors are listed in board order, so reversed stones appear back-to-front.
pub fn render_coloring(coloring: &Coloring) -> String {
    let mut out = String::from("Solution:\n");
    for (placement, stone) in coloring.assignments() {
        let direction = if placement.horizontal {
            ", horizontal) "
        } else {
            ", vertical)   "
        };
        let names: Vec<Cow<'static, str>> = stone
            .reading(placement.reversed)
            .into_iter()
            .map(color_name)
            .collect();
        let _ = writeln!(
            out,
            "({},{}{direction}{}",
            placement.row + 1,
            placement.col + 1,
            names.join(" ")
        );
    }
    out.push_str("Rotate and mirror this solution to produce variants of it.\n");
    out
}

/// Coloring listing followed by the bordered board it produces
///
/// # Errors
///
/// Returns the board's error if the coloring's runs overlap
pub fn render_coloring_with_board(coloring: &Coloring) -> Result<String> {
    let board = coloring.to_board()?;
    Ok(format!("{}{board}\n", render_coloring(coloring)))
}

/// Stones, known solution and board of a generated puzzle
pub fn render_puzzle(puzzle: &Puzzle) -> String {
    let stones: Vec<String> = puzzle.stones.iter().map(ToString::to_string).collect();
    format!(
        "Found {} solutions, among them this one:\nStones: {}\n{}The board looks like this:\n{}\n",
        puzzle.solution_count,
        stones.join(" "),
        render_coloring(&puzzle.solution),
        puzzle.board
    )
}

/// Counts line printed after tiling generation and symmetry reduction
pub fn render_tiling_counts(found: usize, unique: usize) -> String {
    format!("Found {found} layouts of which {unique} are unique layouts.")
}
