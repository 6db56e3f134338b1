//! Command-line interface for solving stone puzzles and generating demonstration puzzles

use crate::algorithm::coloring::Solver;
use crate::algorithm::puzzle::PuzzleGenerator;
use crate::algorithm::stones::parse_stones;
use crate::algorithm::symmetry::unify;
use crate::algorithm::tiling::{TilingGenerator, find_tilings};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{PuzzleError, Result, computation_error};
use crate::io::progress::SearchProgress;
use crate::io::report::{render_coloring_with_board, render_puzzle, render_tiling_counts};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::ops::ControlFlow;

#[derive(Parser)]
#[command(name = "stonegrid")]
#[command(
    author,
    version,
    about = "Tile a square board with colored stones so that no row or column repeats a color"
)]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Log search statistics (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Find every coloring of every tiling for the given stones
    Solve(SolveArgs),
    /// Generate demonstration puzzles for the given stone lengths
    Generate(GenerateArgs),
}

/// Arguments of the `solve` operation
#[derive(Args)]
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct SolveArgs {
    /// Stones as color strings, e.g. GRB BGR RBG for a 3x3 board
    #[arg(value_name = "STONE", required = true)]
    pub stones: Vec<String>,

    /// Stop after the first coloring of each tiling
    #[arg(short, long)]
    pub first: bool,

    /// Maximum number of colorings reported per tiling
    #[arg(short, long, value_name = "N")]
    pub max_solutions: Option<usize>,

    /// Search every tiling instead of one per symmetry class
    #[arg(short, long)]
    pub all_tilings: bool,

    /// Print only the counts and hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl SolveArgs {
    /// Upper bound on colorings reported per tiling
    pub const fn limit(&self) -> Option<usize> {
        if self.first {
            Some(1)
        } else {
            self.max_solutions
        }
    }
}

/// Arguments of the `generate` operation
#[derive(Args)]
pub struct GenerateArgs {
    /// Stone lengths, e.g. 3 3 3 for a 3x3 board
    #[arg(value_name = "LENGTH", required = true)]
    pub lengths: Vec<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Counts produced by a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tilings found before symmetry reduction
    pub tilings: usize,
    /// Tilings that were searched for colorings or puzzles
    pub searched_tilings: usize,
    /// Colorings found, or puzzles generated
    pub results: usize,
}

/// Initialize `env_logger` at `warn`, or `info` when verbose
pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Executes the parsed command and writes its report
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected operation, writing the report to `out`
    ///
    /// # Errors
    ///
    /// Returns input-shape errors for stones that cannot tile a square board,
    /// fatal errors for unsupported colors, and output failures
    pub fn run(&self, out: &mut impl Write) -> Result<RunSummary> {
        match &self.cli.command {
            Command::Solve(args) => Self::solve(args, out),
            Command::Generate(args) => Self::generate(args, out),
        }
    }

    fn solve(args: &SolveArgs, out: &mut impl Write) -> Result<RunSummary> {
        let stones = parse_stones(&args.stones)?;
        let all_tilings = TilingGenerator::from_stones(&stones)?.find_all()?;
        let tilings = if args.all_tilings {
            all_tilings.clone()
        } else {
            unify(&all_tilings)?
        };
        emit(out, &render_tiling_counts(all_tilings.len(), tilings.len()))?;

        let mut progress = if args.quiet {
            SearchProgress::hidden()
        } else {
            SearchProgress::new(tilings.len())
        };

        for tiling in &tilings {
            let solver = Solver::new(tiling, &stones)?;
            let mut failure: Option<PuzzleError> = None;
            let mut reported = 0;

            let found = solver.search(|coloring| {
                reported += 1;
                if !args.quiet {
                    let rendered = render_coloring_with_board(coloring)
                        .and_then(|text| progress.suspend(|| emit(out, &text)));
                    if let Err(error) = rendered {
                        failure = Some(error);
                        return ControlFlow::Break(());
                    }
                }
                match args.limit() {
                    Some(limit) if reported >= limit => ControlFlow::Break(()),
                    _ => ControlFlow::Continue(()),
                }
            })?;
            if let Some(error) = failure {
                progress.finish();
                return Err(error);
            }
            progress.tiling_done(found);
        }
        progress.finish();

        let total = progress.colorings();
        emit(out, &format!("Found {total} solution(s) in total."))?;
        Ok(RunSummary {
            tilings: all_tilings.len(),
            searched_tilings: tilings.len(),
            results: total,
        })
    }

    fn generate(args: &GenerateArgs, out: &mut impl Write) -> Result<RunSummary> {
        let tilings = find_tilings(&args.lengths)?;
        let puzzles = PuzzleGenerator::new(args.seed).generate(&tilings)?;
        for puzzle in &puzzles {
            emit(out, &render_puzzle(puzzle))?;
        }
        emit(
            out,
            &format!(
                "Generated {} puzzle(s) from {} layouts.",
                puzzles.len(),
                tilings.len()
            ),
        )?;
        Ok(RunSummary {
            tilings: tilings.len(),
            searched_tilings: tilings.len(),
            results: puzzles.len(),
        })
    }
}

fn emit(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{text}").map_err(|error| computation_error("write report", &error))
}
