//! CLI entry point for the stone puzzle solver

use clap::Parser;
use std::process::ExitCode;
use stonegrid::io::cli::{Cli, Runner, init_logging};
use stonegrid::io::configuration::{EXIT_FATAL_ERROR, EXIT_INPUT_ERROR};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runner = Runner::new(cli);
    match runner.run(&mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) if error.is_fatal() => {
            log::error!("{error}");
            ExitCode::from(EXIT_FATAL_ERROR)
        }
        Err(error) => {
            log::error!("{error}");
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}
