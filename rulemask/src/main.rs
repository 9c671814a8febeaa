// rulemask/src/main.rs
//! rulemask entry point.
//!
//! Parses the command line, sets up logging and hands off to the command runner.

use clap::Parser;
use std::process::ExitCode;

use rulemask::cli::Cli;
use rulemask::commands;
use rulemask::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            commands::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
