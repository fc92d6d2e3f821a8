//! circlegrid CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, generate the sheet, and
//! exit non-zero with the error on stderr if anything fails.
//! For programmatic use, prefer the library API (`circlegrid::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
