//! Git-out: branch out from the freshest upstream default branch.
//!
//! This is the main entry point for the `git-out` CLI. It parses arguments,
//! runs the branch-out workflow against the current directory, and maps
//! failures to exit codes.

mod cli;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod sink;
pub mod workflow;

#[cfg(test)]
mod test_support;

use cli::Cli;
use sink::{ConsoleSink, MessageSink};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let mut sink = ConsoleSink;

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            sink.error(&format!("cannot determine current directory: {}", err));
            return ExitCode::from(exit_codes::PRECONDITION_FAILURE as u8);
        }
    };

    match workflow::run(&cwd, &cli.into_options(), &mut sink) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            sink.error(&err.to_string());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
