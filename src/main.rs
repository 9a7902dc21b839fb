//! git-sweep: remove remote branches already merged into a reference branch.
//!
//! This is the main entry point for the `git-sweep` CLI. It parses arguments,
//! installs logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod exec;
pub mod exit_codes;
pub mod git;
pub mod lint;
pub mod patterns;
pub mod status;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `GIT_SWEEP_LOG=trace`.
const LOG_ENV: &str = "GIT_SWEEP_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let result = std::env::current_dir()
        .map_err(|e| {
            error::SweepError::UserError(format!("cannot read current directory: {}", e))
        })
        .and_then(|cwd| commands::dispatch(cli, &cwd));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Logs go to stderr so that stdout carries only command output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
