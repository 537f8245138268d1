//! Pushgate: pre-push gate that flags outgoing files matching a watchlist.
//!
//! This is the main entry point for the `pushgate` hook binary. It parses
//! arguments, reads the pre-push line from stdin, runs the gate against
//! the repository at the current working directory, and maps the outcome
//! to an exit code.

mod cli;
pub mod addition;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod hook;
pub mod logging;
pub mod pattern;
pub mod repo;
pub mod runner;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::{PushgateError, Result};
use hook::HookInput;
use repo::GitRepo;
use runner::{RunReport, Runner};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.debug);

    match run() {
        Ok(report) => {
            println!("{}", report.format_summary());
            if report.is_clean() {
                ExitCode::from(exit_codes::SUCCESS as u8)
            } else {
                ExitCode::from(exit_codes::FLAGGED as u8)
            }
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Wire stdin, the working directory, and the runner together.
fn run() -> Result<RunReport> {
    let mut stdin = std::io::stdin().lock();
    let input = HookInput::from_reader(&mut stdin)?;

    let cwd = std::env::current_dir().map_err(|e| {
        PushgateError::UserError(format!("failed to resolve current directory: {}", e))
    })?;
    let repo = GitRepo::located_at(cwd)?;

    Runner::new(repo, input).run()
}
