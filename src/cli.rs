//! CLI argument parsing for pushgate.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! surface is deliberately small: a pre-push hook receives everything
//! else on stdin.

use clap::Parser;

/// Pushgate: pre-push gate that flags outgoing files matching a watchlist.
///
/// Runs as a git pre-push hook: reads the pushed ref line from stdin,
/// enumerates the outgoing added and modified files, and fails the push
/// when any of them matches a pattern in `.pushgate.yaml`.
#[derive(Parser, Debug)]
#[command(name = "pushgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (warning: very verbose).
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
