//! Exit code constants for the pushgate CLI.
//!
//! - 0: Success (gate run completed, nothing flagged)
//! - 1: User error (bad input, unusable environment, bad watchlist)
//! - 2: Flagged (run completed and at least one outgoing file matched)
//! - 3: Git operation failure

/// Successful execution with a clean report.
pub const SUCCESS: i32 = 0;

/// User error: unreadable stdin, invalid repository root, or bad watchlist.
pub const USER_ERROR: i32 = 1;

/// The run completed and one or more outgoing files matched the watchlist.
pub const FLAGGED: i32 = 2;

/// Git operation failure: missing binary, bad range, non-zero exit.
pub const GIT_FAILURE: i32 = 3;
