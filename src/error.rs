//! Error types for the pushgate CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for pushgate operations.
///
/// Each variant maps to a specific exit code. Errors carry their full
/// context as a formatted message; there is no retry path anywhere, so a
/// failed git invocation or an unreadable root surfaces directly to `main`.
#[derive(Error, Debug)]
pub enum PushgateError {
    /// User provided invalid input or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// The watchlist file could not be parsed or contains a bad pattern.
    #[error("Watchlist error: {0}")]
    WatchlistError(String),

    /// Git invocation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// A file under the repository root could not be read.
    #[error("File read failed: {0}")]
    ReadError(String),
}

impl PushgateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PushgateError::UserError(_) => exit_codes::USER_ERROR,
            PushgateError::WatchlistError(_) => exit_codes::USER_ERROR,
            PushgateError::GitError(_) => exit_codes::GIT_FAILURE,
            PushgateError::ReadError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for pushgate operations.
pub type Result<T> = std::result::Result<T, PushgateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PushgateError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn watchlist_error_has_correct_exit_code() {
        let err = PushgateError::WatchlistError("invalid pattern".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = PushgateError::GitError("diff failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn read_error_has_correct_exit_code() {
        let err = PushgateError::ReadError("no such file".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PushgateError::GitError("diff exited with code 128".to_string());
        assert_eq!(
            err.to_string(),
            "Git operation failed: diff exited with code 128"
        );

        let err = PushgateError::WatchlistError("invalid pattern '['".to_string());
        assert_eq!(err.to_string(), "Watchlist error: invalid pattern '['");
    }
}
