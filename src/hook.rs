//! Pre-push hook input parsing.
//!
//! Git feeds a pre-push hook one line per ref being pushed:
//! `<local-ref> <local-sha> <remote-ref> <remote-sha>`. Only the first
//! line is consumed. A short or absent line is not an error, it is how
//! git invokes the hook when nothing is outgoing, and yields a sentinel
//! input with every field empty.

use crate::error::{PushgateError, Result};
use std::io::BufRead;

/// Object id git uses for "no such commit" in hook lines.
pub const ZERO_SHA: &str = "0000000000000000000000000000000000000000";

/// The parsed first line of pre-push stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookInput {
    /// Ref being pushed, e.g. `refs/heads/master`.
    pub local_ref: String,
    /// Commit the local ref points at (the outgoing state).
    pub local_sha: String,
    /// Destination ref on the remote.
    pub remote_ref: String,
    /// Commit the remote ref currently points at (the baseline).
    pub remote_sha: String,
}

impl HookInput {
    /// Read and parse the first line from a hook stdin stream.
    ///
    /// # Returns
    ///
    /// * `Ok(HookInput)` - Parsed input, or the sentinel on a short line
    /// * `Err(PushgateError::UserError)` - If reading stdin itself fails
    pub fn from_reader<R: BufRead>(reader: &mut R) -> Result<Self> {
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| PushgateError::UserError(format!("failed to read hook input: {}", e)))?;
        Ok(Self::parse_line(&line))
    }

    /// Parse one hook line. Fewer than four tokens yields the sentinel;
    /// tokens past the fourth are ignored.
    pub fn parse_line(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            return Self::sentinel();
        }
        Self {
            local_ref: tokens[0].to_string(),
            local_sha: tokens[1].to_string(),
            remote_ref: tokens[2].to_string(),
            remote_sha: tokens[3].to_string(),
        }
    }

    /// The all-empty input produced when git sends no usable line.
    pub fn sentinel() -> Self {
        Self {
            local_ref: String::new(),
            local_sha: String::new(),
            remote_ref: String::new(),
            remote_sha: String::new(),
        }
    }

    /// True when this input is the sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.local_ref.is_empty()
            && self.local_sha.is_empty()
            && self.remote_ref.is_empty()
            && self.remote_sha.is_empty()
    }

    /// True when the push deletes the remote ref (nothing outgoing).
    pub fn deletes_remote_ref(&self) -> bool {
        self.local_sha == ZERO_SHA
    }

    /// True when the push creates a ref the remote does not have yet,
    /// so there is no baseline commit to diff against.
    pub fn creates_remote_ref(&self) -> bool {
        self.remote_sha == ZERO_SHA
    }
}
