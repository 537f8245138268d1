//! Watch pattern parsing and matching.
//!
//! Patterns are classified once at parse time into one of three matching
//! modes, so per-file matching never re-inspects the pattern text:
//! - trailing `/`: plain prefix match against the repo-relative path
//! - contains `/`: glob matched against the whole repo-relative path
//! - otherwise: glob matched against the file name alone
//!
//! Globs are compiled with literal path separators, so `*` never crosses
//! a `/` boundary.

use globset::{GlobBuilder, GlobMatcher};
use std::fmt;
use thiserror::Error;

/// Error produced when a watch pattern fails to parse.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern text was empty.
    #[error("empty pattern")]
    Empty,
    /// The pattern has glob syntax that does not compile.
    #[error("invalid glob '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },
}

/// A single compiled watch pattern.
#[derive(Debug, Clone)]
pub enum PathPattern {
    /// Pattern ending in `/`: matches every path under that directory.
    DirectoryPrefix(String),
    /// Pattern containing `/`: glob matched against the full path.
    PathGlob(GlobMatcher),
    /// Pattern without `/`: glob matched against the file name.
    BasenameGlob(GlobMatcher),
}

impl PathPattern {
    /// Parse a pattern string into its matching mode.
    ///
    /// Classification happens here, not at match time, so invalid glob
    /// syntax is reported before any file is checked.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The raw pattern text from the watchlist
    ///
    /// # Returns
    ///
    /// * `Ok(PathPattern)` - The compiled pattern
    /// * `Err(PatternError)` - If the pattern is empty or its glob syntax
    ///   does not compile
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        if pattern.ends_with('/') {
            return Ok(Self::DirectoryPrefix(pattern.to_string()));
        }

        let matcher = compile_glob(pattern)?;

        if pattern.contains('/') {
            Ok(Self::PathGlob(matcher))
        } else {
            Ok(Self::BasenameGlob(matcher))
        }
    }

    /// Check whether a repo-relative path matches this pattern.
    ///
    /// Paths are expected to use forward slashes, as git reports them.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::DirectoryPrefix(prefix) => path.starts_with(prefix.as_str()),
            Self::PathGlob(matcher) => matcher.is_match(path),
            Self::BasenameGlob(matcher) => matcher.is_match(basename(path)),
        }
    }

    /// The original pattern text, for reporting which pattern matched.
    pub fn as_str(&self) -> &str {
        match self {
            Self::DirectoryPrefix(prefix) => prefix,
            Self::PathGlob(matcher) | Self::BasenameGlob(matcher) => matcher.glob().glob(),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile a glob with literal separators, matching one path segment per `*`.
fn compile_glob(pattern: &str) -> Result<GlobMatcher, PatternError> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| PatternError::InvalidGlob {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
    Ok(glob.compile_matcher())
}

/// The final path segment, or the whole path if it has no separator.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
