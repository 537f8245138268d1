//! Outgoing file additions.
//!
//! An addition is one file that an outgoing push would introduce or
//! modify, paired with its content at the new revision. Paths are
//! repo-relative with forward slashes, exactly as git reports them.

use crate::pattern::{self, PathPattern};
use std::fmt;

/// Repo-relative path of a changed file, forward slashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath(String);

impl FilePath {
    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final path segment of a [`FilePath`]. Derived, never set directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single file in the outgoing change set.
///
/// Immutable after construction; the name always equals the final
/// segment of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    path: FilePath,
    name: FileName,
    data: Vec<u8>,
}

impl Addition {
    /// Create an addition, deriving the file name from the path.
    pub fn new(path: impl Into<String>, data: Vec<u8>) -> Self {
        let path = path.into();
        let name = pattern::basename(&path).to_string();
        Self {
            path: FilePath(path),
            name: FileName(name),
            data,
        }
    }

    /// Full repo-relative path.
    pub fn path(&self) -> &FilePath {
        &self.path
    }

    /// File name without directories.
    pub fn name(&self) -> &FileName {
        &self.name
    }

    /// File content at the new revision. Empty when the file could not
    /// be read from the working tree.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Check whether this addition matches a watch pattern.
    pub fn matches(&self, pattern: &PathPattern) -> bool {
        let result = pattern.matches(self.path.as_str());
        tracing::debug!(
            pattern = %pattern,
            path = %self.path,
            matched = result,
            "tested addition against pattern"
        );
        result
    }
}
