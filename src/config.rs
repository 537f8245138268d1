//! Watchlist configuration.
//!
//! The watchlist lives in `.pushgate.yaml` at the repository root. It
//! supports forward-compatible YAML parsing (unknown fields are ignored)
//! and compiles every pattern at load, so a malformed pattern fails the
//! run before any file is tested. An absent or blank file is an empty
//! watchlist.

use crate::addition::Addition;
use crate::error::{PushgateError, Result};
use crate::pattern::PathPattern;
use crate::repo::GitRepo;
use serde::Deserialize;

/// File name of the watchlist, relative to the repository root.
pub const WATCHLIST_FILE: &str = ".pushgate.yaml";

/// Raw shape of `.pushgate.yaml` before pattern compilation.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WatchlistFile {
    /// Pattern strings, in reporting priority order.
    patterns: Vec<String>,
    /// Optional sub-path restricting the diff to a subtree.
    scope: Option<String>,
}

/// Compiled watchlist: ordered patterns plus an optional diff scope.
#[derive(Debug, Clone, Default)]
pub struct Watchlist {
    patterns: Vec<PathPattern>,
    scope: Option<String>,
}

impl Watchlist {
    /// Load the watchlist from a repository root.
    ///
    /// An absent file yields an empty watchlist; a present but invalid
    /// one fails the load.
    ///
    /// # Arguments
    ///
    /// * `repo` - The repository whose root holds `.pushgate.yaml`
    ///
    /// # Returns
    ///
    /// * `Ok(Watchlist)` - Compiled watchlist, possibly empty
    /// * `Err(PushgateError::WatchlistError)` - Unparseable YAML or an
    ///   invalid pattern
    pub fn load(repo: &GitRepo) -> Result<Self> {
        let bytes = repo.read_repo_file_or_nothing(WATCHLIST_FILE)?;
        if bytes.is_empty() {
            tracing::debug!(file = WATCHLIST_FILE, "no watchlist file, nothing watched");
            return Ok(Self::default());
        }

        let content = String::from_utf8(bytes).map_err(|_| {
            PushgateError::WatchlistError(format!("{} is not valid UTF-8", WATCHLIST_FILE))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a watchlist from a YAML string.
    ///
    /// Unknown fields are silently ignored for forward compatibility. A
    /// blank document yields an empty watchlist.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let file: WatchlistFile = serde_yaml::from_str(yaml).map_err(|e| {
            PushgateError::WatchlistError(format!("failed to parse watchlist YAML: {}", e))
        })?;

        let mut patterns = Vec::with_capacity(file.patterns.len());
        for raw in &file.patterns {
            let pattern = PathPattern::parse(raw)
                .map_err(|e| PushgateError::WatchlistError(format!("invalid watch pattern: {}", e)))?;
            patterns.push(pattern);
        }

        Ok(Self {
            patterns,
            scope: file.scope.filter(|s| !s.is_empty()),
        })
    }

    /// Compiled patterns in listed order.
    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }

    /// Configured diff scope, if any.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// True when nothing is watched.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern matching the addition, in listed order.
    pub fn first_match(&self, addition: &Addition) -> Option<&PathPattern> {
        self.patterns.iter().find(|p| addition.matches(p))
    }
}
