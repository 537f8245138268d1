//! Repository accessor for outgoing changes.
//!
//! Binds to a repository root and answers which files a commit range
//! added or modified and what they now contain. Deleted files are never
//! listed. All git invocations run with the root as working directory;
//! file content is read straight from the working tree.

use crate::addition::Addition;
use crate::error::{PushgateError, Result};
use crate::git::run_git;
use std::fs;
use std::path::{Path, PathBuf};

// Range compared when the hook gives no usable baseline.
const DEFAULT_OLD_REF: &str = "origin/master";
const DEFAULT_NEW_REF: &str = "master";

/// A git repository bound to an absolute root directory.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Bind to the repository rooted at `path`.
    ///
    /// Relative paths are resolved against the current working directory.
    /// The resolved path must be an existing directory; whether it is
    /// actually a git repository is not checked here, the first git
    /// invocation surfaces that.
    ///
    /// # Arguments
    ///
    /// * `path` - Repository root, absolute or relative
    ///
    /// # Returns
    ///
    /// * `Ok(GitRepo)` - Handle bound to the absolute root
    /// * `Err(PushgateError::UserError)` - If the path cannot be resolved
    ///   or is not a directory
    pub fn located_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let root = path.canonicalize().map_err(|e| {
            PushgateError::UserError(format!(
                "invalid repository root '{}': {}",
                path.display(),
                e
            ))
        })?;

        if !root.is_dir() {
            return Err(PushgateError::UserError(format!(
                "repository root '{}' is not a directory",
                root.display()
            )));
        }

        Ok(Self { root })
    }

    /// Absolute repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Outgoing additions for the default `origin/master..master` compare.
    ///
    /// Used when the hook input carries no usable commit range.
    pub fn all_additions(&self, scope: Option<&str>) -> Result<Vec<Addition>> {
        self.additions(DEFAULT_OLD_REF, DEFAULT_NEW_REF, scope)
    }

    /// Outgoing additions and modifications in `old_ref..new_ref`.
    ///
    /// Lists the added, copied, and modified files in the range, reads
    /// each one from the working tree, and returns one [`Addition`] per
    /// listed path in git's output order. Deleted files are excluded. A
    /// file the diff lists but the working tree cannot provide is kept
    /// with empty content, so the result length always equals the diff
    /// line count.
    ///
    /// # Arguments
    ///
    /// * `old_ref` - Baseline commit or ref
    /// * `new_ref` - Outgoing commit or ref
    /// * `scope` - Optional sub-path restricting the diff to a subtree
    pub fn additions(
        &self,
        old_ref: &str,
        new_ref: &str,
        scope: Option<&str>,
    ) -> Result<Vec<Addition>> {
        let files = self.outgoing_non_deleted_files(old_ref, new_ref, scope)?;

        let mut result = Vec::with_capacity(files.len());
        for file in files {
            let data = match self.read_repo_file(&file) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(
                        path = %file,
                        error = %e,
                        "listed file could not be read, keeping empty content"
                    );
                    Vec::new()
                }
            };
            result.push(Addition::new(file, data));
        }

        tracing::info!(
            old_ref,
            new_ref,
            additions = result.len(),
            "collected outgoing additions"
        );

        Ok(result)
    }

    /// Read a file relative to the repository root.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The file's content
    /// * `Err(PushgateError::ReadError)` - If the file is missing or
    ///   unreadable
    pub fn read_repo_file(&self, relative_path: &str) -> Result<Vec<u8>> {
        let full_path = self.root.join(relative_path);
        fs::read(&full_path)
            .map_err(|e| PushgateError::ReadError(format!("{}: {}", full_path.display(), e)))
    }

    /// Read a file relative to the root, or empty bytes if it is absent.
    ///
    /// A file that exists but cannot be read still fails.
    pub fn read_repo_file_or_nothing(&self, relative_path: &str) -> Result<Vec<u8>> {
        if self.root.join(relative_path).exists() {
            self.read_repo_file(relative_path)
        } else {
            Ok(Vec::new())
        }
    }

    /// List added, copied, and modified paths in the range, optionally
    /// restricted to a subtree.
    fn outgoing_non_deleted_files(
        &self,
        old_ref: &str,
        new_ref: &str,
        scope: Option<&str>,
    ) -> Result<Vec<String>> {
        let range = format!("{}..{}", old_ref, new_ref);
        let mut args = vec!["diff", range.as_str(), "--name-only", "--diff-filter=ACM"];
        if let Some(scope) = scope {
            if !scope.is_empty() {
                args.push(scope);
            }
        }

        let output = run_git(&self.root, &args)?;

        if output.is_empty() {
            return Ok(Vec::new());
        }

        // Normalize paths to forward slashes for pattern matching
        let files: Vec<String> = output
            .lines()
            .into_iter()
            .filter(|line| !line.is_empty())
            .map(normalize_path)
            .collect();

        Ok(files)
    }
}

/// Normalize a file path to use forward slashes.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
