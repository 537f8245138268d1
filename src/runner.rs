//! Gate runner: hook input to run report.
//!
//! Selects the commit range from the hook input, enumerates the outgoing
//! additions, and tests each one against the watchlist. The runner never
//! terminates the process; it returns a report (or an error) and leaves
//! exit codes to the binary.

use crate::addition::Addition;
use crate::config::Watchlist;
use crate::error::Result;
use crate::hook::HookInput;
use crate::repo::GitRepo;

/// One outgoing file that matched the watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedFile {
    /// Repo-relative path of the file.
    pub path: String,
    /// Raw text of the watchlist pattern that matched it.
    pub pattern: String,
}

/// Outcome of one gate run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Number of outgoing additions tested.
    pub scanned: usize,
    /// Files that matched the watchlist (empty on a clean run).
    pub flagged: Vec<FlaggedFile>,
}

impl RunReport {
    /// True when nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    /// Format the report as a user-facing summary.
    pub fn format_summary(&self) -> String {
        if self.is_clean() {
            return format!(
                "pushgate: {} outgoing file(s) checked, nothing flagged",
                self.scanned
            );
        }

        let mut msg = format!(
            "pushgate: {} of {} outgoing file(s) matched the watchlist:\n",
            self.flagged.len(),
            self.scanned
        );

        for file in &self.flagged {
            msg.push_str(&format!("  x {}  (matches: {})\n", file.path, file.pattern));
        }

        msg.push_str("\nFix: remove these files from the push or update .pushgate.yaml.");

        msg
    }
}

/// Runs the pre-push gate for one hook invocation.
pub struct Runner {
    repo: GitRepo,
    input: HookInput,
}

impl Runner {
    /// Create a runner for a repository and one parsed hook line.
    pub fn new(repo: GitRepo, input: HookInput) -> Self {
        Self { repo, input }
    }

    /// Run the gate.
    ///
    /// Loads the watchlist, enumerates the outgoing additions for the
    /// range the hook input implies, and flags every addition whose path
    /// matches a watchlist pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(RunReport)` - Scan results; flagged files carry the pattern
    ///   text that matched
    /// * `Err(PushgateError)` - Watchlist load or git failure
    pub fn run(&self) -> Result<RunReport> {
        let watchlist = Watchlist::load(&self.repo)?;
        let additions = self.outgoing_additions(watchlist.scope())?;

        let mut flagged = Vec::new();
        for addition in &additions {
            if let Some(pattern) = watchlist.first_match(addition) {
                tracing::info!(
                    path = %addition.path(),
                    pattern = %pattern,
                    "outgoing file matches watchlist"
                );
                flagged.push(FlaggedFile {
                    path: addition.path().as_str().to_string(),
                    pattern: pattern.as_str().to_string(),
                });
            }
        }

        Ok(RunReport {
            scanned: additions.len(),
            flagged,
        })
    }

    /// Enumerate the additions the hook input makes outgoing.
    fn outgoing_additions(&self, scope: Option<&str>) -> Result<Vec<Addition>> {
        if self.input.is_sentinel() {
            tracing::debug!("no hook line, comparing default branches");
            return self.repo.all_additions(scope);
        }

        if self.input.deletes_remote_ref() {
            tracing::debug!(
                local_ref = %self.input.local_ref,
                "push deletes remote ref, nothing outgoing"
            );
            return Ok(Vec::new());
        }

        if self.input.creates_remote_ref() {
            tracing::debug!(
                local_ref = %self.input.local_ref,
                "push creates new remote ref, comparing default branches"
            );
            return self.repo.all_additions(scope);
        }

        self.repo
            .additions(&self.input.remote_sha, &self.input.local_sha, scope)
    }
}
