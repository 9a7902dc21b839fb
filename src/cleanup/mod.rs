//! Cleanup of remote branches merged into a reference branch.
//!
//! A run goes through four steps:
//! 1. Sync remote-tracking refs with `git fetch --prune` (skipped in dry-run)
//! 2. List remote branches merged into the reference branch
//! 3. Classify each one as skipped, kept (by a keep pattern) or eligible
//! 4. Delete eligible branches on the remote (skipped in dry-run)
//!
//! # Failure policy
//!
//! A failure in steps 1 or 2 aborts the run before anything is deleted.
//! A failure to delete one branch is reported and the run goes on.

mod execution;
mod planning;
mod sink;
mod types;


pub use planning::{build_plan, classify, parse_candidate};
pub use sink::{CleanupSink, TracingSink};
pub use types::{
    Candidate, Classification, CleanupReport, CleanupRequest, FailedDeletion, KeptBranch,
    SkipReason,
};

use crate::error::Result;
use crate::exec::{CommandRunner, Executor};
use crate::git;
use crate::patterns::PatternSet;
use execution::apply_plan;
use tracing::{debug, warn};

/// Run a cleanup of `request.remote`.
///
/// Keep patterns are compiled before any git command runs, so an invalid
/// pattern never leaves the remote half-processed.
///
/// # Returns
///
/// * `Ok(CleanupReport)` - The run completed; individual deletions may have failed
/// * `Err(SweepError::UserError)` - A keep pattern is invalid
/// * `Err(SweepError::ProcessError)` - Sync or listing failed; nothing was deleted
pub fn clean_remote<R: CommandRunner>(
    exec: &Executor<R>,
    sink: &mut dyn CleanupSink,
    request: &CleanupRequest,
) -> Result<CleanupReport> {
    debug!("compile keep patterns");
    let keep = PatternSet::compile(&request.keep)?;
    if keep.is_empty() {
        warn!("no keep patterns: every merged branch of {} is eligible", request.remote);
    } else {
        debug!("keep patterns: {}", keep.patterns().join(", "));
    }

    if !request.dry_run {
        debug!("update local references");
        git::fetch_prune(exec, &request.remote)?;
    }

    debug!(
        "clear references of {} merged into {}",
        request.remote, request.reference
    );
    let merged = git::merged_remote_branches(exec, &request.reference)?;
    let plan = build_plan(&merged, &request.remote, &keep);

    Ok(apply_plan(exec, sink, request, plan))
}
