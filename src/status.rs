//! Ahead/behind status of branches.
//!
//! For every branch under a ref namespace (`refs/heads`,
//! `refs/remotes/<remote>`) this computes how many commits it has that a
//! comparison ref lacks (ahead) and the reverse (behind).

use crate::error::Result;
use crate::exec::{CommandRunner, Executor};
use crate::git;
use chrono::{DateTime, Local};
use tracing::warn;

/// Comparison ref used when a branch has neither upstream nor default.
pub const FALLBACK_COMPARE: &str = "HEAD";

/// Divergence of one branch from its comparison ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDiff {
    pub local: String,
    pub compare: String,
    /// Commits on `local` missing from `compare`.
    pub ahead: u32,
    /// Commits on `compare` missing from `local`.
    pub behind: u32,
    /// Committer date of the tip of `local`.
    pub date: DateTime<Local>,
}

/// Which branches a status report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Branches with commits to merge.
    #[default]
    Ahead,
    /// Branches missing commits of their comparison ref.
    Behind,
    /// Branches pointing at the same history as their comparison ref.
    Identical,
    All,
}

impl StatusFilter {
    pub fn accepts(self, diff: &BranchDiff) -> bool {
        match self {
            StatusFilter::Ahead => diff.ahead > 0,
            StatusFilter::Behind => diff.behind > 0,
            StatusFilter::Identical => diff.ahead == 0 && diff.behind == 0,
            StatusFilter::All => true,
        }
    }
}

/// Compute the divergence between `local` and `compare` (or `HEAD`).
pub fn commits_diff<R: CommandRunner>(
    exec: &Executor<R>,
    local: &str,
    compare: Option<&str>,
) -> Result<BranchDiff> {
    let compare = compare.unwrap_or(FALLBACK_COMPARE);

    let ahead = git::rev_list_count(exec, &format!("{}..{}", compare, local))?;
    let behind = git::rev_list_count(exec, &format!("{}..{}", local, compare))?;
    let timestamp = git::commit_timestamp(exec, local)?;

    Ok(BranchDiff {
        local: local.to_string(),
        compare: compare.to_string(),
        ahead,
        behind,
        date: local_time(timestamp),
    })
}

/// Divergence of every branch under `source`.
///
/// Each branch is compared with its upstream, or with `default_compare`
/// when it has none. Branches whose figures cannot be computed are skipped
/// with a warning; a failure to list `source` is returned.
pub fn branch_diffs<R: CommandRunner>(
    exec: &Executor<R>,
    source: &str,
    default_compare: Option<&str>,
) -> Result<Vec<BranchDiff>> {
    let refs = git::list_refs(exec, source)?;
    let mut diffs = Vec::with_capacity(refs.len());

    for entry in refs.iter().filter(|entry| !entry.is_symbolic_head()) {
        let compare = entry.upstream.as_deref().or(default_compare);
        match commits_diff(exec, &entry.short_name, compare) {
            Ok(diff) => diffs.push(diff),
            Err(e) => warn!(
                "unable to compare {} with {}: {}",
                entry.short_name,
                compare.unwrap_or(FALLBACK_COMPARE),
                e
            ),
        }
    }

    Ok(diffs)
}

/// Sort most recently committed first.
pub fn sort_newest_first(diffs: &mut [BranchDiff]) {
    diffs.sort_by(|a, b| b.date.cmp(&a.date));
}

/// One report row: name, `behind--ahead`, date.
pub fn format_row(diff: &BranchDiff) -> String {
    format!(
        "  {:45}  {:>3}--{:<3}  {}",
        diff.local,
        diff.behind,
        diff.ahead,
        diff.date.format("%Y-%m-%d %H:%M:%S")
    )
}

fn local_time(timestamp: i64) -> DateTime<Local> {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(&Local)
}
