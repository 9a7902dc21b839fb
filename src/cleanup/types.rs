//! Data types for remote branch cleanup.

use serde::Serialize;

/// Parameters of one cleanup run.
#[derive(Debug, Clone)]
pub struct CleanupRequest {
    /// Remote to clean, e.g. `origin`.
    pub remote: String,
    /// Fully-qualified reference branch, e.g. `origin/master`.
    pub reference: String,
    /// Keep patterns. The caller includes the reference branch itself.
    pub keep: Vec<String>,
    /// Decide and report, but never fetch or delete.
    pub dry_run: bool,
}

/// A merged remote-tracking branch split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The listing line as printed, e.g. `origin/feature-x`.
    pub reference: String,
    /// Part before the first `/`.
    pub remote: String,
    /// Part after the first `/`.
    pub branch: String,
}

/// Why a listing line was left alone without classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The branch belongs to a different remote.
    OtherRemote,
    /// A symbolic alias such as `origin/HEAD -> origin/master`.
    SymbolicRef,
}

/// The decision taken for one listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Line without a `remote/branch` shape.
    Malformed(String),
    Skipped {
        reference: String,
        reason: SkipReason,
    },
    Kept {
        candidate: Candidate,
        pattern: String,
    },
    /// No keep pattern matched; the branch should be deleted.
    Eligible(Candidate),
}

/// A branch retained by a keep pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeptBranch {
    pub reference: String,
    pub pattern: String,
}

/// A deletion that the remote refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDeletion {
    pub reference: String,
    pub error: String,
}

/// Outcome of a cleanup run.
///
/// In dry-run mode `deleted` lists the branches that would have been deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub remote: String,
    pub reference: String,
    pub dry_run: bool,
    pub kept: Vec<KeptBranch>,
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDeletion>,
    pub skipped: Vec<String>,
    pub malformed: Vec<String>,
}

impl CleanupReport {
    pub(crate) fn for_request(request: &CleanupRequest) -> Self {
        Self {
            remote: request.remote.clone(),
            reference: request.reference.clone(),
            dry_run: request.dry_run,
            ..Self::default()
        }
    }
}
