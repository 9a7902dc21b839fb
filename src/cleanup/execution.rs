//! Applying a cleanup plan.

use super::sink::CleanupSink;
use super::types::{CleanupReport, CleanupRequest, Classification, FailedDeletion, KeptBranch};
use crate::exec::{CommandRunner, Executor};
use crate::git;

/// Report every decision and delete eligible branches one at a time.
///
/// A failed deletion is recorded and the remaining entries are still
/// processed.
pub fn apply_plan<R: CommandRunner>(
    exec: &Executor<R>,
    sink: &mut dyn CleanupSink,
    request: &CleanupRequest,
    plan: Vec<Classification>,
) -> CleanupReport {
    let mut report = CleanupReport::for_request(request);

    for entry in plan {
        match entry {
            Classification::Malformed(line) => {
                sink.malformed(&line);
                report.malformed.push(line);
            }
            Classification::Skipped { reference, reason } => {
                sink.skipped(&reference, reason);
                report.skipped.push(reference);
            }
            Classification::Kept { candidate, pattern } => {
                sink.kept(&candidate.reference, &pattern);
                report.kept.push(KeptBranch {
                    reference: candidate.reference,
                    pattern,
                });
            }
            Classification::Eligible(candidate) => {
                sink.deleting(&candidate.reference, request.dry_run);
                if request.dry_run {
                    report.deleted.push(candidate.reference);
                    continue;
                }

                match git::delete_remote_branch(exec, &candidate.remote, &candidate.branch) {
                    Ok(()) => report.deleted.push(candidate.reference),
                    Err(e) => {
                        sink.delete_failed(&candidate.reference, &e);
                        report.failed.push(FailedDeletion {
                            reference: candidate.reference,
                            error: e.to_string(),
                        });
                    }
                }
            }
        }
    }

    report
}
