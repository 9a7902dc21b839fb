//! Classification of merged remote branches.

use super::types::{Candidate, Classification, SkipReason};
use crate::patterns::PatternSet;

/// Split a listing line on its first `/` into remote and branch.
///
/// Returns `None` when either side would be empty.
pub fn parse_candidate(line: &str) -> Option<Candidate> {
    let (remote, branch) = line.split_once('/')?;
    if remote.is_empty() || branch.is_empty() {
        return None;
    }
    Some(Candidate {
        reference: line.to_string(),
        remote: remote.to_string(),
        branch: branch.to_string(),
    })
}

/// Classify one trimmed listing line against the target remote.
///
/// Lines of other remotes are skipped before any pattern is consulted.
pub fn classify(line: &str, remote: &str, keep: &PatternSet) -> Classification {
    if line.contains(" -> ") {
        return Classification::Skipped {
            reference: line.to_string(),
            reason: SkipReason::SymbolicRef,
        };
    }

    let Some(candidate) = parse_candidate(line) else {
        return Classification::Malformed(line.to_string());
    };

    if candidate.remote != remote {
        return Classification::Skipped {
            reference: candidate.reference,
            reason: SkipReason::OtherRemote,
        };
    }

    let matched = keep
        .first_match(&[candidate.reference.as_str(), candidate.branch.as_str()])
        .map(str::to_string);

    match matched {
        Some(pattern) => Classification::Kept { candidate, pattern },
        None => Classification::Eligible(candidate),
    }
}

/// Classify every listing line, preserving listing order.
pub fn build_plan(lines: &[String], remote: &str, keep: &PatternSet) -> Vec<Classification> {
    lines
        .iter()
        .map(|line| classify(line, remote, keep))
        .collect()
}
