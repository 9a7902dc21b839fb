//! Destinations for cleanup decisions.

use super::types::SkipReason;
use crate::error::SweepError;
use tracing::{debug, error, info, warn};

/// Receives every decision of a cleanup run, in listing order.
pub trait CleanupSink {
    fn skipped(&mut self, reference: &str, reason: SkipReason);
    fn malformed(&mut self, line: &str);
    fn kept(&mut self, reference: &str, pattern: &str);
    fn deleting(&mut self, reference: &str, dry_run: bool);
    fn delete_failed(&mut self, reference: &str, error: &SweepError);
}

/// Emits decisions as `tracing` events.
///
/// Levels: debug for skips, info for kept branches, warn for deletions and
/// malformed lines, error for failed deletions.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl CleanupSink for TracingSink {
    fn skipped(&mut self, reference: &str, reason: SkipReason) {
        match reason {
            SkipReason::OtherRemote => debug!("skip {}", reference),
            SkipReason::SymbolicRef => debug!("skip symbolic ref {}", reference),
        }
    }

    fn malformed(&mut self, line: &str) {
        warn!("ignore malformed reference {:?}", line);
    }

    fn kept(&mut self, reference: &str, pattern: &str) {
        debug!("{} matched by {:?}", reference, pattern);
        info!("keep {}", reference);
    }

    fn deleting(&mut self, reference: &str, dry_run: bool) {
        if dry_run {
            warn!("delete {} (dry run)", reference);
        } else {
            warn!("delete {}", reference);
        }
    }

    fn delete_failed(&mut self, reference: &str, error: &SweepError) {
        error!("{} can't be deleted: {}", reference, error);
    }
}
