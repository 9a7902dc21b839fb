//! Exit code constants for the git-sweep CLI.
//!
//! - 0: Success (including runs where individual deletions failed)
//! - 1: User error (bad args, bad config, bad pattern)
//! - 2: Lint failure (the linter reported problems)
//! - 3: Process failure (a git call the run depends on failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration or pattern.
pub const USER_ERROR: i32 = 1;

/// The linter reported problems in at least one file.
pub const LINT_FAILURE: i32 = 2;

/// An external command required by the run failed (fetch, listing, ...).
pub const PROCESS_FAILURE: i32 = 3;
