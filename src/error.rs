//! Error types for git-sweep.
//!
//! Uses thiserror for derive macros and keeps messages user-actionable.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for git-sweep operations.
#[derive(Error, Debug)]
pub enum SweepError {
    /// User provided invalid arguments, patterns or templates.
    #[error("{0}")]
    UserError(String),

    /// Configuration file could not be read, parsed or validated.
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// An external command failed.
    #[error("{command} failed: {detail}")]
    ProcessError {
        /// The rendered invocation, e.g. `git fetch --prune --quiet origin`.
        command: String,
        /// Exit status and captured error text.
        detail: String,
    },

    /// The linter reported problems.
    #[error("lint failed: {0}")]
    LintFailure(String),
}

impl SweepError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::UserError(_) => exit_codes::USER_ERROR,
            SweepError::ConfigError(_) => exit_codes::USER_ERROR,
            SweepError::ProcessError { .. } => exit_codes::PROCESS_FAILURE,
            SweepError::LintFailure(_) => exit_codes::LINT_FAILURE,
        }
    }
}

/// Result type alias for git-sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
