//! Configuration types and defaults for git-sweep.

use serde::{Deserialize, Serialize};

/// Branches kept by default on every remote.
pub const DEFAULT_KEEP: [&str; 5] = ["master", "prod", "preprod", "stage", "dev"];

/// Settings for the `lint` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Linter command line (shell-words parsed; no shell). The file name is
    /// appended as the last argument.
    pub command: String,

    /// File extensions to lint (no leading dots).
    pub extensions: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            command: default_lint_command(),
            extensions: default_lint_extensions(),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_remote() -> String {
    "origin".to_string()
}
pub(crate) fn default_merged_into() -> String {
    "{repository}/master".to_string()
}
pub(crate) fn default_keep() -> Vec<String> {
    DEFAULT_KEEP.iter().map(|s| s.to_string()).collect()
}
pub(crate) fn default_lint_command() -> String {
    "flake8".to_string()
}
pub(crate) fn default_lint_extensions() -> Vec<String> {
    vec!["py".to_string()]
}
