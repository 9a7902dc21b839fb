//! Config struct definition and default implementation.

use super::types::*;
use crate::exec::FailureMode;
use serde::{Deserialize, Serialize};

/// Configuration for git-sweep.
///
/// This struct represents the contents of `.git-sweep.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Cleanup settings
    // =========================================================================
    /// Remote cleaned when none is given on the command line.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Reference branch template; `{repository}` becomes the remote name.
    #[serde(default = "default_merged_into")]
    pub merged_into: String,

    /// Keep patterns; `{repository}` becomes the remote name.
    #[serde(default = "default_keep")]
    pub keep: Vec<String>,

    // =========================================================================
    // Process settings
    // =========================================================================
    /// How a git command is judged to have failed.
    #[serde(default)]
    pub failure_detection: FailureMode,

    // =========================================================================
    // Lint settings
    // =========================================================================
    #[serde(default)]
    pub lint: LintConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            merged_into: default_merged_into(),
            keep: default_keep(),
            failure_detection: FailureMode::default(),
            lint: LintConfig::default(),
        }
    }
}
