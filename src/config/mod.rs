//! Configuration model for git-sweep.
//!
//! This module defines the Config struct that represents `.git-sweep.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;
mod template;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub use template::expand_template;
pub use types::LintConfig;
