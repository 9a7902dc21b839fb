//! Config loading, discovery and validation.

use super::model::Config;
use crate::error::{Result, SweepError};
use crate::patterns::PatternSet;
use std::path::Path;

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".git-sweep.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SweepError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SweepError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.git-sweep.yaml` from `repo_root` if present, else the defaults.
    pub fn discover<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file means "all defaults".
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| SweepError::ConfigError(format!("failed to parse YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `remote` and `merged_into` must be non-empty
    /// - `keep` entries must be valid glob patterns
    /// - `lint.command` must contain at least one word
    /// - `lint.extensions` entries must be non-empty and have no leading dots
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(SweepError::ConfigError(
                "remote must not be empty".to_string(),
            ));
        }

        if self.merged_into.trim().is_empty() {
            return Err(SweepError::ConfigError(
                "merged_into must not be empty".to_string(),
            ));
        }

        PatternSet::compile(&self.keep)
            .map_err(|e| SweepError::ConfigError(format!("keep: {}", e)))?;

        self.lint_command()?;

        for ext in &self.lint.extensions {
            if ext.is_empty() {
                return Err(SweepError::ConfigError(
                    "lint.extensions entries must be non-empty".to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(SweepError::ConfigError(format!(
                    "lint.extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }

    /// The lint command split into words.
    pub fn lint_command(&self) -> Result<Vec<String>> {
        let words = shell_words::split(&self.lint.command).map_err(|e| {
            SweepError::ConfigError(format!(
                "failed to parse lint.command '{}': {}. Check for unmatched quotes.",
                self.lint.command, e
            ))
        })?;

        if words.is_empty() {
            return Err(SweepError::ConfigError(
                "lint.command must not be empty".to_string(),
            ));
        }

        Ok(words)
    }
}
