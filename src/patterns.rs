//! Shell-glob pattern sets.
//!
//! Patterns use fnmatch-style semantics: `*` matches any run of characters
//! (including `/`), `?` a single character, and `[...]` / `[!...]` a
//! character class. Matching is case-sensitive and anchored to the whole
//! candidate string.
//!
//! Braces are not literal: `{a,b}` is an alternation. Callers that take
//! patterns verbatim from users must reject `{` and `}` themselves; keep
//! patterns never reach here with braces since `{...}` placeholders are
//! expanded or rejected first.

use crate::error::{Result, SweepError};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// A compiled, deduplicated set of glob patterns.
///
/// Declaration order is preserved so that the pattern reported for a match
/// is always the earliest declared one.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    /// Compile patterns, dropping exact duplicates.
    ///
    /// # Returns
    ///
    /// * `Ok(PatternSet)` - All patterns compiled
    /// * `Err(SweepError::UserError)` - A pattern is empty or not a valid glob
    pub fn compile<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept: Vec<String> = Vec::new();
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(SweepError::UserError(
                    "glob pattern must not be empty".to_string(),
                ));
            }
            if kept.iter().any(|p| p == pattern) {
                continue;
            }

            let glob = GlobBuilder::new(pattern)
                .literal_separator(false)
                .build()
                .map_err(|e| {
                    SweepError::UserError(format!("invalid glob pattern '{}': {}", pattern, e))
                })?;
            builder.add(glob);
            kept.push(pattern.to_string());
        }

        let set = builder
            .build()
            .map_err(|e| SweepError::UserError(format!("failed to compile patterns: {}", e)))?;

        Ok(Self {
            patterns: kept,
            set,
        })
    }

    /// The distinct patterns, in declaration order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if any pattern matches `candidate`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.set.is_match(candidate)
    }

    /// Earliest declared pattern matching any of `candidates`.
    pub fn first_match(&self, candidates: &[&str]) -> Option<&str> {
        candidates
            .iter()
            .flat_map(|candidate| self.set.matches(candidate))
            .min()
            .map(|index| self.patterns[index].as_str())
    }
}
