//! `{name}` placeholder expansion for branch templates.

use crate::error::{Result, SweepError};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("Invalid placeholder regex"));

/// Replace `{repository}` in `template` with `remote`.
///
/// Any other placeholder is rejected so that typos such as `{repo}` do not
/// silently end up in a branch name or keep pattern.
pub fn expand_template(template: &str, remote: &str) -> Result<String> {
    if let Some(unknown) = PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .find(|name| name != "repository")
    {
        return Err(SweepError::UserError(format!(
            "unknown placeholder '{{{}}}' in '{}'. Only {{repository}} is supported.",
            unknown, template
        )));
    }

    Ok(PLACEHOLDER.replace_all(template, NoExpand(remote)).into_owned())
}
