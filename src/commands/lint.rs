//! Implementation of the `git-sweep lint` command.

use crate::cli::LintArgs;
use crate::config::Config;
use crate::error::{Result, SweepError};
use crate::exec::{CommandRunner, Executor};
use crate::lint::{LintSelector, changed_files, lint_file};
use owo_colors::OwoColorize;
use tracing::info;

/// Execute the `git-sweep lint` command.
///
/// Every selected file is linted even after a failure; the command fails
/// once all files have been checked.
pub fn cmd_lint<R: CommandRunner>(
    exec: &Executor<R>,
    config: &Config,
    args: &LintArgs,
) -> Result<()> {
    let command = config.lint_command()?;
    let selector = LintSelector::new(&config.lint.extensions, &args.patterns)?;

    let files: Vec<String> = changed_files(exec)?
        .into_iter()
        .map(|file| file.path)
        .filter(|path| selector.allows(path))
        .collect();

    if files.is_empty() {
        info!("no changed files to lint");
        return Ok(());
    }

    let mut failed = Vec::new();
    for path in &files {
        let outcome = lint_file(exec, &command, path)?;
        println!("{}", outcome.path.green());
        if !outcome.output.is_empty() {
            println!("{}", outcome.output);
        }
        if !outcome.passed {
            failed.push(outcome.path);
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(SweepError::LintFailure(format!(
            "{} of {} file(s) reported issues: {}",
            failed.len(),
            files.len(),
            failed.join(", ")
        )))
    }
}
