//! Implementation of the `git-sweep remote` command.

use crate::cleanup::{CleanupReport, CleanupRequest, TracingSink, clean_remote};
use crate::cli::RemoteArgs;
use crate::config::{Config, expand_template};
use crate::error::{Result, SweepError};
use crate::exec::{CommandRunner, Executor};
use std::io::Write;
use tracing::info;

/// Execute the `git-sweep remote` command.
///
/// With `--json` the report is the only thing written to `out`; decisions
/// and the summary go through `tracing`.
pub fn cmd_remote<R: CommandRunner>(
    exec: &Executor<R>,
    config: &Config,
    args: &RemoteArgs,
    dry_run: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let request = build_request(config, args, dry_run)?;
    let report = clean_remote(exec, &mut TracingSink, &request)?;

    info!("{}", summary(&report));

    if args.json {
        write_json(out, &report)?;
    }

    Ok(())
}

fn write_json(out: &mut dyn Write, report: &CleanupReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| SweepError::UserError(format!("failed to serialize report: {}", e)))?;
    writeln!(out, "{}", json)
        .map_err(|e| SweepError::UserError(format!("failed to write report: {}", e)))
}

/// Resolve the remote, reference branch and keep list of a run.
///
/// CLI keep patterns are added after the configured ones, and the resolved
/// reference branch is always kept.
pub(crate) fn build_request(
    config: &Config,
    args: &RemoteArgs,
    dry_run: bool,
) -> Result<CleanupRequest> {
    let remote = args
        .repository
        .clone()
        .unwrap_or_else(|| config.remote.clone());
    if remote.trim().is_empty() {
        return Err(SweepError::UserError(
            "repository name must not be empty".to_string(),
        ));
    }

    let template = args.merged_into.as_deref().unwrap_or(&config.merged_into);
    let reference = expand_template(template, &remote)?;

    let mut keep = config
        .keep
        .iter()
        .chain(args.keep.iter())
        .map(|pattern| expand_template(pattern, &remote))
        .collect::<Result<Vec<_>>>()?;
    keep.push(reference.clone());

    Ok(CleanupRequest {
        remote,
        reference,
        keep,
        dry_run,
    })
}

fn summary(report: &CleanupReport) -> String {
    let verb = if report.dry_run {
        "would delete"
    } else {
        "deleted"
    };
    let mut line = format!(
        "{}: {} {} branch(es), kept {}",
        report.remote,
        verb,
        report.deleted.len(),
        report.kept.len()
    );
    if !report.failed.is_empty() {
        line.push_str(&format!(", {} failed", report.failed.len()));
    }
    line
}
