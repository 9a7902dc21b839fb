//! Git operations used by git-sweep.
//!
//! Every git invocation the tool makes lives here, built on the
//! [`Executor`] so that failure detection and logging are uniform.

use crate::error::{Result, SweepError};
use crate::exec::{CommandRunner, Executor, render_command};
use std::path::PathBuf;

/// Run `git <args>` and return stdout.
pub fn run_git<R: CommandRunner>(exec: &Executor<R>, args: &[&str]) -> Result<String> {
    exec.execute("git", args)
}

/// Split output into trimmed, non-empty lines.
pub fn trimmed_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// A failure here is reported as a user error: it almost always means the
/// command was run outside a repository.
pub fn get_repo_root<R: CommandRunner>(exec: &Executor<R>) -> Result<PathBuf> {
    let stdout = run_git(exec, &["rev-parse", "--show-toplevel"]).map_err(|e| match e {
        SweepError::ProcessError { .. } => SweepError::UserError(
            "not inside a git repository. Run this command from within a git repository."
                .to_string(),
        ),
        other => other,
    })?;
    Ok(PathBuf::from(stdout.trim()))
}

/// Update remote-tracking references, pruning the ones gone from `remote`.
pub fn fetch_prune<R: CommandRunner>(exec: &Executor<R>, remote: &str) -> Result<()> {
    run_git(exec, &["fetch", "--prune", "--quiet", remote])?;
    Ok(())
}

/// List remote-tracking branches merged into `reference`.
///
/// Lines are returned trimmed, in the order git prints them.
pub fn merged_remote_branches<R: CommandRunner>(
    exec: &Executor<R>,
    reference: &str,
) -> Result<Vec<String>> {
    let stdout = run_git(exec, &["branch", "-r", "--merged", reference])?;
    Ok(trimmed_lines(&stdout))
}

/// Delete `branch` on `remote`.
pub fn delete_remote_branch<R: CommandRunner>(
    exec: &Executor<R>,
    remote: &str,
    branch: &str,
) -> Result<()> {
    run_git(exec, &["push", "--delete", "--quiet", remote, branch])?;
    Ok(())
}

/// Run `git remote update <remote>`.
pub fn remote_update<R: CommandRunner>(exec: &Executor<R>, remote: &str) -> Result<()> {
    run_git(exec, &["remote", "update", remote])?;
    Ok(())
}

/// A ref listed by `git for-each-ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefEntry {
    /// Full name, e.g. `refs/remotes/origin/feature`.
    pub full_name: String,
    /// Short name, e.g. `origin/feature`.
    pub short_name: String,
    /// Short name of the configured upstream, if any.
    pub upstream: Option<String>,
}

impl RefEntry {
    /// True for symbolic `<remote>/HEAD` entries.
    pub fn is_symbolic_head(&self) -> bool {
        self.full_name.ends_with("/HEAD")
    }
}

/// List refs under `source` (e.g. `refs/heads`) with their upstreams.
pub fn list_refs<R: CommandRunner>(exec: &Executor<R>, source: &str) -> Result<Vec<RefEntry>> {
    let stdout = run_git(
        exec,
        &[
            "for-each-ref",
            "--format=%(refname) %(refname:short) %(upstream:short)",
            source,
        ],
    )?;

    Ok(trimmed_lines(&stdout)
        .iter()
        .filter_map(|line| parse_ref_line(line))
        .collect())
}

fn parse_ref_line(line: &str) -> Option<RefEntry> {
    let mut parts = line.split_whitespace();
    let full_name = parts.next()?.to_string();
    let short_name = parts.next()?.to_string();
    let upstream = parts.next().map(str::to_string);
    Some(RefEntry {
        full_name,
        short_name,
        upstream,
    })
}

/// Count commits in `range` (`a..b`) with `git rev-list --count`.
pub fn rev_list_count<R: CommandRunner>(exec: &Executor<R>, range: &str) -> Result<u32> {
    let args = ["rev-list", "--count", range];
    let stdout = run_git(exec, &args)?;
    stdout
        .trim()
        .parse()
        .map_err(|_| unexpected_output(&args, &stdout))
}

/// Committer timestamp (seconds since the epoch) of the tip of `rev`.
pub fn commit_timestamp<R: CommandRunner>(exec: &Executor<R>, rev: &str) -> Result<i64> {
    let args = ["log", "-1", "--format=%ct", rev, "--"];
    let stdout = run_git(exec, &args)?;
    stdout
        .trim()
        .parse()
        .map_err(|_| unexpected_output(&args, &stdout))
}

/// Raw `git status --porcelain -z` records, NUL-separated in git's output.
///
/// Paths are never quoted in this format. A rename or copy is followed by
/// an extra record holding the original path.
pub fn status_porcelain<R: CommandRunner>(exec: &Executor<R>) -> Result<Vec<String>> {
    let stdout = run_git(exec, &["status", "--porcelain", "-z"])?;
    Ok(stdout
        .split('\0')
        .filter(|record| !record.is_empty())
        .map(str::to_string)
        .collect())
}

fn unexpected_output(args: &[&str], stdout: &str) -> SweepError {
    SweepError::ProcessError {
        command: render_command("git", args),
        detail: format!("unexpected output: {:?}", stdout.trim()),
    }
}
