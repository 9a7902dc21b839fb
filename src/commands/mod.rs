//! Command implementations for git-sweep.
//!
//! This module provides the dispatcher that locates the repository, loads
//! the configuration and routes CLI commands to their implementations.

mod branch_status;
mod lint;
mod remote;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::exec::{Executor, FailureMode, SystemRunner};
use crate::git;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// `cwd` is the directory the tool was started from; every git command runs
/// at the root of the repository containing it.
pub fn dispatch(cli: Cli, cwd: &Path) -> Result<()> {
    let probe = Executor::new(SystemRunner::new(cwd), FailureMode::default());
    let repo_root = git::get_repo_root(&probe)?;
    let config = load_config(cli.config.as_deref(), cwd, &repo_root)?;

    let exec = Executor::new(SystemRunner::new(&repo_root), config.failure_detection);
    debug!(
        "repository {}, failure detection {:?}",
        repo_root.display(),
        exec.mode()
    );

    match cli.command {
        Command::Remote(args) => {
            remote::cmd_remote(&exec, &config, &args, cli.dry_run, &mut io::stdout().lock())
        }
        Command::BranchStatus(args) => branch_status::cmd_branch_status(&exec, &config, &args),
        Command::Lint(args) => lint::cmd_lint(&exec, &config, &args),
    }
}

/// Load `--config` when given (relative to `cwd`), else discover the
/// repository's config file.
fn load_config(explicit: Option<&Path>, cwd: &Path, repo_root: &Path) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path: PathBuf = cwd.join(path);
            debug!("load config from {}", path.display());
            Config::load(path)
        }
        None => Config::discover(repo_root),
    }
}
