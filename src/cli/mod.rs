//! CLI argument parsing for git-sweep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// git-sweep: prune remote branches already merged into a reference branch.
///
/// Also reports branch divergence and lints changed files.
#[derive(Parser, Debug)]
#[command(name = "git-sweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Decide and report without fetching or deleting anything.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Show debug output (executed commands, skipped references).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: .git-sweep.yaml at the repository root).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for git-sweep.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete remote branches merged into a reference branch.
    ///
    /// Fetches with --prune, lists remote branches merged into the
    /// reference branch, keeps the ones matching a keep pattern and deletes
    /// the rest on the remote.
    Remote(RemoteArgs),

    /// Show how far branches are ahead of or behind their upstream.
    BranchStatus(BranchStatusArgs),

    /// Run the configured linter on changed files.
    Lint(LintArgs),
}

/// Arguments for the `remote` command.
#[derive(Args, Debug)]
pub struct RemoteArgs {
    /// Remote to clean (default: configured remote, "origin").
    pub repository: Option<String>,

    /// Reference branch; `{repository}` is replaced by the remote name
    /// (default: "{repository}/master").
    #[arg(short, long, value_name = "BRANCH")]
    pub merged_into: Option<String>,

    /// Extra keep pattern (glob); repeatable. Added to the configured list.
    #[arg(short, long, value_name = "PATTERN")]
    pub keep: Vec<String>,

    /// Print the cleanup report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `branch-status` command.
#[derive(Args, Debug)]
pub struct BranchStatusArgs {
    /// Compare branches without an upstream against this ref (default: HEAD).
    pub branch: Option<String>,

    /// Show branches ahead of their comparison ref (default).
    #[arg(long, group = "filter")]
    pub ahead: bool,

    /// Show branches behind their comparison ref.
    #[arg(long, group = "filter")]
    pub behind: bool,

    /// Show branches identical to their comparison ref.
    #[arg(long, group = "filter")]
    pub identical: bool,

    /// Show every branch.
    #[arg(long, group = "filter")]
    pub all: bool,

    /// Run `git remote update` before comparing.
    #[arg(long)]
    pub fresh: bool,

    /// Remote whose branches are listed (default: configured remote).
    #[arg(long)]
    pub repository: Option<String>,
}

/// Arguments for the `lint` command.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Only lint changed files matching these globs.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
