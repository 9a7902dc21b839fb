//! Implementation of the `git-sweep branch-status` command.

use crate::cli::BranchStatusArgs;
use crate::config::Config;
use crate::error::Result;
use crate::exec::{CommandRunner, Executor};
use crate::git;
use crate::status::{BranchDiff, StatusFilter, branch_diffs, format_row, sort_newest_first};
use tracing::info;

/// Execute the `git-sweep branch-status` command.
///
/// Local branches are reported first, then the branches of the chosen
/// remote. Sources with no matching branch print nothing.
pub fn cmd_branch_status<R: CommandRunner>(
    exec: &Executor<R>,
    config: &Config,
    args: &BranchStatusArgs,
) -> Result<()> {
    let repository = args.repository.as_deref().unwrap_or(&config.remote);

    if args.fresh {
        info!("updating {}", repository);
        git::remote_update(exec, repository)?;
    }

    let filter = selected_filter(args);
    let sources = ["refs/heads".to_string(), format!("refs/remotes/{}", repository)];

    for source in &sources {
        let mut diffs: Vec<BranchDiff> = branch_diffs(exec, source, args.branch.as_deref())?
            .into_iter()
            .filter(|diff| filter.accepts(diff))
            .collect();
        sort_newest_first(&mut diffs);

        if let Some(section) = render_section(source, &diffs) {
            print!("{}", section);
        }
    }

    Ok(())
}

fn selected_filter(args: &BranchStatusArgs) -> StatusFilter {
    if args.all {
        StatusFilter::All
    } else if args.identical {
        StatusFilter::Identical
    } else if args.behind {
        StatusFilter::Behind
    } else {
        StatusFilter::Ahead
    }
}

/// Header, one row per branch, trailing blank line. `None` when empty.
fn render_section(source: &str, diffs: &[BranchDiff]) -> Option<String> {
    if diffs.is_empty() {
        return None;
    }
    let mut out = format!("branches from {}:\n\n", source);
    for diff in diffs {
        out.push_str(&format_row(diff));
        out.push('\n');
    }
    out.push('\n');
    Some(out)
}
