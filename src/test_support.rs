use crate::error::Result;
use crate::exec::{CommandOutput, CommandRunner};
use std::cell::RefCell;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Successful output with the given stdout.
pub(crate) fn ok(stdout: &str) -> CommandOutput {
    CommandOutput {
        stdout: stdout.to_string(),
        stderr: String::new(),
        status: Some(0),
    }
}

/// Failed output with the given exit code and stderr.
pub(crate) fn failed(code: i32, stderr: &str) -> CommandOutput {
    CommandOutput {
        stdout: String::new(),
        stderr: stderr.to_string(),
        status: Some(code),
    }
}

/// A [`CommandRunner`] that answers from a script and records every call.
///
/// Rules match on an argv prefix (program first); the first matching rule
/// wins. Calls with no matching rule succeed with empty output.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    rules: Vec<(Vec<String>, CommandOutput)>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(mut self, argv_prefix: &[&str], output: CommandOutput) -> Self {
        self.rules.push((
            argv_prefix.iter().map(|s| s.to_string()).collect(),
            output,
        ));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls whose argv starts with `argv_prefix`.
    pub(crate) fn count(&self, argv_prefix: &[&str]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| starts_with(call, argv_prefix))
            .count()
    }
}

fn starts_with(call: &[String], prefix: &[impl AsRef<str>]) -> bool {
    call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, b)| a == b.as_ref())
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut argv = vec![program.to_string()];
        argv.extend(args.iter().map(|s| s.to_string()));

        let output = self
            .rules
            .iter()
            .find(|(prefix, _)| starts_with(&argv, prefix))
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| ok(""));

        self.calls.borrow_mut().push(argv);
        Ok(output)
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init", "--quiet"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "--quiet", "-m", "Initial commit"]);

    temp_dir
}

/// A bare repository acting as `origin` plus a working repository that
/// pushes to it.
pub(crate) struct RemoteFixture {
    remote: TempDir,
    work: TempDir,
}

impl RemoteFixture {
    pub(crate) fn new() -> Self {
        let remote = TempDir::new().unwrap();
        git(remote.path(), &["init", "--quiet", "--bare"]);
        git(remote.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);

        let work = create_test_repo();
        let remote_url = remote.path().to_string_lossy().to_string();
        git(work.path(), &["remote", "add", "origin", &remote_url]);
        git(work.path(), &["push", "--quiet", "origin", "main"]);
        git(work.path(), &["fetch", "--quiet", "origin"]);

        Self { remote, work }
    }

    pub(crate) fn work(&self) -> &Path {
        self.work.path()
    }

    /// Push a branch pointing at `main` (merged by construction).
    pub(crate) fn push_merged_branch(&self, name: &str) {
        git(self.work(), &["branch", name, "main"]);
        git(self.work(), &["push", "--quiet", "origin", name]);
    }

    /// Push a branch carrying one commit that `main` does not have.
    pub(crate) fn push_unmerged_branch(&self, name: &str) {
        git(self.work(), &["checkout", "--quiet", "-b", name, "main"]);
        std::fs::write(self.work().join(format!("{}.txt", name)), name).unwrap();
        git(self.work(), &["add", "."]);
        git(self.work(), &["commit", "--quiet", "-m", &format!("work on {}", name)]);
        git(self.work(), &["push", "--quiet", "origin", name]);
        git(self.work(), &["checkout", "--quiet", "main"]);
    }

    pub(crate) fn fetch(&self) {
        git(self.work(), &["fetch", "--quiet", "origin"]);
    }

    /// Branch names currently present on the remote.
    pub(crate) fn remote_branches(&self) -> Vec<String> {
        let output = Command::new("git")
            .current_dir(self.remote.path())
            .args(["for-each-ref", "--format=%(refname:short)", "refs/heads"])
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
