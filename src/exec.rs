//! Command executor for git-sweep.
//!
//! Runs external tools (git, the configured linter) as typed argument
//! vectors with captured stdout/stderr. No shell is involved, so arguments
//! are never re-interpreted. All external commands go through this module.

use crate::error::{Result, SweepError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::debug;

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, decoded lossily as UTF-8 (not trimmed).
    pub stdout: String,
    /// Standard error, decoded lossily as UTF-8 (not trimmed).
    pub stderr: String,
    /// Exit code, or `None` when the process was terminated by a signal.
    pub status: Option<i32>,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        }
    }

    /// Returns true if the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Human-readable description of how the process failed.
    fn failure_detail(&self) -> String {
        let status = match self.status {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        let text = if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        };
        if text.is_empty() {
            status
        } else {
            format!("{}: {}", status, text)
        }
    }
}

/// Spawns a program and captures its output.
///
/// Implementations only report failures to *start* the program; judging the
/// finished process is the [`Executor`]'s job.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(program, args)
    }
}

/// Runs commands as real child processes in a fixed working directory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .current_dir(&self.cwd)
            .args(args)
            .output()
            .map_err(|e| {
                SweepError::UserError(format!(
                    "failed to execute {}: {} (is it installed and in PATH?)",
                    program, e
                ))
            })?;

        Ok(CommandOutput::from_output(&output))
    }
}

/// How a finished process is judged to have failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Non-zero exit status means failure; stderr is diagnostic only.
    #[default]
    ExitStatus,
    /// Any output on stderr means failure, whatever the exit status.
    Stderr,
}

/// Runs commands through a [`CommandRunner`] and applies a [`FailureMode`].
#[derive(Debug, Clone)]
pub struct Executor<R> {
    runner: R,
    mode: FailureMode,
}

impl<R: CommandRunner> Executor<R> {
    pub fn new(runner: R, mode: FailureMode) -> Self {
        Self { runner, mode }
    }

    pub fn mode(&self) -> FailureMode {
        self.mode
    }

    /// Run a command and return its raw output without judging it.
    ///
    /// Only a failure to start the program is reported as an error.
    pub fn capture(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("execute {}", render_command(program, args));
        self.runner.run(program, args)
    }

    /// Run a command and return its stdout.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Captured stdout when the command succeeded
    /// * `Err(SweepError::ProcessError)` - When the command failed under the
    ///   configured [`FailureMode`]
    pub fn execute(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = self.capture(program, args)?;

        let failed = match self.mode {
            FailureMode::ExitStatus => !output.success(),
            FailureMode::Stderr => !output.stderr.is_empty(),
        };

        if failed {
            return Err(SweepError::ProcessError {
                command: render_command(program, args),
                detail: output.failure_detail(),
            });
        }

        if !output.stderr.trim().is_empty() {
            debug!(
                "{} wrote to stderr: {}",
                render_command(program, args),
                output.stderr.trim()
            );
        }

        Ok(output.stdout)
    }
}

/// Render an invocation for logs and error messages.
pub fn render_command(program: &str, args: &[&str]) -> String {
    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(program);
    words.extend_from_slice(args);
    shell_words::join(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedRunner, create_test_repo, failed, ok};

    fn noisy_success() -> CommandOutput {
        CommandOutput {
            stdout: "payload\n".to_string(),
            stderr: "warning: something informational\n".to_string(),
            status: Some(0),
        }
    }

    #[test]
    fn test_execute_returns_stdout_on_success() {
        let runner = ScriptedRunner::new().on(&["git", "branch"], ok("  origin/a\n"));
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        let stdout = exec.execute("git", &["branch", "-r"]).unwrap();
        assert_eq!(stdout, "  origin/a\n");
    }

    #[test]
    fn test_exit_status_mode_fails_on_nonzero_exit() {
        let runner = ScriptedRunner::new().on(&["git", "fetch"], failed(128, "fatal: no remote"));
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        let err = exec.execute("git", &["fetch", "nowhere"]).unwrap_err();
        assert!(matches!(err, SweepError::ProcessError { .. }));
        assert!(err.to_string().contains("git fetch nowhere"));
        assert!(err.to_string().contains("exit code 128"));
        assert!(err.to_string().contains("fatal: no remote"));
    }

    #[test]
    fn test_exit_status_mode_tolerates_stderr_on_success() {
        let runner = ScriptedRunner::new().on(&["git"], noisy_success());
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        assert_eq!(exec.execute("git", &["fetch"]).unwrap(), "payload\n");
    }

    #[test]
    fn test_stderr_mode_fails_on_stderr_even_with_zero_exit() {
        let runner = ScriptedRunner::new().on(&["git"], noisy_success());
        let exec = Executor::new(&runner, FailureMode::Stderr);

        let err = exec.execute("git", &["fetch"]).unwrap_err();
        assert!(err.to_string().contains("something informational"));
    }

    #[test]
    fn test_stderr_mode_accepts_nonzero_exit_with_silent_stderr() {
        let runner = ScriptedRunner::new().on(
            &["git"],
            CommandOutput {
                stdout: "out".to_string(),
                stderr: String::new(),
                status: Some(1),
            },
        );
        let exec = Executor::new(&runner, FailureMode::Stderr);

        assert_eq!(exec.execute("git", &["diff", "--quiet"]).unwrap(), "out");
    }

    #[test]
    fn test_capture_does_not_judge_output() {
        let runner = ScriptedRunner::new().on(&["flake8"], failed(1, "E501 line too long"));
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        let output = exec.capture("flake8", &["a.py"]).unwrap();
        assert!(!output.success());
        assert_eq!(output.stderr, "E501 line too long");
    }

    #[test]
    fn test_signal_termination_is_a_failure() {
        let runner = ScriptedRunner::new().on(
            &["git"],
            CommandOutput {
                status: None,
                ..CommandOutput::default()
            },
        );
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        let err = exec.execute("git", &["fetch"]).unwrap_err();
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_render_command_quotes_arguments() {
        assert_eq!(
            render_command("git", &["commit", "-m", "two words"]),
            "git commit -m 'two words'"
        );
        assert_eq!(render_command("git", &["status"]), "git status");
    }

    #[test]
    fn test_system_runner_runs_git() {
        let temp_dir = create_test_repo();
        let exec = Executor::new(SystemRunner::new(temp_dir.path()), FailureMode::ExitStatus);

        let stdout = exec.execute("git", &["rev-parse", "--abbrev-ref", "HEAD"]).unwrap();
        assert_eq!(stdout.trim(), "main");
    }

    #[test]
    fn test_system_runner_reports_failure() {
        let temp_dir = create_test_repo();
        let exec = Executor::new(SystemRunner::new(temp_dir.path()), FailureMode::ExitStatus);

        let result = exec.execute("git", &["checkout", "nonexistent-branch"]);
        assert!(matches!(result, Err(SweepError::ProcessError { .. })));
    }

    #[test]
    fn test_system_runner_missing_program_is_user_error() {
        let temp_dir = create_test_repo();
        let runner = SystemRunner::new(temp_dir.path());

        let result = runner.run("git-sweep-definitely-not-installed", &[]);
        assert!(matches!(result, Err(SweepError::UserError(_))));
    }
}
