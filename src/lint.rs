//! Linting of changed files.
//!
//! Picks files reported by `git status --porcelain -z`, filters them by
//! extension and optional glob patterns, and runs the configured linter on
//! each one.

use crate::error::{Result, SweepError};
use crate::exec::{CommandRunner, Executor};
use crate::git;
use crate::patterns::PatternSet;

/// A path reported by `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// The two status columns, e.g. ` M`, `A `, `??`.
    pub status: String,
    pub path: String,
}

impl ChangedFile {
    /// True when the file is deleted in the index or the worktree.
    pub fn is_deleted(&self) -> bool {
        self.status.contains('D')
    }
}

/// Parse one `git status --porcelain -z` record (`XY path`).
pub fn parse_status_line(record: &str) -> Option<ChangedFile> {
    let status = record.get(..2)?;
    let path = record.get(3..)?;
    if path.is_empty() {
        return None;
    }
    Some(ChangedFile {
        status: status.to_string(),
        path: path.to_string(),
    })
}

/// Parse every record, dropping the original-path record that follows a
/// rename or copy so that only the new path is kept.
pub fn parse_status_records(records: &[String]) -> Vec<ChangedFile> {
    let mut files = Vec::with_capacity(records.len());
    let mut records = records.iter();
    while let Some(record) = records.next() {
        let Some(file) = parse_status_line(record) else {
            continue;
        };
        if file.status.contains(['R', 'C']) {
            records.next();
        }
        files.push(file);
    }
    files
}

/// Changed, non-deleted files in the working tree.
pub fn changed_files<R: CommandRunner>(exec: &Executor<R>) -> Result<Vec<ChangedFile>> {
    Ok(parse_status_records(&git::status_porcelain(exec)?)
        .into_iter()
        .filter(|file| !file.is_deleted())
        .collect())
}

/// Decides which files are linted.
#[derive(Debug, Clone)]
pub struct LintSelector {
    extensions: Vec<String>,
    only: Option<PatternSet>,
}

impl LintSelector {
    /// Files must have one of `extensions`; when `patterns` is non-empty
    /// they must also match one of them. Braces are rejected since they
    /// would act as alternation rather than literal text.
    pub fn new(extensions: &[String], patterns: &[String]) -> Result<Self> {
        if let Some(pattern) = patterns.iter().find(|p| p.contains(['{', '}'])) {
            return Err(SweepError::UserError(format!(
                "unsupported '{{' or '}}' in pattern '{}'",
                pattern
            )));
        }

        let only = if patterns.is_empty() {
            None
        } else {
            Some(PatternSet::compile(patterns)?)
        };
        Ok(Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            only,
        })
    }

    pub fn allows(&self, path: &str) -> bool {
        let has_extension = file_extension(path)
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext.to_lowercase()));
        if !has_extension {
            return false;
        }
        match &self.only {
            Some(patterns) => patterns.is_match(path),
            None => true,
        }
    }
}

fn file_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() { None } else { Some(ext) }
}

/// Linter result for one file.
#[derive(Debug, Clone)]
pub struct LintOutcome {
    pub path: String,
    /// Combined stdout and stderr of the linter.
    pub output: String,
    pub passed: bool,
}

/// Run `command` with `path` appended.
pub fn lint_file<R: CommandRunner>(
    exec: &Executor<R>,
    command: &[String],
    path: &str,
) -> Result<LintOutcome> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| SweepError::ConfigError("lint.command must not be empty".to_string()))?;

    let mut argv: Vec<&str> = args.iter().map(String::as_str).collect();
    argv.push(path);

    let captured = exec.capture(program, &argv)?;
    let output = [captured.stdout.trim_end(), captured.stderr.trim_end()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    Ok(LintOutcome {
        path: path.to_string(),
        output,
        passed: captured.success(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{CommandOutput, FailureMode, SystemRunner};
    use crate::test_support::{ScriptedRunner, create_test_repo, failed, git, ok};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_status_line_variants() {
        let modified = parse_status_line(" M src/app.py").unwrap();
        assert_eq!(modified.status, " M");
        assert_eq!(modified.path, "src/app.py");

        let untracked = parse_status_line("?? with space.py").unwrap();
        assert_eq!(untracked.path, "with space.py");

        assert!(parse_status_line("M").is_none());
    }

    #[test]
    fn test_parse_status_records_uses_new_path_of_rename() {
        let records = strings(&["R  pkg/new.py", "old.py", " M café.py", "?? x.py"]);
        let paths: Vec<String> = parse_status_records(&records)
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(paths, vec!["pkg/new.py", "café.py", "x.py"]);
    }

    #[test]
    fn test_deleted_files_are_flagged() {
        assert!(parse_status_line(" D gone.py").unwrap().is_deleted());
        assert!(parse_status_line("D  gone.py").unwrap().is_deleted());
        assert!(!parse_status_line("A  added.py").unwrap().is_deleted());
    }

    #[test]
    fn test_changed_files_skips_deleted() {
        let temp_dir = create_test_repo();
        let path = temp_dir.path();
        std::fs::write(path.join("keep.py"), "x = 1\n").unwrap();
        std::fs::write(path.join("gone.py"), "y = 2\n").unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "--quiet", "-m", "add files"]);

        std::fs::write(path.join("keep.py"), "x = 2\n").unwrap();
        std::fs::remove_file(path.join("gone.py")).unwrap();
        std::fs::write(path.join("fresh.py"), "z = 3\n").unwrap();
        std::fs::write(path.join("naïve.py"), "w = 4\n").unwrap();

        let exec = Executor::new(SystemRunner::new(path), FailureMode::ExitStatus);
        let mut names: Vec<String> = changed_files(&exec)
            .unwrap()
            .into_iter()
            .map(|f| f.path)
            .collect();
        names.sort();
        assert_eq!(names, vec!["fresh.py", "keep.py", "naïve.py"]);
    }

    #[test]
    fn test_selector_extension_only() {
        let selector = LintSelector::new(&strings(&["py"]), &[]).unwrap();
        assert!(selector.allows("app.py"));
        assert!(selector.allows("pkg/APP.PY"));
        assert!(!selector.allows("app.rs"));
        assert!(!selector.allows("py"));
        assert!(!selector.allows("dir.py/file"));
    }

    #[test]
    fn test_selector_with_patterns() {
        let selector = LintSelector::new(&strings(&["py"]), &strings(&["src/*"])).unwrap();
        assert!(selector.allows("src/app.py"));
        assert!(!selector.allows("tests/test_app.py"));
        assert!(!selector.allows("src/app.txt"));
    }

    #[test]
    fn test_selector_rejects_braces() {
        let err = LintSelector::new(&strings(&["py"]), &strings(&["a{b,c}.py"])).unwrap_err();
        assert!(matches!(err, SweepError::UserError(_)));
        assert!(err.to_string().contains("a{b,c}.py"));
    }

    #[test]
    fn test_selector_rejects_invalid_pattern() {
        assert!(LintSelector::new(&strings(&["py"]), &strings(&["[x"])).is_err());
    }

    #[test]
    fn test_lint_file_appends_path_and_reports_failure() {
        let runner = ScriptedRunner::new().on(
            &["flake8", "--max-line-length=100", "bad.py"],
            CommandOutput {
                stdout: "bad.py:1:1: F401 'os' imported but unused\n".to_string(),
                stderr: String::new(),
                status: Some(1),
            },
        );
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        let outcome = lint_file(&exec, &strings(&["flake8", "--max-line-length=100"]), "bad.py")
            .unwrap();
        assert!(!outcome.passed);
        assert_eq!(outcome.output, "bad.py:1:1: F401 'os' imported but unused");
    }

    #[test]
    fn test_lint_file_passing() {
        let runner = ScriptedRunner::new().on(&["flake8"], ok(""));
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        let outcome = lint_file(&exec, &strings(&["flake8"]), "good.py").unwrap();
        assert!(outcome.passed);
        assert!(outcome.output.is_empty());
    }

    #[test]
    fn test_lint_file_combines_streams() {
        let runner = ScriptedRunner::new().on(&["flake8"], failed(2, "config error"));
        let exec = Executor::new(&runner, FailureMode::ExitStatus);

        let outcome = lint_file(&exec, &strings(&["flake8"]), "x.py").unwrap();
        assert!(!outcome.passed);
        assert_eq!(outcome.output, "config error");
    }
}
