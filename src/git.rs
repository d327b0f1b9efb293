//! Git command runner for git-out.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling, plus the repository-validation and
//! working-tree-status queries used by the workflow's guard stages.
//! All git operations go through this module.

use crate::error::{GitOutError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Output};

/// Result of a git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }

    /// Returns stderr if non-empty, otherwise stdout. Git writes most
    /// diagnostics to stderr but a few commands report on stdout.
    pub fn diagnostic(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Run a git command and capture its exit status along with output.
///
/// Only fails when the git process could not be spawned at all. Callers that
/// need to map specific non-zero exits (fetch, checkout) use this directly;
/// everything else goes through [`run_git`].
pub fn run_git_capture<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<(ExitStatus, GitOutput)> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(args)
        .output()
        .map_err(|e| {
            GitOutError::Git(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    Ok((output.status, GitOutput::from_output(&output)))
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(GitOutError::Git)` - On non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let (status, output) = run_git_capture(cwd, args)?;

    if status.success() {
        Ok(output)
    } else {
        Err(GitOutError::Git(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            status.code().unwrap_or(-1),
            output.diagnostic()
        )))
    }
}

/// Check whether the given directory is inside a valid git repository.
///
/// Uses `git rev-parse --is-inside-work-tree`, which works from the
/// repository root or any subdirectory.
pub fn is_inside_repository<P: AsRef<Path>>(cwd: P) -> Result<bool> {
    let (status, output) = run_git_capture(cwd, &["rev-parse", "--is-inside-work-tree"])?;
    Ok(status.success() && output.stdout == "true")
}

/// Check if the working tree has any uncommitted changes.
///
/// Uses `git status --porcelain`. Untracked, modified, staged, and deleted
/// paths all count as dirty.
pub fn has_uncommitted_changes<P: AsRef<Path>>(cwd: P) -> Result<bool> {
    let output = run_git(cwd, &["status", "--porcelain"])?;
    Ok(!output.is_empty())
}
