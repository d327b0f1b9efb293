//! Default-branch resolution.
//!
//! When the user does not name a main branch, the resolver discovers one
//! from the remote-tracking state:
//!
//! 1. The remote's symbolic HEAD (`refs/remotes/<remote>/HEAD`), which is the
//!    remote-advertised default branch pointer. Most reliable when present.
//! 2. A suffix heuristic over the remote-tracking branches: the first branch
//!    in enumeration order whose name ends in a candidate suffix.
//! 3. A hardcoded fallback, reported as a warning but not treated as fatal,
//!    so the run can still attempt the fetch.

use crate::error::Result;
use crate::git::{run_git, run_git_capture};
use crate::sink::MessageSink;
use std::path::Path;

/// Branch name used when auto-detection finds no signal at all.
pub const FALLBACK_BRANCH: &str = "master";

/// Branch-name suffixes recognized by the heuristic, in priority order.
/// Ties between branches are broken by enumeration order, not by position
/// in this list.
const CANDIDATE_SUFFIXES: [&str; 2] = ["main", "master"];

/// Resolve the remote's default branch name.
///
/// Falls back to [`FALLBACK_BRANCH`] when neither the symbolic HEAD nor the
/// suffix heuristic yields a name; that degraded path reports through the
/// sink but does not fail the run. The result is deterministic for a fixed
/// set of remote-tracking refs.
pub fn resolve_default_branch<P: AsRef<Path>>(
    repo_root: P,
    remote: &str,
    sink: &mut dyn MessageSink,
) -> Result<String> {
    let repo_root = repo_root.as_ref();

    if let Some(branch) = symbolic_head_branch(repo_root, remote)? {
        return Ok(branch);
    }

    if let Some(branch) = heuristic_branch(repo_root, remote)? {
        return Ok(branch);
    }

    sink.error(&format!(
        "No main/master branch found; assuming '{}'",
        FALLBACK_BRANCH
    ));
    Ok(FALLBACK_BRANCH.to_string())
}

/// Read the branch the remote's symbolic HEAD points to, if it is set.
///
/// `refs/remotes/<remote>/HEAD` is only present when the repository was
/// cloned or `git remote set-head` was run, so absence is expected and not
/// an error.
fn symbolic_head_branch(repo_root: &Path, remote: &str) -> Result<Option<String>> {
    let head_ref = format!("refs/remotes/{}/HEAD", remote);
    let (status, output) = run_git_capture(repo_root, &["symbolic-ref", "--quiet", &head_ref])?;

    if !status.success() {
        return Ok(None);
    }

    let prefix = format!("refs/remotes/{}/", remote);
    Ok(output.stdout.strip_prefix(&prefix).map(str::to_string))
}

/// Scan remote-tracking branches for the first one ending in a candidate
/// suffix, returning that final name segment.
fn heuristic_branch(repo_root: &Path, remote: &str) -> Result<Option<String>> {
    let prefix = format!("refs/remotes/{}/", remote);
    let output = run_git(
        repo_root,
        &["for-each-ref", "--format=%(refname)", &format!("refs/remotes/{}", remote)],
    )?;

    for refname in output.lines() {
        let Some(branch) = refname.strip_prefix(&prefix) else {
            continue;
        };
        // The symbolic HEAD ref shows up in this enumeration too; it is not
        // a branch.
        if branch == "HEAD" {
            continue;
        }

        let last_segment = branch.rsplit('/').next().unwrap_or(branch);
        if CANDIDATE_SUFFIXES.contains(&last_segment) {
            return Ok(Some(last_segment.to_string()));
        }
    }

    Ok(None)
}
