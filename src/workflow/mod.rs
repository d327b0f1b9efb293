//! The branch-out workflow for git-out.
//!
//! A single-pass pipeline that takes a working copy from "somewhere on some
//! branch" to "on a fresh branch at the upstream default branch's tip":
//!
//! 1. Validate that the directory is inside a git repository.
//! 2. Refuse to continue on a dirty working tree unless forced.
//! 3. Confirm the "origin" remote exists.
//! 4. Resolve the main branch name (explicit, or auto-detected).
//! 5. Fetch that branch from origin into its remote-tracking ref.
//! 6. Create the new branch at the fetched tip and force-check it out.
//!
//! Stages run strictly in order and short-circuit on the first failure; no
//! repository-mutating stage runs before stages 1-3 all pass. Progress and
//! warnings are reported through the injected [`MessageSink`].

mod branch;
mod default_branch;
mod remote;

use crate::error::{GitOutError, Result};
use crate::git;
use crate::sink::MessageSink;
use std::path::Path;

/// The only remote this workflow operates on.
pub const DEFAULT_REMOTE: &str = "origin";

/// Resolved options for one workflow run. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Name of the branch to create and check out. Must be non-empty.
    pub new_branch: String,
    /// Explicit main branch name; `None` requests auto-detection.
    pub main_branch: Option<String>,
    /// Bypass the dirty-working-tree guard. Does not affect checkout
    /// semantics, which are always forced.
    pub force: bool,
}

/// Run the branch-out workflow against the repository containing `cwd`.
///
/// On success the repository is left on the new branch, whose tip is the
/// post-fetch tip of `refs/remotes/origin/<main-branch>`. On failure the
/// error describes the first stage that refused to proceed; stages before
/// the fetch leave the repository untouched.
pub fn run<P: AsRef<Path>>(
    cwd: P,
    options: &WorkflowOptions,
    sink: &mut dyn MessageSink,
) -> Result<()> {
    let cwd = cwd.as_ref();

    if !git::is_inside_repository(cwd)? {
        return Err(GitOutError::NotARepository);
    }

    // The force flag is only consulted once the tree is known to be dirty.
    if git::has_uncommitted_changes(cwd)? && !options.force {
        return Err(GitOutError::DirtyWorkingTree);
    }

    if !remote::remote_exists(cwd, DEFAULT_REMOTE)? {
        return Err(GitOutError::RemoteNotFound(DEFAULT_REMOTE.to_string()));
    }

    let main_branch = match &options.main_branch {
        Some(name) => name.clone(),
        None => default_branch::resolve_default_branch(cwd, DEFAULT_REMOTE, sink)?,
    };

    sink.info(&format!(
        "Fetching {} {} branch",
        DEFAULT_REMOTE, main_branch
    ));
    remote::fetch_branch(cwd, DEFAULT_REMOTE, &main_branch)?;

    // Read the tip after the fetch so the new branch starts from the
    // remote's current state, never a stale tracking ref.
    let tip = remote::remote_tip(cwd, DEFAULT_REMOTE, &main_branch)?;

    sink.info(&format!("Creating new branch {}", options.new_branch));
    branch::create_branch(cwd, &options.new_branch, &tip)?;

    sink.info(&format!("Checking out {}", options.new_branch));
    branch::force_checkout(cwd, &options.new_branch)?;

    Ok(())
}
