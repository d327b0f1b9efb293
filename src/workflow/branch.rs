//! Local branch operations: existence check, creation, forced checkout.

use crate::error::{GitOutError, Result};
use crate::git::{run_git, run_git_capture};
use std::path::Path;

/// Check if a branch exists locally.
pub fn branch_exists<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<bool> {
    let (status, _) = run_git_capture(
        repo_root,
        &["rev-parse", "--verify", "--quiet", &format!("refs/heads/{}", branch)],
    )?;
    Ok(status.success())
}

/// Create a new branch at the specified commit.
///
/// # Returns
///
/// * `Ok(())` - Branch created successfully
/// * `Err(GitOutError::BranchAlreadyExists)` - The name collides with an
///   existing local branch
/// * `Err(GitOutError::Git)` - Any other creation failure
pub fn create_branch<P: AsRef<Path>>(repo_root: P, branch: &str, commit: &str) -> Result<()> {
    let repo_root = repo_root.as_ref();

    if branch_exists(repo_root, branch)? {
        return Err(GitOutError::BranchAlreadyExists(branch.to_string()));
    }

    run_git(repo_root, &["branch", branch, commit]).map_err(|e| {
        GitOutError::Git(format!(
            "failed to create branch '{}' at {}: {}",
            branch, commit, e
        ))
    })?;

    Ok(())
}

/// Switch the working tree to a branch, discarding conflicting local
/// modifications to tracked files. Untracked files are left alone.
///
/// The checkout is always forced: by the time the workflow reaches this
/// stage the branch has been created and the run is committed to switching.
pub fn force_checkout<P: AsRef<Path>>(repo_root: P, branch: &str) -> Result<()> {
    let (status, output) = run_git_capture(repo_root, &["checkout", "--force", branch])?;

    if status.success() {
        Ok(())
    } else {
        Err(GitOutError::CheckoutConflict {
            branch: branch.to_string(),
            message: output.diagnostic().to_string(),
        })
    }
}
