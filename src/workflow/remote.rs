//! Remote operations: existence check, single-branch fetch, tip lookup.

use crate::error::{GitOutError, Result};
use crate::git::{run_git, run_git_capture};
use std::path::Path;

/// Check whether a remote with the given name is configured.
pub fn remote_exists<P: AsRef<Path>>(repo_root: P, remote: &str) -> Result<bool> {
    let output = run_git(repo_root, &["remote"])?;
    Ok(output.lines().contains(&remote))
}

/// Fetch one branch from the remote into its remote-tracking ref.
///
/// Uses the refspec `+refs/heads/<branch>:refs/remotes/<remote>/<branch>`.
/// The `+` prefix force-updates the tracking ref, which may already exist and
/// point elsewhere. `--no-tags` keeps the fetch scoped to exactly this
/// branch.
///
/// # Returns
///
/// * `Ok(())` - Fetch succeeded
/// * `Err(GitOutError::FetchFailed)` - Fetch failed; carries git's stderr
///   verbatim and the fetch process's exit code
pub fn fetch_branch<P: AsRef<Path>>(repo_root: P, remote: &str, branch: &str) -> Result<()> {
    let refspec = format!("+refs/heads/{0}:refs/remotes/{1}/{0}", branch, remote);

    let (status, output) =
        run_git_capture(repo_root, &["fetch", "--no-tags", remote, &refspec])?;

    if status.success() {
        Ok(())
    } else {
        Err(GitOutError::FetchFailed {
            remote: remote.to_string(),
            branch: branch.to_string(),
            message: output.diagnostic().to_string(),
            exit_code: status.code(),
        })
    }
}

/// Resolve the current tip of a remote-tracking ref.
///
/// Must be called after [`fetch_branch`] so the SHA reflects the post-fetch
/// state of the remote branch.
pub fn remote_tip<P: AsRef<Path>>(repo_root: P, remote: &str, branch: &str) -> Result<String> {
    let tracking_ref = format!("refs/remotes/{}/{}", remote, branch);

    let output = run_git(repo_root, &["rev-parse", &tracking_ref]).map_err(|e| {
        GitOutError::Git(format!(
            "failed to resolve '{}': {}",
            tracking_ref, e
        ))
    })?;

    Ok(output.stdout)
}
