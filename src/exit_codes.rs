//! Exit code constants for the git-out CLI.
//!
//! - 0: Success
//! - 1: Precondition failure (not a repo, dirty tree, missing remote)
//! - 2: Git operation failure (fetch, branch creation, checkout, ref lookup)
//!
//! Fetch failures are the exception: when the underlying `git fetch` process
//! reports its own exit code, git-out exits with that code instead of
//! `GIT_FAILURE`.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Precondition failure: not inside a repository, dirty working tree,
/// or no "origin" remote configured.
pub const PRECONDITION_FAILURE: i32 = 1;

/// Git operation failure: fetch, branch creation, checkout, or ref lookup.
pub const GIT_FAILURE: i32 = 2;
