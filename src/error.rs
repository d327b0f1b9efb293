//! Error types for the git-out CLI.
//!
//! Uses thiserror for derive macros. Each variant corresponds to one failure
//! condition in the branch-out workflow and maps to a specific exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for git-out operations.
#[derive(Error, Debug)]
pub enum GitOutError {
    /// The current directory is not inside a git repository.
    #[error("Not a git repository")]
    NotARepository,

    /// The working tree has uncommitted changes and --force was not given.
    #[error("Repository has uncommitted changes")]
    DirtyWorkingTree,

    /// No remote with the expected name is configured.
    #[error("No remote named '{0}'")]
    RemoteNotFound(String),

    /// `git fetch` failed. The message is git's stderr verbatim, and the
    /// process exit code is preserved so git-out can exit with it.
    #[error("Failed to fetch {remote}/{branch}: {message}")]
    FetchFailed {
        remote: String,
        branch: String,
        message: String,
        exit_code: Option<i32>,
    },

    /// The requested new branch name collides with an existing local branch.
    #[error("Branch '{0}' already exists")]
    BranchAlreadyExists(String),

    /// The forced checkout could not be completed.
    #[error("Failed to check out '{branch}': {message}")]
    CheckoutConflict { branch: String, message: String },

    /// Any other failure from the underlying git engine (spawn failure,
    /// ref lookup, branch creation).
    #[error("Git operation failed: {0}")]
    Git(String),
}

impl GitOutError {
    /// Returns the process exit code for this error.
    ///
    /// Fetch failures propagate the exit code of the underlying `git fetch`
    /// process when it reported one in the representable 1..=255 range.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitOutError::NotARepository
            | GitOutError::DirtyWorkingTree
            | GitOutError::RemoteNotFound(_) => exit_codes::PRECONDITION_FAILURE,
            GitOutError::FetchFailed { exit_code, .. } => match exit_code {
                Some(code) if (1..=255).contains(code) => *code,
                _ => exit_codes::GIT_FAILURE,
            },
            GitOutError::BranchAlreadyExists(_)
            | GitOutError::CheckoutConflict { .. }
            | GitOutError::Git(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for git-out operations.
pub type Result<T> = std::result::Result<T, GitOutError>;
