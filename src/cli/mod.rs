//! CLI argument parsing for git-out.
//!
//! Uses clap derive macros for declarative argument definitions. The parsed
//! arguments convert into [`WorkflowOptions`] consumed by the workflow.

use crate::workflow::WorkflowOptions;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

/// Git-out: branch out from the freshest upstream default branch.
///
/// Fetches the repository's default branch (or an explicitly named main
/// branch) from origin, creates a new local branch at the fetched tip, and
/// force-checks it out.
#[derive(Parser, Debug)]
#[command(name = "git-out")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the new branch to create and check out.
    #[arg(value_name = "new-branch-name", value_parser = NonEmptyStringValueParser::new())]
    pub new_branch: String,

    /// The main branch name. When omitted, the default branch is
    /// auto-detected from origin's remote-tracking branches.
    #[arg(short, long, value_name = "name")]
    pub main_branch: Option<String>,

    /// Proceed even if the repository has uncommitted changes.
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Convert parsed arguments into workflow options.
    pub fn into_options(self) -> WorkflowOptions {
        WorkflowOptions {
            new_branch: self.new_branch,
            main_branch: self.main_branch,
            force: self.force,
        }
    }
}
