use crate::sink::MessageSink;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Sink that records messages in memory so tests can assert on output.
#[derive(Default)]
pub(crate) struct MemorySink {
    pub(crate) infos: Vec<String>,
    pub(crate) errors: Vec<String>,
}

impl MessageSink for MemorySink {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// An upstream repository plus a working copy with `origin` pointing at it.
pub(crate) struct RemoteFixture {
    _root: TempDir,
    pub(crate) upstream: PathBuf,
    pub(crate) work: PathBuf,
}

/// Create a repository with no remote configured.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo_with_commit(temp_dir.path(), "main");
    temp_dir
}

/// Create an upstream repository with the given default branch and clone it.
///
/// `git clone` configures the `origin` remote and sets the symbolic
/// `refs/remotes/origin/HEAD` reference in the working copy, matching a
/// repository obtained the usual way.
pub(crate) fn clone_fixture(default_branch: &str) -> RemoteFixture {
    let root = TempDir::new().unwrap();
    let upstream = root.path().join("upstream");
    let work = root.path().join("work");

    std::fs::create_dir(&upstream).unwrap();
    init_repo_with_commit(&upstream, default_branch);

    git(
        root.path(),
        &[
            "clone",
            upstream.to_str().unwrap(),
            work.to_str().unwrap(),
        ],
    );
    configure_user(&work);

    RemoteFixture {
        _root: root,
        upstream,
        work,
    }
}

/// Create an upstream with the given branches, then a separate working copy
/// that has `origin` added and fetched but no symbolic `origin/HEAD`.
///
/// The first branch listed is the upstream's checked-out branch; the rest are
/// created from the same initial commit. `git remote add` + `git fetch` never
/// writes `refs/remotes/origin/HEAD`, which is the state the resolver's
/// suffix heuristic exists for.
pub(crate) fn fetched_fixture(branches: &[&str]) -> RemoteFixture {
    let root = TempDir::new().unwrap();
    let upstream = root.path().join("upstream");
    let work = root.path().join("work");

    std::fs::create_dir(&upstream).unwrap();
    init_repo_with_commit(&upstream, branches[0]);
    for branch in &branches[1..] {
        git(&upstream, &["branch", branch]);
    }

    std::fs::create_dir(&work).unwrap();
    init_repo_with_commit(&work, "local");
    git(&work, &["remote", "add", "origin", upstream.to_str().unwrap()]);
    git(&work, &["fetch", "origin"]);

    RemoteFixture {
        _root: root,
        upstream,
        work,
    }
}

/// Add a commit to a repository and return the new tip SHA.
pub(crate) fn add_commit(repo_dir: &Path, file_name: &str) -> String {
    std::fs::write(repo_dir.join(file_name), format!("{}\n", file_name)).unwrap();
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", &format!("Add {}", file_name)]);
    rev_parse(repo_dir, "HEAD")
}

/// Resolve a revision to a full SHA.
pub(crate) fn rev_parse(repo_dir: &Path, rev: &str) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["rev-parse", rev])
        .output()
        .unwrap();
    assert!(output.status.success(), "rev-parse {} failed", rev);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_repo_with_commit(path: &Path, default_branch: &str) {
    git(path, &["init"]);
    // Pin the default branch name so tests are deterministic regardless of
    // the host's init.defaultBranch setting. This sets HEAD to an unborn
    // branch before the first commit.
    git(
        path,
        &["symbolic-ref", "HEAD", &format!("refs/heads/{}", default_branch)],
    );
    configure_user(path);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

fn configure_user(path: &Path) {
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
