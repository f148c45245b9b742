use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a git repository whose `master` branch holds a single commit and
/// whose checked-out `branch` carries one extra commit per message, oldest
/// first.
pub(crate) fn create_commit_repo(messages: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across
    // environments. This sets HEAD to an unborn `master` branch before the
    // first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/master"]);

    // Configure git user for commits
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("test.txt"), "file\n").unwrap();
    git(path, &["add", "test.txt"]);
    git(path, &["commit", "-m", "file"]);
    git(path, &["checkout", "-b", "branch"]);

    for (index, message) in messages.iter().enumerate() {
        std::fs::write(path.join("test.txt"), format!("{}\n", index)).unwrap();
        git(path, &["add", "test.txt"]);
        git(path, &["commit", "-m", message]);
    }

    temp_dir
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
