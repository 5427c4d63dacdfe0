//! Git subprocess wrapper.
//!
//! Every operation shells out to the `git` binary in a given project root.
//! Informational reads return git's trimmed stdout and ignore its exit
//! status; mutating operations (`stage_files`, `commit`) fail on a non-zero
//! exit with git's stderr in the error. There is no libgit2 here — the
//! ambient `git` on PATH is the source of truth.

use crate::error::{PlankitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitState {
    pub branch: String,
    pub status: Vec<String>,
    pub commits: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub hash: String,
    pub message: String,
    pub stats: String,
}

/// Verify the `git` binary is reachable.
pub fn ensure_git() -> Result<()> {
    which::which("git")
        .map(|_| ())
        .map_err(|_| PlankitError::GitNotFound)
}

fn run(root: &Path, args: &[&str]) -> Result<std::process::Output> {
    ensure_git()?;
    Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .map_err(|e| PlankitError::Spawn {
            program: "git".to_string(),
            message: e.to_string(),
        })
}

/// Trimmed stdout of a git invocation, exit status ignored.
fn output(root: &Path, args: &[&str]) -> Result<String> {
    let out = run(root, args)?;
    Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}

/// Trimmed stdout of a git invocation that must succeed.
fn checked(root: &Path, args: &[&str]) -> Result<String> {
    let out = run(root, args)?;
    if !out.status.success() {
        return Err(PlankitError::Git {
            command: format!("git {}", args.join(" ")),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}

/// Branch, short status lines, and the last ten one-line commits.
pub fn git_state(root: &Path) -> Result<GitState> {
    Ok(GitState {
        branch: output(root, &["rev-parse", "--abbrev-ref", "HEAD"])?,
        status: lines(output(root, &["status", "--short"])?),
        commits: lines(output(root, &["log", "-10", "--oneline"])?),
    })
}

/// `git status --short`, one entry per changed file.
pub fn changed_files(root: &Path) -> Result<Vec<String>> {
    Ok(lines(output(root, &["status", "--short"])?))
}

/// `git diff HEAD`, optionally limited to the given paths.
pub fn diff(root: &Path, files: &[String]) -> Result<String> {
    let mut args = vec!["diff", "HEAD"];
    if !files.is_empty() {
        args.push("--");
        args.extend(files.iter().map(String::as_str));
    }
    output(root, &args)
}

/// Stage the given paths, or everything when none are given.
pub fn stage_files(root: &Path, files: &[String]) -> Result<()> {
    let mut args = vec!["add"];
    if files.is_empty() {
        args.push(".");
    } else {
        args.extend(files.iter().map(String::as_str));
    }
    checked(root, &args)?;
    Ok(())
}

/// Commit staged changes and return the new short hash.
pub fn commit(root: &Path, message: &str) -> Result<String> {
    checked(root, &["commit", "-m", message])?;
    output(root, &["rev-parse", "--short", "HEAD"])
}

/// Short hash, subject line, and diffstat of the last commit.
pub fn commit_info(root: &Path) -> Result<CommitInfo> {
    Ok(CommitInfo {
        hash: output(root, &["rev-parse", "--short", "HEAD"])?,
        message: output(root, &["log", "-1", "--format=%s"])?,
        stats: output(root, &["show", "--stat", "--format="])?,
    })
}

fn lines(text: String) -> Vec<String> {
    text.lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git_available() -> bool {
        which::which("git").is_ok()
    }

    fn init_repo(dir: &TempDir) {
        for args in [
            vec!["init", "-q"],
            vec!["config", "user.email", "test@example.com"],
            vec!["config", "user.name", "Test"],
        ] {
            let status = Command::new("git")
                .args(&args)
                .current_dir(dir.path())
                .status()
                .unwrap();
            assert!(status.success(), "git {args:?} failed");
        }
    }

    #[test]
    fn stage_and_commit_roundtrip() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        init_repo(&dir);
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();

        stage_files(dir.path(), &[]).unwrap();
        let hash = commit(dir.path(), "feat: add a.txt").unwrap();
        assert!(!hash.is_empty());

        let info = commit_info(dir.path()).unwrap();
        assert_eq!(info.hash, hash);
        assert_eq!(info.message, "feat: add a.txt");
        assert!(info.stats.contains("a.txt"));
    }

    #[test]
    fn state_reports_branch_and_changes() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        init_repo(&dir);
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        stage_files(dir.path(), &[]).unwrap();
        commit(dir.path(), "initial").unwrap();

        std::fs::write(dir.path().join("b.txt"), "two\n").unwrap();
        let state = git_state(dir.path()).unwrap();
        assert!(!state.branch.is_empty());
        assert_eq!(state.commits.len(), 1);
        assert!(state.status.iter().any(|l| l.contains("b.txt")));

        let changed = changed_files(dir.path()).unwrap();
        assert_eq!(changed, state.status);
    }

    #[test]
    fn commit_with_nothing_staged_errors() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        init_repo(&dir);
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        stage_files(dir.path(), &[]).unwrap();
        commit(dir.path(), "initial").unwrap();

        // Clean tree: a second commit has nothing to record.
        assert!(commit(dir.path(), "empty").is_err());
    }

    #[test]
    fn diff_reports_modifications() {
        if !git_available() {
            return;
        }
        let dir = TempDir::new().unwrap();
        init_repo(&dir);
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        stage_files(dir.path(), &[]).unwrap();
        commit(dir.path(), "initial").unwrap();

        std::fs::write(dir.path().join("a.txt"), "one\ntwo\n").unwrap();
        let d = diff(dir.path(), &[]).unwrap();
        assert!(d.contains("+two"));
    }
}
