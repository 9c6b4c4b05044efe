//! Thin wrappers over the `git` CLI.
//!
//! All queries shell out and resolve to `None` / zero on any failure --
//! a missing git binary or a non-repo directory must never surface as
//! an error in the status line.

use serde::{Deserialize, Serialize};

/// Aggregated repository status consumed by the git widget. Cached
/// between renders, hence the serde derives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitStatus {
    pub branch: String,
    pub staged: usize,
    pub modified: usize,
    pub untracked: usize,
    pub ahead: usize,
    pub behind: usize,
}

/// Which sub-queries to issue; disabled counts stay zero.
#[derive(Debug, Clone, Copy)]
pub struct StatusQuery {
    pub staged: bool,
    pub modified: bool,
    pub ahead_behind: bool,
}

/// Run one git command in `dir` and return trimmed stdout on success.
fn git_stdout(dir: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn is_repo(dir: &str) -> bool {
    git_stdout(dir, &["rev-parse", "--git-dir"]).is_some()
}

/// Current branch name, or `HEAD@<short-hash>` in detached-HEAD state.
fn current_branch(dir: &str) -> Option<String> {
    let branch = git_stdout(dir, &["branch", "--show-current"])?;
    if !branch.is_empty() {
        return Some(branch);
    }

    git_stdout(dir, &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .map(|hash| format!("HEAD@{}", hash))
}

fn line_count(stdout: Option<String>) -> usize {
    stdout
        .map(|text| text.lines().filter(|l| !l.trim().is_empty()).count())
        .unwrap_or(0)
}

fn staged_count(dir: &str) -> usize {
    line_count(git_stdout(dir, &["diff", "--cached", "--numstat"]))
}

fn modified_count(dir: &str) -> usize {
    line_count(git_stdout(dir, &["diff", "--numstat"]))
}

fn untracked_count(dir: &str) -> usize {
    line_count(git_stdout(dir, &["ls-files", "--others", "--exclude-standard"]))
}

/// Commits ahead/behind upstream; `None` without an upstream.
fn ahead_behind(dir: &str) -> Option<(usize, usize)> {
    let text = git_stdout(
        dir,
        &["rev-list", "--left-right", "--count", "HEAD...@{upstream}"],
    )?;
    let mut parts = text.split_whitespace();
    let ahead = parts.next()?.parse().ok()?;
    let behind = parts.next()?.parse().ok()?;
    Some((ahead, behind))
}

/// Full repository status for `dir`, or `None` outside a repo (or in a
/// repo with no resolvable HEAD). The independent count queries are
/// issued on scoped threads and awaited together; each is bounded by
/// git's own exit behavior.
pub fn collect_status(dir: &str, query: StatusQuery) -> Option<GitStatus> {
    if !is_repo(dir) {
        return None;
    }
    let branch = current_branch(dir)?;

    let (staged, modified, untracked, upstream) = std::thread::scope(|scope| {
        let staged = scope.spawn(|| if query.staged { staged_count(dir) } else { 0 });
        let modified = scope.spawn(|| if query.modified { modified_count(dir) } else { 0 });
        let untracked = scope.spawn(|| untracked_count(dir));
        let upstream = scope.spawn(|| {
            if query.ahead_behind {
                ahead_behind(dir)
            } else {
                None
            }
        });

        (
            staged.join().unwrap_or(0),
            modified.join().unwrap_or(0),
            untracked.join().unwrap_or(0),
            upstream.join().ok().flatten(),
        )
    });

    let (ahead, behind) = upstream.unwrap_or((0, 0));

    Some(GitStatus {
        branch,
        staged,
        modified,
        untracked,
        ahead,
        behind,
    })
}
