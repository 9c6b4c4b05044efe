//! Git-status widget: branch plus change counters,
//! e.g. `🌿 main +3 ~5 ?2 ↑1`.
//!
//! Git subprocesses are the slowest part of a render, so results are
//! cached per session+directory for a few seconds.

use std::sync::Arc;

use colored::Colorize;

use crate::cache::CacheManager;
use crate::config::schema::GitStatusWidgetConfig;
use crate::git::{self, GitStatus, StatusQuery};
use crate::input::Snapshot;
use crate::widgets::Widget;

pub struct GitStatusWidget {
    config: GitStatusWidgetConfig,
    cache: Arc<CacheManager>,
}

impl GitStatusWidget {
    pub fn new(config: GitStatusWidgetConfig, cache: Arc<CacheManager>) -> Self {
        Self { config, cache }
    }

    fn format_status(&self, status: &GitStatus) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.config.show_branch {
            parts.push(format!("\u{1f33f} {}", status.branch).cyan().to_string());
        }
        if self.config.show_staged && status.staged > 0 {
            parts.push(format!("+{}", status.staged).green().to_string());
        }
        if self.config.show_modified && status.modified > 0 {
            parts.push(format!("~{}", status.modified).yellow().to_string());
        }
        if status.untracked > 0 {
            parts.push(format!("?{}", status.untracked).dimmed().to_string());
        }
        if self.config.show_ahead_behind {
            if status.ahead > 0 {
                parts.push(format!("\u{2191}{}", status.ahead).cyan().to_string());
            }
            if status.behind > 0 {
                parts.push(format!("\u{2193}{}", status.behind).magenta().to_string());
            }
        }

        parts.join(" ")
    }
}

impl Widget for GitStatusWidget {
    fn name(&self) -> &'static str {
        "git-status"
    }

    fn render(&self, snapshot: &Snapshot) -> Option<String> {
        let current_dir = snapshot.current_dir()?;
        if current_dir.is_empty() {
            return None;
        }

        let session = snapshot.session_id.as_deref().unwrap_or("unknown");
        let cache_key = format!("git-status-{}-{}", session, current_dir);

        if let Some(cached) = self.cache.get::<GitStatus>(&cache_key) {
            return Some(self.format_status(&cached));
        }

        let status = git::collect_status(
            current_dir,
            StatusQuery {
                staged: self.config.show_staged,
                modified: self.config.show_modified,
                ahead_behind: self.config.show_ahead_behind,
            },
        )?;

        self.cache
            .set(&cache_key, status.clone(), self.config.cache_ttl.max(1));

        Some(self.format_status(&status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_with_cache(dir: &std::path::Path) -> GitStatusWidget {
        colored::control::set_override(false);
        let cache = CacheManager::new(dir);
        cache.initialize();
        GitStatusWidget::new(GitStatusWidgetConfig::default(), Arc::new(cache))
    }

    fn snapshot_in(dir: &str) -> Snapshot {
        serde_json::from_str(&format!(
            r#"{{"session_id": "s1", "workspace": {{"current_dir": {}}}}}"#,
            serde_json::to_string(dir).unwrap()
        ))
        .unwrap()
    }

    #[test]
    fn test_format_zero_counts_suppressed() {
        let dir = tempfile::tempdir().unwrap();
        let widget = widget_with_cache(dir.path());
        let formatted = widget.format_status(&GitStatus {
            branch: "main".to_string(),
            staged: 0,
            modified: 0,
            untracked: 0,
            ahead: 0,
            behind: 0,
        });
        assert_eq!(formatted, "\u{1f33f} main");
    }

    #[test]
    fn test_format_all_counters() {
        let dir = tempfile::tempdir().unwrap();
        let widget = widget_with_cache(dir.path());
        let formatted = widget.format_status(&GitStatus {
            branch: "main".to_string(),
            staged: 3,
            modified: 5,
            untracked: 2,
            ahead: 1,
            behind: 4,
        });
        assert_eq!(formatted, "\u{1f33f} main +3 ~5 ?2 \u{2191}1 \u{2193}4");
    }

    #[test]
    fn test_absent_outside_repo() {
        let cache_dir = tempfile::tempdir().unwrap();
        let work_dir = tempfile::tempdir().unwrap();
        let widget = widget_with_cache(cache_dir.path());
        let snapshot = snapshot_in(&work_dir.path().to_string_lossy());
        assert_eq!(widget.render(&snapshot), None);
    }

    #[test]
    fn test_cached_status_short_circuits_git() {
        let cache_dir = tempfile::tempdir().unwrap();
        let work_dir = tempfile::tempdir().unwrap();
        let widget = widget_with_cache(cache_dir.path());
        let dir_str = work_dir.path().to_string_lossy().into_owned();

        // Pre-seed the cache; the directory is not a repo, so a render
        // that reaches git would return None instead.
        widget.cache.set(
            &format!("git-status-s1-{}", dir_str),
            GitStatus {
                branch: "cached-branch".to_string(),
                staged: 0,
                modified: 0,
                untracked: 0,
                ahead: 0,
                behind: 0,
            },
            60,
        );

        let rendered = widget.render(&snapshot_in(&dir_str)).unwrap();
        assert!(rendered.contains("cached-branch"));
    }

    #[test]
    fn test_absent_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let widget = widget_with_cache(dir.path());
        assert_eq!(widget.render(&Snapshot::default()), None);
    }
}
