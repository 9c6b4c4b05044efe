//! Shared subagent state file.
//!
//! A single JSON document listing the subagents currently running,
//! appended to by the SubagentStart hook, pruned by the SubagentStop
//! hook, and read by the subagents widget during renders. Writes go
//! through a temp-file-then-rename so readers never observe a
//! half-written document; mutations additionally serialize through a
//! sibling lock file so concurrent hooks cannot lose each other's
//! read-modify-write.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::util::now_ms;

/// Well-known location shared by hooks and renders.
pub const DEFAULT_STATE_PATH: &str = "/tmp/claude-subagent-state.json";

/// One currently-running subagent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubagentEntry {
    pub agent_id: String,
    pub agent_type: String,
    pub model: String,
    /// Epoch ms when the start hook fired.
    pub started_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_path: Option<String>,
    pub session_id: String,
}

/// Root state document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubagentState {
    #[serde(default)]
    pub active: Vec<SubagentEntry>,
    #[serde(default)]
    pub last_updated: u64,
}

pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The shared state location: `STATUSLINE_STATE_FILE` if set (tests
    /// redirect through this), otherwise the well-known path.
    pub fn default_path() -> PathBuf {
        std::env::var("STATUSLINE_STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATE_PATH))
    }

    pub fn at_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Read the current state. A missing, unreadable, or structurally
    /// invalid document (e.g. `active` is not an array) reads as the
    /// empty state -- never an error.
    pub fn read(&self) -> SubagentState {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => SubagentState::default(),
        }
    }

    /// Persist `state`, stamping `last_updated` with the current time.
    /// Writes a sibling temp file and renames it over the canonical path
    /// so concurrent readers see either the old or the new document.
    pub fn write(&self, state: &mut SubagentState) -> Result<()> {
        state.last_updated = now_ms();

        let json = serde_json::to_string_pretty(state)?;
        let tmp = PathBuf::from(format!("{}.tmp", self.path.display()));

        std::fs::write(&tmp, json)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;

        Ok(())
    }

    /// Record `entry` in the active list, replacing any prior entry with
    /// the same `agent_id` (last write wins, latest fields preserved).
    pub fn add_agent(&self, entry: SubagentEntry) -> Result<()> {
        let _guard = self.lock();
        let mut state = self.read();
        state.active.retain(|a| a.agent_id != entry.agent_id);
        state.active.push(entry);
        self.write(&mut state)
    }

    /// Drop the entry with `agent_id` from the active list. Removing an
    /// id that is not present is a silent no-op.
    pub fn remove_agent(&self, agent_id: &str) -> Result<()> {
        let _guard = self.lock();
        let mut state = self.read();
        state.active.retain(|a| a.agent_id != agent_id);
        self.write(&mut state)
    }

    /// Serialize mutations through a sibling `.lock` file so two hooks
    /// racing cannot drop each other's read-modify-write. A lock older
    /// than two seconds is treated as abandoned by a crashed hook and
    /// reclaimed. If the lock cannot be acquired at all, the mutation
    /// proceeds unlocked; the state is advisory and a rare lost update
    /// beats a hook that hangs.
    fn lock(&self) -> Option<LockGuard> {
        let path = PathBuf::from(format!("{}.lock", self.path.display()));

        for _ in 0..200 {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Some(LockGuard { path }),
                Err(_) => {
                    let stale = std::fs::metadata(&path)
                        .and_then(|m| m.modified())
                        .ok()
                        .and_then(|modified| modified.elapsed().ok())
                        .map(|age| age > Duration::from_secs(2))
                        .unwrap_or(false);
                    if stale {
                        let _ = std::fs::remove_file(&path);
                        continue;
                    }
                    std::thread::sleep(Duration::from_millis(5));
                }
            }
        }
        None
    }
}

struct LockGuard {
    path: PathBuf,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
