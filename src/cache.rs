//! File-backed TTL cache.
//!
//! One JSON file per sanitized key under a cache directory, each holding
//! the payload plus an absolute expiry timestamp. Expired entries are
//! detected and removed lazily on the next `get` -- there is no
//! background sweep.
//!
//! The cache is a performance layer, never a correctness dependency:
//! every operation swallows storage errors and degrades to a miss or a
//! no-op, so a broken cache directory can never abort a render.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::util::now_ms;

/// One persisted cache record.
#[derive(Serialize, Deserialize)]
struct CacheEntry<T> {
    data: T,
    /// Absolute expiry in epoch milliseconds.
    expires_at: u64,
}

pub struct CacheManager {
    dir: PathBuf,
}

impl CacheManager {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the cache directory. Idempotent and infallible from the
    /// caller's point of view: if the directory cannot be created, every
    /// later operation degrades to a miss.
    pub fn initialize(&self) {
        let _ = std::fs::create_dir_all(&self.dir);
    }

    /// Look up `key`, returning the stored value if present and
    /// unexpired. An entry read past its expiry is deleted on the spot.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.entry_path(key);
        let contents = std::fs::read_to_string(&path).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&contents).ok()?;

        if now_ms() > entry.expires_at {
            let _ = std::fs::remove_file(&path);
            return None;
        }

        Some(entry.data)
    }

    /// Store `data` under `key` for `ttl_secs` seconds, replacing any
    /// prior entry for that key.
    pub fn set<T: Serialize>(&self, key: &str, data: T, ttl_secs: u64) {
        let entry = CacheEntry {
            data,
            expires_at: now_ms().saturating_add(ttl_secs.saturating_mul(1000)),
        };

        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = std::fs::write(self.entry_path(key), json);
        }
    }

    /// Remove one entry. Missing entries are a no-op.
    pub fn delete(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }

    /// Remove every entry in the cache directory.
    pub fn clear(&self) {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let is_cache_file = path
                .extension()
                .map(|ext| ext == "json")
                .unwrap_or(false);
            if is_cache_file {
                let _ = std::fs::remove_file(path);
            }
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Map an arbitrary key to a safe file stem. Anything outside
/// `[A-Za-z0-9_-]` becomes `-`, which also defuses path traversal in
/// keys derived from user-controlled paths.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
