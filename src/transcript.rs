//! Transcript token counter.
//!
//! Subagent transcripts are line-delimited JSON event logs that grow for
//! as long as the agent runs. Re-parsing a multi-megabyte log on every
//! render tick would dominate the render cost, so parse results are
//! memoized in the TTL cache keyed by path and invalidated whenever the
//! file's mtime or size changes -- a cheap proxy for "file changed"
//! that avoids content hashing.

use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::CacheManager;

/// Memoized parse result for one transcript file.
#[derive(Serialize, Deserialize)]
struct CachedTokenData {
    tokens: u64,
    /// File mtime in epoch ms at parse time.
    mtime: u64,
    /// File size in bytes at parse time.
    size: u64,
}

pub(crate) fn cache_key(path: &str) -> String {
    format!("jsonl-tokens-{}", path)
}

/// Total tokens consumed by a subagent, summed from its transcript.
///
/// Returns `None` if the file cannot be statted or read. An empty file
/// or a file with no usage records yields `Some(0)`. Lines that fail to
/// parse as JSON are skipped.
pub fn transcript_tokens(path: &str, cache: &CacheManager, ttl_secs: u64) -> Option<u64> {
    let meta = std::fs::metadata(path).ok()?;
    let mtime = meta
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let size = meta.len();

    let key = cache_key(path);
    if let Some(cached) = cache.get::<CachedTokenData>(&key) {
        if cached.mtime == mtime && cached.size == size {
            return Some(cached.tokens);
        }
    }

    let content = std::fs::read_to_string(path).ok()?;
    let mut total: u64 = 0;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: Value = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(_) => continue,
        };
        if let Some(usage) = usage_object(&record) {
            total = total
                .saturating_add(token_field(usage, "input_tokens"))
                .saturating_add(token_field(usage, "output_tokens"));
        }
    }

    cache.set(&key, CachedTokenData { tokens: total, mtime, size }, ttl_secs);
    Some(total)
}

/// Locate the usage value at any of the nesting paths the event log
/// uses: top-level `usage`, `message.usage`, or `response.usage`. An
/// absent or explicitly-null path falls through to the next candidate;
/// any other value ends the search (a non-object simply has no token
/// fields and contributes 0).
fn usage_object(record: &Value) -> Option<&Value> {
    fn non_null(value: Option<&Value>) -> Option<&Value> {
        value.filter(|u| !u.is_null())
    }

    non_null(record.get("usage"))
        .or_else(|| non_null(record.get("message").and_then(|m| m.get("usage"))))
        .or_else(|| non_null(record.get("response").and_then(|r| r.get("usage"))))
}

fn token_field(usage: &Value, field: &str) -> u64 {
    usage.get(field).and_then(Value::as_u64).unwrap_or(0)
}

/// Render a token count compactly: bare integer under 1000, then `K` /
/// `M` with one decimal below ten units and a rounded integer from ten
/// units up (999 -> "999", 1000 -> "1.0K", 12500 -> "13K",
/// 10000000 -> "10M").
pub fn format_token_count(tokens: u64) -> String {
    if tokens >= 1_000_000 {
        let millions = tokens as f64 / 1_000_000.0;
        if millions >= 10.0 {
            format!("{}M", millions.round() as u64)
        } else {
            format!("{:.1}M", millions)
        }
    } else if tokens >= 1_000 {
        let thousands = tokens as f64 / 1_000.0;
        if thousands >= 10.0 {
            format!("{}K", thousands.round() as u64)
        } else {
            format!("{:.1}K", thousands)
        }
    } else {
        tokens.to_string()
    }
}
