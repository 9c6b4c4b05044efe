//! The `render` subcommand: one snapshot in, one status line out.
//!
//! Invoked by Claude Code on every statusline tick via the `statusLine`
//! setting. The contract with the host is strict: whatever happens
//! internally, print at most the status line and exit 0 -- a visible
//! failure here degrades the user's editing session, not just the
//! status display.

use std::io::Read;
use std::sync::Arc;

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::cache::CacheManager;
use crate::config;
use crate::diag;
use crate::input::Snapshot;
use crate::layout::LayoutEngine;

/// Arguments for the `render` subcommand.
#[derive(ClapArgs)]
pub struct Args {
    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}

/// Entry point. Wraps `run_inner` in `catch_unwind` so that panics are
/// swallowed and the process always exits 0.
pub fn run(args: Args) -> Result<()> {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_inner(args)));

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => {
            println!();
            Ok(())
        }
        Err(_) => {
            println!();
            Ok(())
        }
    }
}

fn run_inner(args: Args) -> Result<()> {
    // Claude Code pipes stdout (not a TTY), so colored would normally
    // disable colors. Force them on unless --no-color or NO_COLOR is set.
    if args.no_color || std::env::var("NO_COLOR").is_ok() {
        colored::control::set_override(false);
    } else {
        colored::control::set_override(true);
    }

    let config = config::load();
    diag::init(&config.debug);

    // Malformed or empty top-level input is a fatal-but-silent case:
    // emit nothing and exit 0.
    let Some(snapshot) = parse_stdin() else {
        tracing::debug!("unparseable snapshot on stdin; emitting empty output");
        println!();
        return Ok(());
    };

    let cache = Arc::new(CacheManager::new(&config.cache.directory));
    cache.initialize();

    if config.cache.cleanup_on_start {
        cleanup_once_per_session(&cache, snapshot.session_id.as_deref());
    }

    let engine = LayoutEngine::from_config(&config, Arc::clone(&cache));

    if config.debug.measure_performance {
        let timings = engine.measure(&snapshot);
        tracing::debug!(total_ms = timings.total_ms, "render measured");
        for (name, ms) in &timings.widgets {
            tracing::debug!(widget = name, ms, "widget timing");
        }
    }

    println!("{}", engine.render(&snapshot));
    Ok(())
}

/// Parse the snapshot JSON from stdin. Reads at most 256KB to avoid
/// blocking on a runaway input.
fn parse_stdin() -> Option<Snapshot> {
    let mut buf = Vec::with_capacity(65536);
    std::io::stdin()
        .lock()
        .take(262_144)
        .read_to_end(&mut buf)
        .ok()?;

    serde_json::from_slice(&buf).ok()
}

/// Sweep the cache at most once per session, guarded by a cached marker
/// so later ticks of the same session skip it.
fn cleanup_once_per_session(cache: &CacheManager, session_id: Option<&str>) {
    let marker = format!("cleanup-{}", session_id.unwrap_or("unknown"));
    if cache.get::<bool>(&marker).is_none() {
        cache.clear();
        cache.set(&marker, true, 3600);
    }
}
