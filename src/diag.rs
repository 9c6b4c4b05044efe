//! Opt-in diagnostic logging.
//!
//! The render path must stay silent on stderr/stdout beyond the status
//! line itself, so diagnostics go to a log file -- and only when asked
//! for via the `STATUSLINE_DEBUG` env flag or the config's
//! `debug.logErrors` switch. Without a subscriber installed, every
//! `tracing` call in the crate is a no-op.

use std::sync::Mutex;

use crate::config::schema::DebugConfig;

pub const DEBUG_ENV: &str = "STATUSLINE_DEBUG";

/// Install a file-backed tracing subscriber if diagnostics are enabled.
/// Any failure to open the log file quietly leaves logging off.
pub fn init(debug: &DebugConfig) {
    let enabled = debug.log_errors || std::env::var(DEBUG_ENV).is_ok();
    if !enabled {
        return;
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&debug.error_log_path)
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
