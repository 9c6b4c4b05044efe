//! The `hook` subcommands: SubagentStart / SubagentStop handlers.
//!
//! Claude Code invokes these with one JSON event on stdin. Hook
//! failures would surface inside the user's session, so both handlers
//! swallow everything -- bad JSON, unwritable state, panics -- and
//! exit 0 regardless.

use std::io::Read;

use anyhow::Result;
use clap::{Args as ClapArgs, Subcommand};
use serde_json::Value;

use crate::state::{StateFile, SubagentEntry};
use crate::util::now_ms;

/// Arguments for the `hook` subcommand.
#[derive(ClapArgs)]
pub struct Args {
    #[command(subcommand)]
    pub command: HookCommand,
}

#[derive(Subcommand)]
pub enum HookCommand {
    /// Record a subagent that just started
    SubagentStart,

    /// Drop a subagent that just stopped
    SubagentStop,
}

pub fn run(args: Args) -> Result<()> {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| match args.command {
        HookCommand::SubagentStart => on_start(),
        HookCommand::SubagentStop => on_stop(),
    }));

    if let Ok(Err(error)) = result {
        tracing::debug!(%error, "hook handler failed");
    }
    Ok(())
}

/// Read the hook event from stdin. `None` on empty or unparseable
/// input.
fn read_event() -> Option<Value> {
    let mut buf = Vec::with_capacity(4096);
    std::io::stdin()
        .lock()
        .take(65536)
        .read_to_end(&mut buf)
        .ok()?;

    if buf.iter().all(|b| b.is_ascii_whitespace()) {
        return None;
    }
    serde_json::from_slice(&buf).ok()
}

/// Look a field up under each accepted spelling, in priority order.
/// Claude Code has shipped both snake_case and camelCase forms of the
/// hook fields; this is the normalization point for all of them.
fn field<'a>(event: &'a Value, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|key| event.get(*key).and_then(Value::as_str))
}

fn entry_from_event(event: &Value) -> SubagentEntry {
    SubagentEntry {
        agent_id: field(event, &["agent_id", "agentId"])
            .map(str::to_string)
            .unwrap_or_else(|| format!("unknown-{}", now_ms())),
        agent_type: field(event, &["agent_type", "agentType", "type"])
            .unwrap_or("unknown")
            .to_string(),
        model: field(event, &["model", "model_id"])
            .unwrap_or("unknown")
            .to_string(),
        started_at: now_ms(),
        transcript_path: field(event, &["transcript_path", "transcriptPath"]).map(str::to_string),
        session_id: field(event, &["session_id", "sessionId"])
            .unwrap_or("unknown")
            .to_string(),
    }
}

fn on_start() -> Result<()> {
    let Some(event) = read_event() else {
        return Ok(());
    };
    StateFile::at_default().add_agent(entry_from_event(&event))
}

fn on_stop() -> Result<()> {
    let Some(event) = read_event() else {
        return Ok(());
    };

    if let Some(agent_id) = field(&event, &["agent_id", "agentId"]) {
        if !agent_id.is_empty() {
            StateFile::at_default().remove_agent(agent_id)?;
        }
    }
    Ok(())
}
