pub mod hook;
pub mod render;

use clap::{Parser, Subcommand};

/// Configurable multi-widget statusline for Claude Code
#[derive(Parser)]
#[command(name = "claude-statusline", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the statusline from a JSON snapshot on stdin
    Render(render::Args),

    /// Subagent lifecycle hooks invoked by Claude Code
    Hook(hook::Args),
}
