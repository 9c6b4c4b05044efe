mod cache;
mod cli;
mod color;
mod config;
mod diag;
mod git;
mod input;
mod layout;
mod state;
mod timefmt;
mod transcript;
mod usage;
mod util;
mod widgets;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => cli::render::run(args),
        Command::Hook(args) => cli::hook::run(args),
    }
}
