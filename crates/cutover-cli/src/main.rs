//! # cutover — lifecycle hook CLI
//!
//! Invokes blue/green deployment lifecycle hooks locally, one phase at a
//! time or as a full rehearsed rollout.

mod commands;
mod output;

use std::io::IsTerminal;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    cutover_hooks::logging::init(config.log_format, std::io::stderr().is_terminal())?;

    commands::execute(cli, config)
}
