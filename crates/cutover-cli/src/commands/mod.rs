//! CLI command definitions and dispatch.

pub mod invoke;
pub mod phases;
pub mod rehearse;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cutover_common::config::{HookConfig, LogFormat};

/// Cutover — blue/green deployment lifecycle hooks.
#[derive(Parser, Debug)]
#[command(name = "cutover", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON hook configuration file.
    #[arg(long, global = true, env = "CUTOVER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format (text or json). Overrides the configuration.
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Loads the hook configuration, applying command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file or environment is invalid.
    pub fn load_config(&self) -> anyhow::Result<HookConfig> {
        let mut config = HookConfig::load(self.config.as_deref())?;
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        Ok(config)
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Invoke the hook for one lifecycle phase and print its result.
    Invoke(invoke::InvokeArgs),
    /// Run every phase in order against one event, stopping at a failure.
    Rehearse(rehearse::RehearseArgs),
    /// List the lifecycle phases in orchestrator order.
    Phases(phases::PhasesArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli, config: HookConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::Invoke(args) => invoke::execute(args, config),
        Command::Rehearse(args) => rehearse::execute(args, config),
        Command::Phases(args) => phases::execute(&args),
    }
}

/// Reads a raw event payload from a file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub fn read_event(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut payload = String::new();
        let _ = std::io::stdin()
            .read_to_string(&mut payload)
            .context("failed to read event from stdin")?;
        return Ok(payload);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event file {}", path.display()))
}
