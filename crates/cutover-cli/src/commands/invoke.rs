//! `cutover invoke` — Invoke the hook for a single lifecycle phase.

use std::path::PathBuf;

use clap::Args;
use cutover_common::config::HookConfig;
use cutover_common::types::LifecyclePhase;
use cutover_hooks::builder::HookBuilder;

use crate::output;

/// Arguments for the `invoke` command.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Lifecycle phase to invoke (e.g. before-install).
    pub phase: LifecyclePhase,

    /// Path to the JSON event, or `-` for stdin.
    #[arg(short, long, default_value = "-")]
    pub event: PathBuf,

    /// Also print the extracted event details to stderr.
    #[arg(long)]
    pub details: bool,
}

/// Executes the `invoke` command.
///
/// Prints the orchestrator-facing result as JSON on stdout. A malformed
/// event is reported as `FAILED`, not as a command error.
///
/// # Errors
///
/// Returns an error if the event cannot be read.
pub fn execute(args: InvokeArgs, config: HookConfig) -> anyhow::Result<()> {
    let payload = super::read_event(&args.event)?;
    let hook = HookBuilder::new(args.phase).config(config).build();
    let invocation = hook.invoke_raw(&payload);
    tracing::debug!(phase = %args.phase, status = %invocation.result.hook_status, "invoked");

    if args.details {
        for line in output::detail_lines(&invocation) {
            eprintln!("{line}");
        }
    }
    println!("{}", serde_json::to_string(&invocation.result)?);
    Ok(())
}
