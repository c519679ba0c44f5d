//! `cutover phases` — List lifecycle phases in orchestrator order.

use clap::Args;
use cutover_common::types::LifecyclePhase;

/// Arguments for the `phases` command.
#[derive(Args, Debug)]
pub struct PhasesArgs {
    /// Print slugs only, one per line.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Executes the `phases` command.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(args: &PhasesArgs) -> anyhow::Result<()> {
    for (index, phase) in LifecyclePhase::ALL.into_iter().enumerate() {
        if args.quiet {
            println!("{}", phase.slug());
        } else {
            println!("{}. {:<22} {}", index + 1, phase.slug(), phase.name());
        }
    }
    Ok(())
}
