//! `cutover rehearse` — Walk one event through every lifecycle phase.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use cutover_common::config::HookConfig;
use cutover_hooks::hook_set::HookSet;

use crate::output;

/// Arguments for the `rehearse` command.
#[derive(Args, Debug)]
pub struct RehearseArgs {
    /// Path to the JSON event, or `-` for stdin.
    #[arg(short, long, default_value = "-")]
    pub event: PathBuf,
}

/// Executes the `rehearse` command.
///
/// Invokes the phases in orchestrator order and stops after the first
/// failure, the way the orchestrator would roll back.
///
/// # Errors
///
/// Returns an error if the event cannot be read or is not JSON, or if any
/// phase failed.
pub fn execute(args: RehearseArgs, config: HookConfig) -> anyhow::Result<()> {
    let payload = super::read_event(&args.event)?;
    let event: serde_json::Value = serde_json::from_str(&payload)?;

    let invocations = HookSet::from_config(&config).rehearse(&event);
    let color = std::io::stdout().is_terminal();
    for invocation in &invocations {
        println!("{}", output::status_line(invocation, color));
    }

    if let Some(failed) = invocations
        .iter()
        .find(|i| !i.result.hook_status.is_success())
    {
        bail!(
            "rollout halted at {}: {}",
            failed.phase,
            failed.failure.as_deref().unwrap_or("hook failed")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use std::io::Write;

    use super::*;

    fn event_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_required_field_halts_at_first_phase() {
        let file = event_file("{}");
        let config = HookConfig {
            required_fields: vec!["serviceArn".into()],
            ..HookConfig::default()
        };

        let err = execute(RehearseArgs { event: file.path().to_path_buf() }, config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("rollout halted at BeforeInstall"), "{message}");
        assert!(message.contains("serviceArn"), "{message}");
    }

    #[test]
    fn complete_event_passes_every_phase() {
        let file = event_file(r#"{"serviceArn":"arn:x","targetServiceRevisionArn":"arn:y"}"#);
        let config = HookConfig {
            required_fields: vec!["serviceArn".into()],
            ..HookConfig::default()
        };

        assert!(execute(RehearseArgs { event: file.path().to_path_buf() }, config).is_ok());
    }

    #[test]
    fn malformed_event_is_a_command_error() {
        let file = event_file("{not json");
        let result = execute(
            RehearseArgs { event: file.path().to_path_buf() },
            HookConfig::default(),
        );
        assert!(result.is_err());
    }
}
