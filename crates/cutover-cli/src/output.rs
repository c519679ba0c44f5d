//! Formatted output helpers for CLI commands.
//!
//! Provides status lines with colored indicators and detail listings for
//! hook invocations.

use cutover_common::types::HookStatus;
use cutover_hooks::handler::Invocation;

const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Formats one line per phase, e.g. `● BeforeInstall        SUCCEEDED`.
///
/// ANSI colors are emitted only when `color` is set.
#[must_use]
pub fn status_line(invocation: &Invocation, color: bool) -> String {
    let status = invocation.result.hook_status;
    let mut line = if color {
        let tint = match status {
            HookStatus::Succeeded => GREEN,
            HookStatus::Failed => RED,
        };
        format!(
            "  {tint}●{RESET} {BOLD}{:<20}{RESET} {tint}{status}{RESET}",
            invocation.phase.name()
        )
    } else {
        format!("  ● {:<20} {status}", invocation.phase.name())
    };
    if let Some(reason) = &invocation.failure {
        line.push_str(&format!(" ({reason})"));
    }
    line
}

/// Formats the extracted details of an invocation as `Label: value` lines.
#[must_use]
pub fn detail_lines(invocation: &Invocation) -> Vec<String> {
    let mut lines: Vec<String> = invocation
        .details
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    if let Some(reason) = &invocation.failure {
        lines.push(format!("Failure: {reason}"));
    }
    lines.push(format!("Invoked at: {}", invocation.invoked_at));
    lines
}
