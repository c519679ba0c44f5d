//! System-wide constants: wire keys, environment variables, and defaults.

/// Value substituted for event fields that are absent or not strings.
pub const NOT_AVAILABLE: &str = "N/A";

/// Event key holding the ARN of the service being deployed.
pub const SERVICE_ARN_KEY: &str = "serviceArn";

/// Event key holding the ARN of the service revision being rolled out.
pub const TARGET_REVISION_ARN_KEY: &str = "targetServiceRevisionArn";

/// Result key read by the orchestrator.
pub const HOOK_STATUS_KEY: &str = "hookStatus";

/// Selects the phase served by a managed function instance.
pub const ENV_HOOK_PHASE: &str = "CUTOVER_HOOK_PHASE";
/// Overrides the fallback value for absent event fields.
pub const ENV_FALLBACK_VALUE: &str = "CUTOVER_FALLBACK_VALUE";
/// Selects the log formatter (`text` or `json`).
pub const ENV_LOG_FORMAT: &str = "CUTOVER_LOG_FORMAT";
/// Toggles logging of the full event payload.
pub const ENV_LOG_EVENT: &str = "CUTOVER_LOG_EVENT";
/// Comma-separated event keys that must be present for a hook to succeed.
pub const ENV_REQUIRED_FIELDS: &str = "CUTOVER_REQUIRED_FIELDS";
/// Function name injected by the managed function host.
pub const ENV_FUNCTION_NAME: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
