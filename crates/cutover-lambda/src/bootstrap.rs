//! Startup: configuration and phase selection from the environment.

use cutover_common::config::{HookConfig, LogFormat};
use cutover_common::constants::{ENV_FUNCTION_NAME, ENV_HOOK_PHASE};
use cutover_common::error::{CutoverError, Result};
use cutover_common::types::LifecyclePhase;

/// Loads the hook configuration. Logs default to JSON on the managed host.
pub fn load_config<F>(lookup: F) -> Result<HookConfig>
where
    F: Fn(&str) -> Option<String>,
{
    HookConfig {
        log_format: LogFormat::Json,
        ..HookConfig::default()
    }
    .with_env(lookup)
}

/// Resolves the phase this function serves.
///
/// An explicit `CUTOVER_HOOK_PHASE` wins; otherwise the phase is detected
/// from `AWS_LAMBDA_FUNCTION_NAME`.
pub fn resolve_phase<F>(lookup: F) -> Result<LifecyclePhase>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = lookup(ENV_HOOK_PHASE) {
        return name.parse();
    }
    let function_name = lookup(ENV_FUNCTION_NAME).unwrap_or_default();
    LifecyclePhase::from_function_name(&function_name).ok_or_else(|| CutoverError::Config {
        message: format!(
            "cannot determine lifecycle phase: set {ENV_HOOK_PHASE} or name the function \
             after its phase (function name: \"{function_name}\")"
        ),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn explicit_phase_wins_over_function_name() {
        let phase = resolve_phase(env(&[
            ("CUTOVER_HOOK_PHASE", "after-install"),
            ("AWS_LAMBDA_FUNCTION_NAME", "Stack-BeforeInstallHook-ABC"),
        ]))
        .unwrap();
        assert_eq!(phase, LifecyclePhase::AfterInstall);
    }

    #[test]
    fn phase_detected_from_function_name() {
        let phase =
            resolve_phase(env(&[("AWS_LAMBDA_FUNCTION_NAME", "Stack-BeforeAllowTrafficHook-1")]))
                .unwrap();
        assert_eq!(phase, LifecyclePhase::BeforeAllowTraffic);
    }

    #[test]
    fn invalid_explicit_phase_is_rejected() {
        let err = resolve_phase(env(&[("CUTOVER_HOOK_PHASE", "sometime")])).unwrap_err();
        assert!(matches!(err, CutoverError::UnknownPhase { .. }));
    }

    #[test]
    fn undetectable_phase_is_config_error() {
        let err = resolve_phase(env(&[("AWS_LAMBDA_FUNCTION_NAME", "my-function")])).unwrap_err();
        assert!(matches!(err, CutoverError::Config { .. }));
    }

    #[test]
    fn config_defaults_to_json_logs() {
        let config = load_config(env(&[])).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);

        let config = load_config(env(&[("CUTOVER_LOG_FORMAT", "text")])).unwrap();
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
