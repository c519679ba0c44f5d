//! Domain primitive types: lifecycle phases, event fields, and hook results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::CutoverError;

/// A phase of a blue/green rollout at which the orchestrator calls a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifecyclePhase {
    /// Before the replacement task set is installed.
    BeforeInstall,
    /// After the replacement task set is installed, before it serves traffic.
    AfterInstall,
    /// Before production traffic is shifted to the replacement task set.
    BeforeAllowTraffic,
    /// After production traffic has been shifted.
    AfterAllowTraffic,
}

impl LifecyclePhase {
    /// All phases, in the order the orchestrator invokes them.
    pub const ALL: [Self; 4] = [
        Self::BeforeInstall,
        Self::AfterInstall,
        Self::BeforeAllowTraffic,
        Self::AfterAllowTraffic,
    ];

    /// Returns the PascalCase name used in log lines and function names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BeforeInstall => "BeforeInstall",
            Self::AfterInstall => "AfterInstall",
            Self::BeforeAllowTraffic => "BeforeAllowTraffic",
            Self::AfterAllowTraffic => "AfterAllowTraffic",
        }
    }

    /// Returns the kebab-case slug used on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BeforeInstall => "before-install",
            Self::AfterInstall => "after-install",
            Self::BeforeAllowTraffic => "before-allow-traffic",
            Self::AfterAllowTraffic => "after-allow-traffic",
        }
    }

    /// Returns the phase the orchestrator runs after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::BeforeInstall => Some(Self::AfterInstall),
            Self::AfterInstall => Some(Self::BeforeAllowTraffic),
            Self::BeforeAllowTraffic => Some(Self::AfterAllowTraffic),
            Self::AfterAllowTraffic => None,
        }
    }

    /// Event fields this phase extracts and reports on every invocation.
    #[must_use]
    pub const fn logged_fields(self) -> &'static [EventField] {
        match self {
            Self::BeforeInstall => &[EventField::ServiceArn, EventField::TargetServiceRevisionArn],
            Self::AfterInstall | Self::BeforeAllowTraffic | Self::AfterAllowTraffic => &[],
        }
    }

    /// Detects the phase served by a managed function from its name.
    ///
    /// Matching ignores case, dashes, and underscores, so both
    /// `stack-BeforeInstallHook-1A2B` and `before_install_hook` resolve.
    #[must_use]
    pub fn from_function_name(function_name: &str) -> Option<Self> {
        let normalized = normalize(function_name);
        Self::ALL
            .into_iter()
            .find(|phase| normalized.contains(&normalize(phase.name())))
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LifecyclePhase {
    type Err = CutoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        Self::ALL
            .into_iter()
            .find(|phase| normalize(phase.name()) == wanted)
            .ok_or_else(|| CutoverError::UnknownPhase { name: s.to_string() })
    }
}

/// A named field of the deployment event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    /// ARN of the service being deployed.
    ServiceArn,
    /// ARN of the revision being rolled out.
    TargetServiceRevisionArn,
}

impl EventField {
    /// Key of the field in the event payload.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ServiceArn => constants::SERVICE_ARN_KEY,
            Self::TargetServiceRevisionArn => constants::TARGET_REVISION_ARN_KEY,
        }
    }

    /// Label used when the field is reported.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ServiceArn => "ServiceArn",
            Self::TargetServiceRevisionArn => "TargetServiceRevisionArn",
        }
    }
}

/// Outcome signal returned to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HookStatus {
    /// The rollout may continue.
    Succeeded,
    /// The rollout must stop and roll back.
    Failed,
}

impl HookStatus {
    /// Returns `true` for [`HookStatus::Succeeded`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for HookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "SUCCEEDED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Result record returned to the orchestrator: `{"hookStatus": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResult {
    /// The outcome of the hook.
    pub hook_status: HookStatus,
}

impl HookResult {
    /// A result that lets the rollout continue.
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            hook_status: HookStatus::Succeeded,
        }
    }

    /// A result that aborts the rollout.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            hook_status: HookStatus::Failed,
        }
    }
}

impl From<HookStatus> for HookResult {
    fn from(hook_status: HookStatus) -> Self {
        Self { hook_status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_orchestrator_order() {
        let mut phase = LifecyclePhase::BeforeInstall;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            seen.push(next);
            phase = next;
        }
        assert_eq!(seen, LifecyclePhase::ALL);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        for input in [
            "BeforeAllowTraffic",
            "before-allow-traffic",
            "before_allow_traffic",
            "BEFORE_ALLOW_TRAFFIC",
            " beforeallowtraffic ",
        ] {
            let phase: LifecyclePhase = input.parse().unwrap();
            assert_eq!(phase, LifecyclePhase::BeforeAllowTraffic, "input {input:?}");
        }
    }

    #[test]
    fn parse_rejects_unknown_phase() {
        let err = "during-install".parse::<LifecyclePhase>().unwrap_err();
        assert!(matches!(err, CutoverError::UnknownPhase { name } if name == "during-install"));
    }

    #[test]
    fn slug_parses_back_to_phase() {
        for phase in LifecyclePhase::ALL {
            assert_eq!(phase.slug().parse::<LifecyclePhase>().unwrap(), phase);
        }
    }

    #[test]
    fn only_before_install_reports_fields() {
        assert_eq!(LifecyclePhase::BeforeInstall.logged_fields().len(), 2);
        for phase in &LifecyclePhase::ALL[1..] {
            assert!(phase.logged_fields().is_empty());
        }
    }

    #[test]
    fn function_name_detection() {
        assert_eq!(
            LifecyclePhase::from_function_name("InfraStack-PipelineBeforeInstallHook9F3A-xyz"),
            Some(LifecyclePhase::BeforeInstall)
        );
        assert_eq!(
            LifecyclePhase::from_function_name("after_allow_traffic_hook"),
            Some(LifecyclePhase::AfterAllowTraffic)
        );
        assert_eq!(LifecyclePhase::from_function_name("unrelated-function"), None);
    }

    #[test]
    fn hook_result_wire_format() {
        let json = serde_json::to_string(&HookResult::succeeded()).unwrap();
        assert_eq!(json, r#"{"hookStatus":"SUCCEEDED"}"#);
        let json = serde_json::to_string(&HookResult::failed()).unwrap();
        assert_eq!(json, r#"{"hookStatus":"FAILED"}"#);
    }

    #[test]
    fn hook_status_display_matches_wire() {
        assert_eq!(HookStatus::Succeeded.to_string(), "SUCCEEDED");
        assert_eq!(HookStatus::Failed.to_string(), "FAILED");
    }
}
