//! The generic lifecycle hook handler.
//!
//! One [`LifecycleHook`] serves one phase. An invocation logs the phase and
//! the event, reports the fields the phase extracts, and asks its decision
//! for a status. Errors and panics raised by the decision become
//! [`HookStatus::Failed`]; nothing propagates to the caller.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use cutover_common::config::HookConfig;
use cutover_common::types::{HookResult, HookStatus, LifecyclePhase};
use serde_json::Value;

use crate::decision::{AlwaysSucceed, Decision};
use crate::event::DeploymentEvent;

/// Report of a single hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Phase that was invoked.
    pub phase: LifecyclePhase,
    /// Result returned to the orchestrator.
    pub result: HookResult,
    /// Extracted `(label, value)` pairs, in reporting order.
    pub details: Vec<(&'static str, String)>,
    /// Why the hook failed, when it did.
    pub failure: Option<String>,
    /// RFC 3339 timestamp of the invocation.
    pub invoked_at: String,
}

impl Invocation {
    /// Returns the reported value for a detail label.
    #[must_use]
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// A lifecycle hook bound to one phase.
///
/// Cloning is cheap; clones share configuration and decision.
#[derive(Clone)]
pub struct LifecycleHook {
    phase: LifecyclePhase,
    config: Arc<HookConfig>,
    decision: Arc<dyn Decision>,
}

impl LifecycleHook {
    /// Creates a hook with default configuration that always succeeds.
    #[must_use]
    pub fn new(phase: LifecyclePhase) -> Self {
        Self::from_parts(phase, Arc::new(HookConfig::default()), Arc::new(AlwaysSucceed))
    }

    pub(crate) fn from_parts(
        phase: LifecyclePhase,
        config: Arc<HookConfig>,
        decision: Arc<dyn Decision>,
    ) -> Self {
        Self {
            phase,
            config,
            decision,
        }
    }

    /// Returns the phase this hook serves.
    #[must_use]
    pub const fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Returns the hook configuration.
    #[must_use]
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Handles an event and returns the orchestrator-facing result.
    #[must_use]
    pub fn handle(&self, payload: &Value) -> HookResult {
        self.invoke(payload).result
    }

    /// Handles a raw JSON payload. A payload that is not JSON fails the hook.
    #[must_use]
    pub fn handle_raw(&self, payload: &str) -> HookResult {
        self.invoke_raw(payload).result
    }

    /// Handles a raw JSON payload and returns the full invocation report.
    #[must_use]
    pub fn invoke_raw(&self, payload: &str) -> Invocation {
        match serde_json::from_str::<Value>(payload) {
            Ok(value) => self.invoke(&value),
            Err(e) => {
                tracing::error!(phase = %self.phase, error = %e, "malformed deployment event");
                self.report(HookStatus::Failed, Vec::new(), Some(format!("malformed event: {e}")))
            }
        }
    }

    /// Handles an event and returns the full invocation report.
    #[must_use]
    pub fn invoke(&self, payload: &Value) -> Invocation {
        let span = tracing::info_span!("hook", phase = %self.phase);
        let _entered = span.enter();

        tracing::info!("{} hook triggered", self.phase);
        let event = DeploymentEvent::from_value(payload.clone());
        if self.config.log_event_payload {
            tracing::info!("{}", event.to_pretty_json());
        }

        let details: Vec<(&'static str, String)> = self
            .phase
            .logged_fields()
            .iter()
            .map(|field| {
                let value = event.field_or(*field, &self.config.fallback_value);
                (field.label(), value.to_string())
            })
            .collect();
        for (label, value) in &details {
            tracing::info!("{label}: {value}");
        }

        let (status, failure) = self.decide(&event);
        tracing::info!(status = %status, "hook completed");
        self.report(status, details, failure)
    }

    fn decide(&self, event: &DeploymentEvent) -> (HookStatus, Option<String>) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.decision.decide(self.phase, event)));
        match outcome {
            Ok(Ok(HookStatus::Succeeded)) => (HookStatus::Succeeded, None),
            Ok(Ok(HookStatus::Failed)) => {
                tracing::warn!("decision rejected the deployment");
                (HookStatus::Failed, Some("decision returned FAILED".to_string()))
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "decision failed");
                (HookStatus::Failed, Some(e.to_string()))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(panic = %message, "decision panicked");
                (HookStatus::Failed, Some(format!("decision panicked: {message}")))
            }
        }
    }

    fn report(
        &self,
        status: HookStatus,
        details: Vec<(&'static str, String)>,
        failure: Option<String>,
    ) -> Invocation {
        Invocation {
            phase: self.phase,
            result: HookResult::from(status),
            details,
            failure,
            invoked_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl fmt::Debug for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHook")
            .field("phase", &self.phase)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
