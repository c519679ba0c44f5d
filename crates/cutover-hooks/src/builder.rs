//! Fluent API for configuring lifecycle hooks.

use std::sync::Arc;

use cutover_common::config::HookConfig;
use cutover_common::types::LifecyclePhase;

use crate::decision::{AlwaysSucceed, Decision, RequireFields};
use crate::handler::LifecycleHook;

/// Builder for a [`LifecycleHook`].
pub struct HookBuilder {
    phase: LifecyclePhase,
    config: HookConfig,
    decision: Option<Arc<dyn Decision>>,
}

impl HookBuilder {
    /// Creates a builder for the given phase with default configuration.
    #[must_use]
    pub fn new(phase: LifecyclePhase) -> Self {
        Self {
            phase,
            config: HookConfig::default(),
            decision: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn config(mut self, config: HookConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the value reported for absent event fields.
    #[must_use]
    pub fn fallback_value(mut self, value: impl Into<String>) -> Self {
        self.config.fallback_value = value.into();
        self
    }

    /// Sets whether the full event payload is logged.
    #[must_use]
    pub const fn log_event_payload(mut self, enabled: bool) -> Self {
        self.config.log_event_payload = enabled;
        self
    }

    /// Sets the decision consulted on every invocation.
    #[must_use]
    pub fn decision(mut self, decision: impl Decision + 'static) -> Self {
        self.decision = Some(Arc::new(decision));
        self
    }

    /// Sets an already shared decision.
    #[must_use]
    pub fn shared_decision(mut self, decision: Arc<dyn Decision>) -> Self {
        self.decision = Some(decision);
        self
    }

    /// Builds the hook.
    ///
    /// Without an explicit decision, the hook requires the configured
    /// `required_fields` when there are any, and otherwise always succeeds.
    #[must_use]
    pub fn build(self) -> LifecycleHook {
        let decision = self
            .decision
            .unwrap_or_else(|| default_decision(&self.config));
        LifecycleHook::from_parts(self.phase, Arc::new(self.config), decision)
    }
}

/// Returns the decision implied by a configuration alone.
#[must_use]
pub fn default_decision(config: &HookConfig) -> Arc<dyn Decision> {
    if config.required_fields.is_empty() {
        Arc::new(AlwaysSucceed)
    } else {
        Arc::new(RequireFields::new(config.required_fields.iter().cloned()))
    }
}
