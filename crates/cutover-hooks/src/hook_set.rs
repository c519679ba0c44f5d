//! The full set of rollout hooks and local rehearsal of a rollout.

use std::sync::Arc;

use cutover_common::config::HookConfig;
use cutover_common::types::LifecyclePhase;
use serde_json::Value;

use crate::builder::{HookBuilder, default_decision};
use crate::decision::Decision;
use crate::handler::{Invocation, LifecycleHook};

/// One hook per lifecycle phase, sharing configuration and decision.
#[derive(Debug, Clone)]
pub struct HookSet {
    hooks: [LifecycleHook; 4],
}

impl HookSet {
    /// Creates hooks for every phase from a configuration alone.
    #[must_use]
    pub fn from_config(config: &HookConfig) -> Self {
        Self::with_decision(config, default_decision(config))
    }

    /// Creates hooks for every phase that consult the given decision.
    #[must_use]
    pub fn with_decision(config: &HookConfig, decision: Arc<dyn Decision>) -> Self {
        let hooks = LifecyclePhase::ALL.map(|phase| {
            HookBuilder::new(phase)
                .config(config.clone())
                .shared_decision(Arc::clone(&decision))
                .build()
        });
        Self { hooks }
    }

    /// Returns the hook serving `phase`.
    #[must_use]
    pub fn get(&self, phase: LifecyclePhase) -> &LifecycleHook {
        // ALL is declared in enum order.
        &self.hooks[phase as usize]
    }

    /// Iterates over the hooks in orchestrator order.
    pub fn iter(&self) -> impl Iterator<Item = &LifecycleHook> {
        self.hooks.iter()
    }

    /// Runs every phase in orchestrator order against one event, stopping
    /// after the first failed phase.
    ///
    /// Returns the invocations that were performed.
    #[must_use]
    pub fn rehearse(&self, payload: &Value) -> Vec<Invocation> {
        let mut invocations = Vec::with_capacity(self.hooks.len());
        for hook in &self.hooks {
            let invocation = hook.invoke(payload);
            let failed = !invocation.result.hook_status.is_success();
            invocations.push(invocation);
            if failed {
                tracing::warn!(phase = %hook.phase(), "rollout halted");
                break;
            }
        }
        invocations
    }
}

impl Default for HookSet {
    fn default() -> Self {
        Self::from_config(&HookConfig::default())
    }
}
