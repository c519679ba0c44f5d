//! Pluggable decisions that turn a deployment event into a hook status.
//!
//! A decision is the only place where a hook consults anything beyond the
//! event itself. External collaborators (health checks, smoke tests) are
//! expected to be constructed by the caller and captured by a decision.

use cutover_common::error::{CutoverError, Result};
use cutover_common::types::{HookStatus, LifecyclePhase};

use crate::event::DeploymentEvent;

/// Decides whether a rollout may continue past a lifecycle phase.
///
/// Returning `Err` is equivalent to returning [`HookStatus::Failed`]; the
/// hook logs the error before reporting.
pub trait Decision: Send + Sync {
    /// Evaluates the event for the given phase.
    ///
    /// # Errors
    ///
    /// Returns an error when the rollout must stop.
    fn decide(&self, phase: LifecyclePhase, event: &DeploymentEvent) -> Result<HookStatus>;
}

impl<F> Decision for F
where
    F: Fn(LifecyclePhase, &DeploymentEvent) -> Result<HookStatus> + Send + Sync,
{
    fn decide(&self, phase: LifecyclePhase, event: &DeploymentEvent) -> Result<HookStatus> {
        self(phase, event)
    }
}

/// Lets every rollout continue.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSucceed;

impl Decision for AlwaysSucceed {
    fn decide(&self, _phase: LifecyclePhase, _event: &DeploymentEvent) -> Result<HookStatus> {
        Ok(HookStatus::Succeeded)
    }
}

/// Fails the hook unless every listed key holds a non-empty string.
#[derive(Debug, Clone, Default)]
pub struct RequireFields {
    fields: Vec<String>,
}

impl RequireFields {
    /// Creates a decision requiring the given event keys.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the required keys.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Decision for RequireFields {
    fn decide(&self, phase: LifecyclePhase, event: &DeploymentEvent) -> Result<HookStatus> {
        for field in &self.fields {
            if event.get_str(field).is_none_or(str::is_empty) {
                tracing::debug!(%phase, field = %field, "required field missing");
                return Err(CutoverError::MissingField {
                    field: field.clone(),
                });
            }
        }
        Ok(HookStatus::Succeeded)
    }
}
