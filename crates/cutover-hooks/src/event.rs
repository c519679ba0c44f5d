//! Deployment event model.
//!
//! The orchestrator sends an untyped JSON mapping. Known fields are lifted
//! into named optional fields; the raw payload is kept for logging.

use cutover_common::constants;
use cutover_common::types::EventField;
use serde_json::Value;

/// A deployment event received from the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentEvent {
    /// ARN of the service being deployed.
    pub service_arn: Option<String>,
    /// ARN of the service revision being rolled out.
    pub target_service_revision_arn: Option<String>,
    raw: Value,
}

impl DeploymentEvent {
    /// Builds an event from any JSON value.
    ///
    /// Never fails: a non-object payload, or a known key holding something
    /// other than a string, yields an absent field.
    #[must_use]
    pub fn from_value(raw: Value) -> Self {
        Self {
            service_arn: string_field(&raw, constants::SERVICE_ARN_KEY),
            target_service_revision_arn: string_field(&raw, constants::TARGET_REVISION_ARN_KEY),
            raw,
        }
    }

    /// Returns the value of a named field, if present.
    #[must_use]
    pub fn field(&self, field: EventField) -> Option<&str> {
        match field {
            EventField::ServiceArn => self.service_arn.as_deref(),
            EventField::TargetServiceRevisionArn => self.target_service_revision_arn.as_deref(),
        }
    }

    /// Returns the value of a named field, or `fallback` when absent.
    #[must_use]
    pub fn field_or<'a>(&'a self, field: EventField, fallback: &'a str) -> &'a str {
        self.field(field).unwrap_or(fallback)
    }

    /// Looks up an arbitrary key holding a string value.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }

    /// Returns the payload exactly as received.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Renders the payload as 2-space indented JSON.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

impl From<Value> for DeploymentEvent {
    fn from(raw: Value) -> Self {
        Self::from_value(raw)
    }
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn known_fields_are_lifted() {
        let event = DeploymentEvent::from_value(json!({
            "serviceArn": "arn:x",
            "targetServiceRevisionArn": "arn:y",
            "lifecycleStage": "PRE_SCALE_UP"
        }));
        assert_eq!(event.service_arn.as_deref(), Some("arn:x"));
        assert_eq!(event.target_service_revision_arn.as_deref(), Some("arn:y"));
        assert_eq!(event.get_str("lifecycleStage"), Some("PRE_SCALE_UP"));
    }

    #[test]
    fn absent_fields_use_fallback() {
        let event = DeploymentEvent::from_value(json!({}));
        assert_eq!(event.field_or(EventField::ServiceArn, "N/A"), "N/A");
        assert_eq!(event.field_or(EventField::TargetServiceRevisionArn, "N/A"), "N/A");
    }

    #[test]
    fn non_string_fields_are_absent() {
        let event = DeploymentEvent::from_value(json!({ "serviceArn": 42, "targetServiceRevisionArn": null }));
        assert!(event.service_arn.is_none());
        assert!(event.target_service_revision_arn.is_none());
    }

    #[test]
    fn non_object_payload_has_no_fields() {
        let event = DeploymentEvent::from_value(json!(["serviceArn", "arn:x"]));
        assert!(event.field(EventField::ServiceArn).is_none());
        assert_eq!(event.raw(), &json!(["serviceArn", "arn:x"]));
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let event = DeploymentEvent::from_value(json!({ "serviceArn": "arn:x" }));
        assert_eq!(event.to_pretty_json(), "{\n  \"serviceArn\": \"arn:x\"\n}");
    }
}
