//! Configuration model for lifecycle hooks.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! environment variables.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{CutoverError, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = CutoverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CutoverError::Config {
                message: format!("unknown log format \"{other}\", expected text or json"),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration shared by every lifecycle hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Value reported for event fields that are absent.
    pub fallback_value: String,
    /// Whether the full event payload is logged on every invocation.
    pub log_event_payload: bool,
    /// Log output format.
    pub log_format: LogFormat,
    /// Event keys that must hold a non-empty string for the hook to succeed.
    pub required_fields: Vec<String>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            fallback_value: constants::NOT_AVAILABLE.to_string(),
            log_event_payload: true,
            log_format: LogFormat::Text,
            required_fields: Vec::new(),
        }
    }
}

impl HookConfig {
    /// Loads the configuration: defaults, then `path` if given, then the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// environment variable holds an invalid value.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Reads a JSON configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CutoverError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlays values found through `lookup`, keyed by environment variable
    /// name.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(constants::ENV_FALLBACK_VALUE) {
            self.fallback_value = value;
        }
        if let Some(value) = lookup(constants::ENV_LOG_EVENT) {
            self.log_event_payload = parse_bool(constants::ENV_LOG_EVENT, &value)?;
        }
        if let Some(value) = lookup(constants::ENV_LOG_FORMAT) {
            self.log_format = value.parse()?;
        }
        if let Some(value) = lookup(constants::ENV_REQUIRED_FIELDS) {
            self.required_fields = value
                .split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CutoverError::Config {
            message: format!("{key} must be a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_use_not_available_fallback() {
        let config = HookConfig::default();
        assert_eq!(config.fallback_value, "N/A");
        assert!(config.log_event_payload);
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.required_fields.is_empty());
    }

    #[test]
    fn env_overrides_every_field() {
        let config = HookConfig::default()
            .with_env(env(&[
                ("CUTOVER_FALLBACK_VALUE", "unknown"),
                ("CUTOVER_LOG_EVENT", "false"),
                ("CUTOVER_LOG_FORMAT", "JSON"),
                ("CUTOVER_REQUIRED_FIELDS", "serviceArn, targetServiceRevisionArn,,"),
            ]))
            .unwrap();
        assert_eq!(config.fallback_value, "unknown");
        assert!(!config.log_event_payload);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.required_fields,
            vec!["serviceArn".to_string(), "targetServiceRevisionArn".to_string()]
        );
    }

    #[test]
    fn empty_env_keeps_config() {
        let config = HookConfig::default().with_env(env(&[])).unwrap();
        assert_eq!(config, HookConfig::default());
    }

    #[test]
    fn invalid_bool_is_config_error() {
        let err = HookConfig::default()
            .with_env(env(&[("CUTOVER_LOG_EVENT", "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, CutoverError::Config { .. }));
    }

    #[test]
    fn invalid_log_format_is_config_error() {
        let err = HookConfig::default()
            .with_env(env(&[("CUTOVER_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn file_values_fill_missing_keys_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"fallback_value": "-", "log_format": "json"}}"#).expect("write");

        let config = HookConfig::from_file(file.path()).expect("load");
        assert_eq!(config.fallback_value, "-");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.log_event_payload);
    }

    #[test]
    fn env_takes_precedence_over_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, r#"{{"fallback_value": "from-file"}}"#).expect("write");

        let config = HookConfig::from_file(file.path())
            .and_then(|c| c.with_env(env(&[("CUTOVER_FALLBACK_VALUE", "from-env")])))
            .expect("load");
        assert_eq!(config.fallback_value, "from-env");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = HookConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CutoverError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "not json").expect("write");
        let err = HookConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CutoverError::Serialization { .. }));
    }
}
