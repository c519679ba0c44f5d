//! Unified error type for the Cutover workspace.
//!
//! Errors never cross the orchestrator boundary: a hook maps every one of
//! them to a `FAILED` status. They surface as process errors only during
//! startup and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CutoverError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A lifecycle phase name could not be recognised.
    #[error("unknown lifecycle phase: {name}")]
    UnknownPhase {
        /// The name that failed to parse.
        name: String,
    },

    /// A required event field is absent or empty.
    #[error("deployment event is missing required field \"{field}\"")]
    MissingField {
        /// Wire key of the missing field.
        field: String,
    },

    /// A decision rejected the deployment.
    #[error("decision failed: {message}")]
    Decision {
        /// Reason reported by the decision.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CutoverError>;
