//! Error types for keyboard handoff
//!
//! The controller itself never fails: malformed notifications are dropped.
//! These errors surface at the edges, where payloads, config files and
//! replay scripts are parsed.

use thiserror::Error;

/// Why a keyboard notification payload was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    /// A field the event kind requires was absent
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A numeric field was NaN, infinite or negative
    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// Errors loading a controller config
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors while replaying a scripted event sequence
#[derive(Error, Debug)]
pub enum ReplayError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Embedded config failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A `complete` step ran with no animation in flight
    #[error("step {step}: no outstanding animation to complete")]
    NothingToComplete { step: usize },

    /// The script's view height is unusable
    #[error("invalid view height: {0}")]
    InvalidViewHeight(f64),
}

/// Result type alias for payload validation
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Result type alias for config loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for replay
pub type ReplayResult<T> = Result<T, ReplayError>;
