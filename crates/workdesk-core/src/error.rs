//! Core error types for workdesk-core.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for workdesk-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the backend API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL could not be parsed or joined
    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level failure (connect, timeout, body decode)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// The backend reported a failure in its response envelope
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// The backend reported success but the expected payload was missing
    #[error("Backend response was missing its payload")]
    MissingData,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
