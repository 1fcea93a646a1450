//! Error types for the fastfit_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fastfit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile error
    #[error("Profile error: {0}")]
    Profile(String),

    /// Schedule validation error
    #[error("Schedule validation error: {0}")]
    ScheduleValidation(String),

    /// Time-zone resolution error
    #[error("Time zone error: {0}")]
    Timezone(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
