//! Error types for posthog-node

use thiserror::Error;

/// Main error type for the posthog-node library
#[derive(Error, Debug)]
pub enum Error {
    /// Structured error response from the PostHog API
    #[error("PosHog error response [{status}]: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure, propagated unchanged
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Timestamp parameter that could not be parsed
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for posthog-node
pub type Result<T> = std::result::Result<T, Error>;
