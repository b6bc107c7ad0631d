//! Error types shared across the RawKV service.

use thiserror::Error;

/// Service-level error type.
#[derive(Debug, Error)]
pub enum KvError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
