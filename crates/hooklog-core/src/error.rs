//! Error types for the hooklog crates.

use thiserror::Error;

/// Errors that can occur while recording a tool-use event.
#[derive(Debug, Error)]
pub enum HookError {
    /// Standard input was valid JSON but not a JSON object.
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
