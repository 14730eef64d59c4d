//! Error types for the whoport-core library.

use thiserror::Error;

/// Result type alias for whoport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing the system or handling configuration.
///
/// Probe errors never reach the report layer: `SystemProbe` folds them into
/// an empty result. They exist so the spawn step can be tested and logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Failed to parse command output.
    #[error("Failed to parse output: {0}")]
    ParseError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
