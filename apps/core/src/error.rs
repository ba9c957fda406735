use std::io;
use thiserror::Error;

use crate::actors::messages::ActorError;

/// Application-wide error type for everything around the (total) pipeline:
/// the host protocol, the session actor and configuration.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors on the host streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents a malformed frame or an unknown message.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Represents a frame whose declared length exceeds the configured limit.
    #[error("Message of {size} bytes exceeds the {limit} byte limit")]
    MessageTooLarge { size: usize, limit: usize },

    /// Represents data validation errors (e.g., invalid JSON body).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., invalid environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors specific to the actor system, such as a closed channel.
    #[error("Actor error: {0}")]
    Actor(#[from] ActorError),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Config(format!("Invalid number: {}", err))
    }
}
