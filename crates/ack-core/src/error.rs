//! Error types for review-ack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for review-ack
#[derive(Debug, Error)]
pub enum AckError {
    /// Git operation error
    #[error("Git error: {0}")]
    Git(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Comment export file not found
    #[error("Comment file not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid comment identifier
    #[error("Invalid comment id: {0}")]
    InvalidId(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Access token missing from the environment
    #[error("Access token not set: export {0} or use --dry-run")]
    MissingToken(String),

    /// Remote API rejected a request
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure talking to the remote API
    #[error("Request failed: {0}")]
    Transport(String),

    /// External command error
    #[error("Command '{command}' failed: {message}")]
    Command { command: String, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AckError>,
    },
}

impl AckError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AckError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for AckError {
    fn from(err: toml::de::Error) -> Self {
        AckError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for AckError {
    fn from(err: toml::ser::Error) -> Self {
        AckError::Toml(err.to_string())
    }
}

/// Result type alias for review-ack
pub type Result<T> = std::result::Result<T, AckError>;
