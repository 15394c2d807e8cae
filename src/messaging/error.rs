//! Error types for messaging operations

use crate::error::BridgeError;

/// Result type for messaging operations
pub type MessagingResult<T> = std::result::Result<T, MessagingError>;

/// Errors that can occur during messaging operations
#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    /// Transport-level failure reported by a broker collaborator
    #[error("Transport error: {0}")]
    Transport(String),

    /// Publish failed
    #[error("Publish failed: {0}")]
    PublishFailed(String),

    /// Consume failed
    #[error("Consume failed: {0}")]
    ConsumeFailed(String),

    /// Invalid message
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Backend not available
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),
}

impl From<MessagingError> for BridgeError {
    fn from(err: MessagingError) -> Self {
        match err {
            MessagingError::ConfigurationError(msg) => BridgeError::Configuration(msg),
            _ => BridgeError::Messaging(err.to_string()),
        }
    }
}
