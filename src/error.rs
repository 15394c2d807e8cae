use thiserror::Error;

/// Bridge error types
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Codec errors
    #[error("Codec error: {0}")]
    Codec(String),

    /// Messaging errors
    #[error("Messaging error: {0}")]
    Messaging(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<config::ConfigError> for BridgeError {
    fn from(err: config::ConfigError) -> Self {
        BridgeError::Configuration(err.to_string())
    }
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
