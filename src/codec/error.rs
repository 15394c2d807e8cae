//! Error types for codec operations

use crate::error::BridgeError;

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while encoding or decoding messages
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Legacy parse given empty or whitespace-only input
    #[error("Blank input: message text is empty or whitespace-only")]
    BlankInput,

    /// Legacy parse given input without the expected markers in order
    #[error("Malformed wire format: {0}")]
    MalformedWireFormat(String),

    /// Malformed structured encoding during envelope unmarshal
    #[error("Decode error: {0}")]
    Decode(String),

    /// Body extraction from the broker message failed
    #[error("Message body unavailable: {0}")]
    BodyUnavailable(String),

    /// IO error writing to or reading from the byte stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CodecError> for BridgeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io(e) => BridgeError::Io(e),
            _ => BridgeError::Codec(err.to_string()),
        }
    }
}
