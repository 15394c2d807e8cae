//! Portable destination descriptions

use serde::{Deserialize, Serialize};

/// Portable description of a broker destination
///
/// `destination_type` is the concrete kind name of the native handle the
/// description was derived from. `name` may be absent when the underlying
/// lookup failed or the handle has no queue/topic role; that is not an error
/// for the envelope as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Concrete native kind name (e.g. "ActiveMQTopic")
    #[serde(rename = "destinationType")]
    pub destination_type: String,

    /// Queue or topic name, when the lookup succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Destination {
    /// Create a destination with a resolved name
    pub fn named(destination_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            destination_type: destination_type.into(),
            name: Some(name.into()),
        }
    }

    /// Create a destination whose name could not be resolved
    pub fn unnamed(destination_type: impl Into<String>) -> Self {
        Self {
            destination_type: destination_type.into(),
            name: None,
        }
    }
}

/// The queue/topic role of a native destination handle
///
/// Produced by the transport collaborator instead of runtime type probing:
/// the handle either names a topic, names a queue, or has no recognizable
/// role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationKind {
    /// Topic with its name
    Topic(String),

    /// Queue with its name
    Queue(String),

    /// Neither topic nor queue
    Unknown,
}
