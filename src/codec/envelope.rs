//! Envelope codec: broker-native messages to canonical payloads and back

use crate::codec::error::{CodecError, CodecResult};
use crate::messaging::traits::{BrokerMessage, NativeDestination};
use crate::model::{Destination, DestinationKind, Payload};
use std::io::{Read, Write};

/// Header-key namespace owned by the messaging transport.
///
/// Headers under this prefix carry transport metadata that is promoted to
/// dedicated payload fields; they never enter the generic property bag.
pub const RESERVED_HEADER_PREFIX: &str = "JMS";

/// Well-known header carrying the correlation identifier.
pub const CORRELATION_ID_HEADER: &str = "JMSCorrelationID";

/// Converts broker-native messages into canonical [`Payload`]s and back
///
/// Stateless; a single instance may be shared across any number of
/// concurrent marshal/unmarshal calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeCodec;

impl EnvelopeCodec {
    /// Create a new envelope codec
    pub fn new() -> Self {
        Self
    }

    /// Build the canonical payload for a broker message
    ///
    /// Destination resolution failures are logged and degrade to an unnamed
    /// destination; only body extraction can fail here.
    pub fn build_payload<M: BrokerMessage + ?Sized>(&self, message: &M) -> CodecResult<Payload> {
        let text = message
            .body()
            .map_err(|e| CodecError::BodyUnavailable(e.to_string()))?;
        let headers = message.headers();

        let mut payload = Payload::new(text);

        payload.correlation_id = headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.as_str())
            .map(str::to_string);

        for (key, value) in &headers {
            if key.starts_with(RESERVED_HEADER_PREFIX) {
                continue;
            }
            if let Some(property) = value.as_property() {
                payload.properties.insert(key.clone(), property);
            }
        }

        payload.delivery_mode = message.delivery_mode();
        payload.destination = resolve_destination(message.destination());
        payload.expiration = message.expiration();
        payload.message_id = message.message_id();
        payload.message_type = message.message_type();
        payload.redelivered = message.redelivered();
        payload.timestamp = message.timestamp();
        payload.reply_to = resolve_destination(message.reply_to());

        Ok(payload)
    }

    /// Marshal a broker message into the canonical encoding
    ///
    /// # Errors
    /// Fails only on body extraction or serialization/IO failure, never on
    /// destination resolution.
    pub fn marshal<M, W>(&self, message: &M, writer: W) -> CodecResult<()>
    where
        M: BrokerMessage + ?Sized,
        W: Write,
    {
        let payload = self.build_payload(message)?;
        serde_json::to_writer(writer, &payload).map_err(|e| CodecError::Io(e.into()))
    }

    /// Unmarshal the canonical encoding back into a payload
    ///
    /// Unknown fields in the encoding are ignored.
    ///
    /// # Errors
    /// Fails with [`CodecError::Decode`] when the stream is not well-formed.
    pub fn unmarshal<R: Read>(&self, reader: R) -> CodecResult<Payload> {
        serde_json::from_reader(reader).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// Resolve an opaque native destination handle into a portable description
///
/// A null handle yields no destination. Name lookup failures are logged and
/// leave the name absent; they never propagate to the caller.
pub fn resolve_destination(handle: Option<&dyn NativeDestination>) -> Option<Destination> {
    let handle = handle?;
    let destination_type = handle.kind_name();

    let name = match handle.lookup() {
        Ok(DestinationKind::Topic(name)) | Ok(DestinationKind::Queue(name)) => Some(name),
        Ok(DestinationKind::Unknown) => None,
        Err(e) => {
            tracing::warn!(
                destination_type = %destination_type,
                error = %e,
                "failed to resolve destination name"
            );
            None
        }
    };

    Some(Destination {
        destination_type,
        name,
    })
}
