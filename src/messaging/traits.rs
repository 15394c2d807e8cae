//! Messaging trait abstractions
//!
//! These are the seams between the codec core and the surrounding transport
//! code: a broker-native message view on the inbound side, and byte
//! sink/source pairs on the stream side. Real implementations (broker
//! clients, stream producers) are supplied by the embedding application.

use crate::messaging::error::MessagingResult;
use crate::model::{DestinationKind, HeaderValue};
use async_trait::async_trait;
use std::collections::HashMap;

/// View of a broker-native message
///
/// Exposes the body, the header/property bag, and the transport metadata
/// fields the envelope codec promotes into dedicated payload fields.
/// Accessors return `None` where the broker left the field unset.
pub trait BrokerMessage: Send + Sync {
    /// Message body text
    ///
    /// # Errors
    /// Fails when the body cannot be extracted from the native message;
    /// this is the only broker-side failure that aborts a marshal.
    fn body(&self) -> MessagingResult<String>;

    /// Header/property bag
    fn headers(&self) -> HashMap<String, HeaderValue>;

    /// Delivery mode
    fn delivery_mode(&self) -> Option<i32>;

    /// Destination the message arrived on
    fn destination(&self) -> Option<&dyn NativeDestination>;

    /// Expiration time (epoch millis)
    fn expiration(&self) -> Option<i64>;

    /// Broker-assigned message id
    fn message_id(&self) -> Option<String>;

    /// Application message type
    fn message_type(&self) -> Option<String>;

    /// Redelivery flag
    fn redelivered(&self) -> Option<bool>;

    /// Broker send timestamp (epoch millis)
    fn timestamp(&self) -> Option<i64>;

    /// Reply-to destination
    fn reply_to(&self) -> Option<&dyn NativeDestination>;
}

/// Opaque broker destination handle
pub trait NativeDestination {
    /// Concrete kind name of the underlying destination
    fn kind_name(&self) -> String;

    /// Look up the queue/topic role and name
    ///
    /// # Errors
    /// May fail with a transport error; the caller degrades to an unnamed
    /// destination rather than propagating it.
    fn lookup(&self) -> MessagingResult<DestinationKind>;
}

/// Outbound byte sink for serialized envelopes
#[async_trait]
pub trait ByteSink: Send + Sync {
    /// Publish one serialized record to a topic
    async fn send(&self, topic: &str, payload: &[u8]) -> MessagingResult<()>;

    /// Check if the sink is connected
    async fn is_connected(&self) -> bool;

    /// Close the sink
    async fn close(&self) -> MessagingResult<()>;
}

/// Inbound byte source of serialized envelopes
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Get the next record, or `None` when the source is exhausted
    async fn recv(&mut self) -> MessagingResult<Option<Vec<u8>>>;
}
