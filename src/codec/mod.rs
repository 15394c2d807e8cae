//! Message codecs
//!
//! Two independent codecs:
//!
//! - [`EnvelopeCodec`] — broker-native message → canonical [`Payload`] JSON
//!   and back.
//! - [`LegacyTextCodec`] — the older `$Properties:`/`$TextBody:` single
//!   string format.
//!
//! Both are pure, stateless transformations; instances are freely shared
//! across threads.
//!
//! [`Payload`]: crate::model::Payload

pub mod envelope;
pub mod error;
pub mod legacy;

pub use envelope::{
    resolve_destination, EnvelopeCodec, CORRELATION_ID_HEADER, RESERVED_HEADER_PREFIX,
};
pub use error::{CodecError, CodecResult};
pub use legacy::{JmsMessage, LegacyTextCodec, PROPERTIES_MARKER, TEXT_BODY_MARKER};
