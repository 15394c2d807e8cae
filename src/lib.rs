//! Bridges a point-to-point broker messaging protocol to a canonical
//! envelope for log-structured event streams, and back.
//!
//! The core of the crate is the translation layer:
//!
//! - [`model`] — the canonical [`Payload`] envelope, portable
//!   [`Destination`] descriptions, and typed [`PropertyValue`] scalars.
//! - [`codec`] — the [`EnvelopeCodec`] (broker message → Payload JSON →
//!   bytes, and back) and the standalone [`LegacyTextCodec`] for the older
//!   `$Properties:`/`$TextBody:` single-string format.
//! - [`messaging`] — the collaborator seams (broker message view, byte
//!   sink/source) and the [`BridgeService`] tying codec and stream together.
//!
//! Transports, connection management, and delivery guarantees belong to the
//! embedding application; this crate only requires a message-like view of
//! the broker side and a byte sink/source on the stream side.
//!
//! # Example
//!
//! ```no_run
//! use mq_stream_bridge::codec::LegacyTextCodec;
//!
//! let codec = LegacyTextCodec::new();
//! let message = codec.parse("$Properties:\nid=Long:42\n$TextBody:\nhello")?;
//! assert_eq!(message.text_body, "hello");
//! # Ok::<(), mq_stream_bridge::codec::CodecError>(())
//! ```
//!
//! [`Payload`]: model::Payload
//! [`Destination`]: model::Destination
//! [`PropertyValue`]: model::PropertyValue
//! [`EnvelopeCodec`]: codec::EnvelopeCodec
//! [`LegacyTextCodec`]: codec::LegacyTextCodec
//! [`BridgeService`]: messaging::BridgeService

pub mod codec;
pub mod config;
pub mod error;
pub mod messaging;
pub mod model;

pub use codec::{CodecError, EnvelopeCodec, JmsMessage, LegacyTextCodec};
pub use crate::config::Config;
pub use error::{BridgeError, Result};
pub use messaging::{BridgeService, MessagingConfig, MessagingError};
pub use model::{Destination, DestinationKind, HeaderValue, Payload, PropertyTag, PropertyValue};
