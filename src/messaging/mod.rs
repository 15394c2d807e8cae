//! Messaging layer of the bridge
//!
//! This module holds the collaborator abstractions the codec core consumes
//! (a broker-native message view and byte sink/source pairs) and the
//! [`BridgeService`] that wires them to the envelope codec.
//!
//! ```text
//! ┌──────────────────┐    marshal     ┌──────────────────┐
//! │  BrokerMessage   │ ─────────────▶ │  canonical bytes │ ──▶ ByteSink
//! │  (broker side)   │                │  (Payload JSON)  │
//! └──────────────────┘                └──────────────────┘
//!                                              ▲
//!                      unmarshal               │
//!        ByteSource ──────────────────────────┘
//! ```
//!
//! Real transports (broker clients, stream producers) are supplied by the
//! surrounding application; tests use in-memory implementations.

pub mod config;
pub mod error;
pub mod service;
pub mod traits;

pub use config::MessagingConfig;
pub use error::{MessagingError, MessagingResult};
pub use service::BridgeService;
pub use traits::{BrokerMessage, ByteSink, ByteSource, NativeDestination};
