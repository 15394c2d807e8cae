//! Shared test fixtures: a configurable broker message, fake destinations,
//! and in-memory byte sink/source implementations.

#![allow(dead_code)]

use async_trait::async_trait;
use mq_stream_bridge::messaging::{
    BrokerMessage, ByteSink, ByteSource, MessagingError, MessagingResult, NativeDestination,
};
use mq_stream_bridge::model::{DestinationKind, HeaderValue};
use std::collections::HashMap;
use std::sync::Mutex;

/// Install the test tracing subscriber; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mq_stream_bridge=trace".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Fake native destination handle
pub struct TestDestination {
    pub kind_name: String,
    pub lookup: MessagingResult<DestinationKind>,
}

impl TestDestination {
    pub fn topic(name: &str) -> Self {
        Self {
            kind_name: "ActiveMQTopic".to_string(),
            lookup: Ok(DestinationKind::Topic(name.to_string())),
        }
    }

    pub fn queue(name: &str) -> Self {
        Self {
            kind_name: "ActiveMQQueue".to_string(),
            lookup: Ok(DestinationKind::Queue(name.to_string())),
        }
    }

    pub fn failing(kind_name: &str) -> Self {
        Self {
            kind_name: kind_name.to_string(),
            lookup: Err(MessagingError::Transport("broker unreachable".to_string())),
        }
    }
}

impl NativeDestination for TestDestination {
    fn kind_name(&self) -> String {
        self.kind_name.clone()
    }

    fn lookup(&self) -> MessagingResult<DestinationKind> {
        match &self.lookup {
            Ok(kind) => Ok(kind.clone()),
            Err(e) => Err(MessagingError::Transport(e.to_string())),
        }
    }
}

/// Configurable broker message fixture
#[derive(Default)]
pub struct TestBrokerMessage {
    pub body: Option<String>,
    pub headers: HashMap<String, HeaderValue>,
    pub delivery_mode: Option<i32>,
    pub destination: Option<TestDestination>,
    pub expiration: Option<i64>,
    pub message_id: Option<String>,
    pub message_type: Option<String>,
    pub redelivered: Option<bool>,
    pub timestamp: Option<i64>,
    pub reply_to: Option<TestDestination>,
}

impl TestBrokerMessage {
    pub fn with_body(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    pub fn header(mut self, key: &str, value: HeaderValue) -> Self {
        self.headers.insert(key.to_string(), value);
        self
    }
}

impl BrokerMessage for TestBrokerMessage {
    fn body(&self) -> MessagingResult<String> {
        self.body
            .clone()
            .ok_or_else(|| MessagingError::Transport("body unavailable".to_string()))
    }

    fn headers(&self) -> HashMap<String, HeaderValue> {
        self.headers.clone()
    }

    fn delivery_mode(&self) -> Option<i32> {
        self.delivery_mode
    }

    fn destination(&self) -> Option<&dyn NativeDestination> {
        self.destination.as_ref().map(|d| d as &dyn NativeDestination)
    }

    fn expiration(&self) -> Option<i64> {
        self.expiration
    }

    fn message_id(&self) -> Option<String> {
        self.message_id.clone()
    }

    fn message_type(&self) -> Option<String> {
        self.message_type.clone()
    }

    fn redelivered(&self) -> Option<bool> {
        self.redelivered
    }

    fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    fn reply_to(&self) -> Option<&dyn NativeDestination> {
        self.reply_to.as_ref().map(|d| d as &dyn NativeDestination)
    }
}

/// In-memory byte sink collecting published records
#[derive(Default)]
pub struct MemorySink {
    pub records: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<(String, Vec<u8>)> {
        std::mem::take(&mut self.records.lock().unwrap())
    }
}

#[async_trait]
impl ByteSink for MemorySink {
    async fn send(&self, topic: &str, payload: &[u8]) -> MessagingResult<()> {
        self.records
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_vec()));
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        true
    }

    async fn close(&self) -> MessagingResult<()> {
        Ok(())
    }
}

/// In-memory byte source replaying queued records
pub struct MemorySource {
    records: Vec<Vec<u8>>,
}

impl MemorySource {
    pub fn new(records: Vec<Vec<u8>>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ByteSource for MemorySource {
    async fn recv(&mut self) -> MessagingResult<Option<Vec<u8>>> {
        if self.records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.records.remove(0)))
        }
    }
}
