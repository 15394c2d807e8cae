//! Messaging configuration

use serde::{Deserialize, Serialize};

/// Bridge messaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Enable forwarding (disabled = forward calls are no-ops)
    pub enabled: bool,

    /// Prefix applied to all stream topics
    pub topic_prefix: String,

    /// Topic serialized envelopes are published to
    pub outbound_topic: String,

    /// Maximum serialized envelope size in bytes
    pub max_message_size: usize,
}

impl MessagingConfig {
    /// Get the full topic name with prefix
    pub fn full_topic(&self, topic: &str) -> String {
        format!("{}.{}", self.topic_prefix, topic)
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            topic_prefix: "mq-bridge".to_string(),
            outbound_topic: "envelopes".to_string(),
            max_message_size: 1024 * 1024, // 1MB
        }
    }
}
