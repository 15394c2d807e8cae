//! Canonical message envelope

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::destination::Destination;
use super::property::PropertyValue;

/// Canonical, transport-agnostic representation of one message
///
/// The serialized field names form the wire contract with existing stream
/// consumers and must not change. Absent optional fields are omitted from
/// the encoding; unknown fields in an incoming encoding are ignored.
///
/// A payload is built fresh per inbound message and never shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Message body text
    #[serde(default)]
    pub text: String,

    /// Correlation identifier from the well-known correlation header
    #[serde(rename = "correlationID", default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,

    /// Application property bag (typed scalars, transport headers excluded)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, PropertyValue>,

    /// Broker delivery mode
    #[serde(rename = "deliveryMode", default, skip_serializing_if = "Option::is_none")]
    pub delivery_mode: Option<i32>,

    /// Destination the message was received on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,

    /// Expiration time (epoch millis, 0 = never)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,

    /// Broker-assigned message identifier
    #[serde(rename = "messageID", default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Application message type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,

    /// Whether the broker flagged this delivery as a redelivery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redelivered: Option<bool>,

    /// Broker send timestamp (epoch millis)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Destination replies should be sent to
    #[serde(rename = "replyTo", default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Destination>,
}

impl Payload {
    /// Create a payload carrying only a body
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let payload = Payload {
            text: "body".to_string(),
            correlation_id: Some("corr-1".to_string()),
            delivery_mode: Some(2),
            destination: Some(Destination::named("ActiveMQQueue", "inbound")),
            expiration: Some(0),
            message_id: Some("ID:1".to_string()),
            message_type: Some("order".to_string()),
            redelivered: Some(false),
            timestamp: Some(1_700_000_000_000),
            reply_to: Some(Destination::named("ActiveMQTopic", "replies")),
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["text"], "body");
        assert_eq!(json["correlationID"], "corr-1");
        assert_eq!(json["deliveryMode"], 2);
        assert_eq!(json["destination"]["destinationType"], "ActiveMQQueue");
        assert_eq!(json["messageID"], "ID:1");
        assert_eq!(json["type"], "order");
        assert_eq!(json["replyTo"]["name"], "replies");
    }

    #[test]
    fn test_absent_fields_omitted() {
        let json = serde_json::to_value(Payload::new("hello")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["text"], "hello");
    }
}
