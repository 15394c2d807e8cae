//! Typed property values carried in the envelope property bag

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Wire type tags for property values
///
/// The spelling of each tag is exactly what appears on the wire, both in the
/// structured envelope encoding (`{"type": "Long", "value": 42}`) and in the
/// legacy text format (`count=Long:42`). No other tags are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum PropertyTag {
    String,
    Boolean,
    Long,
    Integer,
    Short,
    Character,
}

/// A typed scalar property value
///
/// Holds one value from a closed set of primitive types. The enum guarantees
/// the wire type tag and the carried value always agree; a value with an
/// unsupported type cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    /// UTF-8 string
    String(String),

    /// Boolean
    Boolean(bool),

    /// 64-bit signed integer
    Long(i64),

    /// 32-bit signed integer
    Integer(i32),

    /// 16-bit signed integer
    Short(i16),

    /// Single character
    Character(char),
}

impl PropertyValue {
    /// Get the wire type tag for this value
    pub fn tag(&self) -> PropertyTag {
        match self {
            PropertyValue::String(_) => PropertyTag::String,
            PropertyValue::Boolean(_) => PropertyTag::Boolean,
            PropertyValue::Long(_) => PropertyTag::Long,
            PropertyValue::Integer(_) => PropertyTag::Integer,
            PropertyValue::Short(_) => PropertyTag::Short,
            PropertyValue::Character(_) => PropertyTag::Character,
        }
    }

    /// Render the value portion of a `key=Tag:value` legacy wire line
    pub fn wire_value(&self) -> String {
        match self {
            PropertyValue::String(v) => v.clone(),
            PropertyValue::Boolean(v) => v.to_string(),
            PropertyValue::Long(v) => v.to_string(),
            PropertyValue::Integer(v) => v.to_string(),
            PropertyValue::Short(v) => v.to_string(),
            PropertyValue::Character(v) => v.to_string(),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Boolean(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Long(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Integer(v)
    }
}

impl From<i16> for PropertyValue {
    fn from(v: i16) -> Self {
        PropertyValue::Short(v)
    }
}

impl From<char> for PropertyValue {
    fn from(v: char) -> Self {
        PropertyValue::Character(v)
    }
}

/// A header value as exposed by a broker-native message
///
/// Broker headers may carry more shapes than the property bag supports.
/// Simple scalars translate into a [`PropertyValue`]; nested structures do
/// not and are skipped when building the envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    /// String scalar
    Str(String),

    /// Boolean scalar
    Bool(bool),

    /// 64-bit integer scalar
    Long(i64),

    /// 32-bit integer scalar
    Int(i32),

    /// 16-bit integer scalar
    Short(i16),

    /// Character scalar
    Char(char),

    /// Date/time scalar
    Timestamp(DateTime<Utc>),

    /// Nested structure (map, list); never enters the property bag
    Nested(serde_json::Value),
}

impl HeaderValue {
    /// Convert to a typed property value, if this is a simple scalar
    ///
    /// Timestamps are carried as epoch milliseconds in a `Long`. Nested
    /// structures return `None`.
    pub fn as_property(&self) -> Option<PropertyValue> {
        match self {
            HeaderValue::Str(v) => Some(PropertyValue::String(v.clone())),
            HeaderValue::Bool(v) => Some(PropertyValue::Boolean(*v)),
            HeaderValue::Long(v) => Some(PropertyValue::Long(*v)),
            HeaderValue::Int(v) => Some(PropertyValue::Integer(*v)),
            HeaderValue::Short(v) => Some(PropertyValue::Short(*v)),
            HeaderValue::Char(v) => Some(PropertyValue::Character(*v)),
            HeaderValue::Timestamp(v) => Some(PropertyValue::Long(v.timestamp_millis())),
            HeaderValue::Nested(_) => None,
        }
    }

    /// Get the string content, if this is a string scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Str(v) => Some(v),
            _ => None,
        }
    }
}
