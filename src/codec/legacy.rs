//! Legacy text wire codec
//!
//! Parses and produces the older delimiter-based format that packs typed
//! properties and a body into a single string:
//!
//! ```text
//! <preamble>$Properties:
//! key1=String:val1
//! key2=Long:42
//! $TextBody:
//! hello world
//! ```
//!
//! The body is everything after the last `$TextBody:` marker and the
//! properties block sits between the last `$Properties:` before it and that
//! marker, reproducing the original greedy, dot-matches-newline match. This
//! codec is independent of the structured envelope encoding.

use crate::codec::error::{CodecError, CodecResult};
use crate::model::{PropertyTag, PropertyValue};
use std::collections::HashMap;

/// Marker opening the properties block
pub const PROPERTIES_MARKER: &str = "$Properties:";

/// Marker opening the body
pub const TEXT_BODY_MARKER: &str = "$TextBody:";

/// Message reconstructed from the legacy text wire format
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JmsMessage {
    /// Typed application properties
    pub properties: HashMap<String, PropertyValue>,

    /// Body text
    pub text_body: String,
}

impl JmsMessage {
    /// Create a message from parts
    pub fn new(properties: HashMap<String, PropertyValue>, text_body: impl Into<String>) -> Self {
        Self {
            properties,
            text_body: text_body.into(),
        }
    }
}

/// Parses and produces the legacy text wire format
///
/// Stateless; safe to share across concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyTextCodec;

impl LegacyTextCodec {
    /// Create a new legacy codec
    pub fn new() -> Self {
        Self
    }

    /// Parse a legacy wire string into a message
    ///
    /// Property lines that do not match `key=Type:value`, carry an unknown
    /// type tag, or hold an unparseable value are skipped silently; only the
    /// overall shape of the input can fail the parse.
    ///
    /// # Errors
    /// [`CodecError::BlankInput`] for empty/whitespace-only input,
    /// [`CodecError::MalformedWireFormat`] when the two markers are not
    /// present in order.
    pub fn parse(&self, input: &str) -> CodecResult<JmsMessage> {
        if input.trim().is_empty() {
            return Err(CodecError::BlankInput);
        }

        // Last $TextBody: wins, then the last $Properties: before it.
        let body_at = input.rfind(TEXT_BODY_MARKER).ok_or_else(|| {
            CodecError::MalformedWireFormat(format!("missing {} marker", TEXT_BODY_MARKER))
        })?;
        let props_at = input[..body_at].rfind(PROPERTIES_MARKER).ok_or_else(|| {
            CodecError::MalformedWireFormat(format!(
                "missing {} marker before {}",
                PROPERTIES_MARKER, TEXT_BODY_MARKER
            ))
        })?;

        let block = input[props_at + PROPERTIES_MARKER.len()..body_at].trim();
        let text_body = input[body_at + TEXT_BODY_MARKER.len()..].trim();

        let mut properties = HashMap::new();
        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_property_line(line) {
                Some((key, value)) => {
                    properties.insert(key, value);
                }
                None => {
                    tracing::trace!(line, "skipping unparseable property line");
                }
            }
        }

        Ok(JmsMessage::new(properties, text_body))
    }

    /// Produce the legacy wire string for a message
    ///
    /// `parse(produce(m)) == m` holds as long as keys and values contain no
    /// newlines or marker literals and the body is stable under trimming.
    pub fn produce(&self, message: &JmsMessage) -> String {
        let mut out = String::new();
        out.push_str(PROPERTIES_MARKER);
        out.push('\n');
        for (key, value) in &message.properties {
            out.push_str(key);
            out.push('=');
            out.push_str(&value.tag().to_string());
            out.push(':');
            out.push_str(&value.wire_value());
            out.push('\n');
        }
        out.push_str(TEXT_BODY_MARKER);
        out.push('\n');
        out.push_str(&message.text_body);
        out
    }
}

/// Split one `key=Type:value` line and decode the value by its type tag
///
/// Key runs up to the first `=`, the tag up to the next `:`, the value is
/// the rest; each part is trimmed. Returns `None` for lines that do not fit
/// the shape, unknown tags, and values the tag cannot decode.
fn parse_property_line(line: &str) -> Option<(String, PropertyValue)> {
    let eq = line.find('=')?;
    let key = line[..eq].trim();
    let rest = &line[eq + 1..];
    let colon = rest.find(':')?;
    let tag = rest[..colon].trim();
    let raw = rest[colon + 1..].trim();

    let tag: PropertyTag = tag.parse().ok()?;
    let value = match tag {
        PropertyTag::String => Some(PropertyValue::String(raw.to_string())),
        PropertyTag::Boolean => raw.parse().ok().map(PropertyValue::Boolean),
        PropertyTag::Long => raw.parse().ok().map(PropertyValue::Long),
        PropertyTag::Integer => raw.parse().ok().map(PropertyValue::Integer),
        PropertyTag::Short => raw.parse().ok().map(PropertyValue::Short),
        PropertyTag::Character => raw.chars().next().map(PropertyValue::Character),
    }?;

    Some((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_line_permissive_split() {
        // Value may contain both '=' and ':'
        let (key, value) = parse_property_line("url=String:http://host?a=1").unwrap();
        assert_eq!(key, "url");
        assert_eq!(value, PropertyValue::String("http://host?a=1".to_string()));
    }

    #[test]
    fn test_property_line_rejects_shapeless() {
        assert!(parse_property_line("no separators here").is_none());
        assert!(parse_property_line("key=String").is_none());
    }

    #[test]
    fn test_unknown_tag_dropped() {
        assert!(parse_property_line("key3=Double:3.14").is_none());
    }

    #[test]
    fn test_unparseable_value_dropped() {
        assert!(parse_property_line("n=Long:not-a-number").is_none());
        assert!(parse_property_line("c=Character:").is_none());
    }

    #[test]
    fn test_last_marker_wins() {
        let input = "x$Properties:\na=String:1\n$Properties:\nb=String:2\n$TextBody:\nfirst\n$TextBody:\nsecond";
        let message = LegacyTextCodec::new().parse(input).unwrap();
        // Greedy match: only the block before the last $TextBody:, after the
        // last $Properties: preceding it, survives.
        assert_eq!(message.text_body, "second");
        assert!(message.properties.contains_key("b"));
        assert!(!message.properties.contains_key("a"));
    }
}
