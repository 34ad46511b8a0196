//! Response payload decoding.
//!
//! The typed path ([`decode_as`]) is the normal one: the caller names the
//! destination type and a shape mismatch is an error, never a silently
//! zero-filled value. The untyped path ([`decode`]) only classifies the
//! payload structure so a caller can inspect a discriminator before choosing
//! a destination type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind, Result};

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// A 2xx payload decoded into the requested type.
    Value(T),
    /// The payload was empty, e.g. after a successful DELETE.
    Empty,
    /// Payload of a non-2xx response, left untyped. Non-JSON bodies are kept
    /// as a JSON string.
    Unexpected(Value),
}

impl<T> Decoded<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Decoded::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Decoded::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Decoded::Empty)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Decoded::Value(v) => Decoded::Value(f(v)),
            Decoded::Empty => Decoded::Empty,
            Decoded::Unexpected(v) => Decoded::Unexpected(v),
        }
    }
}

/// Collection envelope returned by index endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meta {
    #[serde(default)]
    pub total_items: u64,
}

impl<T> Envelope<T> {
    /// The newest item; the API lists items oldest first.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Structural classification of an untyped payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Empty,
    /// `{"items": [...], "meta": {"total_items": N}}`
    Collection {
        items: Vec<Value>,
        total_items: Option<u64>,
    },
    /// A single entity.
    Item(Map<String, Value>),
    /// Validation-style response: an object whose every value is an object,
    /// keyed by input term.
    ///
    /// Classification is structural only. A single entity wrapped in one key,
    /// e.g. `{"submission_batch": {...}}`, lands here too; callers that know
    /// their entity discriminators can unwrap it.
    TermMap(Map<String, Value>),
    /// A bare JSON array.
    List(Vec<Value>),
    /// Any other JSON value.
    Other(Value),
}

/// Returns true if the payload is empty or whitespace only.
pub fn is_blank(payload: &[u8]) -> bool {
    payload.iter().all(u8::is_ascii_whitespace)
}

/// Decode a payload into the caller's type.
///
/// An empty payload is a decode error here; use [`decode_body`] where an
/// empty body is a legitimate answer.
pub fn decode_as<T: DeserializeOwned>(payload: &[u8]) -> Result<T> {
    if is_blank(payload) {
        return Err(Error::new(ErrorKind::Decode("empty payload".to_string())));
    }
    Ok(serde_json::from_slice(payload)?)
}

/// Decode a successful response body, mapping an empty body to [`Decoded::Empty`].
pub fn decode_body<T: DeserializeOwned>(payload: &[u8]) -> Result<Decoded<T>> {
    if is_blank(payload) {
        return Ok(Decoded::Empty);
    }
    decode_as(payload).map(Decoded::Value)
}

/// Keep a non-2xx body without imposing a type on it.
pub fn decode_unexpected<T>(payload: &[u8]) -> Decoded<T> {
    if is_blank(payload) {
        return Decoded::Empty;
    }
    let value = serde_json::from_slice(payload)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(payload).into_owned()));
    Decoded::Unexpected(value)
}

/// Classify an untyped payload.
pub fn decode(payload: &[u8]) -> Result<Shape> {
    if is_blank(payload) {
        return Ok(Shape::Empty);
    }

    let value: Value = serde_json::from_slice(payload)?;
    Ok(classify(value))
}

fn classify(value: Value) -> Shape {
    match value {
        Value::Object(mut map) => {
            if matches!(map.get("items"), Some(Value::Array(_))) {
                let total_items = map
                    .get("meta")
                    .and_then(|m| m.get("total_items"))
                    .and_then(Value::as_u64);
                let items = match map.remove("items") {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                Shape::Collection { items, total_items }
            } else if !map.is_empty() && map.values().all(Value::is_object) {
                Shape::TermMap(map)
            } else {
                Shape::Item(map)
            }
        }
        Value::Array(items) => Shape::List(items),
        other => Shape::Other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Created {
        id: String,
    }

    #[test]
    fn test_decode_as_typed() {
        let created: Created = decode_as(br#"{"id":"9"}"#).unwrap();
        assert_eq!(created.id, "9");
    }

    #[test]
    fn test_decode_as_rejects_shape_mismatch() {
        let err = decode_as::<Created>(br#"{"name":"x"}"#).unwrap_err();
        assert!(err.is_decode());

        let err = decode_as::<Created>(b"").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_decode_body_empty_sentinel() {
        assert_eq!(decode_body::<Created>(b"").unwrap(), Decoded::Empty);
        assert_eq!(decode_body::<Created>(b"  \n").unwrap(), Decoded::Empty);
        assert_eq!(
            decode_body::<Created>(br#"{"id":"1"}"#).unwrap(),
            Decoded::Value(Created { id: "1".into() })
        );
    }

    #[test]
    fn test_decode_unexpected_keeps_text() {
        let decoded: Decoded<Created> = decode_unexpected(b"<html>gateway</html>");
        assert_eq!(decoded, Decoded::Unexpected(json!("<html>gateway</html>")));

        let decoded: Decoded<Created> = decode_unexpected(br#"{"errors":["bad"]}"#);
        assert_eq!(decoded, Decoded::Unexpected(json!({"errors": ["bad"]})));
    }

    #[test]
    fn test_envelope() {
        let env: Envelope<Created> =
            decode_as(br#"{"items":[{"id":"1"},{"id":"2"}],"meta":{"total_items":2}}"#).unwrap();
        assert_eq!(env.len(), 2);
        assert_eq!(env.meta.total_items, 2);
        assert_eq!(env.last().map(|c| c.id.as_str()), Some("2"));

        let env: Envelope<Created> = decode_as(br#"{"items":[]}"#).unwrap();
        assert!(env.is_empty());
        assert_eq!(env.meta.total_items, 0);
    }

    #[test]
    fn test_classify_shapes() {
        assert_eq!(decode(b"").unwrap(), Shape::Empty);

        match decode(br#"{"items":[{"id":1}],"meta":{"total_items":10}}"#).unwrap() {
            Shape::Collection { items, total_items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(total_items, Some(10));
            }
            other => panic!("expected collection, got {other:?}"),
        }

        assert!(matches!(
            decode(br#"{"id":"9","submission_name":"x"}"#).unwrap(),
            Shape::Item(_)
        ));
        assert!(matches!(
            decode(br#"{"bob":{"suggestions":["Bob Newhart"]},"ann":{"suggestions":[]}}"#).unwrap(),
            Shape::TermMap(_)
        ));
        assert!(matches!(
            decode(br#"{"submission_batch":{"submission_type":"getty_creative_still"}}"#).unwrap(),
            Shape::TermMap(_)
        ));
        assert!(matches!(decode(b"[1,2]").unwrap(), Shape::List(_)));
        assert_eq!(decode(b"42").unwrap(), Shape::Other(json!(42)));
        assert!(matches!(decode(b"{}").unwrap(), Shape::Item(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(decode(b"{not json").unwrap_err().is_decode());
    }

    #[test]
    fn test_decoded_map() {
        let d = Decoded::Value(2).map(|v| v * 2);
        assert_eq!(d.value(), Some(&4));
        assert!(Decoded::<i32>::Empty.map(|v| v + 1).is_empty());
    }
}
