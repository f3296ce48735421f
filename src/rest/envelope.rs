//! Top-level JSON envelopes.
//!
//! The Admin API wraps every payload in a single named field:
//! `{"orders": [...]}`, `{"order": {...}}`, `{"count": 3}`, `{"tags": [...]}`.
//! Requests that carry a resource use the same shape.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{DecodeError, InvalidHttpRequestError};

/// Removes the envelope named `key` and decodes its content.
///
/// # Errors
///
/// Returns [`DecodeError::MissingField`] when the body is not an object or
/// has no `key` field, and [`DecodeError::Json`] when the content does not
/// match `T`. A missing envelope is never treated as an empty value.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shopify_rest::rest::envelope::unwrap_envelope;
///
/// let count: u64 = unwrap_envelope(json!({"count": 7}), "count").unwrap();
/// assert_eq!(count, 7);
/// assert!(unwrap_envelope::<u64>(json!({"total": 7}), "count").is_err());
/// ```
pub fn unwrap_envelope<T: DeserializeOwned>(body: Value, key: &str) -> Result<T, DecodeError> {
    let Value::Object(mut map) = body else {
        return Err(DecodeError::MissingField {
            key: key.to_string(),
        });
    };
    let content = map.remove(key).ok_or_else(|| DecodeError::MissingField {
        key: key.to_string(),
    })?;
    Ok(serde_json::from_value(content)?)
}

/// Wraps `payload` in an envelope named `key`.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::Serialize`] if `payload` cannot be
/// represented as JSON.
pub fn wrap<B: Serialize + ?Sized>(key: &str, payload: &B) -> Result<Value, InvalidHttpRequestError> {
    let mut map = Map::new();
    map.insert(key.to_string(), crate::clients::rest::to_body(payload)?);
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_list_envelope() {
        let ids: Vec<Value> =
            unwrap_envelope(json!({"articles": [{"id": 1}, {"id": 2}]}), "articles").unwrap();
        assert_eq!(ids, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let result = unwrap_envelope::<Vec<Value>>(json!({"products": []}), "articles");
        assert!(matches!(
            result,
            Err(DecodeError::MissingField { key }) if key == "articles"
        ));
    }

    #[test]
    fn test_non_object_body_is_an_error() {
        assert!(matches!(
            unwrap_envelope::<Vec<Value>>(Value::Null, "orders"),
            Err(DecodeError::MissingField { .. })
        ));
        assert!(matches!(
            unwrap_envelope::<Vec<Value>>(json!([]), "orders"),
            Err(DecodeError::MissingField { .. })
        ));
    }

    #[test]
    fn test_mismatched_content_is_a_json_error() {
        assert!(matches!(
            unwrap_envelope::<u64>(json!({"count": "many"}), "count"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_wrap() {
        let body = wrap("order", &json!({"id": 5})).unwrap();
        assert_eq!(body, json!({"order": {"id": 5}}));
    }
}
