//! Decoders for fields whose wire type varies.
//!
//! Some fields arrive in more than one JSON shape depending on the endpoint
//! or the age of the record. Each adapter here accepts every known shape and
//! normalizes it to one in-memory form, so a decoded value always encodes to
//! the canonical shape and decodes again to the same value.
//!
//! - [`one_or_many`]: an array, a single object or null, decoded as `Vec<T>`
//! - [`string_or_number`]: a string, a number or null, decoded as `String`
//!
//! New shapes are supported by extending the matching adapter. New record
//! types opt into [`one_or_many`] by implementing [`EmptyRecord`].
//!
//! # Example
//!
//! ```rust
//! use serde::Deserialize;
//! use shopify_rest::rest::flexible::{self, EmptyRecord};
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Tag {
//!     #[serde(default)]
//!     name: String,
//! }
//!
//! impl EmptyRecord for Tag {
//!     fn is_empty_record(&self) -> bool {
//!         self.name.is_empty()
//!     }
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Item {
//!     #[serde(default, deserialize_with = "flexible::one_or_many")]
//!     tags: Vec<Tag>,
//!     #[serde(default, deserialize_with = "flexible::string_or_number")]
//!     code: String,
//! }
//!
//! let item: Item = serde_json::from_str(r#"{"tags": {"name": "a"}, "code": 42}"#).unwrap();
//! assert_eq!(item.tags.len(), 1);
//! assert_eq!(item.code, "42");
//! ```

use std::fmt;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

/// A record that can tell whether it carries no data.
///
/// Used by [`one_or_many`] to turn a lone placeholder object into an empty
/// sequence.
pub trait EmptyRecord {
    /// Returns `true` when every field holds its empty value.
    fn is_empty_record(&self) -> bool;
}

/// Decodes a collection that may arrive as a single object.
///
/// - array: each element is decoded in order
/// - object: decoded as one element; an empty object, or one whose record
///   reports [`EmptyRecord::is_empty_record`], gives an empty sequence
/// - null: an empty sequence
///
/// Use with `#[serde(default, deserialize_with = "...")]` so an absent field
/// is also empty.
///
/// # Errors
///
/// Fails on scalars, or when an element does not decode as `T`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + EmptyRecord,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(elements) => elements
            .into_iter()
            .map(|element| serde_json::from_value(element).map_err(de::Error::custom))
            .collect(),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        Value::Object(map) => {
            let record: T = serde_json::from_value(Value::Object(map)).map_err(de::Error::custom)?;
            if record.is_empty_record() {
                Ok(Vec::new())
            } else {
                Ok(vec![record])
            }
        }
        other => Err(de::Error::custom(format!(
            "expected an array, an object or null, found {other}"
        ))),
    }
}

/// Decodes an identifier that may arrive as a string, a number or null.
///
/// - null: `""`
/// - string: unchanged
/// - number: its JSON text (`42` -> `"42"`, `1.0` -> `"1.0"`)
/// - bool: `"true"` or `"false"`
/// - array or object: its compact JSON text
///
/// Use with `#[serde(default, deserialize_with = "...")]` so an absent field
/// is also `""`.
///
/// # Errors
///
/// Fails only on input that is not valid JSON.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringOrNumberVisitor)
}

struct StringOrNumberVisitor;

impl<'de> Visitor<'de> for StringOrNumberVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string, a number or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        // JSON number text: `1.0` stays `1.0`, `1e21` stays `1e21`
        Ok(serde_json::Number::from_f64(v).map_or_else(|| v.to_string(), |n| n.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<String, A::Error> {
        Ok(Value::deserialize(SeqAccessDeserializer::new(seq))?.to_string())
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<String, A::Error> {
        Ok(Value::deserialize(MapAccessDeserializer::new(map))?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Pair {
        #[serde(default)]
        name: String,
        #[serde(default)]
        value: Option<String>,
    }

    impl EmptyRecord for Pair {
        fn is_empty_record(&self) -> bool {
            self.name.is_empty() && self.value.is_none()
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "one_or_many")]
        pairs: Vec<Pair>,
        #[serde(default, deserialize_with = "string_or_number")]
        code: String,
    }

    fn decode(value: Value) -> Holder {
        serde_json::from_value(value).unwrap()
    }

    fn pair(name: &str, value: &str) -> Pair {
        Pair {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn test_one_or_many_array() {
        let holder = decode(json!({"pairs": [{"name": "a", "value": "1"}, {"name": "b", "value": "2"}]}));
        assert_eq!(holder.pairs, vec![pair("a", "1"), pair("b", "2")]);
    }

    #[test]
    fn test_one_or_many_single_object() {
        let holder = decode(json!({"pairs": {"name": "gift", "value": "yes"}}));
        assert_eq!(holder.pairs, vec![pair("gift", "yes")]);
    }

    #[test]
    fn test_one_or_many_empty_shapes() {
        assert!(decode(json!({"pairs": {}})).pairs.is_empty());
        assert!(decode(json!({"pairs": {"name": "", "value": null}})).pairs.is_empty());
        assert!(decode(json!({"pairs": null})).pairs.is_empty());
        assert!(decode(json!({})).pairs.is_empty());
        assert!(decode(json!({"pairs": []})).pairs.is_empty());
    }

    #[test]
    fn test_one_or_many_keeps_empty_elements_inside_arrays() {
        let holder = decode(json!({"pairs": [{}]}));
        assert_eq!(holder.pairs, vec![Pair::default()]);
    }

    #[test]
    fn test_one_or_many_rejects_scalars() {
        assert!(serde_json::from_value::<Holder>(json!({"pairs": "x"})).is_err());
        assert!(serde_json::from_value::<Holder>(json!({"pairs": [1]})).is_err());
    }

    #[test]
    fn test_string_or_number_shapes() {
        assert_eq!(decode(json!({"code": null})).code, "");
        assert_eq!(decode(json!({})).code, "");
        assert_eq!(decode(json!({"code": "abc"})).code, "abc");
        assert_eq!(decode(json!({"code": 1234567890123_u64})).code, "1234567890123");
        assert_eq!(decode(json!({"code": -7})).code, "-7");
        assert_eq!(decode(json!({"code": 1.5})).code, "1.5");
        assert_eq!(decode(json!({"code": true})).code, "true");
        assert_eq!(decode(json!({"code": [1, 2]})).code, "[1,2]");
        assert_eq!(decode(json!({"code": {"a": 1}})).code, r#"{"a":1}"#);
    }

    #[test]
    fn test_string_or_number_keeps_float_text() {
        for (raw, expected) in [("1.0", "1.0"), ("1e21", "1e21"), ("0.25", "0.25"), ("-3.5", "-3.5")] {
            let holder: Holder = serde_json::from_str(&format!(r#"{{"code": {raw}}}"#)).unwrap();
            assert_eq!(holder.code, expected, "{raw}");
        }
    }

    #[test]
    fn test_decoding_is_idempotent() {
        let inputs = [
            json!({"pairs": {"name": "n", "value": "v"}, "code": 99}),
            json!({"pairs": [{"name": "a", "value": "1"}], "code": "x"}),
            json!({"pairs": {}, "code": null}),
        ];
        for input in inputs {
            let first = decode(input);
            let second = decode(serde_json::to_value(&first).unwrap());
            assert_eq!(first, second);
        }
    }
}
