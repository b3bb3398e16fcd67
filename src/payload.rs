//! Request payloads

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, ReqcurlError};

/// Data supplied by the caller to be encoded into a request.
///
/// `Map` keeps its keys ordered so query strings and form bodies come out
/// the same on every call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Payload {
    #[default]
    Empty,
    Text(String),
    Map(BTreeMap<String, String>),
}

impl Payload {
    /// Build a map payload from key/value pairs. Later keys win.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Payload::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<BTreeMap<String, String>> for Payload {
    fn from(map: BTreeMap<String, String>) -> Self {
        Payload::Map(map)
    }
}

impl From<std::collections::HashMap<String, String>> for Payload {
    fn from(map: std::collections::HashMap<String, String>) -> Self {
        Payload::Map(map.into_iter().collect())
    }
}

impl<T: Into<Payload>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl TryFrom<Value> for Payload {
    type Error = ReqcurlError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Payload::Empty),
            Value::String(text) => Ok(Payload::Text(text)),
            Value::Object(object) => {
                let mut map = BTreeMap::new();
                for (key, value) in object {
                    match value {
                        Value::String(text) => {
                            map.insert(key, text);
                        }
                        other => {
                            return Err(ReqcurlError::PayloadShape(format!(
                                "value for '{}' must be a string, got {}",
                                key,
                                kind_of(&other)
                            )))
                        }
                    }
                }
                Ok(Payload::Map(map))
            }
            other => Err(ReqcurlError::PayloadShape(format!(
                "expected a string or a string-to-string object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_becomes_empty() {
        assert_eq!(Payload::try_from(Value::Null).unwrap(), Payload::Empty);
    }

    #[test]
    fn string_becomes_text() {
        let payload = Payload::try_from(json!("a=b")).unwrap();
        assert_eq!(payload, Payload::Text("a=b".to_string()));
    }

    #[test]
    fn string_object_becomes_map() {
        let payload = Payload::try_from(json!({"namespace": "1", "a": "b"})).unwrap();
        assert_eq!(payload, Payload::map([("a", "b"), ("namespace", "1")]));
    }

    #[test]
    fn number_is_a_payload_shape_error() {
        let err = Payload::try_from(json!(42)).unwrap_err();
        assert!(matches!(err, ReqcurlError::PayloadShape(_)));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let err = Payload::try_from(json!({"count": 1})).unwrap_err();
        match err {
            ReqcurlError::PayloadShape(message) => assert!(message.contains("count")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn arrays_are_rejected() {
        let err = Payload::try_from(json!(["a", "b"])).unwrap_err();
        assert!(matches!(err, ReqcurlError::PayloadShape(_)));
    }

    #[test]
    fn later_keys_win_in_map() {
        let payload = Payload::map([("k", "1"), ("k", "2")]);
        assert_eq!(payload, Payload::map([("k", "2")]));
    }

    #[test]
    fn none_is_empty() {
        let payload: Payload = Option::<&str>::None.into();
        assert!(payload.is_empty());
    }
}
