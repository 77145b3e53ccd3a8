use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Raw key/value payload as handed over by a native delivery channel.
pub type Payload = BTreeMap<String, PayloadValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<PayloadValue>),
    Map(Payload),
}

impl PayloadValue {
    /// Text rendering used for string fields. Scalars are stringified, containers
    /// and null have no text form.
    pub fn as_field_text(&self) -> Option<String> {
        match self {
            PayloadValue::Text(s) => Some(s.clone()),
            PayloadValue::Int(n) => Some(n.to_string()),
            PayloadValue::Float(n) => Some(n.to_string()),
            PayloadValue::Bool(b) => Some(b.to_string()),
            PayloadValue::Null | PayloadValue::List(_) | PayloadValue::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&Payload> {
        match self {
            PayloadValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            PayloadValue::Bool(b) => *b,
            PayloadValue::Int(n) => *n != 0,
            PayloadValue::Text(s) => s.eq_ignore_ascii_case("true") || s == "1",
            _ => false,
        }
    }
}

impl From<JsonValue> for PayloadValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => PayloadValue::Null,
            JsonValue::Bool(b) => PayloadValue::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => PayloadValue::Int(i),
                None => PayloadValue::Float(n.as_f64().unwrap_or_default()),
            },
            JsonValue::String(s) => PayloadValue::Text(s),
            JsonValue::Array(items) => {
                PayloadValue::List(items.into_iter().map(PayloadValue::from).collect())
            }
            JsonValue::Object(map) => PayloadValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, PayloadValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::Text(value.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        PayloadValue::Text(value)
    }
}

impl From<bool> for PayloadValue {
    fn from(value: bool) -> Self {
        PayloadValue::Bool(value)
    }
}

impl From<i64> for PayloadValue {
    fn from(value: i64) -> Self {
        PayloadValue::Int(value)
    }
}

impl From<Payload> for PayloadValue {
    fn from(value: Payload) -> Self {
        PayloadValue::Map(value)
    }
}

/// Builds a payload from a JSON object. Anything other than an object yields `None`.
pub fn payload_from_json(value: JsonValue) -> Option<Payload> {
    match PayloadValue::from(value) {
        PayloadValue::Map(map) => Some(map),
        _ => None,
    }
}

/// Parses a JSON document that must be an object.
pub fn parse_payload(text: &str) -> Option<Payload> {
    serde_json::from_str::<JsonValue>(text)
        .ok()
        .and_then(payload_from_json)
}
