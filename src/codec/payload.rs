//! Extension payload wire format.
//!
//! The payload is a compact JSON object with keys in sorted order. Empty,
//! whitespace-only and `null` payloads read as an empty object. Keys owned by
//! a core column are dropped before deserializing; unknown keys are ignored
//! by the target type's deserializer.

use hashbrown::HashSet;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Serializes `value` as a flat object, dropping `mapped` keys and nulls.
pub fn encode<T: Serialize>(value: &T, mapped: &HashSet<&'static str>) -> Result<String, serde_json::Error> {
    let mut object = match serde_json::to_value(value)? {
        Value::Object(object) => object,
        Value::Null => Map::new(),
        other => {
            return Err(serde::ser::Error::custom(format!(
                "extension source must serialize to an object, got {}",
                kind(&other)
            )));
        }
    };
    object.retain(|key, value| !value.is_null() && !mapped.contains(key.as_str()));
    serde_json::to_string(&Value::Object(object))
}

/// Deserializes a payload, ignoring `mapped` keys; missing payloads give `T::default()`.
pub fn decode<T: DeserializeOwned + Default>(text: &str, mapped: &HashSet<&'static str>) -> Result<T, serde_json::Error> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    match serde_json::from_str::<Value>(trimmed)? {
        Value::Null => Ok(T::default()),
        Value::Object(mut object) => {
            object.retain(|key, _| !mapped.contains(key.as_str()));
            serde_json::from_value(Value::Object(object))
        }
        other => Err(serde::de::Error::custom(format!(
            "extension payload must be an object, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
