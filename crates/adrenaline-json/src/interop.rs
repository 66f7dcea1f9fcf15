//! Conversions to and from [`serde_json::Value`].
//!
//! serde_json stands in as the tree builder: parse with it, then convert.

use serde_json::Value;

use crate::array::JsonArray;
use crate::number::JsonNumber;
use crate::object::JsonObject;
use crate::string::JsonString;
use crate::value::JsonValue;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl From<Value> for JsonValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::from(b),
            // serde_json numbers are always finite
            Value::Number(n) => n
                .as_f64()
                .and_then(|f| JsonNumber::new(f).ok())
                .map_or(JsonValue::Null, JsonValue::Number),
            Value::String(s) => JsonValue::String(JsonString::new(s)),
            Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect::<JsonArray>())
            }
            Value::Object(obj) => JsonValue::Object(obj.into_iter().collect::<JsonObject>()),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Boolean(b) => Value::Bool(b.value()),
            JsonValue::Number(n) => number_to_value(n.value()),
            JsonValue::String(s) => Value::String(s.as_str().to_owned()),
            JsonValue::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Value::Object(
                obj.iter()
                    .map(|(k, v)| (k.to_owned(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        Value::from(&v)
    }
}

fn number_to_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Value::from(f as i64)
    } else {
        serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}
