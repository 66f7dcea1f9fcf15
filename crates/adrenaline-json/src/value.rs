use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::array::JsonArray;
use crate::boolean::JsonBoolean;
use crate::date::DateCodec;
use crate::error::{CastError, JsonError};
use crate::node::{write_tokens, JsonNode, Tokens};
use crate::null::JsonNull;
use crate::number::JsonNumber;
use crate::object::JsonObject;
use crate::string::JsonString;
use crate::types::Type;

/// Any JSON node.
///
/// Values are immutable once built; composite variants own their children.
///
/// ```
/// use adrenaline_json::{JsonNode, JsonObject, JsonValue, Type};
///
/// let doc = JsonValue::from(
///     JsonObject::new()
///         .with("name", "widget")
///         .with("tags", vec!["a", "b"])
///         .with("price", JsonValue::try_from(9.5).unwrap()),
/// );
/// assert_eq!(doc.get_type(), Type::Object);
/// assert_eq!(doc.to_text(), r#"{"name":"widget","tags":["a","b"],"price":9.5}"#);
/// assert_eq!(doc.get("price").unwrap().as_number().unwrap(), 9.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum JsonValue {
    String(JsonString),
    Number(JsonNumber),
    Boolean(JsonBoolean),
    Array(JsonArray),
    Object(JsonObject),
    #[default]
    Null,
}

impl JsonValue {
    fn as_node(&self) -> &dyn JsonNode {
        match self {
            JsonValue::String(s) => s,
            JsonValue::Number(n) => n,
            JsonValue::Boolean(b) => b,
            JsonValue::Array(a) => a,
            JsonValue::Object(o) => o,
            JsonValue::Null => &JsonNull,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JsonValue::Boolean(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// The raw text of a string node.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Object member lookup. `None` for missing keys and non-objects.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Array element lookup. `None` when out of bounds or not an array.
    pub fn at(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|a| a.get(index))
    }
}

impl JsonNode for JsonValue {
    fn get_type(&self) -> Type {
        self.as_node().get_type()
    }

    fn as_string(&self) -> Cow<'_, str> {
        self.as_node().as_string()
    }

    fn as_number(&self) -> Result<f64, CastError> {
        self.as_node().as_number()
    }

    fn as_date_with(&self, codec: &dyn DateCodec) -> Result<DateTime<Utc>, CastError> {
        self.as_node().as_date_with(codec)
    }

    fn as_boolean(&self) -> Result<bool, CastError> {
        self.as_node().as_boolean()
    }

    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>) {
        self.as_node().append_tokens(tokens);
    }

    fn to_text(&self) -> String {
        self.as_node().to_text()
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(self, f)
    }
}

macro_rules! impl_from_variant {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for JsonValue {
                fn from(v: $t) -> Self {
                    JsonValue::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_variant! {
    JsonString => String,
    &str => String,
    String => String,
    JsonNumber => Number,
    i8 => Number,
    i16 => Number,
    i32 => Number,
    u8 => Number,
    u16 => Number,
    u32 => Number,
    JsonBoolean => Boolean,
    bool => Boolean,
    JsonArray => Array,
    JsonObject => Object,
}

impl From<JsonNull> for JsonValue {
    fn from(_: JsonNull) -> Self {
        JsonValue::Null
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(items: Vec<T>) -> Self {
        JsonValue::Array(items.into_iter().collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl TryFrom<f64> for JsonValue {
    type Error = JsonError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        JsonNumber::new(value).map(JsonValue::Number)
    }
}
