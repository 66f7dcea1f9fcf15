use std::borrow::Cow;
use std::fmt;
use std::slice;

use crate::node::{append_separated, write_tokens, JsonNode, Tokens, CLOSE_BRACKET, OPEN_BRACKET};
use crate::types::Type;
use crate::value::JsonValue;

/// An ordered sequence of JSON values.
///
/// ```
/// use adrenaline_json::{JsonArray, JsonNode};
///
/// let arr: JsonArray = vec![1, 2, 3].into_iter().collect();
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.to_text(), "[1,2,3]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonArray {
    items: Vec<JsonValue>,
}

impl JsonArray {
    pub fn new(items: Vec<JsonValue>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&JsonValue> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, JsonValue> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[JsonValue] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<JsonValue> {
        self.items
    }
}

impl JsonNode for JsonArray {
    fn get_type(&self) -> Type {
        Type::Array
    }

    fn as_string(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_text())
    }

    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>) {
        append_separated(tokens, OPEN_BRACKET, CLOSE_BRACKET, &self.items, |item, tokens| {
            item.append_tokens(tokens);
        });
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(self, f)
    }
}

impl<V: Into<JsonValue>> FromIterator<V> for JsonArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonValue;
    type IntoIter = slice::Iter<'a, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for JsonArray {
    type Item = JsonValue;
    type IntoIter = std::vec::IntoIter<JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
