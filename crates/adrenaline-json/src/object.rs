use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::node::{append_separated, write_tokens, JsonNode, Tokens, CLOSE_BRACE, COLON, OPEN_BRACE};
use crate::string::JsonString;
use crate::types::Type;
use crate::value::JsonValue;

/// A JSON object with keys kept in insertion order.
///
/// Keys are [`JsonString`]s, so each key's escaped form is computed once.
/// A repeated key replaces the earlier value but keeps the earlier position.
/// Equality ignores key order.
///
/// ```
/// use adrenaline_json::{JsonNode, JsonObject};
///
/// let obj: JsonObject = [("b", 1), ("a", 2)].into_iter().collect();
/// assert_eq!(obj.to_text(), r#"{"b":1,"a":2}"#);
/// assert!(obj.contains_key("a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonObject {
    entries: IndexMap<JsonString, JsonValue>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the object with `key` set to `value`.
    pub fn with(mut self, key: impl Into<JsonString>, value: impl Into<JsonValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(JsonString::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl JsonNode for JsonObject {
    fn get_type(&self) -> Type {
        Type::Object
    }

    fn as_string(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_text())
    }

    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>) {
        append_separated(tokens, OPEN_BRACE, CLOSE_BRACE, &self.entries, |(key, value), tokens| {
            key.append_tokens(tokens);
            tokens.push(COLON);
            value.append_tokens(tokens);
        });
    }
}

// Sum of per-entry hashes, so equal objects hash alike whatever their order.
impl Hash for JsonObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let sum = self.entries.iter().fold(0u64, |acc, (key, value)| {
            let mut h = DefaultHasher::new();
            key.hash(&mut h);
            value.hash(&mut h);
            acc.wrapping_add(h.finish())
        });
        state.write_usize(self.entries.len());
        state.write_u64(sum);
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tokens(self, f)
    }
}

impl<K, V> FromIterator<(K, V)> for JsonObject
where
    K: Into<JsonString>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(obj: &JsonObject) -> u64 {
        let mut h = DefaultHasher::new();
        obj.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_empty() {
        assert_eq!(JsonObject::new().to_text(), "{}");
        assert!(JsonObject::new().is_empty());
    }

    #[test]
    fn test_tokens() {
        let obj = JsonObject::new().with("k", "v").with("n", JsonValue::Null);
        let mut tokens = Tokens::new();
        obj.append_tokens(&mut tokens);
        assert_eq!(
            tokens,
            vec!["{", "\"k\"", ":", "\"v\"", ",", "\"n\"", ":", "null", "}"]
        );
    }

    #[test]
    fn test_keys_are_escaped() {
        let obj = JsonObject::new().with("line\nbreak", 1);
        assert_eq!(obj.to_text(), "{\"line\\nbreak\":1}");
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["line\nbreak"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let obj: JsonObject = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.to_text(), r#"{"a":3,"b":2}"#);
    }

    #[test]
    fn test_equality_and_hash_ignore_order() {
        let a: JsonObject = [("x", 1), ("y", 2)].into_iter().collect();
        let b: JsonObject = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a.to_text(), b.to_text());
    }

    #[test]
    fn test_inequality() {
        let a: JsonObject = [("x", 1)].into_iter().collect();
        let b: JsonObject = [("x", 2)].into_iter().collect();
        let c: JsonObject = [("x", 1), ("y", 1)].into_iter().collect();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_lookup() {
        let obj = JsonObject::new().with("name", "adrenaline");
        assert_eq!(obj.get("name"), Some(&JsonValue::from("adrenaline")));
        assert_eq!(obj.get("missing"), None);
        assert_eq!(obj.iter().next(), Some(("name", &JsonValue::from("adrenaline"))));
        assert_eq!(obj.values().count(), 1);
    }
}
