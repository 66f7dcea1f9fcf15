use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{Hash, Hasher};

use adrenaline_json_util::escape;
use chrono::{DateTime, Utc};

use crate::date::DateCodec;
use crate::error::{CastCause, CastError, CastTarget, JsonError, NumberFormatError};
use crate::node::{JsonNode, Tokens};
use crate::types::Type;

/// A JSON string.
///
/// The quoted, escaped form is computed once in the constructor and reused
/// by every later rendering. Equality and hashing only look at the raw text.
///
/// ```
/// use adrenaline_json::{JsonNode, JsonString};
///
/// let s = JsonString::new("say \"hi\"");
/// assert_eq!(s.as_str(), "say \"hi\"");
/// assert_eq!(s.to_text(), r#""say \"hi\"""#);
/// ```
#[derive(Debug, Clone)]
pub struct JsonString {
    raw: String,
    escaped: String,
}

impl JsonString {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let escaped = escape(&raw);
        Self { raw, escaped }
    }

    /// Build from a text value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::InvalidArgument`] when `text` is `None`.
    pub fn try_new(text: Option<String>) -> Result<Self, JsonError> {
        text.map(Self::new)
            .ok_or(JsonError::InvalidArgument("string argument may not be null"))
    }

    /// The raw, unescaped text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The quoted, escaped text.
    pub fn escaped(&self) -> &str {
        &self.escaped
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl JsonNode for JsonString {
    fn get_type(&self) -> Type {
        Type::String
    }

    fn as_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.raw)
    }

    fn as_number(&self) -> Result<f64, CastError> {
        parse_decimal(&self.raw).map_err(|e| {
            CastError::new(Type::String, CastTarget::Number, CastCause::ParseNumber(e))
        })
    }

    fn as_date_with(&self, codec: &dyn DateCodec) -> Result<DateTime<Utc>, CastError> {
        codec
            .parse(&self.raw)
            .map_err(|e| CastError::new(Type::String, CastTarget::Date, CastCause::ParseDate(e)))
    }

    fn as_boolean(&self) -> Result<bool, CastError> {
        if self.raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if self.raw.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(CastError::new(
                Type::String,
                CastTarget::Boolean,
                CastCause::ParseBoolean(self.raw.clone()),
            ))
        }
    }

    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>) {
        tokens.push(Cow::Borrowed(&self.escaped));
    }

    fn to_text(&self) -> String {
        self.escaped.clone()
    }
}

/// Reads a decimal the way JVM `Double.parseDouble` does.
///
/// Surrounding ASCII controls and spaces are trimmed, and one trailing
/// `d`/`D`/`f`/`F` type suffix is dropped from a numeric body. `NaN` and
/// `Infinity` are the only spelled-out forms; Rust's `inf` or `nan` are not.
fn parse_decimal(text: &str) -> Result<f64, NumberFormatError> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let body = match unsigned.chars().next() {
        _ if unsigned == "NaN" || unsigned == "Infinity" => trimmed,
        Some(c) if c.is_ascii_digit() || c == '.' => {
            trimmed.strip_suffix(['d', 'D', 'f', 'F']).unwrap_or(trimmed)
        }
        _ => return Err(NumberFormatError::new(text, None)),
    };
    body.parse::<f64>().map_err(|e| NumberFormatError::new(text, Some(e)))
}

impl PartialEq for JsonString {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for JsonString {}

impl PartialEq<str> for JsonString {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for JsonString {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

// Must hash exactly like `str` so `Borrow<str>` lookups stay valid.
impl Hash for JsonString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Borrow<str> for JsonString {
    fn borrow(&self) -> &str {
        &self.raw
    }
}

impl AsRef<str> for JsonString {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escaped)
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for JsonString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_type_is_string() {
        assert_eq!(JsonString::new("").get_type(), Type::String);
    }

    #[test]
    fn test_escaped_is_cached() {
        let s = JsonString::new("a\"b\\c");
        assert_eq!(s.escaped(), "\"a\\\"b\\\\c\"");
        assert_eq!(s.to_text(), s.to_text());
        assert_eq!(s.to_string(), s.escaped());
    }

    #[test]
    fn test_as_string_is_raw() {
        let s = JsonString::new("tab\there");
        assert_eq!(s.as_string(), "tab\there");
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_as_number() {
        assert_eq!(JsonString::new("3.14").as_number().unwrap(), 3.14);
        assert_eq!(JsonString::new("-2e3").as_number().unwrap(), -2000.0);
        let err = JsonString::new("not-a-number").as_number().unwrap_err();
        assert!(matches!(err.cause(), CastCause::ParseNumber(_)));
        assert_eq!(err.target(), CastTarget::Number);
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_as_number_trims_and_drops_type_suffix() {
        for (text, expected) in [
            (" 3.14", 3.14),
            ("3.14\n", 3.14),
            ("\t3.14 ", 3.14),
            ("1d", 1.0),
            ("2.5f", 2.5),
            ("-1e3D", -1000.0),
            (".5F", 0.5),
            ("+7", 7.0),
        ] {
            assert_eq!(JsonString::new(text).as_number().unwrap(), expected, "text {text:?}");
        }
    }

    #[test]
    fn test_as_number_spelled_out_forms() {
        assert!(JsonString::new("NaN").as_number().unwrap().is_nan());
        assert_eq!(JsonString::new(" Infinity").as_number().unwrap(), f64::INFINITY);
        assert_eq!(JsonString::new("-Infinity").as_number().unwrap(), f64::NEG_INFINITY);
        for text in ["inf", "infinity", "nan", "-inf", "NaNd", "Infinityf", "1dd", "d", "", "  "] {
            let err = JsonString::new(text).as_number().unwrap_err();
            assert!(matches!(err.cause(), CastCause::ParseNumber(_)), "text {text:?}");
        }
    }

    #[test]
    fn test_as_number_error_keeps_input() {
        let err = JsonString::new("not-a-number").as_number().unwrap_err();
        match err.cause() {
            CastCause::ParseNumber(e) => assert_eq!(e.input(), "not-a-number"),
            other => panic!("unexpected cause {other:?}"),
        }
    }

    #[test]
    fn test_as_date() {
        let ts = JsonString::new("2013-01-02T03:04:05Z").as_date().unwrap();
        assert_eq!(ts.timestamp(), 1_357_095_845);
        let err = JsonString::new("soon").as_date().unwrap_err();
        assert!(matches!(err.cause(), CastCause::ParseDate(_)));
    }

    #[test]
    fn test_as_boolean() {
        assert!(JsonString::new("TRUE").as_boolean().unwrap());
        assert!(!JsonString::new("false").as_boolean().unwrap());
        let err = JsonString::new("yes").as_boolean().unwrap_err();
        assert_eq!(err.cause(), &CastCause::ParseBoolean("yes".to_string()));
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a = JsonString::new("x");
        let b = JsonString::from("x".to_string());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, JsonString::new("y"));
        assert_eq!(a, "x");
    }

    #[test]
    fn test_hash_matches_str() {
        let s = JsonString::new("key");
        assert_eq!(hash_of(&s), hash_of("key"));
    }

    #[test]
    fn test_try_new_rejects_none() {
        assert_eq!(
            JsonString::try_new(None),
            Err(JsonError::InvalidArgument("string argument may not be null"))
        );
        assert_eq!(JsonString::try_new(Some("ok".into())).unwrap(), "ok");
    }
}
