use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use crate::date::DateCodec;
use crate::error::{CastCause, CastError, CastTarget, JsonError};
use crate::node::{JsonNode, Tokens};
use crate::types::Type;

/// Integral values below this magnitude are rendered as plain integers.
/// `Debug` switches to exponent form from here on.
const INTEGER_RENDER_LIMIT: f64 = 1e16;

/// Millisecond timestamps have to stay inside this range to map to a date.
const MAX_TIMESTAMP_MS: f64 = 8.64e15;

/// A finite double-precision JSON number.
///
/// ```
/// use adrenaline_json::{JsonNode, JsonNumber};
///
/// assert_eq!(JsonNumber::new(3.0).unwrap().to_text(), "3");
/// assert_eq!(JsonNumber::new(0.5).unwrap().to_text(), "0.5");
/// assert!(JsonNumber::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct JsonNumber {
    value: f64,
    text: String,
}

impl JsonNumber {
    /// # Errors
    ///
    /// Returns [`JsonError::InvalidArgument`] for NaN and the infinities,
    /// which have no JSON text form.
    pub fn new(value: f64) -> Result<Self, JsonError> {
        if !value.is_finite() {
            return Err(JsonError::InvalidArgument("number must be finite"));
        }
        Ok(Self {
            value,
            text: format_number(value),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_RENDER_LIMIT {
        // Exact: every integral f64 below 1e16 fits in i64.
        format!("{}", value as i64)
    } else {
        format!("{value:?}")
    }
}

impl JsonNode for JsonNumber {
    fn get_type(&self) -> Type {
        Type::Number
    }

    fn as_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn as_number(&self) -> Result<f64, CastError> {
        Ok(self.value)
    }

    /// The value is read as milliseconds since the Unix epoch.
    fn as_date_with(&self, _codec: &dyn DateCodec) -> Result<DateTime<Utc>, CastError> {
        let out_of_range =
            || CastError::new(Type::Number, CastTarget::Date, CastCause::OutOfRange(self.value));
        if self.value.abs() > MAX_TIMESTAMP_MS {
            return Err(out_of_range());
        }
        DateTime::from_timestamp_millis(self.value as i64).ok_or_else(out_of_range)
    }

    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>) {
        tokens.push(Cow::Borrowed(&self.text));
    }

    fn to_text(&self) -> String {
        self.text.clone()
    }
}

impl PartialEq for JsonNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// NaN is rejected at construction, so `==` is reflexive.
impl Eq for JsonNumber {}

impl Hash for JsonNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0
        let value = if self.value == 0.0 { 0.0 } else { self.value };
        value.to_bits().hash(state);
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<f64> for JsonNumber {
    type Error = JsonError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! impl_from_lossless {
    ($($t:ty),*) => {
        $(
            impl From<$t> for JsonNumber {
                fn from(n: $t) -> Self {
                    let value = f64::from(n);
                    Self { value, text: format_number(value) }
                }
            }
        )*
    };
}

impl_from_lossless!(i8, i16, i32, u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn num(v: f64) -> JsonNumber {
        JsonNumber::new(v).unwrap()
    }

    fn hash_of(n: &JsonNumber) -> u64 {
        let mut h = DefaultHasher::new();
        n.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_integral_rendering() {
        assert_eq!(num(0.0).to_text(), "0");
        assert_eq!(num(-0.0).to_text(), "0");
        assert_eq!(num(42.0).to_text(), "42");
        assert_eq!(num(-12.0).to_text(), "-12");
        assert_eq!(JsonNumber::from(7u8).to_text(), "7");
    }

    #[test]
    fn test_fractional_rendering() {
        assert_eq!(num(0.5).to_text(), "0.5");
        assert_eq!(num(-2.25).to_text(), "-2.25");
    }

    #[test]
    fn test_large_integral_rendering() {
        assert_eq!(num(1e15).to_text(), "1000000000000000");
        assert_eq!(num(9_007_199_254_740_992.0).to_text(), "9007199254740992");
        assert_eq!(num(-9_007_199_254_740_994.0).to_text(), "-9007199254740994");
        assert_eq!(num(9_999_999_999_999_998.0).to_text(), "9999999999999998");
        assert_eq!(num(1e16).to_text(), "1e16");
    }

    #[test]
    fn test_large_values_round_trip() {
        for v in [1e15, 4.5e15, 1e16, 1e300, 1.5e-7, f64::MAX, f64::MIN_POSITIVE] {
            let text = num(v).to_text();
            assert_eq!(text.parse::<f64>().unwrap(), v, "text {text}");
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(JsonNumber::new(f64::INFINITY).is_err());
        assert!(JsonNumber::try_from(f64::NEG_INFINITY).is_err());
        assert!(JsonNumber::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_signed_zero_equality() {
        assert_eq!(num(0.0), num(-0.0));
        assert_eq!(hash_of(&num(0.0)), hash_of(&num(-0.0)));
        assert_ne!(num(1.0), num(2.0));
    }

    #[test]
    fn test_as_number_and_string() {
        assert_eq!(num(1.25).as_number().unwrap(), 1.25);
        assert_eq!(num(10.0).as_string(), "10");
    }

    #[test]
    fn test_as_date_epoch_millis() {
        let ts = num(1_357_095_845_000.0).as_date().unwrap();
        assert_eq!(ts.timestamp(), 1_357_095_845);
        let err = num(1e300).as_date().unwrap_err();
        assert!(matches!(err.cause(), CastCause::OutOfRange(_)));
    }

    #[test]
    fn test_as_boolean_mismatch() {
        let err = num(1.0).as_boolean().unwrap_err();
        assert_eq!(err.cause(), &CastCause::TypeMismatch(Type::Number));
    }
}
