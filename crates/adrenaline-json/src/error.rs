//! Error types for the value model.

use std::fmt;
use std::num::ParseFloatError;

use thiserror::Error;

use crate::date::DateParseError;
use crate::types::Type;

/// Crate-level error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonError {
    /// A required value was absent, or a number was not finite.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error(transparent)]
    Cast(#[from] CastError),
}

/// The type a coercion was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastTarget {
    Number,
    Date,
    Boolean,
}

impl fmt::Display for CastTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CastTarget::Number => "number",
            CastTarget::Date => "date",
            CastTarget::Boolean => "boolean",
        })
    }
}

/// Why a coercion failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastCause {
    #[error("text is not a decimal number")]
    ParseNumber(#[source] NumberFormatError),
    #[error("text is not a recognised date")]
    ParseDate(#[source] DateParseError),
    #[error("{0:?} is not a boolean literal")]
    ParseBoolean(String),
    #[error("{0} values have no such representation")]
    TypeMismatch(Type),
    #[error("{0} is outside the representable timestamp range")]
    OutOfRange(f64),
}

/// Text that does not read as a decimal number.
///
/// `source` is absent when the text was turned down before reaching the
/// float parser, as for Rust-only spellings like `inf`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid numeric text {input:?}")]
pub struct NumberFormatError {
    input: String,
    #[source]
    source: Option<ParseFloatError>,
}

impl NumberFormatError {
    pub(crate) fn new(input: &str, source: Option<ParseFloatError>) -> Self {
        Self {
            input: input.to_owned(),
            source,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A failed `as_number`, `as_date` or `as_boolean` call.
///
/// The underlying failure is available through
/// [`std::error::Error::source`] or [`CastError::cause`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot cast {from} to {target}")]
pub struct CastError {
    from: Type,
    target: CastTarget,
    #[source]
    cause: CastCause,
}

impl CastError {
    pub(crate) fn new(from: Type, target: CastTarget, cause: CastCause) -> Self {
        Self { from, target, cause }
    }

    pub(crate) fn mismatch(from: Type, target: CastTarget) -> Self {
        Self::new(from, target, CastCause::TypeMismatch(from))
    }

    /// Type of the node the cast was attempted on.
    pub fn from_type(&self) -> Type {
        self.from
    }

    pub fn target(&self) -> CastTarget {
        self.target
    }

    pub fn cause(&self) -> &CastCause {
        &self.cause
    }
}
