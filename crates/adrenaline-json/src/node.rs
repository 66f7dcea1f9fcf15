//! The capability set shared by every JSON node.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::date::{DateCodec, Iso8601};
use crate::error::{CastError, CastTarget};
use crate::types::Type;

/// A serialized token stream. Tokens borrow from the tree wherever a node
/// already holds its text form.
pub type Tokens<'a> = Vec<Cow<'a, str>>;

pub(crate) const OPEN_BRACE: Cow<'static, str> = Cow::Borrowed("{");
pub(crate) const CLOSE_BRACE: Cow<'static, str> = Cow::Borrowed("}");
pub(crate) const OPEN_BRACKET: Cow<'static, str> = Cow::Borrowed("[");
pub(crate) const CLOSE_BRACKET: Cow<'static, str> = Cow::Borrowed("]");
pub(crate) const COMMA: Cow<'static, str> = Cow::Borrowed(",");
pub(crate) const COLON: Cow<'static, str> = Cow::Borrowed(":");

/// Operations every JSON node supports.
///
/// The cast methods default to a type-mismatch [`CastError`]; a node type
/// only overrides the ones it can actually satisfy.
pub trait JsonNode {
    /// The node's fixed type tag.
    fn get_type(&self) -> Type;

    /// Text form of the node. Strings yield their raw, unescaped text;
    /// everything else yields its JSON rendering.
    fn as_string(&self) -> Cow<'_, str>;

    /// Interpret the node as a double-precision number.
    fn as_number(&self) -> Result<f64, CastError> {
        Err(CastError::mismatch(self.get_type(), CastTarget::Number))
    }

    /// Interpret the node as a timestamp using the [`Iso8601`] codec.
    fn as_date(&self) -> Result<DateTime<Utc>, CastError> {
        self.as_date_with(&Iso8601)
    }

    /// Interpret the node as a timestamp using `codec`.
    fn as_date_with(&self, _codec: &dyn DateCodec) -> Result<DateTime<Utc>, CastError> {
        Err(CastError::mismatch(self.get_type(), CastTarget::Date))
    }

    /// Interpret the node as a boolean. Booleans succeed, as do the strings
    /// `"true"` and `"false"` in any ASCII case.
    fn as_boolean(&self) -> Result<bool, CastError> {
        Err(CastError::mismatch(self.get_type(), CastTarget::Boolean))
    }

    /// Append this node's serialized form to `tokens`.
    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>);

    /// Canonical JSON text of the node.
    fn to_text(&self) -> String {
        let mut tokens = Tokens::new();
        self.append_tokens(&mut tokens);
        concat_tokens(&tokens)
    }
}

/// Join a token stream into a single string, allocating once.
pub fn concat_tokens(tokens: &[Cow<'_, str>]) -> String {
    let len = tokens.iter().map(|t| t.len()).sum();
    let mut out = String::with_capacity(len);
    for token in tokens {
        out.push_str(token);
    }
    out
}

/// `Display` helper for nodes without a cached text form.
pub(crate) fn write_tokens<N: JsonNode + ?Sized>(node: &N, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut tokens = Tokens::new();
    node.append_tokens(&mut tokens);
    tokens.iter().try_for_each(|token| f.write_str(token))
}

/// Emit `items` between `open` and `close`, separated by commas.
pub(crate) fn append_separated<'a, I, F>(
    tokens: &mut Tokens<'a>,
    open: Cow<'static, str>,
    close: Cow<'static, str>,
    items: I,
    mut emit: F,
) where
    I: IntoIterator,
    F: FnMut(I::Item, &mut Tokens<'a>),
{
    tokens.push(open);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            tokens.push(COMMA);
        }
        emit(item, tokens);
    }
    tokens.push(close);
}
