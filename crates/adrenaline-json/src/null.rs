use std::borrow::Cow;
use std::fmt;

use crate::node::{JsonNode, Tokens};
use crate::types::Type;

const NULL: &str = "null";

/// The JSON `null` literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsonNull;

impl JsonNode for JsonNull {
    fn get_type(&self) -> Type {
        Type::Null
    }

    fn as_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(NULL)
    }

    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>) {
        tokens.push(Cow::Borrowed(NULL));
    }
}

impl fmt::Display for JsonNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NULL)
    }
}
