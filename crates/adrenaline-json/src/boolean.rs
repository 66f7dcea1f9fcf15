use std::borrow::Cow;
use std::fmt;

use crate::error::CastError;
use crate::node::{JsonNode, Tokens};
use crate::types::Type;

/// A JSON `true` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonBoolean(bool);

impl JsonBoolean {
    pub const TRUE: JsonBoolean = JsonBoolean(true);
    pub const FALSE: JsonBoolean = JsonBoolean(false);

    pub fn new(value: bool) -> Self {
        Self(value)
    }

    pub fn value(self) -> bool {
        self.0
    }

    fn literal(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }
}

impl JsonNode for JsonBoolean {
    fn get_type(&self) -> Type {
        Type::Boolean
    }

    fn as_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.literal())
    }

    fn as_boolean(&self) -> Result<bool, CastError> {
        Ok(self.0)
    }

    fn append_tokens<'a>(&'a self, tokens: &mut Tokens<'a>) {
        tokens.push(Cow::Borrowed(self.literal()));
    }
}

impl fmt::Display for JsonBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

impl From<bool> for JsonBoolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
