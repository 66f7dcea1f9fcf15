//! adrenaline-json - immutable JSON value trees.
//!
//! A document is a tree of [`JsonValue`] nodes. Every node type implements
//! [`JsonNode`]: a fixed [`Type`] tag, casts to text, number, date and
//! boolean, and serialization either to a string or into a caller-owned
//! token stream.
//!
//! # Example
//!
//! ```
//! use adrenaline_json::{JsonNode, JsonObject, JsonString, JsonValue, Tokens};
//!
//! let s = JsonString::new("3.14");
//! assert_eq!(s.to_text(), "\"3.14\"");
//! assert!((s.as_number().unwrap() - 3.14).abs() < f64::EPSILON);
//! assert!(JsonString::new("not-a-number").as_number().is_err());
//!
//! let doc = JsonValue::from(JsonObject::new().with("pi", s).with("list", vec![1, 2]));
//! let mut tokens = Tokens::new();
//! doc.append_tokens(&mut tokens);
//! assert_eq!(adrenaline_json::concat_tokens(&tokens), r#"{"pi":"3.14","list":[1,2]}"#);
//! ```

mod array;
mod boolean;
pub mod date;
pub mod error;
mod interop;
mod node;
mod null;
mod number;
mod object;
mod string;
mod types;
mod value;

pub use adrenaline_json_util::{escape, try_escape, EscapeError};
pub use array::JsonArray;
pub use boolean::JsonBoolean;
pub use date::{DateCodec, DateParseError, Iso8601};
pub use error::{CastCause, CastError, CastTarget, JsonError, NumberFormatError};
pub use node::{concat_tokens, JsonNode, Tokens};
pub use null::JsonNull;
pub use number::JsonNumber;
pub use object::JsonObject;
pub use string::JsonString;
pub use types::Type;
pub use value::JsonValue;
