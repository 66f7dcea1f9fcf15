//! String utilities.
//!
//! Provides the JSON string-literal escaping used by `JsonString`.

mod escape;

pub use escape::{escape, escaped_len, try_escape, EscapeError};
