//! adrenaline-json-util - String helpers shared by the adrenaline-json value model.
//!
//! The only concern living here is turning raw text into a quoted JSON
//! string literal.

pub mod strings;

pub use strings::{escape, escaped_len, try_escape, EscapeError};
