use thiserror::Error;

/// Errors raised by the escaping entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("string argument must be non-null")]
    InvalidArgument,
}

/// Returns the escape sequence for `ch`, if it has one.
///
/// Only backslash, double quote and the five named control characters are
/// rewritten. Every other code point, including the remaining C0 controls,
/// passes through as-is.
#[inline]
fn escape_sequence(ch: char) -> Option<&'static str> {
    match ch {
        '\\' => Some("\\\\"),
        '"' => Some("\\\""),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        '\u{0008}' => Some("\\b"),
        '\u{000C}' => Some("\\f"),
        _ => None,
    }
}

/// Quote and escape a string for use as a JSON string literal.
///
/// The substitutions are, in order: `\` to `\\`, `"` to `\"`, then newline,
/// carriage return, tab, backspace and form feed to their two-character
/// forms. None of the replacement texts contain a character targeted by a
/// later substitution, so a single left-to-right pass gives the same result
/// as applying them one after another.
///
/// # Examples
///
/// ```
/// use adrenaline_json_util::strings::escape;
///
/// assert_eq!(escape("hello"), "\"hello\"");
/// assert_eq!(escape("a\"b\\c"), "\"a\\\"b\\\\c\"");
/// assert_eq!(escape("line1\nline2"), "\"line1\\nline2\"");
/// ```
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(escaped_len(s));
    result.push('"');
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        if let Some(esc) = escape_sequence(ch) {
            result.push_str(&s[last..i]);
            result.push_str(esc);
            last = i + ch.len_utf8();
        }
    }

    result.push_str(&s[last..]);
    result.push('"');
    result
}

/// Like [`escape`], but rejects an absent argument.
///
/// # Errors
///
/// Returns [`EscapeError::InvalidArgument`] when `s` is `None`.
///
/// ```
/// use adrenaline_json_util::strings::{try_escape, EscapeError};
///
/// assert_eq!(try_escape(Some("x")).unwrap(), "\"x\"");
/// assert_eq!(try_escape(None), Err(EscapeError::InvalidArgument));
/// ```
pub fn try_escape(s: Option<&str>) -> Result<String, EscapeError> {
    s.map(escape).ok_or(EscapeError::InvalidArgument)
}

/// Byte length of `escape(s)`, quotes included, without allocating.
pub fn escaped_len(s: &str) -> usize {
    s.chars()
        .map(|ch| match escape_sequence(ch) {
            Some(esc) => esc.len(),
            None => ch.len_utf8(),
        })
        .sum::<usize>()
        + 2
}
