//! Text to timestamp conversion used by `as_date`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

/// A date string no accepted layout could read.
///
/// `source` is the RFC 3339 parser's complaint, which is the most specific
/// of the attempted layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised date {input:?}")]
pub struct DateParseError {
    input: String,
    source: chrono::ParseError,
}

impl DateParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Converts between text and timestamps.
pub trait DateCodec {
    fn parse(&self, text: &str) -> Result<DateTime<Utc>, DateParseError>;

    fn format(&self, timestamp: DateTime<Utc>) -> String;
}

/// ISO 8601 date codec.
///
/// Accepted layouts, tried in order:
/// - RFC 3339 (`2013-01-02T03:04:05Z`, `2013-01-02T03:04:05.250+01:00`)
/// - numeric offset without a colon (`2013-01-02T03:04:05.123+0100`)
/// - no offset, read as UTC (`2013-01-02T03:04:05`)
/// - date only, read as midnight UTC (`2013-01-02`)
///
/// ```
/// use adrenaline_json::{DateCodec, Iso8601};
///
/// let ts = Iso8601.parse("2013-01-02T03:04:05+0100").unwrap();
/// assert_eq!(Iso8601.format(ts), "2013-01-02T02:04:05.000Z");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601;

impl DateCodec for Iso8601 {
    fn parse(&self, text: &str) -> Result<DateTime<Utc>, DateParseError> {
        let rfc3339_err = match DateTime::parse_from_rfc3339(text) {
            Ok(dt) => return Ok(dt.with_timezone(&Utc)),
            Err(e) => e,
        };
        if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight.and_utc());
            }
        }
        Err(DateParseError {
            input: text.to_owned(),
            source: rfc3339_err,
        })
    }

    fn format(&self, timestamp: DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
