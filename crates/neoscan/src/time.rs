//! Conversion between the compact calendar dates used by the close-approach
//! source and `chrono` timestamps.
//!
//! The source writes approach times as `YYYY-Mon-DD HH:MM` (for example
//! `2020-Jan-01 05:30`), always in UTC and never with seconds. Everything this
//! crate displays or exports uses the canonical `YYYY-MM-DD HH:MM` form.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{NeoError, Result};

/// chrono pattern for the compact source form.
pub const COMPACT_FORMAT: &str = "%Y-%b-%d %H:%M";

/// chrono pattern for the canonical display form.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// chrono pattern for calendar dates accepted by filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts variable-width years and signs; these pin the exact shape.
static COMPACT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[A-Za-z]{3}-[0-9]{2} [0-9]{2}:[0-9]{2}$").unwrap());

static DISPLAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$").unwrap());

/// Parse a compact source time such as `2020-Jan-01 05:30`.
///
/// The month abbreviation is matched case-insensitively. Seconds are always
/// zero in the result.
pub fn parse(raw: &str) -> Result<NaiveDateTime> {
    parse_with(raw, &COMPACT_PATTERN, COMPACT_FORMAT)
}

/// Parse a canonical time such as `2020-01-01 05:30`.
pub fn parse_iso(raw: &str) -> Result<NaiveDateTime> {
    parse_with(raw, &DISPLAY_PATTERN, DISPLAY_FORMAT)
}

/// Parse a calendar date such as `2020-01-01`.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| NeoError::Format {
        input: raw.to_string(),
        source,
    })
}

/// Render a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

fn parse_with(raw: &str, pattern: &Regex, fmt: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    if !pattern.is_match(trimmed) {
        return Err(NeoError::FormatShape {
            input: raw.to_string(),
        });
    }

    NaiveDateTime::parse_from_str(trimmed, fmt).map_err(|source| NeoError::Format {
        input: raw.to_string(),
        source,
    })
}
