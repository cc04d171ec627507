//! Time normalization: raw cells to `"H:MM AM"` display strings and back to
//! minute-of-day sort keys.
//!
//! Both directions fail closed. A malformed cell never aborts ingestion; it is
//! passed through as text and sorts as if it were midnight.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};

use crate::cell::CellValue;

/// Last minute of the day, the upper bound of [`time_to_minutes`].
pub const LAST_MINUTE: u16 = 24 * 60 - 1;

const NAIVE_ISO_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Converts a raw time cell to its canonical 12-hour display form.
///
/// - absent cells and empty text become `""`
/// - text without a `'T'` is assumed to be already formatted and returned as is
/// - text with a `'T'` is parsed as an ISO-8601 date-time; the wall-clock time
///   as written is formatted (offsets are not converted)
/// - native date/time values are formatted
/// - anything else passes through as text
pub fn normalize_time(raw: Option<&CellValue>) -> String {
    match raw {
        None => String::new(),
        Some(CellValue::Text(text)) if !text.contains('T') => text.clone(),
        Some(CellValue::Text(text)) => parse_iso_datetime(text).map_or_else(
            || {
                tracing::trace!(value = %text, "time cell is not ISO-8601, passing through");
                text.clone()
            },
            |dt| format_clock(dt.time()),
        ),
        Some(CellValue::DateTime(dt)) => format_clock(dt.time()),
        Some(other) => {
            tracing::trace!(value = %other, "unrecognized time cell, passing through");
            other.to_string()
        }
    }
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    NAIVE_ISO_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// Formats a time of day as `"{h}:{mm} {AM|PM}"` with `h` in 1..=12.
pub fn format_clock(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{hour}:{:02} {meridiem}", time.minute())
}

/// Extracts the minute-of-day sort key from a `"H:MM AM|PM"` display string.
///
/// Empty input yields 0. Unparseable fragments count as 0 and the result is
/// clamped to [`LAST_MINUTE`]; this never panics.
pub fn time_to_minutes(display: &str) -> u16 {
    let mut parts = display.split_whitespace();
    let Some(clock) = parts.next() else {
        return 0;
    };
    let is_pm = parts.next().is_some_and(|m| m.eq_ignore_ascii_case("PM"));

    let mut fields = clock.split(':');
    let hour = leading_number(fields.next().unwrap_or_default());
    let minute = leading_number(fields.next().unwrap_or_default());

    let hour24 = match (is_pm, hour) {
        (true, h) if h != 12 => h.saturating_add(12),
        (false, 12) => 0,
        (_, h) => h,
    };
    let total = hour24.saturating_mul(60).saturating_add(minute);
    u16::try_from(total).map_or(LAST_MINUTE, |m| m.min(LAST_MINUTE))
}

/// Parses the leading ASCII digits of `s`, 0 when there are none.
fn leading_number(s: &str) -> u32 {
    s.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}
