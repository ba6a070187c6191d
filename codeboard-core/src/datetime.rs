//! Date-time parsing and display formats.
//!
//! Timestamps arrive as free-form strings: RFC 3339 from some feeds, local
//! wall-clock strings (`2024-01-01 10:00:00`, `2024/01/31 23:59:59`) from the
//! extractor. Strings without an offset are read in the viewer's zone, which
//! callers pass in as the zone of `now`. The one exception is a bare ISO date
//! (`2024-06-01`), which is UTC midnight as in browser `Date` parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

/// Date-only form read as UTC midnight.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only form read as local midnight.
const LOCAL_DATE_FORMAT: &str = "%Y/%m/%d";

/// Clock display: month and day unpadded, time fields zero-padded.
const CLOCK_FORMAT: &str = "%Y-%-m-%-d %H:%M:%S";

const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a timestamp, reading offset-less input as local time in `tz`.
///
/// A bare `YYYY-MM-DD` is UTC midnight converted into `tz`.
///
/// Returns `None` for blank or unrecognised input, and for wall-clock times
/// that do not exist in `tz` (skipped by a DST transition).
#[must_use]
pub fn parse_datetime<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(tz));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, ISO_DATE_FORMAT) {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).with_timezone(tz));
    }
    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, LOCAL_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    tz.from_local_datetime(&naive).earliest()
}

/// Format the live clock as `YYYY-M-D HH:MM:SS`.
#[must_use]
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.naive_local().format(CLOCK_FORMAT).to_string()
}

/// Format a publish timestamp as `YYYY-MM-DD HH:MM` in the zone of `tz`.
///
/// Unparseable input is shown as received.
#[must_use]
pub fn format_published<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    parse_datetime(raw, tz).map_or_else(
        || raw.to_string(),
        |dt| dt.naive_local().format(PUBLISHED_FORMAT).to_string(),
    )
}
