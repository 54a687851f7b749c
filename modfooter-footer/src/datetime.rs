//! Creation timestamp display.
//!
//! Timestamps arrive as loosely formatted strings. Zoned values are
//! converted to the display offset, naive values are shown as given.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Display pattern: `DD/MM/YYYY, HH:mm:ss`.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Shown in place of a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%#z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses `raw` into a local date-time at `offset`.
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    let zoned = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        ZONED_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    });
    if let Some(dt) = zoned {
        return Some(dt.with_timezone(&offset).naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Formats `raw` for display, or returns [`INVALID_DATE`].
pub fn format_timestamp(raw: &str, offset: FixedOffset) -> String {
    match parse_timestamp(raw, offset) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            debug!("Unparsable timestamp {:?}", raw);
            INVALID_DATE.to_string()
        }
    }
}
