//! UTC DATE-TIME rendering (RFC 5545 §3.3.5, form #2).

use chrono::{DateTime, TimeZone, Utc};

/// Basic-format UTC timestamp, e.g. `20251109T180000Z`.
pub const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Converts a zoned timestamp to UTC and renders it in basic format.
///
/// The offset applied is the one in force at that instant, so timestamps on
/// either side of a DST transition convert with different offsets.
#[must_use]
pub fn format_utc<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format(UTC_FORMAT).to_string()
}
