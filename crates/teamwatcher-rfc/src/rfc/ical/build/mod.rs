//! iCalendar serialization (RFC 5545).
//!
//! This module provides serializers for feed content:
//! - Escape: TEXT value escaping
//! - Fold: Content line folding at 75 octets
//! - Datetime: UTC DATE-TIME rendering of zoned timestamps
//! - Event / Calendar: ordered VEVENT blocks inside a VCALENDAR envelope

mod calendar;
mod datetime;
mod escape;
mod event;
mod fold;

pub use calendar::{CRLF, generate_ics, generate_ics_at};
pub use datetime::{UTC_FORMAT, format_utc};
pub use escape::escape_text;
pub use event::{serialize_event, serialize_event_at};
pub use fold::{MAX_LINE_OCTETS, fold_line};

/// Escapes `value`, prefixes it with `name:` and folds the result.
fn text_property(name: &str, value: &str) -> Vec<String> {
    fold_line(&format!("{name}:{}", escape_text(value)))
}
