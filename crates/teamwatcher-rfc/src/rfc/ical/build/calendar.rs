//! VCALENDAR assembly.

use chrono::{DateTime, Utc};

use super::event::serialize_event_at;
use super::text_property;
use crate::rfc::ical::core::{CalendarMeta, EventRecord, PRODUCT_NAME, REFRESH_INTERVAL};

/// Content line terminator mandated by RFC 5545 §3.1.
pub const CRLF: &str = "\r\n";

/// ## Summary
/// Generates a complete feed, stamping each event with the instant it is
/// serialized.
#[must_use]
pub fn generate_ics(meta: &CalendarMeta, events: &[EventRecord]) -> String {
    assemble(meta, events, Utc::now)
}

/// ## Summary
/// Generates a complete feed with every `DTSTAMP` pinned to `stamp`.
///
/// Output is a pure function of its arguments.
#[must_use]
pub fn generate_ics_at(
    meta: &CalendarMeta,
    events: &[EventRecord],
    stamp: DateTime<Utc>,
) -> String {
    assemble(meta, events, || stamp)
}

fn assemble(
    meta: &CalendarMeta,
    events: &[EventRecord],
    mut clock: impl FnMut() -> DateTime<Utc>,
) -> String {
    let mut lines = envelope_header(meta);
    for event in events {
        lines.extend(serialize_event_at(event, clock()));
    }
    lines.push("END:VCALENDAR".to_string());

    tracing::trace!(
        calendar = %meta.name,
        events = events.len(),
        lines = lines.len(),
        "Assembled calendar"
    );

    let mut output = lines.join(CRLF);
    output.push_str(CRLF);
    output
}

fn envelope_header(meta: &CalendarMeta) -> Vec<String> {
    let mut lines = vec!["BEGIN:VCALENDAR".to_string(), "VERSION:2.0".to_string()];
    lines.extend(text_property(
        "PRODID",
        &format!("-//{PRODUCT_NAME}//{}//EN", meta.name),
    ));
    lines.push("CALSCALE:GREGORIAN".to_string());
    lines.push("METHOD:PUBLISH".to_string());
    lines.extend(text_property("NAME", &meta.name));
    lines.extend(text_property("X-WR-CALNAME", &meta.name));
    lines.extend(text_property("COLOR", &meta.color));
    lines.extend(text_property("X-APPLE-CALENDAR-COLOR", &meta.color));
    lines.push(format!("REFRESH-INTERVAL;VALUE=DURATION:{REFRESH_INTERVAL}"));
    lines.push(format!("X-PUBLISHED-TTL:{REFRESH_INTERVAL}"));
    lines
}
