//! VEVENT serialization.

use chrono::{DateTime, Utc};

use super::datetime::format_utc;
use super::fold::fold_line;
use super::text_property;
use crate::rfc::ical::core::{Alarm, DEFAULT_ALARMS, EventRecord};

/// ## Summary
/// Serializes one event, stamped with the current instant.
///
/// `DTSTAMP` is read from the clock on every call.
#[must_use]
pub fn serialize_event(record: &EventRecord) -> Vec<String> {
    serialize_event_at(record, Utc::now())
}

/// ## Summary
/// Serializes one event into ordered physical content lines.
///
/// Property order is fixed: `UID`, `DTSTAMP`, `SUMMARY`, `DTSTART`, `DTEND`,
/// `DESCRIPTION`, then the 60 and 10 minute reminders.
#[must_use]
pub fn serialize_event_at(record: &EventRecord, stamp: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::with_capacity(24);

    lines.push("BEGIN:VEVENT".to_string());
    lines.extend(fold_line(&format!("UID:{}", record.uid())));
    lines.push(format!("DTSTAMP:{}", format_utc(&stamp)));
    lines.extend(text_property("SUMMARY", record.summary()));
    lines.push(format!("DTSTART:{}", format_utc(record.start())));
    lines.push(format!("DTEND:{}", format_utc(record.end())));
    lines.extend(text_property("DESCRIPTION", record.description()));
    for alarm in DEFAULT_ALARMS {
        push_alarm(&mut lines, alarm);
    }
    lines.push("END:VEVENT".to_string());

    lines
}

fn push_alarm(lines: &mut Vec<String>, alarm: Alarm) {
    lines.push("BEGIN:VALARM".to_string());
    lines.push(format!("TRIGGER:{}", alarm.trigger()));
    lines.push("ACTION:DISPLAY".to_string());
    lines.extend(text_property("DESCRIPTION", &alarm.description()));
    lines.push("END:VALARM".to_string());
}
