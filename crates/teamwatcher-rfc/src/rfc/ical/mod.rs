//! iCalendar RFC 5545 feed generation.
//!
//! - `core`: Value types for one published feed
//! - `build`: Escaping, folding and serialization to content lines
//!
//! ## Example
//!
//! ```rust
//! use chrono::TimeZone;
//! use chrono_tz::America::New_York;
//! use teamwatcher_rfc::rfc::ical::{CalendarMeta, EventRecord, build};
//!
//! let start = New_York.with_ymd_and_hms(2025, 11, 9, 13, 0, 0).unwrap();
//! let end = start + chrono::Duration::hours(3);
//! let event = EventRecord::new("x@y", start, end, "Vs Miami", "Week 10").unwrap();
//!
//! let meta = CalendarMeta::new("Bills", "#00338D");
//! let ics = build::generate_ics(&meta, &[event]);
//! assert!(ics.contains("DTSTART:20251109T180000Z\r\n"));
//! ```

pub mod build;
pub mod core;

pub use build::{generate_ics, generate_ics_at};
pub use self::core::{Alarm, CalendarMeta, EventRecord};
