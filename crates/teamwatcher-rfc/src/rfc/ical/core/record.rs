//! Event records handed to the serializer by the feed layer.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::error::{RfcError, RfcResult};

/// One calendar event, anchored to a civil time zone.
///
/// Records are immutable once built. The feed layer that decorates a record
/// with score text does so by consuming it through [`EventRecord::with_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    uid: String,
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    summary: String,
    description: String,
}

impl EventRecord {
    /// ## Summary
    /// Builds an event record.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidTime` if `end` is before `start`.
    pub fn new(
        uid: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> RfcResult<Self> {
        let uid = uid.into();
        if end < start {
            return Err(RfcError::InvalidTime(format!(
                "event {uid} ends at {end} before it starts at {start}"
            )));
        }

        Ok(Self {
            uid,
            start,
            end,
            summary: summary.into(),
            description: description.into(),
        })
    }

    /// ## Summary
    /// Returns the same event with its display text replaced.
    ///
    /// Identity and times are untouched, so the UID stays stable.
    #[must_use]
    pub fn with_text(self, summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            ..self
        }
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[must_use]
    pub const fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    #[must_use]
    pub const fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
