//! Team feeds: schedule rows, watch guidance and results assembled into ICS.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use teamwatcher_core::config::ScoresConfig;
use teamwatcher_core::error::{CoreError, CoreResult};
use teamwatcher_core::types::TeamId;
use teamwatcher_rfc::rfc::ical::{CalendarMeta, EventRecord, generate_ics};

use crate::coverage::{CoverageAdvice, detect_conflict, is_nyc_area};
use crate::error::ServiceResult;
use crate::schedule::{
    BILLS_GUIDANCE_INSERT_AT, ScheduledGame, UNC_GUIDANCE_INSERT_AT, bills_events, unc_events,
};
use crate::scores::{EspnClient, ResultFinder, ResultLookup};
use crate::watch::{ncaamb_notes, nfl_notes};

/// NFL season the Bills table belongs to.
const NFL_SEASON: u16 = 2025;

pub const UNC_CALENDAR_NAME: &str = "UNC Men's Basketball";

const PENDING_NOTE: &str = "Result pending. Check back later.";

/// ## Summary
/// Accepts exactly five ASCII digits.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` otherwise.
pub fn validate_zip(zip: &str) -> CoreResult<()> {
    if zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "zip must be five digits, got {zip:?}"
        )))
    }
}

#[must_use]
pub fn bills_calendar_name(zip: &str) -> String {
    format!("Bills — {zip}")
}

/// Builds team calendars. Score lookups are skipped when no finder is set.
#[derive(Debug, Default)]
pub struct FeedService {
    finder: Option<ResultFinder>,
}

impl FeedService {
    #[must_use]
    pub const fn new(finder: Option<ResultFinder>) -> Self {
        Self { finder }
    }

    /// ## Summary
    /// Wires an [`EspnClient`] backed finder when scores are enabled.
    ///
    /// ## Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_settings(config: &ScoresConfig) -> ServiceResult<Self> {
        if !config.enabled {
            tracing::info!("Score lookups disabled");
            return Ok(Self::new(None));
        }

        let client = EspnClient::from_settings(config)?;
        Ok(Self::new(Some(ResultFinder::new(Arc::new(client), config))))
    }

    #[must_use]
    pub const fn scores_enabled(&self) -> bool {
        self.finder.is_some()
    }

    /// ## Summary
    /// Renders the Bills calendar for a viewer in `zip` with `subs`
    /// streaming subscriptions.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidInput` for a malformed ZIP, or a schedule
    /// error if a table row cannot be localized.
    #[tracing::instrument(skip(self))]
    pub async fn bills(&self, zip: &str, subs: &str, now: DateTime<Utc>) -> ServiceResult<String> {
        validate_zip(zip)?;
        let games = bills_events(zip)?;
        let nyc = is_nyc_area(zip);

        let records = join_all(games.into_iter().map(|scheduled| async move {
            let lookup = self.lookup(&scheduled, now).await;
            let mut notes = nfl_notes(scheduled.game.network);
            if matches!(lookup, None | Some(ResultLookup::Upcoming))
                && let Some(advice) = self.coverage(&scheduled, nyc).await
            {
                notes.push(advice.guidance);
            }

            let mut guidance = vec![
                format!("Subscriptions: {subs}"),
                "How to watch (guidance):".to_string(),
            ];
            guidance.extend(notes.into_iter().map(|n| format!("- {n}")));

            let record = insert_lines(scheduled.record, BILLS_GUIDANCE_INSERT_AT, guidance);
            apply_result(record, lookup.as_ref())
        }))
        .await;

        let meta = CalendarMeta::new(bills_calendar_name(zip), TeamId::Bills.profile().color);
        tracing::debug!(events = records.len(), "Rendering Bills feed");
        Ok(generate_ics(&meta, &records))
    }

    /// ## Summary
    /// Renders the UNC men's basketball calendar.
    ///
    /// ## Errors
    /// Returns an error if a table row cannot be localized.
    #[tracing::instrument(skip(self))]
    pub async fn unc(&self, now: DateTime<Utc>) -> ServiceResult<String> {
        let games = unc_events()?;

        let records = join_all(games.into_iter().map(|scheduled| async move {
            let lookup = self.lookup(&scheduled, now).await;
            let mut guidance = vec!["How to watch (guidance):".to_string()];
            guidance.extend(
                ncaamb_notes(scheduled.game.network)
                    .into_iter()
                    .map(|n| format!("- {n}")),
            );

            let record = insert_lines(scheduled.record, UNC_GUIDANCE_INSERT_AT, guidance);
            apply_result(record, lookup.as_ref())
        }))
        .await;

        let meta = CalendarMeta::new(UNC_CALENDAR_NAME, TeamId::Unc.profile().color);
        tracing::debug!(events = records.len(), "Rendering UNC feed");
        Ok(generate_ics(&meta, &records))
    }

    async fn lookup(&self, scheduled: &ScheduledGame, now: DateTime<Utc>) -> Option<ResultLookup> {
        match &self.finder {
            Some(finder) => Some(finder.lookup(scheduled, now).await),
            None => None,
        }
    }

    async fn coverage(&self, scheduled: &ScheduledGame, nyc: bool) -> Option<CoverageAdvice> {
        let finder = self.finder.as_ref()?;
        if !nyc {
            return Some(CoverageAdvice::out_of_area());
        }

        let week = scheduled.game.week?;
        match finder.week_games(week, NFL_SEASON).await {
            Ok(games) => {
                let kickoff = scheduled.start().with_timezone(&Utc);
                Some(detect_conflict(scheduled.game.network, kickoff, &games))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    week,
                    "Week schedule fetch failed, skipping coverage check"
                );
                None
            }
        }
    }
}

/// Splices `lines` into the record's description before line `at`.
fn insert_lines(record: EventRecord, at: usize, lines: Vec<String>) -> EventRecord {
    let mut description: Vec<String> = record
        .description()
        .split('\n')
        .map(str::to_string)
        .collect();
    let at = at.min(description.len());
    description.splice(at..at, lines);

    let summary = record.summary().to_string();
    record.with_text(summary, description.join("\n"))
}

/// ## Summary
/// Rewrites a record's text from its lookup result.
///
/// Upcoming games and games without a lookup keep their pre-game text.
#[must_use]
pub fn apply_result(record: EventRecord, lookup: Option<&ResultLookup>) -> EventRecord {
    match lookup {
        Some(ResultLookup::Final(result)) => {
            let summary = format!("{} ({} {})", record.summary(), result.outcome, result.score);
            let description = format!(
                "Final: {}\n{}\nBox score: {}\n\n{}",
                result.score,
                result.headline,
                result.box_score_url,
                record.description()
            );
            record.with_text(summary, description)
        }
        Some(ResultLookup::Pending) => {
            let summary = record.summary().to_string();
            let description = format!("{PENDING_NOTE}\n\n{}", record.description());
            record.with_text(summary, description)
        }
        Some(ResultLookup::Upcoming) | None => record,
    }
}
