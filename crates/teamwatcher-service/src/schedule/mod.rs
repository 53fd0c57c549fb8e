//! Static season schedules and their conversion into event records.

mod bills;
mod unc;

use chrono::{DateTime, Duration, NaiveDateTime};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use teamwatcher_core::types::TeamId;
use teamwatcher_rfc::rfc::ical::EventRecord;

use crate::error::{ServiceError, ServiceResult};

pub use bills::{BILLS_GAMES, BILLS_GUIDANCE_INSERT_AT, bills_events};
pub use unc::{UNC_GAMES, UNC_GUIDANCE_INSERT_AT, unc_events};

/// Civil zone every table row is written in.
pub const SCHEDULE_TZ: Tz = New_York;

/// One row of a hardcoded season table. Times are local to [`SCHEDULE_TZ`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    /// Week label, e.g. `Week 10`. Only football rows carry one.
    pub label: Option<&'static str>,
    /// `YYYY-MM-DD`
    pub date: &'static str,
    /// `HH:MM`, 24 hour
    pub time: &'static str,
    pub opponent: &'static str,
    /// ESPN abbreviation of the opponent, used to match scoreboards.
    pub opponent_abbreviation: &'static str,
    pub home: bool,
    pub network: &'static str,
    /// NFL week number as used by 506sports and ESPN.
    pub week: Option<u8>,
}

/// A table row paired with the event record built from it.
#[derive(Debug, Clone)]
pub struct ScheduledGame {
    pub team: TeamId,
    pub game: &'static Game,
    pub record: EventRecord,
}

impl ScheduledGame {
    #[must_use]
    pub const fn start(&self) -> &DateTime<Tz> {
        self.record.start()
    }
}

/// ## Summary
/// Builds the pre-game events for a team.
///
/// `zip` only affects football descriptions.
///
/// ## Errors
/// Returns an error if a table row holds an unparseable or nonexistent local time.
pub fn events_for(team: TeamId, zip: &str) -> ServiceResult<Vec<ScheduledGame>> {
    match team {
        TeamId::Bills => bills_events(zip),
        TeamId::Unc => unc_events(),
    }
}

/// ## Summary
/// Interprets a table row's date and time in [`SCHEDULE_TZ`].
///
/// ## Errors
/// Returns `ScheduleError` for malformed strings and `UnknownLocalTime` when
/// the wall-clock time falls in a DST gap.
pub fn localize(game: &Game) -> ServiceResult<DateTime<Tz>> {
    let raw = format!("{} {}", game.date, game.time);
    let naive = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M")
        .map_err(|e| ServiceError::ScheduleError(format!("{raw}: {e}")))?;

    naive
        .and_local_timezone(SCHEDULE_TZ)
        .earliest()
        .ok_or(ServiceError::UnknownLocalTime(raw))
}

/// Start and end of a game lasting `hours`.
pub(crate) fn game_window(game: &Game, hours: i64) -> ServiceResult<(DateTime<Tz>, DateTime<Tz>)> {
    let start = localize(game)?;
    Ok((start, start + Duration::hours(hours)))
}

/// Drops the mascot: `Miami Dolphins` becomes `Miami`.
#[must_use]
pub fn city_from_opponent(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() >= 2 {
        parts[..parts.len() - 1].join(" ")
    } else {
        name.to_string()
    }
}

/// `Vs {city}` at home, `@ {city}` away.
#[must_use]
pub fn summary_for(game: &Game) -> String {
    let city = city_from_opponent(game.opponent);
    if game.home {
        format!("Vs {city}")
    } else {
        format!("@ {city}")
    }
}

/// Local kickoff line, e.g. `Sun Nov 09, 01:00 PM EST`.
pub(crate) fn local_kickoff(start: &DateTime<Tz>) -> String {
    start.format("%a %b %d, %I:%M %p %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn city_drops_last_word() {
        assert_eq!(city_from_opponent("Miami Dolphins"), "Miami");
        assert_eq!(city_from_opponent("Tampa Bay Buccaneers"), "Tampa Bay");
        assert_eq!(city_from_opponent("Navy"), "Navy");
    }

    #[test]
    fn localize_applies_dst() {
        let early = Game {
            label: None,
            date: "2025-09-07",
            time: "20:20",
            opponent: "Baltimore Ravens",
            opponent_abbreviation: "BAL",
            home: true,
            network: "NBC",
            week: Some(1),
        };
        let late = Game {
            date: "2025-11-09",
            time: "13:00",
            ..early
        };

        assert_eq!(local_kickoff(&localize(&early).unwrap()), "Sun Sep 07, 08:20 PM EDT");
        assert_eq!(local_kickoff(&localize(&late).unwrap()), "Sun Nov 09, 01:00 PM EST");
    }

    #[test]
    fn localize_rejects_gap_and_garbage() {
        let base = BILLS_GAMES[0];
        let gap = Game {
            date: "2025-03-09",
            time: "02:30",
            ..base
        };
        let garbage = Game {
            time: "1 PM",
            ..base
        };

        assert!(matches!(localize(&gap), Err(ServiceError::UnknownLocalTime(_))));
        assert!(matches!(localize(&garbage), Err(ServiceError::ScheduleError(_))));
    }

    #[test]
    fn uids_are_unique_and_stable() {
        let mut seen = HashSet::new();
        for team in TeamId::ALL {
            let first = events_for(team, "11218").unwrap();
            let second = events_for(team, "90210").unwrap();
            for (a, b) in first.iter().zip(&second) {
                assert_eq!(a.record.uid(), b.record.uid());
                assert!(seen.insert(a.record.uid().to_string()), "duplicate {}", a.record.uid());
            }
        }
        assert_eq!(seen.len(), BILLS_GAMES.len() + UNC_GAMES.len());
    }

    #[test]
    fn every_row_localizes() {
        for game in BILLS_GAMES.iter().chain(UNC_GAMES.iter()) {
            assert!(localize(game).is_ok(), "{game:?}");
        }
    }
}
