//! NYC local carriage checks for Bills games.
//!
//! CBS and FOX regional windows in the New York market go to the Jets or
//! Giants first. A Bills game on the same network inside the same window
//! will usually not air there.

use chrono::{DateTime, Utc};

use crate::scores::WeekGame;

/// Three digit ZIP prefixes of the New York DMA.
const NYC_ZIP_PREFIXES: [std::ops::RangeInclusive<u16>; 2] = [100..=118, 70..=79];

/// Kickoffs closer than this share a broadcast window.
const WINDOW_SECS: i64 = 7200;

const LOCAL_TEAMS: [&str; 2] = ["Jets", "Giants"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageAdvice {
    pub airs_locally: bool,
    pub guidance: String,
}

impl CoverageAdvice {
    #[must_use]
    pub fn out_of_area() -> Self {
        Self {
            airs_locally: true,
            guidance: "This game should air in the Buffalo market.".to_string(),
        }
    }

    #[must_use]
    pub fn no_conflict() -> Self {
        Self {
            airs_locally: true,
            guidance: "No local conflicts detected. Game should air in your market. Verify at 506sports.com."
                .to_string(),
        }
    }

    #[must_use]
    pub fn conflict(local_team: &str) -> Self {
        Self {
            airs_locally: false,
            guidance: format!(
                "⚠️ The {local_team} game may take precedence in the NYC market. Check 506sports.com for your exact coverage."
            ),
        }
    }
}

/// True for five digit ZIPs in the New York market.
#[must_use]
pub fn is_nyc_area(zip: &str) -> bool {
    zip.get(..3)
        .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|p| p.parse::<u16>().ok())
        .is_some_and(|p| NYC_ZIP_PREFIXES.iter().any(|r| r.contains(&p)))
}

fn networks_overlap(a: &str, b: &str) -> bool {
    let (a, b) = (a.to_uppercase(), b.to_uppercase());
    if a.is_empty() || b.is_empty() || a == "TBD" || b == "TBD" {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// ## Summary
/// Checks a Bills kickoff on `network` against the week's Jets and Giants games.
///
/// Games involving the Bills themselves are ignored.
#[must_use]
pub fn detect_conflict(
    network: &str,
    kickoff: DateTime<Utc>,
    week_games: &[WeekGame],
) -> CoverageAdvice {
    for game in week_games {
        if game.involves("Bills") {
            continue;
        }
        let Some(local_team) = LOCAL_TEAMS.into_iter().find(|t| game.involves(t)) else {
            continue;
        };
        if !networks_overlap(network, &game.network) {
            continue;
        }
        if game
            .kickoff
            .is_some_and(|k| (kickoff - k).num_seconds().abs() < WINDOW_SECS)
        {
            return CoverageAdvice::conflict(local_team);
        }
    }

    CoverageAdvice::no_conflict()
}
