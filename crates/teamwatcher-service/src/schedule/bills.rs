use teamwatcher_core::constants::UID_DOMAIN;
use teamwatcher_core::types::TeamId;
use teamwatcher_rfc::rfc::ical::EventRecord;

use super::{Game, ScheduledGame, game_window, local_kickoff, summary_for};
use crate::error::ServiceResult;

/// Season year used by 506sports coverage maps.
const SEASON: u16 = 2025;

#[expect(clippy::too_many_arguments)]
const fn game(
    label: &'static str,
    date: &'static str,
    time: &'static str,
    opponent: &'static str,
    opponent_abbreviation: &'static str,
    home: bool,
    network: &'static str,
    week: u8,
) -> Game {
    Game {
        label: Some(label),
        date,
        time,
        opponent,
        opponent_abbreviation,
        home,
        network,
        week: Some(week),
    }
}

/// Buffalo Bills 2025 regular season. Week 7 is the bye.
pub static BILLS_GAMES: [Game; 17] = [
    game("Week 1", "2025-09-07", "20:20", "Baltimore Ravens", "BAL", true, "NBC", 1),
    game("Week 2", "2025-09-14", "13:00", "New York Jets", "NYJ", false, "CBS", 2),
    game("Week 3", "2025-09-18", "20:15", "Miami Dolphins", "MIA", true, "Prime Video", 3),
    game("Week 4", "2025-09-28", "13:00", "New Orleans Saints", "NO", true, "CBS", 4),
    game("Week 5", "2025-10-05", "20:20", "New England Patriots", "NE", true, "NBC", 5),
    game("Week 6", "2025-10-13", "20:15", "Atlanta Falcons", "ATL", false, "ESPN", 6),
    game("Week 8", "2025-10-26", "13:00", "Carolina Panthers", "CAR", false, "CBS", 8),
    game("Week 9", "2025-11-02", "13:00", "Kansas City Chiefs", "KC", true, "CBS", 9),
    game("Week 10", "2025-11-09", "13:00", "Miami Dolphins", "MIA", false, "CBS", 10),
    game("Week 11", "2025-11-16", "13:00", "Tampa Bay Buccaneers", "TB", true, "CBS", 11),
    game("Week 12", "2025-11-20", "20:15", "Houston Texans", "HOU", false, "Prime Video", 12),
    game("Week 13", "2025-11-30", "16:25", "Pittsburgh Steelers", "PIT", false, "CBS", 13),
    game("Week 14", "2025-12-07", "16:25", "Cincinnati Bengals", "CIN", true, "FOX", 14),
    game("Week 15", "2025-12-14", "13:00", "New England Patriots", "NE", false, "CBS", 15),
    game("Week 16", "2025-12-21", "13:00", "Cleveland Browns", "CLE", false, "CBS", 16),
    game("Week 17", "2025-12-28", "16:25", "Philadelphia Eagles", "PHI", true, "FOX", 17),
    game("Week 18", "2026-01-04", "13:00", "New York Jets", "NYJ", true, "TBD", 18),
];

/// Index of the description line the feed inserts watch guidance before.
pub const BILLS_GUIDANCE_INSERT_AT: usize = 3;

fn bills_uid(game: &Game) -> String {
    let label = game
        .label
        .unwrap_or_default()
        .to_lowercase()
        .replace(' ', "");
    format!(
        "{}-{label}-{}@{UID_DOMAIN}",
        TeamId::Bills.profile().uid_prefix,
        game.date
    )
}

fn coverage_map_url(game: &Game) -> String {
    format!(
        "https://506sports.com/nfl.php?wk={}&yr={SEASON}",
        game.week.unwrap_or_default()
    )
}

/// ## Summary
/// Builds the Bills pre-game events for a viewer in `zip`.
///
/// ## Errors
/// Returns an error if a table row cannot be localized.
pub fn bills_events(zip: &str) -> ServiceResult<Vec<ScheduledGame>> {
    let profile = TeamId::Bills.profile();

    BILLS_GAMES
        .iter()
        .map(|game| {
            let (start, end) = game_window(game, profile.game_hours)?;
            let description = [
                format!(
                    "{} — {}",
                    game.label.unwrap_or_default(),
                    local_kickoff(&start)
                ),
                format!("Network: {}", game.network),
                format!("Market: {zip} (NYC area assumptions)"),
                format!("Coverage map (near game day): {}", coverage_map_url(game)),
                "Notes: Listings change due to flex & local carriage rules. Updated Thu + 2h pregame."
                    .to_string(),
            ]
            .join("\n");

            let record =
                EventRecord::new(bills_uid(game), start, end, summary_for(game), description)?;
            Ok(ScheduledGame {
                team: TeamId::Bills,
                game,
                record,
            })
        })
        .collect()
}
