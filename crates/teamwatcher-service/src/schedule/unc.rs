use teamwatcher_core::constants::UID_DOMAIN;
use teamwatcher_core::types::TeamId;
use teamwatcher_rfc::rfc::ical::EventRecord;

use super::{Game, ScheduledGame, game_window, local_kickoff, summary_for};
use crate::error::ServiceResult;

const fn game(
    date: &'static str,
    time: &'static str,
    opponent: &'static str,
    opponent_abbreviation: &'static str,
    home: bool,
) -> Game {
    Game {
        label: None,
        date,
        time,
        opponent,
        opponent_abbreviation,
        home,
        network: "TBD",
        week: None,
    }
}

/// UNC men's basketball, November 2025 through mid January 2026.
pub static UNC_GAMES: [Game; 15] = [
    game("2025-11-11", "19:00", "Radford Highlanders", "RAD", true),
    game("2025-11-14", "21:00", "North Carolina Central Eagles", "NCCU", true),
    game("2025-11-18", "19:00", "Navy Midshipmen", "NAVY", true),
    game("2025-11-25", "18:00", "St. Bonaventure Bonnies", "SBU", true),
    game("2025-11-27", "16:30", "Michigan State Spartans", "MSU", false),
    game("2025-12-02", "21:30", "Kentucky Wildcats", "UK", false),
    game("2025-12-07", "17:00", "Georgetown Hoyas", "GTWN", true),
    game("2025-12-13", "14:00", "USC Upstate Spartans", "UPST", true),
    game("2025-12-16", "20:00", "East Tennessee State Buccaneers", "ETSU", true),
    game("2025-12-20", "15:00", "Ohio State Buckeyes", "OSU", false),
    game("2025-12-22", "20:00", "East Carolina Pirates", "ECU", true),
    game("2025-12-30", "19:00", "Florida State Seminoles", "FSU", true),
    game("2026-01-03", "14:15", "SMU Mustangs", "SMU", false),
    game("2026-01-10", "18:00", "Wake Forest Demon Deacons", "WAKE", true),
    game("2026-01-14", "21:00", "Stanford Cardinal", "STAN", false),
];

/// Index of the description line the feed inserts watch guidance before.
pub const UNC_GUIDANCE_INSERT_AT: usize = 2;

fn unc_uid(game: &Game) -> String {
    let opponent = game.opponent.replace(' ', "").to_lowercase();
    format!(
        "{}-{}-{opponent}@{UID_DOMAIN}",
        TeamId::Unc.profile().uid_prefix,
        game.date
    )
}

/// ## Summary
/// Builds the UNC pre-game events.
///
/// ## Errors
/// Returns an error if a table row cannot be localized.
pub fn unc_events() -> ServiceResult<Vec<ScheduledGame>> {
    let profile = TeamId::Unc.profile();

    UNC_GAMES
        .iter()
        .map(|game| {
            let (start, end) = game_window(game, profile.game_hours)?;
            let description = [
                local_kickoff(&start),
                "TV: TBD — assignments often finalize closer to tip.".to_string(),
                "Notes: Times/TV subject to change; feed updates automatically.".to_string(),
            ]
            .join("\n");

            let record =
                EventRecord::new(unc_uid(game), start, end, summary_for(game), description)?;
            Ok(ScheduledGame {
                team: TeamId::Unc,
                game,
                record,
            })
        })
        .collect()
}
