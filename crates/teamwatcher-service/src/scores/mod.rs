//! Final score lookup against ESPN scoreboards.
//!
//! [`ResultFinder`] owns the caches and the [`ScoreboardSource`]; the feed
//! service owns the finder. Nothing here is process global.

mod cache;
mod espn;
mod finder;
mod source;

use chrono::{DateTime, Utc};

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use espn::{
    Broadcast, Competition, Competitor, EspnClient, Headline, RawScore, Scoreboard,
    ScoreboardEvent, Status, StatusType, TeamInfo,
};
pub use finder::{ResultFinder, find_result};
pub use source::ScoreboardSource;

/// Result of a completed game from the tracked team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    #[must_use]
    pub const fn from_points(team: u32, opponent: u32) -> Self {
        if team > opponent {
            Self::Win
        } else if team < opponent {
            Self::Loss
        } else {
            Self::Tie
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "W",
            Self::Loss => "L",
            Self::Tie => "T",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// e.g. `Bills 24, Dolphins 21`
    pub score: String,
    pub headline: String,
    pub box_score_url: String,
}

/// What a lookup could establish about one scheduled game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLookup {
    /// Kickoff is still in the future.
    Upcoming,
    Final(GameResult),
    /// Started, but no completed result is available yet or the fetch failed.
    Pending,
}

/// One NFL game of a week, as used for local coverage checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGame {
    pub away_team: String,
    pub home_team: String,
    pub network: String,
    pub kickoff: Option<DateTime<Utc>>,
}

impl WeekGame {
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.home_team.contains(name) || self.away_team.contains(name)
    }
}
