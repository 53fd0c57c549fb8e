use async_trait::async_trait;
use chrono::NaiveDate;

use super::{Scoreboard, WeekGame};
use crate::error::ServiceResult;

/// Where scoreboards come from. [`super::EspnClient`] in production,
/// fixtures in tests.
#[async_trait]
pub trait ScoreboardSource: Send + Sync + std::fmt::Debug {
    /// Scoreboard of `sport`/`league` for one calendar day.
    async fn scoreboard(
        &self,
        sport: &str,
        league: &str,
        date: NaiveDate,
    ) -> ServiceResult<Scoreboard>;

    /// All regular season NFL games of `week`.
    async fn week_schedule(&self, week: u8, season: u16) -> ServiceResult<Vec<WeekGame>>;
}
