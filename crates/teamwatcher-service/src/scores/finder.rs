use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use teamwatcher_core::config::ScoresConfig;
use teamwatcher_core::types::TeamProfile;

use super::cache::TtlCache;
use super::espn::{Competitor, Scoreboard};
use super::source::ScoreboardSource;
use super::{GameResult, Outcome, ResultLookup, WeekGame};
use crate::error::ServiceResult;
use crate::schedule::{Game, ScheduledGame, city_from_opponent};

const DEFAULT_HEADLINE: &str = "Final score";

/// Looks up final scores for scheduled games, caching scoreboards per day
/// and NFL week schedules per week.
#[derive(Debug)]
pub struct ResultFinder {
    source: Arc<dyn ScoreboardSource>,
    scoreboards: TtlCache<Scoreboard>,
    schedules: TtlCache<Vec<WeekGame>>,
}

impl ResultFinder {
    #[must_use]
    pub fn new(source: Arc<dyn ScoreboardSource>, config: &ScoresConfig) -> Self {
        Self::with_caches(
            source,
            TtlCache::new(
                config.result_cache_capacity,
                Duration::from_secs(config.result_cache_ttl_secs),
            ),
            TtlCache::new(
                config.schedule_cache_capacity,
                Duration::from_secs(config.schedule_cache_ttl_secs),
            ),
        )
    }

    #[must_use]
    pub fn with_caches(
        source: Arc<dyn ScoreboardSource>,
        scoreboards: TtlCache<Scoreboard>,
        schedules: TtlCache<Vec<WeekGame>>,
    ) -> Self {
        Self {
            source,
            scoreboards,
            schedules,
        }
    }

    /// ## Summary
    /// Resolves the result of `scheduled` as of `now`.
    ///
    /// Fetch failures are logged and reported as [`ResultLookup::Pending`].
    #[tracing::instrument(skip_all, fields(uid = scheduled.record.uid()))]
    pub async fn lookup(&self, scheduled: &ScheduledGame, now: DateTime<Utc>) -> ResultLookup {
        if *scheduled.start() > now {
            return ResultLookup::Upcoming;
        }

        let profile = scheduled.team.profile();
        match self.scoreboard(profile, scheduled).await {
            Ok(board) => find_result(profile, scheduled.game, &board),
            Err(e) => {
                tracing::warn!(error = %e, "Scoreboard fetch failed, marking result pending");
                ResultLookup::Pending
            }
        }
    }

    async fn scoreboard(
        &self,
        profile: &TeamProfile,
        scheduled: &ScheduledGame,
    ) -> ServiceResult<Scoreboard> {
        let date = scheduled.start().date_naive();
        let key = format!("{}_{}_{}", profile.sport, profile.league, date.format("%Y%m%d"));

        if let Some(board) = self.scoreboards.get(&key).await {
            tracing::trace!(%key, "Scoreboard cache hit");
            return Ok(board);
        }

        let board = self.source.scoreboard(profile.sport, profile.league, date).await?;
        self.scoreboards.insert(key, board.clone()).await;
        Ok(board)
    }

    /// ## Summary
    /// Returns every regular season NFL game of `week`.
    ///
    /// ## Errors
    /// Returns an error if the schedule is not cached and fetching it fails.
    pub async fn week_games(&self, week: u8, season: u16) -> ServiceResult<Vec<WeekGame>> {
        let key = format!("nfl_week_{season}_{week}");
        if let Some(games) = self.schedules.get(&key).await {
            return Ok(games);
        }

        let games = self.source.week_schedule(week, season).await?;
        self.schedules.insert(key, games.clone()).await;
        Ok(games)
    }
}

fn is_team(profile: &TeamProfile, competitor: &Competitor) -> bool {
    competitor.team.abbreviation.eq_ignore_ascii_case(profile.abbreviation)
}

fn is_opponent(game: &Game, competitor: &Competitor) -> bool {
    competitor
        .team
        .abbreviation
        .eq_ignore_ascii_case(game.opponent_abbreviation)
}

/// Substring heuristic for payloads whose abbreviations do not line up.
fn fallback_pair<'a>(
    profile: &TeamProfile,
    game: &Game,
    competitors: &'a [Competitor],
) -> Option<(&'a Competitor, &'a Competitor)> {
    let team = competitors.iter().find(|c| {
        profile
            .name_keywords
            .iter()
            .any(|k| c.team.display_name.contains(k))
    })?;
    let city = city_from_opponent(game.opponent);
    let opponent = competitors
        .iter()
        .filter(|c| !std::ptr::eq(*c, team))
        .find(|c| c.team.display_name == game.opponent || c.team.display_name.contains(&city))?;
    Some((team, opponent))
}

/// ## Summary
/// Finds the tracked team's game against `game.opponent` on `board`.
///
/// Competitors are matched by abbreviation first. Returns
/// [`ResultLookup::Pending`] unless a completed, scored game is found.
#[must_use]
pub fn find_result(profile: &TeamProfile, game: &Game, board: &Scoreboard) -> ResultLookup {
    for event in &board.events {
        let Some(competition) = event.competitions.first() else {
            continue;
        };
        let competitors = &competition.competitors;

        let by_abbreviation = competitors
            .iter()
            .find(|c| is_team(profile, c))
            .zip(competitors.iter().find(|c| is_opponent(game, c)));
        let Some((team, opponent)) =
            by_abbreviation.or_else(|| fallback_pair(profile, game, competitors))
        else {
            continue;
        };

        if event.status().is_some_and(|s| !s.kind.is_final()) {
            tracing::debug!(event = %event.id, "Game found but not completed");
            return ResultLookup::Pending;
        }

        let (Some(team_points), Some(opponent_points)) = (team.points(), opponent.points()) else {
            return ResultLookup::Pending;
        };

        let opponent_name = if opponent.team.short_display_name.is_empty() {
            game.opponent
        } else {
            opponent.team.short_display_name.as_str()
        };
        let headline = competition
            .headlines
            .first()
            .and_then(|h| h.short_link_text.clone())
            .unwrap_or_else(|| DEFAULT_HEADLINE.to_string());

        return ResultLookup::Final(GameResult {
            outcome: Outcome::from_points(team_points, opponent_points),
            score: format!(
                "{} {team_points}, {opponent_name} {opponent_points}",
                profile.short_name
            ),
            headline,
            box_score_url: format!(
                "https://www.espn.com/{}/game/_/gameId/{}",
                profile.league, event.id
            ),
        });
    }

    ResultLookup::Pending
}
