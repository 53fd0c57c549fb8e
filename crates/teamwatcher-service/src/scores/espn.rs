//! ESPN site API client and the subset of its scoreboard payload we read.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use teamwatcher_core::config::ScoresConfig;

use super::WeekGame;
use super::source::ScoreboardSource;
use crate::error::{ServiceError, ServiceResult};

const USER_AGENT: &str = concat!("teamwatcher/", env!("CARGO_PKG_VERSION"));

/// Regular season in ESPN's `seasontype` parameter.
const REGULAR_SEASON: &str = "2";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub events: Vec<ScoreboardEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoreboardEvent {
    pub id: String,
    /// ISO 8601 kickoff, e.g. `2025-11-09T18:00Z`.
    pub date: Option<String>,
    pub status: Option<Status>,
    pub competitions: Vec<Competition>,
}

impl ScoreboardEvent {
    /// Event status, falling back to the first competition's.
    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status
            .as_ref()
            .or_else(|| self.competitions.first().and_then(|c| c.status.as_ref()))
    }

    /// ESPN omits seconds (`2025-11-09T18:00Z`), so both forms are accepted.
    #[must_use]
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Competition {
    pub competitors: Vec<Competitor>,
    pub headlines: Vec<Headline>,
    pub broadcasts: Vec<Broadcast>,
    pub status: Option<Status>,
}

impl Competition {
    /// First listed broadcast network, `TBD` when none is announced.
    #[must_use]
    pub fn network(&self) -> String {
        self.broadcasts
            .first()
            .and_then(|b| b.names.first())
            .cloned()
            .unwrap_or_else(|| "TBD".to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Competitor {
    pub home_away: String,
    pub team: TeamInfo,
    pub score: Option<RawScore>,
}

impl Competitor {
    #[must_use]
    pub fn points(&self) -> Option<u32> {
        self.score.as_ref().and_then(RawScore::points)
    }
}

/// Scores arrive as strings on the scoreboard and as numbers elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(u32),
    Text(String),
}

impl RawScore {
    #[must_use]
    pub fn points(&self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamInfo {
    pub abbreviation: String,
    pub display_name: String,
    pub short_display_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Headline {
    pub short_link_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Broadcast {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Status {
    #[serde(rename = "type")]
    pub kind: StatusType,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusType {
    pub completed: bool,
    /// `pre`, `in` or `post`
    pub state: String,
}

impl StatusType {
    /// Some payloads drop `completed` but still report the `post` state.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.completed || self.state == "post"
    }
}

impl Scoreboard {
    /// ## Summary
    /// Flattens a week's scoreboard into coverage rows.
    ///
    /// Events with fewer than two competitors are skipped.
    #[must_use]
    pub fn week_games(&self) -> Vec<WeekGame> {
        self.events
            .iter()
            .filter_map(|event| {
                let competition = event.competitions.first()?;
                if competition.competitors.len() < 2 {
                    return None;
                }

                let side = |wanted: &str, fallback: usize| {
                    competition
                        .competitors
                        .iter()
                        .find(|c| c.home_away == wanted)
                        .unwrap_or(&competition.competitors[fallback])
                        .team
                        .display_name
                        .clone()
                };

                Some(WeekGame {
                    away_team: side("away", 0),
                    home_team: side("home", 1),
                    network: competition.network(),
                    kickoff: event.kickoff(),
                })
            })
            .collect()
    }
}

/// Client for `site.api.espn.com` scoreboards.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl EspnClient {
    /// ## Summary
    /// Builds a client rooted at `base_url` (the `.../apis/site/v2/sports` prefix).
    ///
    /// ## Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ServiceResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// ## Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_settings(config: &ScoresConfig) -> ServiceResult<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    fn scoreboard_url(
        &self,
        sport: &str,
        league: &str,
        params: &[(&str, String)],
    ) -> ServiceResult<Url> {
        let raw = format!("{}/{sport}/{league}/scoreboard", self.base_url);
        Url::parse_with_params(&raw, params)
            .map_err(|e| ServiceError::InvalidUrl(format!("{raw}: {e}")))
    }

    #[tracing::instrument(skip(self), fields(url = %url))]
    async fn get<T: DeserializeOwned>(&self, url: Url) -> ServiceResult<T> {
        tracing::debug!("Fetching ESPN payload");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ScoreboardSource for EspnClient {
    async fn scoreboard(
        &self,
        sport: &str,
        league: &str,
        date: NaiveDate,
    ) -> ServiceResult<Scoreboard> {
        let url = self.scoreboard_url(
            sport,
            league,
            &[("dates", date.format("%Y%m%d").to_string())],
        )?;
        self.get(url).await
    }

    async fn week_schedule(&self, week: u8, season: u16) -> ServiceResult<Vec<WeekGame>> {
        let url = self.scoreboard_url(
            "football",
            "nfl",
            &[
                ("seasontype", REGULAR_SEASON.to_string()),
                ("week", week.to_string()),
                ("dates", season.to_string()),
            ],
        )?;
        let board: Scoreboard = self.get(url).await?;
        Ok(board.week_games())
    }
}
