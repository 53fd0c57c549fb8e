#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building a test Salvo service with fixed settings
//! - Stubbing the ESPN scoreboard source
//! - Making HTTP requests and reading the responses

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use salvo::http::StatusCode;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use teamwatcher_test::app::config::ConfigHandler;
use teamwatcher_test::app::feed_handler::FeedServiceHandler;
use teamwatcher_test::core::config::{
    FeedConfig, LoggingConfig, ScoresConfig, ServerConfig, Settings,
};
use teamwatcher_test::service::error::{ServiceError, ServiceResult};
use teamwatcher_test::service::feed::FeedService;
use teamwatcher_test::service::scores::{ResultFinder, Scoreboard, ScoreboardSource, WeekGame};


/// Settings with score lookups off and the stock feed defaults.
#[must_use]
pub fn test_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        feeds: FeedConfig {
            default_zip: "11218".to_string(),
            default_subscriptions: "paramount,youtubetv".to_string(),
        },
        scores: ScoresConfig {
            enabled: false,
            base_url: "http://127.0.0.1:9/apis/site/v2/sports".to_string(),
            timeout_secs: 1,
            // Room for every game day of the longer season table.
            result_cache_capacity: 64,
            result_cache_ttl_secs: 3600,
            schedule_cache_capacity: 32,
            schedule_cache_ttl_secs: 7200,
        },
    }
}

/// Canned scoreboards keyed by day. Days without an entry come back empty.
#[derive(Debug, Default)]
pub struct FixtureSource {
    pub boards: Vec<(NaiveDate, &'static str)>,
    pub week_games: Vec<WeekGame>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FixtureSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoreboardSource for FixtureSource {
    async fn scoreboard(
        &self,
        _sport: &str,
        _league: &str,
        date: NaiveDate,
    ) -> ServiceResult<Scoreboard> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ServiceError::InvalidUrl("fixture offline".to_string()));
        }
        Ok(self
            .boards
            .iter()
            .find(|(day, _)| *day == date)
            .map(|(_, json)| serde_json::from_str(json).expect("fixture scoreboard should parse"))
            .unwrap_or_default())
    }

    async fn week_schedule(&self, _week: u8, _season: u16) -> ServiceResult<Vec<WeekGame>> {
        if self.fail {
            return Err(ServiceError::InvalidUrl("fixture offline".to_string()));
        }
        Ok(self.week_games.clone())
    }
}

/// ## Summary
/// Builds a service mirroring `main`, with an optional stubbed score source.
#[must_use]
pub fn create_test_service(source: Option<Arc<FixtureSource>>) -> Service {
    let settings = test_settings();
    let finder = source.map(|source| ResultFinder::new(source, &settings.scores));

    let router = Router::new()
        .hoop(ConfigHandler::new(settings))
        .hoop(FeedServiceHandler {
            service: Arc::new(FeedService::new(finder)),
        })
        .push(teamwatcher_test::app::api::routes());

    Service::new(router)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// ## Summary
/// Sends a GET to `path` and collects status, content type and body.
pub async fn get(service: &Service, path: &str) -> TestResponse {
    let url = format!("http://127.0.0.1:5800{path}");
    let mut response = TestClient::get(&url).send(service).await;

    let status = response
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.take_string().await.unwrap_or_default();

    TestResponse {
        status,
        content_type,
        body,
    }
}

/// Joins folded ICS lines back together.
#[must_use]
pub fn unfold(ics: &str) -> String {
    ics.replace("\r\n ", "")
}
