use anyhow::Result;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub feeds: FeedConfig,
    pub scores: ScoresConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Defaults applied when a feed request omits its query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub default_zip: String,
    pub default_subscriptions: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoresConfig {
    /// When false no remote lookups are made and every event keeps its
    /// pre-game text.
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
    pub result_cache_capacity: usize,
    pub result_cache_ttl_secs: u64,
    pub schedule_cache_capacity: usize,
    pub schedule_cache_ttl_secs: u64,
}

/// Prefix of environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "TEAMWATCHER";

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `TEAMWATCHER_*` environment variables
    /// and an optional `config.toml`.
    ///
    /// Nested keys use a double underscore, e.g. `TEAMWATCHER_SCORES__ENABLED=false`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("feeds.default_zip", "11218")?
            .set_default("feeds.default_subscriptions", "paramount,youtubetv")?
            .set_default("scores.enabled", true)?
            .set_default(
                "scores.base_url",
                "https://site.api.espn.com/apis/site/v2/sports",
            )?
            .set_default("scores.timeout_secs", 10)?
            .set_default("scores.result_cache_capacity", 200)?
            .set_default("scores.result_cache_ttl_secs", 3600)?
            .set_default("scores.schedule_cache_capacity", 100)?
            .set_default("scores.schedule_cache_ttl_secs", 7200)?
            // Env file
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests;
