//! Tests for configuration module.

use super::*;

fn sample_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
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
            base_url: "http://localhost:9".to_string(),
            timeout_secs: 1,
            result_cache_capacity: 4,
            result_cache_ttl_secs: 60,
            schedule_cache_capacity: 4,
            schedule_cache_ttl_secs: 60,
        },
    }
}

#[test_log::test]
fn test_defaults_load_without_sources() {
    tracing::debug!("Loading settings from defaults");

    let settings = Settings::load().expect("defaults should deserialize");

    assert!(!settings.server.host.is_empty());
    assert_eq!(settings.feeds.default_zip.len(), 5);
    assert!(settings.scores.result_cache_capacity > 0);
    assert!(settings.scores.schedule_cache_capacity > 0);
}

#[test]
fn test_bind_addr() {
    let settings = sample_settings();
    assert_eq!(settings.server.bind_addr(), "127.0.0.1:8000");
}

#[test]
fn test_settings_clone() {
    let settings = sample_settings();
    let cloned = settings.clone();

    assert_eq!(cloned.feeds.default_zip, settings.feeds.default_zip);
    assert_eq!(cloned.scores.base_url, settings.scores.base_url);
}

#[test]
fn test_settings_debug() {
    let debug_str = format!("{:?}", sample_settings());
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("scores"));
    assert!(debug_str.contains("feeds"));
}
