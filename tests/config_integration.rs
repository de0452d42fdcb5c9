//! Integration tests for the idea-board-config crate.

use std::fs;
use std::time::Duration;

use idea_board_config::{
    API_URL_ENV, ApiConfig, Branding, Config, ConfigError, LoggingConfig, persistence,
};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("idea-board.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Staging backend
            api: {
                base_url: "https://ideas.staging.example.com/board",
                timeout_secs: 30,
            },
            branding: { name: "acme" },
            logging: { level: "debug", file: "/tmp/idea-board-test.log" },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(
        config.api.base_url,
        "https://ideas.staging.example.com/board"
    );
    assert_eq!(config.api.timeout(), Duration::from_secs(30));
    assert_eq!(config.branding.footer(), "powered by acme");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.enabled);
}

#[test]
fn config_missing_sections_use_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("idea-board.json");
    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.timeout(), Duration::from_secs(10));
    assert_eq!(config.branding.footer(), "powered by cheetah");
}

#[test]
fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let original = Config {
        api: ApiConfig::with_base_url("http://10.0.0.7:8080"),
        branding: Branding::new("acme"),
        logging: LoggingConfig {
            enabled: false,
            ..Default::default()
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[test]
fn saved_config_is_plain_json() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    Config::default().save_to(&config_path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(raw["api"]["base_url"], "http://localhost:8000");
    assert_eq!(raw["api"]["timeout_secs"], 10);
    assert_eq!(raw["branding"]["name"], "cheetah");
}

#[test]
fn config_load_nonexistent_file_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn config_rejects_out_of_range_timeout() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json5");
    fs::write(&config_path, "{ api: { timeout_secs: 0 } }").unwrap();

    assert!(matches!(
        Config::load_from(&config_path),
        Err(ConfigError::InvalidTimeout { .. })
    ));
}

#[test]
fn config_rejects_non_http_base_url() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json5");
    fs::write(&config_path, r#"{ api: { base_url: "ftp://ideas.example.com" } }"#).unwrap();

    assert!(matches!(
        Config::load_from(&config_path),
        Err(ConfigError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn env_override_replaces_file_url() {
    let mut config = Config::default();

    config.apply_overrides(|key| (key == API_URL_ENV).then(|| "https://ideas.example.com".into()));

    assert_eq!(config.api.base_url, "https://ideas.example.com");
    assert!(config.validate().is_ok());
}

#[test]
fn local_config_wins_over_user_config() {
    let local = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    fs::write(local.path().join("idea-board.json"), "{}").unwrap();
    fs::write(user.path().join("config.json5"), "{}").unwrap();

    let found = persistence::find_config_file_in(local.path(), Some(user.path())).unwrap();
    assert_eq!(found, local.path().join("idea-board.json"));

    fs::remove_file(local.path().join("idea-board.json")).unwrap();
    let found = persistence::find_config_file_in(local.path(), Some(user.path())).unwrap();
    assert_eq!(found, user.path().join("config.json5"));
}
