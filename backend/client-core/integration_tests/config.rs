use client_core::config::{
    AppConfig, CONFIG_DIR_ENV, ENDPOINT_ENV, TIMEOUT_SECS_ENV, USER_AGENT_ENV,
    default_config_dir,
};
use client_core::error::ConfigError;

use std::env;
use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    // SAFETY: every test touching these variables is #[serial].
    unsafe {
        env::remove_var(CONFIG_DIR_ENV);
        env::remove_var(ENDPOINT_ENV);
        env::remove_var(USER_AGENT_ENV);
        env::remove_var(TIMEOUT_SECS_ENV);
    }
}

#[test]
fn given_missing_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = AppConfig::load(dir.path()).expect("missing file is not an error");

    assert_eq!(config, AppConfig::default());
}

/// **VALUE**: A saved config loads back unchanged.
///
/// **BUG THIS CATCHES**: Would catch a field missing `#[serde(default)]` handling that
/// differs between save and load, or the temp file never being renamed into place.
#[test]
fn given_saved_config_when_loaded_then_values_match() {
    // GIVEN: A non-default config saved to a fresh directory
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.api.endpoint = String::from("http://localhost:8080/alerts/active");
    config.api.timeout_secs = Some(10);
    config.display.clear_alerts_on_error = true;

    // WHEN: Saving and loading
    config.save(dir.path()).expect("save should succeed");
    let loaded = AppConfig::load(dir.path()).expect("load should succeed");

    // THEN: Identical, and no temp file left behind
    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.toml.tmp").exists());
}

#[test]
fn given_corrupt_file_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "version = \"one\"\n[api\n").unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_invalid_values_when_loading_then_validation_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[api]\nendpoint = \"api.weather.gov/alerts/active\"\n",
    )
    .unwrap();

    let result = AppConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_invalid_config_when_saving_then_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.api.timeout_secs = Some(0);

    let result = config.save(dir.path());

    assert!(result.is_err());
    assert!(!dir.path().join("config.toml").exists());
}

/// **VALUE**: Environment variables override file values.
///
/// **WHY THIS MATTERS**: Pointing the widget at a staging endpoint or adding a timeout
/// should not require editing the config file.
#[test]
#[serial]
fn given_env_overrides_when_applied_then_config_uses_them() {
    // GIVEN: Endpoint, user agent and timeout set in the environment
    clear_env();
    // SAFETY: serialized test.
    unsafe {
        env::set_var(ENDPOINT_ENV, "http://127.0.0.1:9000/alerts/active");
        env::set_var(USER_AGENT_ENV, "weather-alerts-test (ops@example.com)");
        env::set_var(TIMEOUT_SECS_ENV, " 20 ");
    }
    let mut config = AppConfig::default();

    // WHEN: Applying overrides
    let result = config.apply_env_overrides();
    clear_env();

    // THEN: All three are used
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(config.api.endpoint, "http://127.0.0.1:9000/alerts/active");
    assert_eq!(config.api.user_agent, "weather-alerts-test (ops@example.com)");
    assert_eq!(config.api.timeout_secs, Some(20));
}

#[test]
#[serial]
fn given_non_numeric_timeout_env_when_applied_then_env_override_error() {
    clear_env();
    // SAFETY: serialized test.
    unsafe {
        env::set_var(TIMEOUT_SECS_ENV, "soon");
    }
    let mut config = AppConfig::default();

    let result = config.apply_env_overrides();
    clear_env();

    match result {
        Err(ConfigError::EnvOverride { variable, .. }) => assert_eq!(variable, TIMEOUT_SECS_ENV),
        other => panic!("expected env override error, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_config_dir_env_when_resolving_then_override_wins() {
    clear_env();
    // SAFETY: serialized test.
    unsafe {
        env::set_var(CONFIG_DIR_ENV, "/tmp/weather-alerts-config-test");
    }

    let dir = default_config_dir();
    clear_env();

    assert_eq!(
        dir.expect("override resolves"),
        PathBuf::from("/tmp/weather-alerts-config-test")
    );
}
