use crate::error::WeatherAlertsError;

use client_core::config::AppConfig;

use std::io::{Error as IoError, ErrorKind};

/// **VALUE**: Config failures keep the underlying message and gain a shell location.
///
/// **BUG THIS CATCHES**: Would catch the `From<ConfigError>` conversion dropping the
/// reason, which is all the user sees when startup fails.
#[test]
fn given_config_validation_error_when_converted_then_message_is_kept() {
    // GIVEN: An invalid config
    let config = AppConfig {
        version: 0,
        ..AppConfig::default()
    };
    let config_error = config.validate().unwrap_err();

    // WHEN: Converting
    let err = WeatherAlertsError::from(config_error);

    // THEN: Config variant with the validation reason and this file's location
    let formatted = err.to_string();
    assert!(formatted.starts_with("Config Error:"));
    assert!(formatted.contains("Invalid version: 0"));
    assert!(formatted.contains("error.rs"));
}

#[test]
fn given_io_error_when_converted_then_io_variant() {
    let err = WeatherAlertsError::from(IoError::new(ErrorKind::BrokenPipe, "stdin closed"));

    assert!(matches!(err, WeatherAlertsError::Io { .. }));
    assert!(err.to_string().contains("stdin closed"));
}
