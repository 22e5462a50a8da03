// Unit tests for logger module initialization logic
// Tests focus on idempotence and error handling

use crate::error::WeatherAlertsError;
use crate::logger::{LOG_FILE_NAME, build_dispatch, initialize};

use std::path::PathBuf;

use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: A second global logger install makes fern return an error.
/// Startup must not fail because two code paths both initialize logging.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path());
    let result2 = initialize(temp_dir.path());

    // THEN: Both return Ok
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: Verifies that an unusable log directory is reported as an error.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped instead of
/// mapped into `WeatherAlertsError::App`.
#[test]
fn given_invalid_log_dir_when_building_dispatch_then_returns_error() {
    // GIVEN: A path that cannot hold a file on Unix-like systems
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Building the dispatch
    let result = build_dispatch(&invalid_dir);

    // THEN: App error, no panic
    match result {
        Err(WeatherAlertsError::App { message, .. }) => {
            assert!(message.contains("Failed to create log file"));
        }
        Err(other) => panic!("expected App error, got {other:?}"),
        Ok(_) => panic!("expected an error for an invalid log directory"),
    }
}

#[test]
fn given_writable_dir_when_building_dispatch_then_log_file_is_created() {
    let temp_dir = TempDir::new().unwrap();

    let result = build_dispatch(temp_dir.path());

    assert!(result.is_ok());
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}
