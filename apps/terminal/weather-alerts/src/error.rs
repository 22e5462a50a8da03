use client_core::error::{AlertsClientError, ConfigError};
use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors that stop the application shell.
///
/// Request failures never end up here; the controller shows them in the
/// error region and keeps running.
#[derive(Debug, Error)]
pub enum WeatherAlertsError {
    /// Error from this App
    #[error("Weather Alerts Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be resolved, loaded or validated
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// The HTTP client could not be built
    #[error("Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },

    /// Reading stdin or writing the terminal failed
    #[error("IO Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for WeatherAlertsError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        WeatherAlertsError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AlertsClientError> for WeatherAlertsError {
    #[track_caller]
    fn from(error: AlertsClientError) -> Self {
        WeatherAlertsError::Client {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for WeatherAlertsError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        WeatherAlertsError::Io {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
