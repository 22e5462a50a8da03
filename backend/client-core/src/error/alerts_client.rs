use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AlertsClientError {
    /// Connection, TLS, timeout or body read failure.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    /// The endpoint answered with a non-2xx status. The body is discarded.
    #[error("Status Error: {status} - {message} {location}")]
    Status {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for AlertsClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        AlertsClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AlertsClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        AlertsClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AlertsClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        AlertsClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
