use crate::error::alerts_client::AlertsClientError;

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use thiserror::Error as ThisError;

/// Shown when the typed region code fails validation.
pub const INVALID_REGION_MESSAGE: &str = "Please enter a valid 2-letter state code";

/// Shown for any non-2xx response and prefixed to network failures.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather alerts";

/// Prefixed to decoder messages when the body is not an alert feed.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid weather alerts response";

/// Failure of a single fetch-and-render cycle.
///
/// Every variant is recoverable: it is written to the error region and the
/// controller keeps accepting triggers.
#[derive(Debug, Clone, ThisError)]
pub enum AlertRequestError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// `status` is `None` when no response arrived at all.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        status: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    #[error("Parse Error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
    },
}

impl AlertRequestError {
    /// Text for the error region. Locations stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AlertRequestError::Validation { .. } => String::from(INVALID_REGION_MESSAGE),
            AlertRequestError::Transport {
                status: Some(_), ..
            } => String::from(FETCH_FAILED_MESSAGE),
            AlertRequestError::Transport {
                message,
                status: None,
                ..
            } => format!("{FETCH_FAILED_MESSAGE}: {message}"),
            AlertRequestError::Parse { message, .. } => {
                format!("{INVALID_RESPONSE_MESSAGE}: {message}")
            }
        }
    }
}

impl From<ModelError> for AlertRequestError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Validation { message, location } => {
                AlertRequestError::Validation { message, location }
            }
        }
    }
}

impl From<AlertsClientError> for AlertRequestError {
    fn from(error: AlertsClientError) -> Self {
        match error {
            AlertsClientError::Http { message, location }
            | AlertsClientError::UrlParse { message, location } => AlertRequestError::Transport {
                message,
                status: None,
                location,
            },
            AlertsClientError::Status {
                status,
                message,
                location,
            } => AlertRequestError::Transport {
                message,
                status: Some(status),
                location,
            },
            AlertsClientError::Json { message, location } => {
                AlertRequestError::Parse { message, location }
            }
        }
    }
}
