pub mod alerts_client;
pub mod config;
pub mod controller;
pub mod error;

#[cfg(test)]
mod tests;

pub use alerts_client::AlertsClient;
pub use controller::{
    AlertController, ControllerOptions, PendingRequest, RequestOutcome, WidgetState,
};

pub const APP_NAME: &str = "weather-alerts";
pub const NWS_API_HOSTNAME: &str = "api.weather.gov";
pub const NWS_ALERTS_ENDPOINT: &str =
    const_format::concatcp!("https://", NWS_API_HOSTNAME, "/alerts/active");
pub const DEFAULT_USER_AGENT: &str =
    const_format::concatcp!(APP_NAME, "/", env!("CARGO_PKG_VERSION"));
