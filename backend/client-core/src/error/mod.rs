pub mod alerts_client;
pub mod config;
pub mod controller;

pub use alerts_client::AlertsClientError;
pub use config::ConfigError;
pub use controller::AlertRequestError;
