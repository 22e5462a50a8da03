//! Shared building blocks for the weather alerts workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, HTTP status helpers
//! - **models**: pure data (region codes, alert feeds)
//! - **client-core**: alerts client, controller, configuration
//! - **weather-alerts**: application shell wiring everything to a terminal

pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
