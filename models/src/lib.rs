//! Domain models for the weather alerts widget.
//!
//! Pure data structures with validation at construction. No I/O lives here;
//! fetching and rendering happen in `client-core`.

pub mod alert_feed;
pub mod error;
pub mod region_code;

#[cfg(test)]
mod tests;

pub use alert_feed::{Alert, AlertFeed, AlertProperties};
pub use error::model_error::ModelError;
pub use region_code::{REGION_CODE_LEN, RegionCode};
