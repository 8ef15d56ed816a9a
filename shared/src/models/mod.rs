//! Data models
//!
//! Shared between the print service and its callers (serialized as JSON).
//! Timestamps are `i64` Unix millis, calendar dates are `NaiveDate`.

pub mod document;
pub mod print;

// Re-exports
pub use document::*;
pub use print::*;
