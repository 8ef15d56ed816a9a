//! Shared types for the warehouse print stack
//!
//! Models, error types and small utilities used by `doc-printer` and
//! `print-service`.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
