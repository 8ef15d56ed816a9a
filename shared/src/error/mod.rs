//! Unified error system for the print stack
//!
//! This module provides the error handling shared by every crate:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::PrintJobNotFound, "Print job not found: j1");
//!
//! let err = AppError::unsupported_document_type("invoice")
//!     .with_detail("source", "preview");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(6801));
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
