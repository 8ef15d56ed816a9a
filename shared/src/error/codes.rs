//! Unified error codes for the print stack
//!
//! Error codes are shared between the print service, the spool binary and
//! the UI layer that consumes job results. They are organized by range:
//! - 0xxx: General errors
//! - 6xxx: Document errors
//! - 90xx: System errors
//! - 92xx: Print errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 6xxx: Document ====================
    /// Document type has no renderer
    UnsupportedDocumentType = 6801,
    /// A document type is missing from the template registry
    TemplateMissing = 6802,
    /// Document data could not be decoded into its data bag
    InvalidDocumentData = 6803,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Operation timed out
    TimeoutError = 9004,
    /// Printer not available
    PrinterNotAvailable = 9201,
    /// Print operation failed
    PrintFailed = 9202,
    /// Print job not found
    PrintJobNotFound = 9203,
    /// Print job status change not allowed
    InvalidJobTransition = 9204,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),

            // Document
            6801 => Ok(ErrorCode::UnsupportedDocumentType),
            6802 => Ok(ErrorCode::TemplateMissing),
            6803 => Ok(ErrorCode::InvalidDocumentData),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9004 => Ok(ErrorCode::TimeoutError),
            9201 => Ok(ErrorCode::PrinterNotAvailable),
            9202 => Ok(ErrorCode::PrintFailed),
            9203 => Ok(ErrorCode::PrintJobNotFound),
            9204 => Ok(ErrorCode::InvalidJobTransition),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
