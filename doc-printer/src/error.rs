//! Error types for the document printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// The host refused to create an output surface (popup blocked,
    /// spool directory not writable, ...)
    #[error("Unable to open print window")]
    SurfaceUnavailable,

    /// The surface failed while loading or printing the document
    #[error("Print error: {0}")]
    Load(String),

    /// The surface never signalled that loading finished
    #[error("Print error: print window did not finish loading within {0}ms")]
    LoadTimeout(u64),

    /// IO error while staging the document
    #[error("Print error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
