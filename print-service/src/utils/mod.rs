//! Utilities - logging

pub mod logger;

pub use logger::init_logger_with_file;
