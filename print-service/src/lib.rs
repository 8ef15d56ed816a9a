//! Print Service - warehouse document printing
//!
//! # Overview
//!
//! Renders warehouse documents (receive notes, transfer notes, serial-number
//! stickers, claim receipts, stock reports) to HTML and prints them through
//! a print surface, tracking every request as a print job.
//!
//! # Module layout
//!
//! ```text
//! print-service/src/
//! ├── core/          # configuration
//! ├── printing/      # renderers, registry, job store, executor, service
//! └── utils/         # logging
//! ```

pub mod core;
pub mod printing;
pub mod utils;

use std::sync::Arc;

pub use crate::core::Config;
pub use printing::{
    OutputTiming, PrintExecutor, PrintOptions, PrintRequest, PrintService, TemplateRegistry,
};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    // missing .env is fine
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

/// Service printing to the configured spool directory
pub fn build_service(config: &Config) -> AppResult<PrintService> {
    let executor = PrintExecutor::with_timing(Arc::new(config.spool_surface()), config.timing());
    PrintService::with_parts(
        TemplateRegistry::builtin(),
        Arc::new(printing::MemoryJobStore::new()),
        config.print_config(),
        executor,
    )
}
