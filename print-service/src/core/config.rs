use std::time::Duration;

use doc_printer::{PrintCommand, SpoolSurface};
use shared::models::{PrintConfig, StickerSize};

use crate::printing::OutputTiming;

/// Print service configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SPOOL_DIR | ./spool | Directory receiving one HTML file per print |
/// | PRINT_COMMAND | (none) | Command run on each spooled file, e.g. `lp -d Zebra` |
/// | SETTLE_DELAY_MS | 1000 | Pause between print and closing the window |
/// | LOAD_TIMEOUT_MS | 30000 | Load wait limit, `0` waits forever |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (none) | Daily rolling log files when set |
/// | DEFAULT_PRINTER | (none) | Initial `default_printer` |
/// | STICKER_SIZE | 3.2x2.5 | Initial sticker size (`3.2x2.5`, `5x3`, `7x5`) |
/// | COMPANY_LOGO_URL | (none) | Initial logo URL |
/// | WATERMARK | (none) | Initial watermark text |
///
/// # Example
///
/// ```ignore
/// SPOOL_DIR=/var/spool/docs PRINT_COMMAND="lp -d Brother" print-service receive.json
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub spool_dir: String,
    pub print_command: Option<String>,
    pub settle_delay_ms: u64,
    pub load_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,

    // === Initial print configuration ===
    pub default_printer: Option<String>,
    pub sticker_size: StickerSize,
    pub company_logo_url: Option<String>,
    pub watermark: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            spool_dir: non_empty("SPOOL_DIR").unwrap_or_else(|| "./spool".into()),
            print_command: non_empty("PRINT_COMMAND"),
            settle_delay_ms: non_empty("SETTLE_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            load_timeout_ms: non_empty("LOAD_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),

            default_printer: non_empty("DEFAULT_PRINTER"),
            sticker_size: non_empty("STICKER_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            company_logo_url: non_empty("COMPANY_LOGO_URL"),
            watermark: non_empty("WATERMARK"),
        }
    }

    pub fn timing(&self) -> OutputTiming {
        OutputTiming {
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            load_timeout: (self.load_timeout_ms > 0)
                .then(|| Duration::from_millis(self.load_timeout_ms)),
        }
    }

    /// Print configuration the service starts with
    pub fn print_config(&self) -> PrintConfig {
        PrintConfig {
            sticker_size: self.sticker_size,
            default_printer: self.default_printer.clone(),
            company_logo_url: self.company_logo_url.clone(),
            watermark: self.watermark.clone(),
            ..PrintConfig::default()
        }
    }

    pub fn spool_surface(&self) -> SpoolSurface {
        let surface = SpoolSurface::new(&self.spool_dir);
        match self.print_command.as_deref().and_then(PrintCommand::parse) {
            Some(command) => surface.with_command(command),
            None => surface,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
