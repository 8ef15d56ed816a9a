//! # doc-printer
//!
//! Document printing library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - HTML markup building and escaping
//! - Thai-locale currency/date formatting, sticker text truncation
//! - Print surfaces (open window, write, wait for load, print, close)
//! - Spool directory output with an optional print command
//!
//! Business logic (WHAT to print) stays in application code:
//! - Document templates and job lifecycle → print-service
//!
//! ## Example
//!
//! ```ignore
//! use doc_printer::{HtmlBuilder, PrintSurface, SpoolSurface, html_document};
//!
//! let mut b = HtmlBuilder::new();
//! b.open("div", "header");
//! b.element("h1", "title", "ใบรับสินค้า");
//! b.close();
//! let html = html_document("RCV-0001", "body { margin: 0; }", &b.build());
//!
//! let surface = SpoolSurface::new("/var/spool/docs");
//! let mut window = surface.open().await?;
//! window.write(&html).await?;
//! window.finish_write().await?;
//! window.ready().await?;
//! window.invoke_print().await?;
//! window.close().await;
//! ```

mod error;
mod format;
mod html;
mod surface;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use format::{
    BUDDHIST_ERA_OFFSET, format_currency, format_quantity, format_short_date, format_thai_date,
    truncate_text,
};
pub use html::{HtmlBuilder, escape_html, html_document};
pub use surface::{PrintCommand, PrintSurface, SpoolSurface, SpoolWindow, SurfaceWindow};
