//! Document Printing Module
//!
//! - Renderers: data bag → markup + CSS, one per document type
//! - Registry: document type → template name + renderer
//! - Service: job lifecycle, preview, configuration
//! - Request: the JSON envelope accepted by the binary

pub mod config;
pub mod executor;
pub mod registry;
pub mod renderer;
pub mod request;
pub mod service;
pub mod storage;

pub use config::PrintConfigStore;
pub use executor::{OutputTiming, PrintExecutor, PrintExecutorError, PrintExecutorResult};
pub use registry::TemplateRegistry;
pub use renderer::RenderedDocument;
pub use request::PrintRequest;
pub use service::{PrintOptions, PrintService};
pub use storage::{JobStore, MemoryJobStore};
