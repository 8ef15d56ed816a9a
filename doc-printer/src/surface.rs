//! Print surfaces
//!
//! A surface is the transient host target that stages a rendered document
//! and triggers the platform print action:
//! - [`PrintSurface`] opens a new window for each physical print
//! - [`SurfaceWindow`] receives the HTML, signals readiness, prints, closes
//!
//! Supports:
//! - Spool directory (headless hosts, optional print command such as `lp`)

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

use crate::error::{PrintError, PrintResult};

/// Host that can open output windows
#[async_trait]
pub trait PrintSurface: Send + Sync {
    /// Open a new, blank window.
    ///
    /// Fails with [`PrintError::SurfaceUnavailable`] when the host refuses.
    async fn open(&self) -> PrintResult<Box<dyn SurfaceWindow>>;
}

/// One open output window
#[async_trait]
pub trait SurfaceWindow: Send {
    /// Append HTML to the window's document
    async fn write(&mut self, html: &str) -> PrintResult<()>;

    /// Finalize the document; loading starts here
    async fn finish_write(&mut self) -> PrintResult<()>;

    /// Resolves once the content finished loading, or with the load error
    async fn ready(&mut self) -> PrintResult<()>;

    /// Trigger the platform print action
    async fn invoke_print(&mut self) -> PrintResult<()>;

    /// Close the window. Must be safe to call more than once.
    async fn close(&mut self);
}

/// External command run against each spooled file, e.g. `lp -d Zebra`
///
/// The file path is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PrintCommand {
    /// Parse a whitespace-separated command line; `None` when empty
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

/// Spool directory surface
///
/// Every window becomes one `.html` file in the spool directory. Printing
/// runs the configured [`PrintCommand`] on the file, or leaves it for an
/// external spooler to pick up.
#[derive(Debug, Clone)]
pub struct SpoolSurface {
    dir: PathBuf,
    command: Option<PrintCommand>,
    seq: Arc<AtomicU64>,
}

impl SpoolSurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            command: None,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run `command` on each spooled file when printing
    pub fn with_command(mut self, command: PrintCommand) -> Self {
        self.command = Some(command);
        self
    }

    /// Get the spool directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_path(&self) -> PathBuf {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let stamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
        self.dir
            .join(format!("print-{}-{}-{:04}.html", stamp, std::process::id(), seq))
    }
}

#[async_trait]
impl PrintSurface for SpoolSurface {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn open(&self) -> PrintResult<Box<dyn SurfaceWindow>> {
        if let Err(e) = tokio::fs::create_dir_all(&self.dir).await {
            warn!(error = %e, "Spool directory not writable");
            return Err(PrintError::SurfaceUnavailable);
        }

        let path = self.next_path();
        let file = match File::create(&path).await {
            Ok(f) => f,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to create spool file");
                return Err(PrintError::SurfaceUnavailable);
            }
        };

        Ok(Box::new(SpoolWindow {
            path,
            file: Some(file),
            buf: String::new(),
            written: None,
            command: self.command.clone(),
        }))
    }
}

/// Window backed by a single spool file
#[derive(Debug)]
pub struct SpoolWindow {
    path: PathBuf,
    file: Option<File>,
    buf: String,
    /// Bytes flushed by `finish_write`
    written: Option<u64>,
    command: Option<PrintCommand>,
}

#[async_trait]
impl SurfaceWindow for SpoolWindow {
    async fn write(&mut self, html: &str) -> PrintResult<()> {
        if self.file.is_none() {
            return Err(PrintError::Load("print window is closed".to_string()));
        }
        self.buf.push_str(html);
        Ok(())
    }

    async fn finish_write(&mut self) -> PrintResult<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| PrintError::Load("print window is closed".to_string()))?;

        file.write_all(self.buf.as_bytes()).await?;
        file.flush().await?;
        self.written = Some(self.buf.len() as u64);
        Ok(())
    }

    async fn ready(&mut self) -> PrintResult<()> {
        let expected = self
            .written
            .ok_or_else(|| PrintError::Load("document was never finalized".to_string()))?;

        let meta = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| PrintError::Load(format!("{}: {}", self.path.display(), e)))?;

        if meta.len() != expected {
            return Err(PrintError::Load(format!(
                "{}: expected {} bytes, found {}",
                self.path.display(),
                expected,
                meta.len()
            )));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn invoke_print(&mut self) -> PrintResult<()> {
        let Some(cmd) = &self.command else {
            info!("Document spooled for pickup");
            return Ok(());
        };

        let status = tokio::process::Command::new(&cmd.program)
            .args(&cmd.args)
            .arg(&self.path)
            .status()
            .await
            .map_err(|e| PrintError::Load(format!("failed to run {}: {}", cmd.program, e)))?;

        if !status.success() {
            return Err(PrintError::Load(format!(
                "{} exited with {}",
                cmd.program, status
            )));
        }

        info!(program = %cmd.program, "Print command finished");
        Ok(())
    }

    async fn close(&mut self) {
        // dropping the handle closes the file
        self.file.take();
    }
}
