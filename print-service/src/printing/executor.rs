//! Print output executor
//!
//! Runs one physical print against a print surface:
//! open → write → wait for load → print → settle → close.

use std::sync::Arc;
use std::time::Duration;

use doc_printer::{PrintError, PrintSurface, SurfaceWindow};
use shared::error::{AppError, ErrorCode};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Default pause between the print action and closing the window
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Default upper bound on waiting for the window to load
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum PrintExecutorError {
    #[error(transparent)]
    Surface(#[from] PrintError),
}

pub type PrintExecutorResult<T> = Result<T, PrintExecutorError>;

impl From<PrintExecutorError> for AppError {
    fn from(err: PrintExecutorError) -> Self {
        let PrintExecutorError::Surface(e) = err;
        let code = match &e {
            PrintError::SurfaceUnavailable => ErrorCode::PrinterNotAvailable,
            PrintError::LoadTimeout(_) => ErrorCode::TimeoutError,
            PrintError::Load(_) | PrintError::Io(_) => ErrorCode::PrintFailed,
        };
        AppError::with_message(code, e.to_string())
    }
}

/// Delays applied around each physical print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputTiming {
    pub settle_delay: Duration,
    /// `None` waits for the load signal indefinitely
    pub load_timeout: Option<Duration>,
}

impl Default for OutputTiming {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            load_timeout: Some(DEFAULT_LOAD_TIMEOUT),
        }
    }
}

/// Drives print surfaces
#[derive(Clone)]
pub struct PrintExecutor {
    surface: Arc<dyn PrintSurface>,
    timing: OutputTiming,
}

impl PrintExecutor {
    /// Executor with the default 1s settle delay and 30s load timeout
    pub fn new(surface: Arc<dyn PrintSurface>) -> Self {
        Self::with_timing(surface, OutputTiming::default())
    }

    pub fn with_timing(surface: Arc<dyn PrintSurface>, timing: OutputTiming) -> Self {
        Self { surface, timing }
    }

    /// Print one complete HTML document
    ///
    /// The window is closed on every path once it was opened.
    #[instrument(skip(self, html), fields(bytes = html.len()))]
    pub async fn output(&self, html: &str) -> PrintExecutorResult<()> {
        let mut window = self.surface.open().await?;

        let result = self.run(window.as_mut(), html).await;
        if let Err(e) = &result {
            warn!(error = %e, "Print output failed, closing window");
        }
        window.close().await;
        result.map_err(PrintExecutorError::from)
    }

    async fn run(&self, window: &mut dyn SurfaceWindow, html: &str) -> Result<(), PrintError> {
        window.write(html).await?;
        window.finish_write().await?;
        self.wait_ready(window).await?;
        window.invoke_print().await?;
        debug!(delay_ms = self.timing.settle_delay.as_millis() as u64, "Print invoked, settling");
        tokio::time::sleep(self.timing.settle_delay).await;
        Ok(())
    }

    async fn wait_ready(&self, window: &mut dyn SurfaceWindow) -> Result<(), PrintError> {
        match self.timing.load_timeout {
            Some(limit) => tokio::time::timeout(limit, window.ready())
                .await
                .map_err(|_| PrintError::LoadTimeout(limit.as_millis() as u64))?,
            None => window.ready().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use doc_printer::PrintResult;
    use parking_lot::Mutex;
    use tokio::time::Instant;

    type Stamps = Arc<Mutex<Vec<(&'static str, Instant)>>>;

    /// Surface that records every call into a shared log
    #[derive(Default, Clone)]
    struct ScriptedSurface {
        log: Arc<Mutex<Vec<String>>>,
        stamps: Stamps,
        unavailable: bool,
        fail_load: bool,
        never_ready: bool,
    }

    struct ScriptedWindow {
        log: Arc<Mutex<Vec<String>>>,
        stamps: Stamps,
        fail_load: bool,
        never_ready: bool,
    }

    #[async_trait]
    impl PrintSurface for ScriptedSurface {
        async fn open(&self) -> PrintResult<Box<dyn SurfaceWindow>> {
            if self.unavailable {
                return Err(PrintError::SurfaceUnavailable);
            }
            self.log.lock().push("open".to_string());
            Ok(Box::new(ScriptedWindow {
                log: self.log.clone(),
                stamps: self.stamps.clone(),
                fail_load: self.fail_load,
                never_ready: self.never_ready,
            }))
        }
    }

    #[async_trait]
    impl SurfaceWindow for ScriptedWindow {
        async fn write(&mut self, html: &str) -> PrintResult<()> {
            self.log.lock().push(format!("write:{}", html));
            Ok(())
        }

        async fn finish_write(&mut self) -> PrintResult<()> {
            self.log.lock().push("finish".to_string());
            Ok(())
        }

        async fn ready(&mut self) -> PrintResult<()> {
            if self.never_ready {
                std::future::pending::<()>().await;
            }
            if self.fail_load {
                return Err(PrintError::Load("image failed to decode".to_string()));
            }
            self.log.lock().push("ready".to_string());
            Ok(())
        }

        async fn invoke_print(&mut self) -> PrintResult<()> {
            self.log.lock().push("print".to_string());
            self.stamps.lock().push(("print", Instant::now()));
            Ok(())
        }

        async fn close(&mut self) {
            self.log.lock().push("close".to_string());
            self.stamps.lock().push(("close", Instant::now()));
        }
    }

    fn executor(surface: ScriptedSurface, load_timeout: Option<Duration>) -> PrintExecutor {
        PrintExecutor::with_timing(
            Arc::new(surface),
            OutputTiming {
                settle_delay: Duration::ZERO,
                load_timeout,
            },
        )
    }

    #[test]
    fn test_default_timing() {
        let timing = OutputTiming::default();
        assert_eq!(timing.settle_delay, Duration::from_millis(1000));
        assert_eq!(timing.load_timeout, Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_output_sequence() {
        let surface = ScriptedSurface::default();
        let log = surface.log.clone();
        executor(surface, None).output("<p>1</p>").await.unwrap();
        assert_eq!(
            *log.lock(),
            vec!["open", "write:<p>1</p>", "finish", "ready", "print", "close"]
        );
    }

    #[tokio::test]
    async fn test_unavailable_surface() {
        let surface = ScriptedSurface {
            unavailable: true,
            ..Default::default()
        };
        let err: AppError = executor(surface, None).output("x").await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::PrinterNotAvailable);
        assert_eq!(err.message, "Unable to open print window");
    }

    #[tokio::test]
    async fn test_load_error_closes_window() {
        let surface = ScriptedSurface {
            fail_load: true,
            ..Default::default()
        };
        let log = surface.log.clone();
        let err: AppError = executor(surface, None).output("x").await.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::PrintFailed);
        assert_eq!(err.message, "Print error: image failed to decode");
        assert_eq!(*log.lock(), vec!["open", "write:x", "finish", "close"]);
    }

    #[tokio::test]
    async fn test_load_timeout() {
        let surface = ScriptedSurface {
            never_ready: true,
            ..Default::default()
        };
        let log = surface.log.clone();
        let err: AppError = executor(surface, Some(Duration::from_millis(20)))
            .output("x")
            .await
            .unwrap_err()
            .into();
        assert_eq!(err.code, ErrorCode::TimeoutError);
        assert!(err.message.contains("20ms"));
        assert_eq!(log.lock().last().map(String::as_str), Some("close"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_stays_open_for_settle_delay() {
        let surface = ScriptedSurface::default();
        let stamps = surface.stamps.clone();
        let settle_delay = Duration::from_millis(1000);
        let executor = PrintExecutor::with_timing(
            Arc::new(surface),
            OutputTiming {
                settle_delay,
                load_timeout: None,
            },
        );

        executor.output("x").await.unwrap();

        let stamps = stamps.lock();
        assert_eq!(
            stamps.iter().map(|(event, _)| *event).collect::<Vec<_>>(),
            vec!["print", "close"]
        );
        let gap = stamps[1].1 - stamps[0].1;
        assert!(gap >= settle_delay, "closed after {:?}", gap);
        assert!(gap < settle_delay + Duration::from_millis(5), "closed after {:?}", gap);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_executor_settles_one_second() {
        let surface = ScriptedSurface::default();
        let stamps = surface.stamps.clone();

        PrintExecutor::new(Arc::new(surface)).output("x").await.unwrap();

        let stamps = stamps.lock();
        let gap = stamps[1].1 - stamps[0].1;
        assert!(gap >= Duration::from_secs(1), "closed after {:?}", gap);
    }
}
