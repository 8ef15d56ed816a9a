//! Print service - job lifecycle, preview and configuration
//!
//! Every print-X operation follows the same path:
//! create job (pending) → printing → render → output per copy →
//! completed, or failed with the error re-raised to the caller.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::{
    ClaimDocumentPrintData, PrintConfig, PrintConfigPatch, PrintDocumentType, PrintJob,
    PrintPreviewData, PrintStatus, ReceiveDocumentPrintData, SnStickerPrintData,
    StockReportPrintData, TransferDocumentPrintData,
};
use shared::util::{new_job_id, now_millis};
use tracing::{error, info, instrument, warn};

use super::config::PrintConfigStore;
use super::executor::PrintExecutor;
use super::registry::TemplateRegistry;
use super::storage::{JobStore, MemoryJobStore};

/// Who asked for a print, and how many copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub copies: u32,
    pub user_id: String,
    pub user_name: Option<String>,
}

impl PrintOptions {
    /// One copy for `user_id`
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            copies: 1,
            user_id: user_id.into(),
            user_name: None,
        }
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

/// Document print service
///
/// Responsibilities:
/// - Own the job registry and the live print configuration
/// - Render documents through the template registry
/// - Drive the print surface once per copy (once per sticker)
pub struct PrintService {
    registry: TemplateRegistry,
    jobs: Arc<dyn JobStore>,
    config: PrintConfigStore,
    executor: PrintExecutor,
}

impl PrintService {
    /// Service with the built-in templates, an in-memory job store and
    /// the default configuration
    pub fn new(executor: PrintExecutor) -> AppResult<Self> {
        Self::with_parts(
            TemplateRegistry::builtin(),
            Arc::new(MemoryJobStore::new()),
            PrintConfig::default(),
            executor,
        )
    }

    /// Assemble a service from explicit parts.
    ///
    /// Fails when the registry does not cover every document type.
    pub fn with_parts(
        registry: TemplateRegistry,
        jobs: Arc<dyn JobStore>,
        config: PrintConfig,
        executor: PrintExecutor,
    ) -> AppResult<Self> {
        registry.validate()?;
        Ok(Self {
            registry,
            jobs,
            config: PrintConfigStore::new(config),
            executor,
        })
    }

    // ========== Print Operations ==========

    pub async fn print_receive_document(
        &self,
        data: &ReceiveDocumentPrintData,
        options: PrintOptions,
    ) -> AppResult<PrintJob> {
        self.print_typed(PrintDocumentType::ReceiveDocument, data, options)
            .await
    }

    pub async fn print_transfer_document(
        &self,
        data: &TransferDocumentPrintData,
        options: PrintOptions,
    ) -> AppResult<PrintJob> {
        self.print_typed(PrintDocumentType::TransferDocument, data, options)
            .await
    }

    pub async fn print_claim_document(
        &self,
        data: &ClaimDocumentPrintData,
        options: PrintOptions,
    ) -> AppResult<PrintJob> {
        self.print_typed(PrintDocumentType::ClaimDocument, data, options)
            .await
    }

    pub async fn print_stock_report(
        &self,
        data: &StockReportPrintData,
        options: PrintOptions,
    ) -> AppResult<PrintJob> {
        self.print_typed(PrintDocumentType::StockReport, data, options)
            .await
    }

    /// Print one sticker per element, in order, inside a single job.
    ///
    /// The job's copy count is the number of stickers.
    pub async fn print_sn_stickers(
        &self,
        stickers: &[SnStickerPrintData],
        user_id: &str,
        user_name: Option<&str>,
    ) -> AppResult<PrintJob> {
        let copies = u32::try_from(stickers.len())
            .map_err(|_| AppError::validation("Too many stickers in one job"))?;
        let options = PrintOptions {
            copies,
            user_id: user_id.to_string(),
            user_name: user_name.map(str::to_string),
        };
        self.print_typed(PrintDocumentType::SnSticker, stickers, options)
            .await
    }

    /// Print an opaque payload of the given type.
    ///
    /// For `sn_sticker` the payload is the sticker array; `options.copies`
    /// must equal its length.
    pub async fn print(
        &self,
        document_type: PrintDocumentType,
        data: Value,
        options: PrintOptions,
    ) -> AppResult<PrintJob> {
        if options.copies == 0 {
            return Err(
                AppError::validation("copies must be at least 1").with_detail("copies", 0),
            );
        }
        if document_type.is_sticker() {
            let count = data.as_array().map(Vec::len).ok_or_else(|| {
                AppError::invalid_document_data("sn_sticker data must be an array of stickers")
            })?;
            if count != options.copies as usize {
                return Err(AppError::validation(format!(
                    "Sticker count {} does not match copies {}",
                    count, options.copies
                )));
            }
        }

        let config = self.config.get();
        let job = PrintJob::new(
            new_job_id(),
            document_type,
            data,
            self.registry.template_name(document_type)?,
            options.copies,
            config.default_printer.clone(),
            options.user_id,
            options.user_name,
            now_millis(),
        );
        let job_id = job.id.clone();
        self.jobs.insert(job)?;
        info!(
            job_id = %job_id,
            document_type = %document_type,
            copies = options.copies,
            "Print job created"
        );

        // a pending job can still be cancelled here
        tokio::task::yield_now().await;

        let job = match self.jobs.update(&job_id, &mut |j| j.mark_printing()) {
            Ok(job) => job,
            Err(e) => {
                return match self.jobs.get(&job_id) {
                    Some(job) if job.status == PrintStatus::Cancelled => {
                        info!(job_id = %job_id, "Print job cancelled before printing");
                        Ok(job)
                    }
                    _ => Err(e),
                };
            }
        };

        match self.execute(&job, &config).await {
            Ok(()) => {
                let printed_at = now_millis();
                let job = self
                    .jobs
                    .update(&job_id, &mut |j| j.mark_completed(printed_at))?;
                info!(job_id = %job_id, "Print job completed");
                Ok(job)
            }
            Err(e) => {
                error!(job_id = %job_id, error = %e, "Print job failed");
                if let Err(update_err) = self
                    .jobs
                    .update(&job_id, &mut |j| j.mark_failed(e.message.clone()))
                {
                    warn!(job_id = %job_id, error = %update_err, "Failed to record job failure");
                }
                Err(e.with_detail("job_id", job_id))
            }
        }
    }

    async fn print_typed<T: Serialize + ?Sized>(
        &self,
        document_type: PrintDocumentType,
        data: &T,
        options: PrintOptions,
    ) -> AppResult<PrintJob> {
        let value = serde_json::to_value(data).map_err(|e| {
            AppError::invalid_document_data(format!("Invalid {} data: {}", document_type, e))
        })?;
        self.print(document_type, value, options).await
    }

    /// Render and output a job that is already `printing`
    #[instrument(skip(self, job, config), fields(job_id = %job.id, document_type = %job.document_type))]
    async fn execute(&self, job: &PrintJob, config: &PrintConfig) -> AppResult<()> {
        if job.document_type.is_sticker() {
            let stickers = job.document_data.as_array().map(Vec::as_slice).unwrap_or(&[]);
            for (i, sticker) in stickers.iter().enumerate() {
                let doc = self.registry.render(job.document_type, sticker, config)?;
                self.executor.output(&doc.print_html()).await?;
                info!(sticker = i + 1, total = stickers.len(), "Sticker printed");
            }
            return Ok(());
        }

        let doc = self
            .registry
            .render(job.document_type, &job.document_data, config)?;
        let html = doc.print_html();
        for copy in 1..=job.copies {
            self.executor.output(&html).await?;
            info!(copy, copies = job.copies, "Copy printed");
        }
        Ok(())
    }

    // ========== Preview ==========

    /// Preview by wire name; unknown names fail with `UnsupportedDocumentType`
    pub fn generate_preview(
        &self,
        document_type: &str,
        data: &Value,
    ) -> AppResult<PrintPreviewData> {
        let document_type: PrintDocumentType = document_type.parse()?;
        self.preview(document_type, data)
    }

    /// Render without creating a job or touching the surface
    pub fn preview(
        &self,
        document_type: PrintDocumentType,
        data: &Value,
    ) -> AppResult<PrintPreviewData> {
        let doc = self
            .registry
            .render(document_type, data, &self.config.get())?;
        Ok(PrintPreviewData {
            html: doc.body,
            css: doc.css,
            document_type,
            copies: 1,
            estimated_pages: 1,
        })
    }

    // ========== Jobs ==========

    /// Cancel a pending job. Returns `false` for any other state or an
    /// unknown id.
    pub fn cancel_print_job(&self, job_id: &str) -> bool {
        match self.jobs.update(job_id, &mut |j| j.cancel()) {
            Ok(_) => {
                info!(job_id = %job_id, "Print job cancelled");
                true
            }
            Err(_) => false,
        }
    }

    pub fn get_print_job(&self, job_id: &str) -> Option<PrintJob> {
        self.jobs.get(job_id)
    }

    /// Every job of this process, oldest first
    pub fn get_all_print_jobs(&self) -> Vec<PrintJob> {
        self.jobs.list()
    }

    // ========== Configuration ==========

    pub fn update_config(&self, patch: PrintConfigPatch) -> PrintConfig {
        let config = self.config.update(patch);
        info!(sticker_size = %config.sticker_size.as_str(), "Print config updated");
        config
    }

    /// Snapshot of the current configuration
    pub fn get_config(&self) -> PrintConfig {
        self.config.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::executor::OutputTiming;
    use crate::printing::renderer::fixtures;
    use doc_printer::SpoolSurface;
    use shared::error::ErrorCode;
    use std::time::Duration;

    fn service(dir: &std::path::Path) -> PrintService {
        let executor = PrintExecutor::with_timing(
            Arc::new(SpoolSurface::new(dir)),
            OutputTiming {
                settle_delay: Duration::ZERO,
                load_timeout: None,
            },
        );
        PrintService::new(executor).unwrap()
    }

    #[test]
    fn test_incomplete_registry_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let executor = PrintExecutor::new(Arc::new(SpoolSurface::new(dir.path())));
        let result = PrintService::with_parts(
            TemplateRegistry::new(),
            Arc::new(MemoryJobStore::new()),
            PrintConfig::default(),
            executor,
        );
        assert_eq!(result.err().map(|e| e.code), Some(ErrorCode::TemplateMissing));
    }

    #[tokio::test]
    async fn test_print_receive_spools_each_copy() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path());

        let data = fixtures::receive();
        let job = svc
            .print_receive_document(&data, PrintOptions::new("u1").with_copies(2))
            .await
            .unwrap();

        assert_eq!(job.status, PrintStatus::Completed);
        assert!(job.printed_at.is_some());
        assert_eq!(job.template_name, "receive-document");
        assert_eq!(job.document_data, serde_json::to_value(&data).unwrap());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_zero_copies_rejected_without_job() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path());

        let err = svc
            .print_claim_document(&fixtures::claim(), PrintOptions::new("u1").with_copies(0))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(svc.get_all_print_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_empty_sticker_batch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path());

        let err = svc.print_sn_stickers(&[], "u1", None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(svc.get_all_print_jobs().is_empty());
    }

    #[tokio::test]
    async fn test_sticker_count_must_match_copies() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path());

        let stickers = serde_json::to_value(vec![fixtures::sticker("SN-1")]).unwrap();
        let err = svc
            .print(
                PrintDocumentType::SnSticker,
                stickers,
                PrintOptions::new("u1").with_copies(3),
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_default_printer_recorded_on_job() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path());
        svc.update_config(PrintConfigPatch {
            default_printer: Some(Some("Brother_HL".to_string())),
            ..Default::default()
        });

        let job = svc
            .print_stock_report(&fixtures::stock_report(), PrintOptions::new("u1"))
            .await
            .unwrap();
        assert_eq!(job.printer_name.as_deref(), Some("Brother_HL"));
        assert_eq!(job.copies, 1);
    }

    #[test]
    fn test_preview_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path());
        let err = svc
            .generate_preview("purchase_order", &serde_json::json!({}))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedDocumentType);
        assert!(err.message.contains("purchase_order"));
    }

    #[test]
    fn test_cancel_unknown_job() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path());
        assert!(!svc.cancel_print_job("missing"));
    }
}
