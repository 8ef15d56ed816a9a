//! Template registry
//!
//! Maps every [`PrintDocumentType`] to its template name and renderer.
//! Renderers take the opaque job payload and decode it into the matching
//! data bag, so the service never matches on document type itself.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{PrintConfig, PrintDocumentType};

use super::renderer::{
    RenderedDocument, render_claim_document, render_receive_document, render_sn_sticker,
    render_stock_report, render_transfer_document,
};

type RenderFn = Box<dyn Fn(&Value, &PrintConfig) -> AppResult<RenderedDocument> + Send + Sync>;

struct TemplateEntry {
    template_name: &'static str,
    render: RenderFn,
}

/// Document type → (template name, renderer)
#[derive(Default)]
pub struct TemplateRegistry {
    entries: HashMap<PrintDocumentType, TemplateEntry>,
}

impl TemplateRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in template for every document type
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_typed(
            PrintDocumentType::ReceiveDocument,
            "receive-document",
            render_receive_document,
        );
        registry.register_typed(
            PrintDocumentType::TransferDocument,
            "transfer-document",
            render_transfer_document,
        );
        registry.register_typed(
            PrintDocumentType::SnSticker,
            "sn-sticker",
            render_sn_sticker,
        );
        registry.register_typed(
            PrintDocumentType::ClaimDocument,
            "claim-document",
            render_claim_document,
        );
        registry.register_typed(
            PrintDocumentType::StockReport,
            "stock-report",
            render_stock_report,
        );
        registry
    }

    /// Register (or replace) the template for a document type
    pub fn register<F>(
        &mut self,
        document_type: PrintDocumentType,
        template_name: &'static str,
        render: F,
    ) where
        F: Fn(&Value, &PrintConfig) -> AppResult<RenderedDocument> + Send + Sync + 'static,
    {
        self.entries.insert(
            document_type,
            TemplateEntry {
                template_name,
                render: Box::new(render),
            },
        );
    }

    /// Register a renderer over a typed data bag
    pub fn register_typed<T, F>(
        &mut self,
        document_type: PrintDocumentType,
        template_name: &'static str,
        render: F,
    ) where
        T: DeserializeOwned,
        F: Fn(&T, &PrintConfig) -> RenderedDocument + Send + Sync + 'static,
    {
        self.register(document_type, template_name, move |data, config| {
            let bag: T = decode(document_type, data)?;
            Ok(render(&bag, config))
        });
    }

    /// Fail unless every document type has a template
    pub fn validate(&self) -> AppResult<()> {
        let missing: Vec<&str> = PrintDocumentType::ALL
            .iter()
            .filter(|t| !self.entries.contains_key(*t))
            .map(|t| t.as_str())
            .collect();

        if missing.is_empty() {
            return Ok(());
        }
        Err(AppError::with_message(
            ErrorCode::TemplateMissing,
            format!("No template registered for: {}", missing.join(", ")),
        )
        .with_detail("document_types", missing))
    }

    pub fn template_name(&self, document_type: PrintDocumentType) -> AppResult<&'static str> {
        self.entry(document_type).map(|e| e.template_name)
    }

    /// Render a payload with the template registered for `document_type`
    pub fn render(
        &self,
        document_type: PrintDocumentType,
        data: &Value,
        config: &PrintConfig,
    ) -> AppResult<RenderedDocument> {
        (self.entry(document_type)?.render)(data, config)
    }

    fn entry(&self, document_type: PrintDocumentType) -> AppResult<&TemplateEntry> {
        self.entries.get(&document_type).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::TemplateMissing,
                format!("No template registered for: {}", document_type),
            )
            .with_detail("document_type", document_type.as_str())
        })
    }
}

/// Decode a job payload into its data bag
pub fn decode<T: DeserializeOwned>(document_type: PrintDocumentType, data: &Value) -> AppResult<T> {
    T::deserialize(data).map_err(|e| {
        AppError::invalid_document_data(format!("Invalid {} data: {}", document_type, e))
            .with_detail("document_type", document_type.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::renderer::fixtures;
    use serde_json::json;

    #[test]
    fn test_builtin_covers_every_type() {
        let registry = TemplateRegistry::builtin();
        registry.validate().unwrap();
        for t in PrintDocumentType::ALL {
            assert!(!registry.template_name(t).unwrap().is_empty());
        }
    }

    #[test]
    fn test_validate_reports_missing_types() {
        let mut registry = TemplateRegistry::new();
        registry.register_typed(
            PrintDocumentType::ReceiveDocument,
            "receive-document",
            render_receive_document,
        );
        let err = registry.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateMissing);
        assert!(err.message.contains("transfer_document"));
        assert!(err.message.contains("stock_report"));
        assert!(!err.message.contains("receive_document"));
    }

    #[test]
    fn test_render_decodes_payload() {
        let registry = TemplateRegistry::builtin();
        let data = serde_json::to_value(fixtures::receive()).unwrap();
        let doc = registry
            .render(PrintDocumentType::ReceiveDocument, &data, &PrintConfig::default())
            .unwrap();
        assert!(doc.body.contains("RCV-2024-0001"));
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        let registry = TemplateRegistry::builtin();
        let err = registry
            .render(
                PrintDocumentType::ClaimDocument,
                &json!({ "claim_number": 42 }),
                &PrintConfig::default(),
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDocumentData);
        assert!(err.message.starts_with("Invalid claim_document data"));
    }

    #[test]
    fn test_register_replaces_template() {
        let mut registry = TemplateRegistry::builtin();
        registry.register(PrintDocumentType::StockReport, "custom-stock", |_, _| {
            Ok(RenderedDocument {
                title: "custom".to_string(),
                body: "<p>custom</p>".to_string(),
                css: String::new(),
            })
        });
        assert_eq!(
            registry.template_name(PrintDocumentType::StockReport).unwrap(),
            "custom-stock"
        );
        let doc = registry
            .render(PrintDocumentType::StockReport, &json!({}), &PrintConfig::default())
            .unwrap();
        assert_eq!(doc.body, "<p>custom</p>");
    }
}
