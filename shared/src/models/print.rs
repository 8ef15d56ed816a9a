//! Print job, print configuration and preview models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::util::double_option;

/// Printable document kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintDocumentType {
    ReceiveDocument,
    TransferDocument,
    SnSticker,
    ClaimDocument,
    StockReport,
}

impl PrintDocumentType {
    /// Every document type, in declaration order
    pub const ALL: [PrintDocumentType; 5] = [
        PrintDocumentType::ReceiveDocument,
        PrintDocumentType::TransferDocument,
        PrintDocumentType::SnSticker,
        PrintDocumentType::ClaimDocument,
        PrintDocumentType::StockReport,
    ];

    /// Wire name, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReceiveDocument => "receive_document",
            Self::TransferDocument => "transfer_document",
            Self::SnSticker => "sn_sticker",
            Self::ClaimDocument => "claim_document",
            Self::StockReport => "stock_report",
        }
    }

    /// Stickers print on label stock instead of full pages
    pub fn is_sticker(&self) -> bool {
        matches!(self, Self::SnSticker)
    }
}

impl fmt::Display for PrintDocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrintDocumentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AppError::unsupported_document_type(s))
    }
}

/// Print job status
///
/// ```text
/// pending ──► printing ──► completed
///    │            └──────► failed
///    ├──► cancelled
///    └──► failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintStatus {
    Pending,
    Printing,
    Completed,
    Failed,
    Cancelled,
}

impl PrintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Printing => "printing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Completed, failed and cancelled jobs never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    pub fn can_transition_to(&self, next: PrintStatus) -> bool {
        use PrintStatus::*;
        matches!(
            (self, next),
            (Pending, Printing)
                | (Pending, Cancelled)
                | (Pending, Failed)
                | (Printing, Completed)
                | (Printing, Failed)
        )
    }
}

impl fmt::Display for PrintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical sticker size (width x height, centimetres)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StickerSize {
    #[default]
    #[serde(rename = "3.2x2.5")]
    Small,
    #[serde(rename = "5x3")]
    Medium,
    #[serde(rename = "7x5")]
    Large,
}

impl StickerSize {
    pub fn width_cm(&self) -> f32 {
        match self {
            Self::Small => 3.2,
            Self::Medium => 5.0,
            Self::Large => 7.0,
        }
    }

    pub fn height_cm(&self) -> f32 {
        match self {
            Self::Small => 2.5,
            Self::Medium => 3.0,
            Self::Large => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "3.2x2.5",
            Self::Medium => "5x3",
            Self::Large => "7x5",
        }
    }
}

impl FromStr for StickerSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.2x2.5" => Ok(Self::Small),
            "5x3" => Ok(Self::Medium),
            "7x5" => Ok(Self::Large),
            other => Err(AppError::validation(format!(
                "Invalid sticker size: {}",
                other
            ))),
        }
    }
}

/// Page margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

/// Font sizes in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub small: f32,
    pub normal: f32,
    pub large: f32,
}

/// Process-wide print configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintConfig {
    pub sticker_size: StickerSize,
    pub document_margins: Margins,
    pub sticker_margins: Margins,
    pub font_sizes: FontSizes,
    pub include_qr_code: bool,
    pub include_barcode: bool,
    pub default_printer: Option<String>,
    pub company_logo_url: Option<String>,
    pub watermark: Option<String>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            sticker_size: StickerSize::Small,
            document_margins: Margins::uniform(10.0),
            sticker_margins: Margins::uniform(1.0),
            font_sizes: FontSizes {
                small: 8.0,
                normal: 10.0,
                large: 14.0,
            },
            include_qr_code: true,
            include_barcode: true,
            default_printer: None,
            company_logo_url: None,
            watermark: None,
        }
    }
}

impl PrintConfig {
    /// Shallow merge: present fields replace, absent fields stay.
    ///
    /// Nested values (margins, font sizes) are replaced as a whole.
    pub fn apply(&mut self, patch: PrintConfigPatch) {
        if let Some(v) = patch.sticker_size {
            self.sticker_size = v;
        }
        if let Some(v) = patch.document_margins {
            self.document_margins = v;
        }
        if let Some(v) = patch.sticker_margins {
            self.sticker_margins = v;
        }
        if let Some(v) = patch.font_sizes {
            self.font_sizes = v;
        }
        if let Some(v) = patch.include_qr_code {
            self.include_qr_code = v;
        }
        if let Some(v) = patch.include_barcode {
            self.include_barcode = v;
        }
        if let Some(v) = patch.default_printer {
            self.default_printer = v;
        }
        if let Some(v) = patch.company_logo_url {
            self.company_logo_url = v;
        }
        if let Some(v) = patch.watermark {
            self.watermark = v;
        }
    }
}

/// Partial update for [`PrintConfig`]
///
/// Optional config fields use a double option: absent leaves the value,
/// `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_size: Option<StickerSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_margins: Option<Margins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_margins: Option<Margins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<FontSizes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_qr_code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_barcode: Option<bool>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_printer: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_logo_url: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub watermark: Option<Option<String>>,
}

/// One tracked print request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: String,
    #[serde(rename = "type")]
    pub document_type: PrintDocumentType,
    pub status: PrintStatus,
    /// Caller data, opaque to the service
    pub document_data: serde_json::Value,
    pub template_name: String,
    pub copies: u32,
    pub printer_name: Option<String>,
    pub created_at: i64,
    pub printed_at: Option<i64>,
    pub error: Option<String>,
    pub user_id: String,
    pub user_name: Option<String>,
}

impl PrintJob {
    /// Create a pending job
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        document_type: PrintDocumentType,
        document_data: serde_json::Value,
        template_name: impl Into<String>,
        copies: u32,
        printer_name: Option<String>,
        user_id: impl Into<String>,
        user_name: Option<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            document_type,
            status: PrintStatus::Pending,
            document_data,
            template_name: template_name.into(),
            copies,
            printer_name,
            created_at,
            printed_at: None,
            error: None,
            user_id: user_id.into(),
            user_name,
        }
    }

    fn transition(&mut self, next: PrintStatus) -> AppResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::with_message(
                ErrorCode::InvalidJobTransition,
                format!(
                    "Print job {} cannot move from {} to {}",
                    self.id, self.status, next
                ),
            )
            .with_detail("job_id", self.id.clone()));
        }
        self.status = next;
        Ok(())
    }

    pub fn mark_printing(&mut self) -> AppResult<()> {
        self.transition(PrintStatus::Printing)
    }

    pub fn mark_completed(&mut self, printed_at: i64) -> AppResult<()> {
        self.transition(PrintStatus::Completed)?;
        self.printed_at = Some(printed_at);
        Ok(())
    }

    pub fn mark_failed(&mut self, error: impl Into<String>) -> AppResult<()> {
        self.transition(PrintStatus::Failed)?;
        self.error = Some(error.into());
        Ok(())
    }

    pub fn cancel(&mut self) -> AppResult<()> {
        self.transition(PrintStatus::Cancelled)
    }
}

/// Rendered preview, never tied to a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintPreviewData {
    pub html: String,
    pub css: String,
    #[serde(rename = "type")]
    pub document_type: PrintDocumentType,
    pub copies: u32,
    pub estimated_pages: u32,
}
