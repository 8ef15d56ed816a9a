//! Print request envelope read by the command-line front end

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::PrintDocumentType;

use super::service::PrintOptions;

/// One print (or preview) request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintRequest {
    pub document_type: PrintDocumentType,
    pub data: Value,
    /// Ignored for stickers, where every array element is one copy
    #[serde(default)]
    pub copies: Option<u32>,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl PrintRequest {
    /// Options for [`super::PrintService::print`]
    ///
    /// Sticker payloads must be an array.
    pub fn options(&self) -> AppResult<PrintOptions> {
        let copies = if self.document_type.is_sticker() {
            let stickers = self.data.as_array().ok_or_else(|| {
                AppError::invalid_document_data("sn_sticker data must be an array of stickers")
            })?;
            u32::try_from(stickers.len())
                .map_err(|_| AppError::validation("Too many stickers in one job"))?
        } else {
            self.copies.unwrap_or(1)
        };
        Ok(PrintOptions {
            copies,
            user_id: self.user_id.clone(),
            user_name: self.user_name.clone(),
        })
    }
}
