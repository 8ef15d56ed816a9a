//! Document data bags
//!
//! Immutable inputs for the document renderers. The service never validates
//! or mutates them beyond decoding and handing them to the matching renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company block shown in every document header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
}

/// Warehouse reference (code + display name)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseRef {
    pub code: String,
    pub name: String,
}

// ========== Receive document ==========

/// Goods-received line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiveItem {
    pub product_code: String,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub serial_numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiveDocumentPrintData {
    pub receive_number: String,
    pub receive_date: NaiveDate,
    pub company: CompanyInfo,
    pub warehouse: WarehouseRef,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub items: Vec<ReceiveItem>,
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub received_by: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
}

// ========== Transfer document ==========

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferItem {
    pub product_code: String,
    pub product_name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub serial_numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDocumentPrintData {
    pub transfer_number: String,
    pub transfer_date: NaiveDate,
    pub company: CompanyInfo,
    pub from_warehouse: WarehouseRef,
    pub to_warehouse: WarehouseRef,
    pub items: Vec<TransferItem>,
    #[serde(default)]
    pub requested_by: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

// ========== Serial-number sticker ==========

/// One sticker per serial-numbered unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnStickerPrintData {
    pub serial_number: String,
    pub product_code: String,
    pub product_name: String,
    pub warehouse_name: String,
    pub receive_date: NaiveDate,
    #[serde(default)]
    pub price: Option<f64>,
    /// QR image (URL or data URI), shown when QR codes are enabled
    #[serde(default)]
    pub qr_code_image: Option<String>,
    /// Barcode image (URL or data URI), shown when barcodes are enabled
    #[serde(default)]
    pub barcode_image: Option<String>,
}

// ========== Claim document ==========

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimCustomer {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimProduct {
    pub product_code: String,
    pub product_name: String,
    pub serial_number: String,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimDocumentPrintData {
    pub claim_number: String,
    pub claim_date: NaiveDate,
    pub company: CompanyInfo,
    pub customer: ClaimCustomer,
    pub product: ClaimProduct,
    /// repair / replace / refund, free text from the claim form
    pub claim_type: String,
    pub problem_description: String,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub received_by: Option<String>,
}

// ========== Stock report ==========

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReportItem {
    pub product_code: String,
    pub product_name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReportPrintData {
    pub report_number: String,
    pub report_date: NaiveDate,
    pub company: CompanyInfo,
    #[serde(default)]
    pub warehouse: Option<WarehouseRef>,
    pub items: Vec<StockReportItem>,
    pub total_value: f64,
    #[serde(default)]
    pub generated_by: Option<String>,
}
