//! Document renderers
//!
//! Pure functions from a data bag to markup + CSS. One function per
//! document type; stickers render one at a time.

mod claim;
mod receive;
mod sticker;
mod stock_report;
mod styles;
mod transfer;

pub use claim::render_claim_document;
pub use receive::render_receive_document;
pub use sticker::render_sn_sticker;
pub use stock_report::render_stock_report;
pub use styles::{document_styles, sticker_styles};
pub use transfer::render_transfer_document;

use doc_printer::{HtmlBuilder, html_document};
use shared::models::{CompanyInfo, PrintConfig};

/// Output of a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub title: String,
    /// Document markup without `<html>`/`<head>`
    pub body: String,
    pub css: String,
}

impl RenderedDocument {
    /// Complete document with the CSS inlined, ready for a print surface
    pub fn print_html(&self) -> String {
        html_document(&self.title, &self.css, &self.body)
    }
}

/// Company block, optional logo and the document title
fn render_header(b: &mut HtmlBuilder, company: &CompanyInfo, config: &PrintConfig, title: &str) {
    b.open("div", "header");
    b.open("div", "company");
    b.element("p", "company-name", &company.name);
    if let Some(address) = &company.address {
        b.element("p", "company-detail", address);
    }
    if let Some(phone) = &company.phone {
        b.element("p", "company-detail", &format!("โทร. {}", phone));
    }
    if let Some(tax_id) = &company.tax_id {
        b.element("p", "company-detail", &format!("เลขประจำตัวผู้เสียภาษี {}", tax_id));
    }
    b.close();
    if let Some(logo) = &config.company_logo_url {
        b.image("logo", logo, &company.name);
    }
    b.close();
    b.element("h1", "title", title);
}

fn render_watermark(b: &mut HtmlBuilder, config: &PrintConfig) {
    if let Some(text) = &config.watermark {
        b.element("div", "watermark", text);
    }
}

fn render_notes(b: &mut HtmlBuilder, notes: Option<&str>) {
    if let Some(notes) = notes {
        b.open("div", "notes");
        b.element("span", "label", "หมายเหตุ: ");
        b.text(notes);
        b.close();
    }
}

/// Signature boxes; a known name prints under the line
fn render_signatures(b: &mut HtmlBuilder, slots: &[(&str, Option<&str>)]) {
    b.open("div", "signatures");
    let blank = "\u{00a0}".repeat(24);
    for &(role, name) in slots {
        b.open("div", "signature");
        b.element("div", "line", "");
        b.element("div", "name", &format!("({})", name.unwrap_or(&blank)));
        b.element("div", "role", role);
        b.close();
    }
    b.close();
}

fn serial_list(serials: &[String]) -> Option<String> {
    if serials.is_empty() {
        None
    } else {
        Some(format!("S/N: {}", serials.join(", ")))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use shared::models::*;

    pub fn company() -> CompanyInfo {
        CompanyInfo {
            name: "บริษัท ทดสอบ จำกัด".to_string(),
            address: Some("123 ถนนสุขุมวิท กรุงเทพฯ".to_string()),
            phone: Some("02-123-4567".to_string()),
            tax_id: None,
        }
    }

    pub fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    pub fn receive() -> ReceiveDocumentPrintData {
        ReceiveDocumentPrintData {
            receive_number: "RCV-2024-0001".to_string(),
            receive_date: date(),
            company: company(),
            warehouse: WarehouseRef {
                code: "WH-01".to_string(),
                name: "คลังหลัก".to_string(),
            },
            supplier_name: Some("Supplier Co.".to_string()),
            invoice_number: None,
            items: vec![ReceiveItem {
                product_code: "P-001".to_string(),
                product_name: "Notebook 14\"".to_string(),
                quantity: 2.0,
                unit: "เครื่อง".to_string(),
                unit_cost: 15000.0,
                total_cost: 30000.0,
                serial_numbers: vec!["SN001".to_string(), "SN002".to_string()],
            }],
            total_amount: 30000.0,
            notes: None,
            received_by: Some("สมชาย".to_string()),
            approved_by: None,
        }
    }

    pub fn transfer() -> TransferDocumentPrintData {
        TransferDocumentPrintData {
            transfer_number: "TRF-2024-0007".to_string(),
            transfer_date: date(),
            company: company(),
            from_warehouse: WarehouseRef {
                code: "WH-01".to_string(),
                name: "คลังหลัก".to_string(),
            },
            to_warehouse: WarehouseRef {
                code: "WH-02".to_string(),
                name: "สาขาเชียงใหม่".to_string(),
            },
            items: vec![
                TransferItem {
                    product_code: "P-001".to_string(),
                    product_name: "Notebook".to_string(),
                    quantity: 2.0,
                    unit: "เครื่อง".to_string(),
                    serial_numbers: vec!["SN001".to_string()],
                },
                TransferItem {
                    product_code: "P-002".to_string(),
                    product_name: "Mouse".to_string(),
                    quantity: 10.0,
                    unit: "ชิ้น".to_string(),
                    serial_numbers: vec![],
                },
            ],
            requested_by: Some("สมหญิง".to_string()),
            approved_by: None,
            notes: Some("ส่งด่วน".to_string()),
        }
    }

    pub fn sticker(serial: &str) -> SnStickerPrintData {
        SnStickerPrintData {
            serial_number: serial.to_string(),
            product_code: "P-001".to_string(),
            product_name: "Notebook".to_string(),
            warehouse_name: "คลังหลัก".to_string(),
            receive_date: date(),
            price: None,
            qr_code_image: None,
            barcode_image: None,
        }
    }

    pub fn claim() -> ClaimDocumentPrintData {
        ClaimDocumentPrintData {
            claim_number: "CLM-2024-0003".to_string(),
            claim_date: date(),
            company: company(),
            customer: ClaimCustomer {
                name: "คุณลูกค้า".to_string(),
                phone: Some("081-000-0000".to_string()),
                address: None,
            },
            product: ClaimProduct {
                product_code: "P-001".to_string(),
                product_name: "Notebook".to_string(),
                serial_number: "SN001".to_string(),
                purchase_date: Some(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()),
                warranty_expiry: None,
            },
            claim_type: "repair".to_string(),
            problem_description: "เปิดไม่ติด".to_string(),
            estimated_cost: Some(1500.0),
            notes: None,
            received_by: None,
        }
    }

    pub fn stock_report() -> StockReportPrintData {
        StockReportPrintData {
            report_number: "STK-2024-01".to_string(),
            report_date: date(),
            company: company(),
            warehouse: None,
            items: vec![StockReportItem {
                product_code: "P-002".to_string(),
                product_name: "Mouse".to_string(),
                category: Some("Accessories".to_string()),
                quantity: 120.0,
                unit: "ชิ้น".to_string(),
                unit_cost: 250.0,
                total_value: 30000.0,
            }],
            total_value: 30000.0,
            generated_by: None,
        }
    }
}
