use doc_printer::{HtmlBuilder, format_currency, format_thai_date};
use shared::models::{ClaimDocumentPrintData, PrintConfig};

use super::{
    RenderedDocument, document_styles, render_header, render_notes, render_signatures,
    render_watermark,
};

fn claim_type_label(claim_type: &str) -> &str {
    match claim_type {
        "repair" => "ซ่อม",
        "replace" => "เปลี่ยนสินค้า",
        "refund" => "คืนเงิน",
        other => other,
    }
}

/// Warranty claim receipt (ใบรับเคลมสินค้า)
pub fn render_claim_document(
    data: &ClaimDocumentPrintData,
    config: &PrintConfig,
) -> RenderedDocument {
    let mut b = HtmlBuilder::new();
    b.open("div", "document claim-document");
    render_watermark(&mut b, config);
    render_header(&mut b, &data.company, config, "ใบรับเคลมสินค้า");

    b.open("div", "meta");
    b.field("เลขที่", &data.claim_number);
    b.field("วันที่", &format_thai_date(&data.claim_date));
    b.field("ประเภท", claim_type_label(&data.claim_type));
    b.close();

    b.element("div", "section-title", "ข้อมูลลูกค้า");
    b.open("div", "meta");
    b.field("ชื่อ", &data.customer.name);
    b.field_opt("โทรศัพท์", data.customer.phone.as_deref());
    b.field_opt("ที่อยู่", data.customer.address.as_deref());
    b.close();

    let product = &data.product;
    b.element("div", "section-title", "ข้อมูลสินค้า");
    b.open("div", "meta");
    b.field("รหัสสินค้า", &product.product_code);
    b.field("ชื่อสินค้า", &product.product_name);
    b.field("S/N", &product.serial_number);
    b.field_opt(
        "วันที่ซื้อ",
        product.purchase_date.map(|d| format_thai_date(&d)).as_deref(),
    );
    b.field_opt(
        "หมดประกัน",
        product.warranty_expiry.map(|d| format_thai_date(&d)).as_deref(),
    );
    b.close();

    b.element("div", "section-title", "อาการเสีย");
    b.element("div", "problem", &data.problem_description);
    b.field_opt(
        "ค่าใช้จ่ายโดยประมาณ",
        data.estimated_cost.map(format_currency).as_deref(),
    );

    render_notes(&mut b, data.notes.as_deref());
    render_signatures(
        &mut b,
        &[
            ("ลูกค้า", Some(data.customer.name.as_str())),
            ("ผู้รับเคลม", data.received_by.as_deref()),
        ],
    );

    RenderedDocument {
        title: format!("ใบรับเคลมสินค้า {}", data.claim_number),
        body: b.build(),
        css: document_styles(config),
    }
}
