use doc_printer::{HtmlBuilder, format_quantity, format_thai_date};
use shared::models::{PrintConfig, TransferDocumentPrintData};

use super::{
    RenderedDocument, document_styles, render_header, render_notes, render_signatures,
    render_watermark, serial_list,
};

/// Stock transfer note (ใบโอนสินค้า)
pub fn render_transfer_document(
    data: &TransferDocumentPrintData,
    config: &PrintConfig,
) -> RenderedDocument {
    let mut b = HtmlBuilder::new();
    b.open("div", "document transfer-document");
    render_watermark(&mut b, config);
    render_header(&mut b, &data.company, config, "ใบโอนสินค้า");

    b.open("div", "meta");
    b.field("เลขที่", &data.transfer_number);
    b.field("วันที่", &format_thai_date(&data.transfer_date));
    b.field(
        "จากคลัง",
        &format!("{} ({})", data.from_warehouse.name, data.from_warehouse.code),
    );
    b.field(
        "ไปยังคลัง",
        &format!("{} ({})", data.to_warehouse.name, data.to_warehouse.code),
    );
    b.close();

    b.open("table", "items");
    b.header_row(&["ลำดับ", "รหัสสินค้า", "รายการ", "จำนวน", "หน่วย"]);
    let mut total_quantity = 0.0;
    for (i, item) in data.items.iter().enumerate() {
        total_quantity += item.quantity;
        b.open("tr", "");
        b.element("td", "center", &(i + 1).to_string());
        b.element("td", "", &item.product_code);
        b.open("td", "");
        b.text(&item.product_name);
        if let Some(serials) = serial_list(&item.serial_numbers) {
            b.element("div", "serials", &serials);
        }
        b.close();
        b.element("td", "num", &format_quantity(item.quantity));
        b.element("td", "center", &item.unit);
        b.close();
    }
    b.open("tr", "total");
    b.raw("<td colspan=\"3\" class=\"num\">รวม</td>");
    b.element("td", "num", &format_quantity(total_quantity));
    b.element("td", "", "");
    b.close();
    b.close();

    render_notes(&mut b, data.notes.as_deref());
    render_signatures(
        &mut b,
        &[
            ("ผู้ขอโอน", data.requested_by.as_deref()),
            ("ผู้อนุมัติ", data.approved_by.as_deref()),
            ("ผู้รับสินค้า", None),
        ],
    );

    RenderedDocument {
        title: format!("ใบโอนสินค้า {}", data.transfer_number),
        body: b.build(),
        css: document_styles(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::renderer::fixtures;

    #[test]
    fn test_transfer_document_content() {
        let doc = render_transfer_document(&fixtures::transfer(), &PrintConfig::default());
        assert!(doc.body.contains("ใบโอนสินค้า"));
        assert!(doc.body.contains("TRF-2024-0007"));
        assert!(doc.body.contains("คลังหลัก (WH-01)"));
        assert!(doc.body.contains("สาขาเชียงใหม่ (WH-02)"));
        assert!(doc.body.contains("ส่งด่วน"));
        assert!(doc.body.contains("(สมหญิง)"));
        // 2 + 10
        assert!(doc.body.contains("<td class=\"num\">12</td>"));
    }

    #[test]
    fn test_items_without_serials_have_no_serial_line() {
        let mut data = fixtures::transfer();
        data.items.truncate(1);
        data.items[0].serial_numbers.clear();
        let doc = render_transfer_document(&data, &PrintConfig::default());
        assert!(!doc.body.contains("S/N:"));
    }
}
