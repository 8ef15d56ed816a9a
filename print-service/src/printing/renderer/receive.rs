use doc_printer::{HtmlBuilder, format_currency, format_quantity, format_thai_date};
use shared::models::{PrintConfig, ReceiveDocumentPrintData};

use super::{
    RenderedDocument, document_styles, render_header, render_notes, render_signatures,
    render_watermark, serial_list,
};

/// Goods receive note (ใบรับสินค้า)
pub fn render_receive_document(
    data: &ReceiveDocumentPrintData,
    config: &PrintConfig,
) -> RenderedDocument {
    let mut b = HtmlBuilder::new();
    b.open("div", "document receive-document");
    render_watermark(&mut b, config);
    render_header(&mut b, &data.company, config, "ใบรับสินค้า");

    b.open("div", "meta");
    b.field("เลขที่", &data.receive_number);
    b.field("วันที่", &format_thai_date(&data.receive_date));
    b.field(
        "คลังสินค้า",
        &format!("{} ({})", data.warehouse.name, data.warehouse.code),
    );
    b.field_opt("ผู้จำหน่าย", data.supplier_name.as_deref());
    b.field_opt("เลขที่ใบกำกับ", data.invoice_number.as_deref());
    b.close();

    b.open("table", "items");
    b.header_row(&[
        "ลำดับ",
        "รหัสสินค้า",
        "รายการ",
        "จำนวน",
        "หน่วย",
        "ราคา/หน่วย",
        "จำนวนเงิน",
    ]);
    for (i, item) in data.items.iter().enumerate() {
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
        b.element("td", "num", &format_currency(item.unit_cost));
        b.element("td", "num", &format_currency(item.total_cost));
        b.close();
    }
    b.open("tr", "total");
    b.raw("<td colspan=\"6\" class=\"num\">รวมทั้งสิ้น</td>");
    b.element("td", "num", &format_currency(data.total_amount));
    b.close();
    b.close();

    render_notes(&mut b, data.notes.as_deref());
    render_signatures(
        &mut b,
        &[
            ("ผู้รับสินค้า", data.received_by.as_deref()),
            ("ผู้อนุมัติ", data.approved_by.as_deref()),
        ],
    );

    RenderedDocument {
        title: format!("ใบรับสินค้า {}", data.receive_number),
        body: b.build(),
        css: document_styles(config),
    }
}
