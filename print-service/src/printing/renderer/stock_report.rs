use doc_printer::{HtmlBuilder, format_currency, format_quantity, format_thai_date};
use shared::models::{PrintConfig, StockReportPrintData};

use super::{RenderedDocument, document_styles, render_header, render_signatures, render_watermark};

/// Stock on hand report (รายงานสินค้าคงคลัง)
pub fn render_stock_report(data: &StockReportPrintData, config: &PrintConfig) -> RenderedDocument {
    let mut b = HtmlBuilder::new();
    b.open("div", "document stock-report");
    render_watermark(&mut b, config);
    render_header(&mut b, &data.company, config, "รายงานสินค้าคงคลัง");

    b.open("div", "meta");
    b.field("เลขที่", &data.report_number);
    b.field("ณ วันที่", &format_thai_date(&data.report_date));
    b.field(
        "คลังสินค้า",
        data.warehouse
            .as_ref()
            .map(|w| format!("{} ({})", w.name, w.code))
            .as_deref()
            .unwrap_or("ทุกคลัง"),
    );
    b.close();

    b.open("table", "items");
    b.header_row(&[
        "ลำดับ",
        "รหัสสินค้า",
        "รายการ",
        "หมวดหมู่",
        "คงเหลือ",
        "หน่วย",
        "ต้นทุน/หน่วย",
        "มูลค่า",
    ]);
    for (i, item) in data.items.iter().enumerate() {
        let no = (i + 1).to_string();
        let quantity = format_quantity(item.quantity);
        let unit_cost = format_currency(item.unit_cost);
        let value = format_currency(item.total_value);
        b.row(&[
            ("center", no.as_str()),
            ("", item.product_code.as_str()),
            ("", item.product_name.as_str()),
            ("", item.category.as_deref().unwrap_or("-")),
            ("num", quantity.as_str()),
            ("center", item.unit.as_str()),
            ("num", unit_cost.as_str()),
            ("num", value.as_str()),
        ]);
    }
    b.open("tr", "total");
    b.raw("<td colspan=\"7\" class=\"num\">มูลค่ารวม</td>");
    b.element("td", "num", &format_currency(data.total_value));
    b.close();
    b.close();

    render_signatures(&mut b, &[("ผู้จัดทำรายงาน", data.generated_by.as_deref())]);

    RenderedDocument {
        title: format!("รายงานสินค้าคงคลัง {}", data.report_number),
        body: b.build(),
        css: document_styles(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::renderer::fixtures;
    use shared::models::WarehouseRef;

    #[test]
    fn test_stock_report_content() {
        let doc = render_stock_report(&fixtures::stock_report(), &PrintConfig::default());
        assert!(doc.body.contains("รายงานสินค้าคงคลัง"));
        assert!(doc.body.contains("STK-2024-01"));
        assert!(doc.body.contains("ทุกคลัง"));
        assert!(doc.body.contains("Accessories"));
        assert!(doc.body.contains("<td class=\"num\">120</td>"));
        assert!(doc.body.contains("30,000.00"));
    }

    #[test]
    fn test_single_warehouse_report() {
        let mut data = fixtures::stock_report();
        data.warehouse = Some(WarehouseRef {
            code: "WH-02".to_string(),
            name: "สาขาเชียงใหม่".to_string(),
        });
        let doc = render_stock_report(&data, &PrintConfig::default());
        assert!(doc.body.contains("สาขาเชียงใหม่ (WH-02)"));
        assert!(!doc.body.contains("ทุกคลัง"));
    }
}
