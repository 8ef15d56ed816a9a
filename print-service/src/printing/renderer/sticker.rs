use doc_printer::{HtmlBuilder, format_currency, format_short_date, truncate_text};
use shared::models::{PrintConfig, SnStickerPrintData, StickerSize};

use super::{RenderedDocument, sticker_styles};

/// Character limits for (product name, warehouse name) per label size
fn text_limits(size: StickerSize) -> (usize, usize) {
    match size {
        StickerSize::Small => (20, 15),
        StickerSize::Medium => (30, 20),
        StickerSize::Large => (40, 30),
    }
}

/// Single serial-number sticker
pub fn render_sn_sticker(data: &SnStickerPrintData, config: &PrintConfig) -> RenderedDocument {
    let (name_max, warehouse_max) = text_limits(config.sticker_size);

    let mut b = HtmlBuilder::new();
    b.open("div", "sticker");
    b.element(
        "div",
        "product",
        &truncate_text(&data.product_name, name_max),
    );
    b.element("div", "sn", &format!("S/N: {}", data.serial_number));

    b.open("div", "meta");
    b.element("span", "code", &data.product_code);
    b.element("span", "date", &format_short_date(&data.receive_date));
    b.close();

    b.open("div", "meta");
    b.element(
        "span",
        "warehouse",
        &truncate_text(&data.warehouse_name, warehouse_max),
    );
    if let Some(price) = data.price {
        b.element("span", "price", &format!("฿{}", format_currency(price)));
    }
    b.close();

    let qr = data.qr_code_image.as_deref().filter(|_| config.include_qr_code);
    let barcode = data.barcode_image.as_deref().filter(|_| config.include_barcode);
    if qr.is_some() || barcode.is_some() {
        b.open("div", "codes");
        if let Some(src) = qr {
            b.image("qr", src, &data.serial_number);
        }
        if let Some(src) = barcode {
            b.image("barcode", src, &data.serial_number);
        }
        b.close();
    }

    RenderedDocument {
        title: format!("S/N {}", data.serial_number),
        body: b.build(),
        css: sticker_styles(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::renderer::fixtures;

    #[test]
    fn test_sticker_content() {
        let doc = render_sn_sticker(&fixtures::sticker("SN-0001"), &PrintConfig::default());
        assert!(doc.body.contains("S/N: SN-0001"));
        assert!(doc.body.contains("P-001"));
        assert!(doc.body.contains("15/01/67"));
        assert!(!doc.body.contains("class=\"price\""));
        assert!(doc.css.contains("size: 3.2cm 2.5cm"));
    }

    #[test]
    fn test_long_names_truncated_for_small_label() {
        let mut data = fixtures::sticker("SN-1");
        data.product_name = "This is a very long text that should be truncated".to_string();
        data.warehouse_name = "คลังสินค้าสาขาเชียงใหม่ชั้นสอง".to_string();
        let doc = render_sn_sticker(&data, &PrintConfig::default());
        assert!(doc.body.contains(">This is a very lo...<"));
        assert!(doc.body.contains(">คลังสินค้าสา...<"));
    }

    #[test]
    fn test_larger_label_keeps_more_text() {
        let mut data = fixtures::sticker("SN-1");
        data.product_name = "This is a very long text that should be truncated".to_string();
        let config = PrintConfig {
            sticker_size: StickerSize::Large,
            ..PrintConfig::default()
        };
        let doc = render_sn_sticker(&data, &config);
        assert!(doc.body.contains(">This is a very long text that should ...<"));
        assert!(doc.css.contains("size: 7cm 5cm"));
    }

    #[test]
    fn test_code_images_follow_config_flags() {
        let mut data = fixtures::sticker("SN-1");
        data.qr_code_image = Some("data:image/png;base64,QR".to_string());
        data.barcode_image = Some("data:image/png;base64,BC".to_string());
        data.price = Some(1290.0);

        let doc = render_sn_sticker(&data, &PrintConfig::default());
        assert!(doc.body.contains("class=\"qr\""));
        assert!(doc.body.contains("class=\"barcode\""));
        assert!(doc.body.contains("฿1,290.00"));

        let config = PrintConfig {
            include_qr_code: false,
            include_barcode: false,
            ..PrintConfig::default()
        };
        let doc = render_sn_sticker(&data, &config);
        assert!(!doc.body.contains("<img"));
        assert!(!doc.body.contains("class=\"codes\""));
    }
}
