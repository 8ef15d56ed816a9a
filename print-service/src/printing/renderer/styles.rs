//! Stylesheets shared by the print and preview paths
//!
//! Both paths take their CSS from these two functions only, so a preview
//! always looks like the printed page.

use shared::models::{Margins, PrintConfig};

fn margin_mm(m: &Margins) -> String {
    format!("{}mm {}mm {}mm {}mm", m.top, m.right, m.bottom, m.left)
}

/// Full-page documents (receive, transfer, claim, stock report)
pub fn document_styles(config: &PrintConfig) -> String {
    let fonts = &config.font_sizes;
    format!(
        r#"@page {{ size: A4; margin: {margin}; }}
* {{ box-sizing: border-box; }}
body {{ font-family: 'Sarabun', 'TH Sarabun New', 'Tahoma', sans-serif; font-size: {normal}pt; color: #000; margin: 0; }}
.document {{ position: relative; }}
.header {{ display: flex; justify-content: space-between; align-items: flex-start; border-bottom: 2px solid #000; padding-bottom: 4mm; margin-bottom: 4mm; }}
.company-name {{ font-size: {large}pt; font-weight: bold; margin: 0; }}
.company-detail {{ font-size: {small}pt; margin: 0; }}
.logo {{ max-height: 18mm; max-width: 40mm; }}
.title {{ font-size: {large}pt; font-weight: bold; text-align: center; margin: 2mm 0 4mm; }}
.meta {{ display: grid; grid-template-columns: 1fr 1fr; gap: 1mm 8mm; margin-bottom: 4mm; }}
.field .label {{ font-weight: bold; margin-right: 2mm; }}
.field .label::after {{ content: ":"; }}
.section-title {{ font-weight: bold; margin: 4mm 0 1mm; }}
table.items {{ width: 100%; border-collapse: collapse; }}
table.items th, table.items td {{ border: 1px solid #000; padding: 1mm 2mm; }}
table.items th {{ background: #eee; }}
table.items td.num {{ text-align: right; white-space: nowrap; }}
table.items td.center {{ text-align: center; }}
table.items tr.total td {{ font-weight: bold; }}
.serials {{ font-size: {small}pt; font-family: monospace; }}
.notes {{ margin-top: 4mm; white-space: pre-wrap; }}
.signatures {{ display: flex; justify-content: space-around; margin-top: 16mm; page-break-inside: avoid; }}
.signature {{ text-align: center; min-width: 45mm; }}
.signature .line {{ border-top: 1px dotted #000; margin-bottom: 1mm; height: 10mm; }}
.watermark {{ position: fixed; top: 45%; left: 0; right: 0; text-align: center; font-size: 64pt; color: rgba(0, 0, 0, 0.08); transform: rotate(-30deg); pointer-events: none; }}
@media print {{ .no-print {{ display: none; }} }}"#,
        margin = margin_mm(&config.document_margins),
        normal = fonts.normal,
        large = fonts.large,
        small = fonts.small,
    )
}

/// Serial-number stickers: the page is exactly one sticker
pub fn sticker_styles(config: &PrintConfig) -> String {
    let size = config.sticker_size;
    let (w, h) = (size.width_cm(), size.height_cm());
    format!(
        r#"@page {{ size: {w}cm {h}cm; margin: 0; }}
* {{ box-sizing: border-box; }}
html, body {{ width: {w}cm; height: {h}cm; margin: 0; padding: 0; }}
body {{ font-family: 'Sarabun', 'Tahoma', sans-serif; font-size: {small}pt; }}
.sticker {{ width: {w}cm; height: {h}cm; padding: {padding}; overflow: hidden; display: flex; flex-direction: column; justify-content: space-between; }}
.sticker .product {{ font-weight: bold; line-height: 1.1; }}
.sticker .sn {{ font-family: monospace; font-weight: bold; font-size: {normal}pt; }}
.sticker .meta {{ display: flex; justify-content: space-between; }}
.sticker .codes {{ display: flex; align-items: center; gap: 1mm; }}
.sticker .qr {{ height: {qr}cm; width: {qr}cm; }}
.sticker .barcode {{ height: 0.6cm; max-width: 100%; }}"#,
        padding = margin_mm(&config.sticker_margins),
        small = config.font_sizes.small,
        normal = config.font_sizes.normal,
        qr = (h * 0.4 * 10.0).round() / 10.0,
    )
}
