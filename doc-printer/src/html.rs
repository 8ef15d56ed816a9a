//! HTML document builder
//!
//! Provides a fluent API for building printable document markup.

/// Escape text for use in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a body fragment into a complete document with an inline style block
pub fn html_document(title: &str, css: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="th">
<head>
<meta charset="UTF-8"/>
<title>{}</title>
<style>
{}
</style>
</head>
<body>
{}
</body>
</html>"#,
        escape_html(title),
        css,
        body
    )
}

/// HTML markup builder
///
/// All text goes through [`escape_html`]; only [`HtmlBuilder::raw`] writes
/// markup verbatim. Elements left open are closed by [`HtmlBuilder::build`].
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    buf: String,
    stack: Vec<&'static str>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4096),
            stack: Vec::new(),
        }
    }

    // === Elements ===

    /// Open an element, with an optional class (`""` for none)
    pub fn open(&mut self, tag: &'static str, class: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        if !class.is_empty() {
            self.buf.push_str(" class=\"");
            self.buf.push_str(&escape_html(class));
            self.buf.push('"');
        }
        self.buf.push('>');
        self.stack.push(tag);
        self
    }

    /// Close the most recently opened element
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.stack.pop() {
            self.buf.push_str("</");
            self.buf.push_str(tag);
            self.buf.push('>');
        }
        self
    }

    /// `<tag class="..">text</tag>`
    pub fn element(&mut self, tag: &'static str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class);
        self.text(text);
        self.close()
    }

    /// Labelled value row: `<div class="field"><span class="label">..</span><span class="value">..</span></div>`
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        self.open("div", "field");
        self.element("span", "label", label);
        self.element("span", "value", value);
        self.close()
    }

    /// Same as [`HtmlBuilder::field`], skipped entirely when `value` is `None`
    pub fn field_opt(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value {
            self.field(label, v);
        }
        self
    }

    /// `<img>` with escaped attributes
    pub fn image(&mut self, class: &str, src: &str, alt: &str) -> &mut Self {
        self.buf.push_str(&format!(
            "<img class=\"{}\" src=\"{}\" alt=\"{}\"/>",
            escape_html(class),
            escape_html(src),
            escape_html(alt)
        ));
        self
    }

    // === Tables ===

    /// Header row of `<th>` cells
    pub fn header_row(&mut self, cells: &[&str]) -> &mut Self {
        self.open("tr", "");
        for cell in cells {
            self.element("th", "", cell);
        }
        self.close()
    }

    /// Body row; each cell is `(class, text)`
    pub fn row(&mut self, cells: &[(&str, &str)]) -> &mut Self {
        self.open("tr", "");
        for (class, text) in cells {
            self.element("td", class, text);
        }
        self.close()
    }

    // === Content ===

    /// Write escaped text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape_html(s));
        self
    }

    /// Write markup verbatim
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Finish, closing any element still open
    pub fn build(mut self) -> String {
        while !self.stack.is_empty() {
            self.close();
        }
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("A & B <x>"), "A &amp; B &lt;x&gt;");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("ไม่มีอักขระพิเศษ"), "ไม่มีอักขระพิเศษ");
    }

    #[test]
    fn test_builder_nesting() {
        let mut b = HtmlBuilder::new();
        b.open("div", "header");
        b.element("h1", "title", "ใบรับสินค้า");
        b.close();
        assert_eq!(
            b.build(),
            "<div class=\"header\"><h1 class=\"title\">ใบรับสินค้า</h1></div>"
        );
    }

    #[test]
    fn test_build_closes_open_elements() {
        let mut b = HtmlBuilder::new();
        b.open("table", "items").open("tr", "");
        assert_eq!(b.build(), "<table class=\"items\"><tr></tr></table>");
    }

    #[test]
    fn test_field_opt_skips_none() {
        let mut b = HtmlBuilder::new();
        b.field_opt("ผู้จำหน่าย", None);
        b.field_opt("เลขที่ใบกำกับ", Some("INV-9"));
        let html = b.build();
        assert!(!html.contains("ผู้จำหน่าย"));
        assert!(html.contains("INV-9"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut b = HtmlBuilder::new();
        b.element("td", "", "<script>");
        assert_eq!(b.build(), "<td>&lt;script&gt;</td>");
    }

    #[test]
    fn test_html_document_embeds_style() {
        let doc = html_document("RCV-1", "body { margin: 0; }", "<p>x</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<style>\nbody { margin: 0; }\n</style>"));
        assert!(doc.contains("<title>RCV-1</title>"));
        assert!(doc.contains("<p>x</p>"));
    }
}
