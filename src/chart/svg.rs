use std::fmt::Display;

pub const TICK_TEXT: &str =
    r##"font-size="10" text-anchor="end" dominant-baseline="middle" fill="#666""##;
pub const AXIS_TEXT: &str = r##"font-size="10" text-anchor="middle" fill="#666""##;
pub const TITLE_TEXT: &str = r##"font-size="12" fill="#111""##;

/// Append-only SVG document writer.
pub struct SvgDocument {
    buf: String,
}

impl SvgDocument {
    pub fn new(width: i64, height: i64) -> Self {
        let mut buf = String::with_capacity(32 * 1024);
        buf.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        let mut doc = Self { buf };
        doc.background();
        doc
    }

    /// Document without a viewBox, used when there is nothing to plot.
    pub fn placeholder(width: i64, height: i64, message: &str) -> String {
        let mut doc = Self {
            buf: format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#),
        };
        doc.background();
        doc.text(10, 20, r#"font-size="12""#, message);
        doc.finish()
    }

    fn background(&mut self) {
        self.buf
            .push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    }

    pub fn rect(&mut self, x: i64, y: i64, width: i64, height: i64, fill: &str) {
        self.buf.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}"/>"#
        ));
    }

    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, stroke: &str) {
        self.buf.push_str(&format!(
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}"/>"#
        ));
    }

    pub fn text(&mut self, x: impl Display, y: impl Display, attrs: &str, content: &str) {
        self.buf.push_str(&format!(
            r#"<text x="{x}" y="{y}" {attrs}>{}</text>"#,
            escape(content)
        ));
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
