//! SVG export: one `<text>` element per positioned segment
//!
//! Glyph outlines are left to the viewer's font matching, so the output
//! is a preview of line breaks and positions, not a faithful raster.

use std::fmt::Write;

use flowtext_core::{error::ExportError, Exporter, FontSet, LayoutResult, Result};

/// SVG exporter for layout results
pub struct SvgExporter {
    width: f32,
    font_size: f32,
    /// Draw the content box edges and each baseline
    guides: bool,
}

impl SvgExporter {
    /// `width` is the full box width; the height comes from the layout
    pub fn new(width: f32, font_size: f32) -> Self {
        Self {
            width,
            font_size,
            guides: false,
        }
    }

    pub fn with_guides(mut self, guides: bool) -> Self {
        self.guides = guides;
        self
    }

    fn render(&self, layout: &LayoutResult, fonts: &FontSet) -> std::result::Result<String, std::fmt::Error> {
        let height = layout.box_height.max(layout.total_height);
        let mut svg = String::new();

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = height
        )?;
        writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

        if self.guides {
            writeln!(
                svg,
                r#"  <line x1="0" y1="{y}" x2="{w}" y2="{y}" stroke="red" stroke-dasharray="4"/>"#,
                y = layout.box_height,
                w = self.width
            )?;
            for line in &layout.lines {
                writeln!(
                    svg,
                    r#"  <line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="lightblue"/>"#,
                    x1 = line.x,
                    x2 = line.x + line.width,
                    y = line.baseline
                )?;
            }
        }

        for line in &layout.lines {
            for segment in &line.segments {
                if segment.text.trim().is_empty() {
                    continue;
                }
                writeln!(
                    svg,
                    r#"  <text x="{x}" y="{y}" font-family="{family}" font-size="{size}" xml:space="preserve">{text}</text>"#,
                    x = segment.x,
                    y = line.baseline,
                    family = escape(fonts.name_of(segment.font)),
                    size = self.font_size,
                    text = escape(&segment.text)
                )?;
            }
        }

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

impl Exporter for SvgExporter {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn export(&self, layout: &LayoutResult, fonts: &FontSet) -> Result<Vec<u8>> {
        let svg = self
            .render(layout, fonts)
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        Ok(svg.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn mime_type(&self) -> &'static str {
        "image/svg+xml"
    }
}

/// XML-escape text content and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn export(guides: bool) -> String {
        let bytes = SvgExporter::new(200.0, 16.0)
            .with_guides(guides)
            .export(&test_support::layout(), &test_support::fonts())
            .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn svg_has_one_text_per_segment() {
        let svg = export(false);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<text").count(), 3);
        assert!(svg.contains(r#"font-family="Noto Color Emoji""#));
        assert!(svg.contains(r#"x="80" y="30""#));
    }

    #[test]
    fn svg_escapes_markup() {
        let svg = export(false);
        assert!(svg.contains("Tom &amp; &lt;Jerry&gt; "));
        assert!(!svg.contains("<Jerry>"));
    }

    #[test]
    fn guides_draw_baselines() {
        assert_eq!(export(false).matches("<line").count(), 0);
        assert_eq!(export(true).matches("<line").count(), 3);
    }
}
