//! Export: the last stop for a finished layout
//!
//! The engine stops at positions. These exporters write those positions
//! out for the tools that draw or inspect them:
//!
//! - **JSON** - every line and segment with coordinates and font names
//! - **SVG** - one `<text>` element per segment, for a quick visual check
//! - **Text** - the wrapped lines, one per row
//!
//! All of them implement [`Exporter`], so callers can pick one at runtime.

use flowtext_core::{Exporter, FontSet, LayoutResult, Result};

pub mod json;
pub mod svg;

pub use json::JsonExporter;
pub use svg::SvgExporter;

/// Writes each layout line as a row of plain text
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for TextExporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn export(&self, layout: &LayoutResult, _fonts: &FontSet) -> Result<Vec<u8>> {
        let mut out = String::new();
        for line in &layout.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        Ok(out.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use flowtext_core::{
        types::{PositionedLine, PositionedSegment},
        Font, FontId, FontSet, LayoutResult, Result,
    };
    use std::sync::Arc;

    pub struct NamedFont(pub &'static str);

    impl Font for NamedFont {
        fn name(&self) -> &str {
            self.0
        }

        fn has_glyph(&self, _ch: char) -> bool {
            true
        }

        fn measure(&self, text: &str) -> Result<f32> {
            Ok(text.len() as f32)
        }

        fn line_spacing(&self) -> f32 {
            20.0
        }

        fn descent(&self) -> f32 {
            4.0
        }
    }

    pub fn fonts() -> FontSet {
        let mut fonts = FontSet::new();
        fonts.push(Arc::new(NamedFont("Helvetica")));
        fonts.push(Arc::new(NamedFont("Noto Color Emoji")));
        fonts
    }

    pub fn layout() -> LayoutResult {
        let segment = |text: &str, font: usize, x: f32, width: f32| PositionedSegment {
            text: text.into(),
            font: FontId(font),
            cluster: font == 1,
            x,
            width,
        };

        LayoutResult {
            lines: vec![
                PositionedLine {
                    segments: vec![segment("Tom & <Jerry> ", 0, 10.0, 70.0), segment("👋🏽", 1, 80.0, 30.0)],
                    baseline: 30.0,
                    height: 20.0,
                    descent: 4.0,
                    width: 100.0,
                    x: 10.0,
                },
                PositionedLine {
                    segments: vec![segment("done", 0, 10.0, 40.0)],
                    baseline: 50.0,
                    height: 20.0,
                    descent: 4.0,
                    width: 40.0,
                    x: 10.0,
                },
            ],
            max_width: 180.0,
            total_height: 60.0,
            box_height: 100.0,
        }
    }
}
