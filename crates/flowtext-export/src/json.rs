//! JSON export format
//!
//! Serializes the positioned layout with resolved font names, for
//! debugging line breaks or feeding an external rasterizer.

use serde::{Deserialize, Serialize};

use flowtext_core::{error::ExportError, Exporter, FontSet, LayoutResult, Result};

/// Schema version for JSON output format
pub const JSON_SCHEMA_VERSION: &str = "1.0";

/// JSON exporter for layout results
///
/// ```ignore
/// use flowtext_export::JsonExporter;
///
/// let exporter = JsonExporter::with_pretty_print();
/// let json = exporter.export(&layout, &fonts)?;
/// println!("{}", String::from_utf8_lossy(&json));
/// ```
pub struct JsonExporter {
    /// Whether to pretty-print the JSON
    pretty: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON exporter with pretty-printing enabled
    pub fn with_pretty_print() -> Self {
        Self { pretty: true }
    }

    /// Build the serializable document without encoding it
    pub fn document(&self, layout: &LayoutResult, fonts: &FontSet) -> JsonLayout {
        JsonLayout {
            schema_version: JSON_SCHEMA_VERSION.to_string(),
            fonts: fonts.iter().map(|(_, font)| font.name().to_string()).collect(),
            max_width: layout.max_width,
            total_height: layout.total_height,
            box_height: layout.box_height,
            overflows_height: layout.overflows_height(),
            lines: layout
                .lines
                .iter()
                .map(|line| JsonLine {
                    baseline: line.baseline,
                    height: line.height,
                    descent: line.descent,
                    width: line.width,
                    x: line.x,
                    segments: line
                        .segments
                        .iter()
                        .map(|segment| JsonSegment {
                            text: segment.text.clone(),
                            font: segment.font.index(),
                            font_name: fonts.name_of(segment.font).to_string(),
                            cluster: segment.cluster,
                            x: segment.x,
                            y: line.baseline,
                            width: segment.width,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, layout: &LayoutResult, fonts: &FontSet) -> Result<Vec<u8>> {
        let document = self.document(layout, fonts);
        let json = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;

        log::debug!("JsonExporter: {} lines, {} bytes", document.lines.len(), json.len());
        Ok(json.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

/// Whole layout as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLayout {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Font names in fallback order; segments index into this list
    pub fonts: Vec<String>,
    pub max_width: f32,
    pub total_height: f32,
    pub box_height: f32,
    pub overflows_height: bool,
    pub lines: Vec<JsonLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLine {
    pub baseline: f32,
    pub height: f32,
    pub descent: f32,
    pub width: f32,
    pub x: f32,
    pub segments: Vec<JsonSegment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSegment {
    pub text: String,
    pub font: usize,
    pub font_name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cluster: bool,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn json_carries_positions_and_font_names() {
        let bytes = JsonExporter::new()
            .export(&test_support::layout(), &test_support::fonts())
            .unwrap();
        let parsed: JsonLayout = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed.schema_version, JSON_SCHEMA_VERSION);
        assert_eq!(parsed.fonts, vec!["Helvetica", "Noto Color Emoji"]);
        assert_eq!(parsed.lines.len(), 2);
        assert!(!parsed.overflows_height);

        let emoji = &parsed.lines[0].segments[1];
        assert_eq!(emoji.font_name, "Noto Color Emoji");
        assert!(emoji.cluster);
        assert_eq!(emoji.x, 80.0);
        assert_eq!(emoji.y, 30.0);
    }

    #[test]
    fn plain_segments_omit_cluster_flag() {
        let bytes = JsonExporter::new()
            .export(&test_support::layout(), &test_support::fonts())
            .unwrap();
        let json = String::from_utf8(bytes).unwrap();
        assert_eq!(json.matches("\"cluster\"").count(), 1);
    }

    #[test]
    fn pretty_output_is_multiline() {
        let exporter = JsonExporter::with_pretty_print();
        let bytes = exporter
            .export(&test_support::layout(), &test_support::fonts())
            .unwrap();
        assert!(bytes.iter().filter(|&&b| b == b'\n').count() > 10);
        assert_eq!(exporter.extension(), "json");
    }
}
