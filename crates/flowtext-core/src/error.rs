//! Error types for Flowtext

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

/// Main error type for Flowtext
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Font set is empty: at least one font is required for layout")]
    EmptyFontSet,

    #[error("Measurement failed: {0}")]
    Measurement(#[from] MeasureError),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A font could not measure a piece of text
#[derive(Debug, Error)]
#[error("font '{font}' cannot measure {text:?}: {reason}")]
pub struct MeasureError {
    pub font: String,
    pub text: String,
    pub reason: String,
}

impl MeasureError {
    pub fn new(font: impl Into<String>, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            text: text.into(),
            reason: reason.into(),
        }
    }
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Face index {index} out of range for {path}")]
    FaceIndexOutOfRange { path: String, index: u32 },
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_error_converts_into_flow_error() {
        let err: FlowError = MeasureError::new("Emoji", "😀", "no hmtx table").into();
        assert!(matches!(err, FlowError::Measurement(_)));
        assert_eq!(
            err.to_string(),
            "Measurement failed: font 'Emoji' cannot measure \"😀\": no hmtx table"
        );
    }

    #[test]
    fn empty_font_set_message_is_actionable() {
        assert!(FlowError::EmptyFontSet.to_string().contains("at least one font"));
    }
}
