//! Width and height queries the wrap and placement passes rely on

use flowtext_core::{FontId, FontSet, Result, REFERENCE_EMOJI};

/// Measurement seen through font handles
///
/// Emoji clusters are measured as one reference emoji in their font:
/// every cluster glyph is taken to have the same advance.
pub trait Metrics {
    /// Advance of `text` in `font`; `cluster` marks a multi-codepoint emoji
    fn width(&self, text: &str, font: FontId, cluster: bool) -> Result<f32>;

    fn line_spacing(&self, font: FontId) -> Result<f32>;

    fn descent(&self, font: FontId) -> Result<f32>;
}

impl Metrics for FontSet {
    fn width(&self, text: &str, font: FontId, cluster: bool) -> Result<f32> {
        let face = self.font(font)?;
        if cluster {
            let mut buf = [0u8; 4];
            return face.measure(REFERENCE_EMOJI.encode_utf8(&mut buf));
        }
        if text.is_empty() {
            return Ok(0.0);
        }
        face.measure(text)
    }

    fn line_spacing(&self, font: FontId) -> Result<f32> {
        Ok(self.font(font)?.line_spacing())
    }

    fn descent(&self, font: FontId) -> Result<f32> {
        Ok(self.font(font)?.descent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fonts::latin_and_emoji;

    #[test]
    fn cluster_width_is_reference_emoji_width() {
        let fonts = latin_and_emoji();
        let family = "👨\u{200D}👩\u{200D}👧";
        assert_eq!(fonts.width(family, FontId(1), true).unwrap(), 30.0);
        assert_eq!(fonts.width(family, FontId(1), false).unwrap(), 150.0);
    }

    #[test]
    fn empty_text_is_zero_wide() {
        let fonts = latin_and_emoji();
        assert_eq!(fonts.width("", FontId(0), false).unwrap(), 0.0);
    }

    #[test]
    fn stale_handle_is_an_error() {
        let fonts = latin_and_emoji();
        assert!(fonts.width("a", FontId(7), false).is_err());
        assert!(fonts.line_spacing(FontId(7)).is_err());
    }
}
