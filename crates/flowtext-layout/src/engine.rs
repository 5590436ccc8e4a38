//! Segment, wrap, place: the whole layout in one call

use flowtext_core::{FontSet, LayoutParams, LayoutResult, Result};

use crate::{line::LineLayout, segment::Segmenter, wrap::Wrapper};

/// Lays out text inside a fixed box
///
/// Holds only configuration and the immutable cluster scanner, so one
/// engine can serve any number of calls, from any number of threads.
pub struct LayoutEngine {
    params: LayoutParams,
    segmenter: Segmenter,
}

impl LayoutEngine {
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            segmenter: Segmenter::new(),
        }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Run all three passes over `text`
    ///
    /// Fails on an empty font set, an unusable box, or a font that cannot
    /// measure. Content that does not fit is not an error: check
    /// [`LayoutResult::overflows_height`] and
    /// [`LayoutResult::overflowing_lines`].
    pub fn layout(&self, text: &str, fonts: &FontSet) -> Result<LayoutResult> {
        fonts.ensure_not_empty()?;
        self.params.validate()?;

        let runs = self.segmenter.segment(text, fonts)?;
        let lines = Wrapper::new(self.params.max_width()).wrap(&runs, fonts)?;
        let result = LineLayout::from_params(&self.params).layout(&lines, fonts)?;

        if result.overflows_height() {
            log::warn!(
                "Layout overflows box: content is {:.1} high, box is {:.1}",
                result.total_height,
                result.box_height
            );
        }
        log::debug!(
            "LayoutEngine: {} runs, {} lines, {} segments, height {:.1}",
            runs.len(),
            result.lines.len(),
            result.segment_count(),
            result.total_height
        );

        Ok(result)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutParams::default())
    }
}

/// One-shot layout without keeping an engine around
pub fn layout_text(text: &str, fonts: &FontSet, params: &LayoutParams) -> Result<LayoutResult> {
    LayoutEngine::new(params.clone()).layout(text, fonts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fonts::latin_and_emoji;
    use flowtext_core::{FlowError, Margins};

    #[test]
    fn demo_sentence_lays_out() {
        let _ = env_logger::builder().is_test(true).try_init();
        let fonts = latin_and_emoji();
        let text = "Hello 😀. Let's celebrate🎉!\n Hello 😀. Let's celebrate🎉!\n";

        let result = LayoutEngine::default().layout(text, &fonts).unwrap();
        let lines: Vec<String> = result.lines.iter().map(|l| l.text()).collect();

        assert_eq!(
            lines,
            vec!["Hello 😀. Let's celebrate🎉!", " Hello 😀. Let's celebrate🎉!"]
        );
        assert_eq!(result.lines[0].baseline, 86.0);
        assert_eq!(result.total_height, 172.0);
        assert!(!result.overflows_height());
    }

    #[test]
    fn engine_keeps_its_params() {
        let params = LayoutParams::default().with_box(320.0, 90.0);
        let engine = LayoutEngine::new(params.clone());
        assert_eq!(engine.params(), &params);
        assert_eq!(engine.params().max_width(), 220.0);
    }

    #[test]
    fn empty_font_set_fails_fast() {
        let result = LayoutEngine::default().layout("hi", &FontSet::new());
        assert!(matches!(result, Err(FlowError::EmptyFontSet)));
    }

    #[test]
    fn tall_text_reports_overflow() {
        let fonts = latin_and_emoji();
        let params = LayoutParams::default()
            .with_box(200.0, 50.0)
            .with_margins(Margins::uniform(0.0));
        let result = layout_text("a\nb\nc\nd", &fonts, &params).unwrap();
        assert_eq!(result.total_height, 80.0);
        assert!(result.overflows_height());
    }
}
