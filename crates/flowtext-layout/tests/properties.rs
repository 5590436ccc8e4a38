//! Property tests for segmentation, wrapping and layout

mod common;

use flowtext_core::{LayoutParams, Margins};
use flowtext_layout::{layout_text, words, Metrics, Segmenter, Wrapper};
use proptest::prelude::*;

/// Mixed ASCII, whitespace, newlines, CJK and emoji (including sequences)
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,12}",
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\u{00A0}".to_string()),
            Just("漢字".to_string()),
            Just("😀".to_string()),
            Just("🎉".to_string()),
            Just("👋🏽".to_string()),
            Just("🇺🇸".to_string()),
            Just("👨\u{200D}👩\u{200D}👧".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_segmentation_is_lossless(text in mixed_text()) {
        let runs = Segmenter::new().segment(&text, &common::fonts()).unwrap();
        let rebuilt: String = runs.iter().map(|run| run.text.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_runs_never_continue_past_newline(text in mixed_text()) {
        let runs = Segmenter::new().segment(&text, &common::fonts()).unwrap();
        for run in &runs {
            if let Some(pos) = run.text.find('\n') {
                prop_assert_eq!(pos, run.text.len() - 1);
            }
        }
    }

    #[test]
    fn prop_adjacent_plain_runs_differ_in_font(text in mixed_text()) {
        let runs = Segmenter::new().segment(&text, &common::fonts()).unwrap();
        for pair in runs.windows(2) {
            let mergeable = !pair[0].cluster
                && !pair[1].cluster
                && !pair[0].ends_with_newline();
            if mergeable {
                prop_assert_ne!(pair[0].font, pair[1].font);
            }
        }
    }

    #[test]
    fn prop_words_plus_breaks_rebuild_text(text in mixed_text()) {
        let runs = Segmenter::new().segment(&text, &common::fonts()).unwrap();
        let mut rebuilt = String::new();
        for word in words(&runs) {
            if word.break_before {
                rebuilt.push('\n');
            }
            rebuilt.push_str(&word.text);
            if word.break_after {
                rebuilt.push('\n');
            }
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_lines_fit_unless_single_overlong_word(text in mixed_text(), max_width in 40.0f32..400.0) {
        let fonts = common::fonts();
        let runs = Segmenter::new().segment(&text, &fonts).unwrap();
        let lines = Wrapper::new(max_width).wrap(&runs, &fonts).unwrap();

        // Only a blank source line or a leading newline gives a line with no text.
        let blank_allowed = text.contains("\n\n") || text.starts_with('\n');
        for line in &lines {
            let blank = line.segments.iter().all(|s| s.text.is_empty());
            prop_assert!(!blank || blank_allowed, "blank line in {:?}", text);

            if line.segments.len() <= 1 {
                continue;
            }
            // The last segment's trailing whitespace never counts against the box.
            let last = line.segments.len() - 1;
            let width: f32 = line
                .segments
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let text = if i == last { s.text.trim_end() } else { s.text.as_str() };
                    fonts.width(text, s.font, s.cluster).unwrap()
                })
                .sum();
            let first_alone: f32 = fonts
                .width(line.segments[0].text.trim_end(), line.segments[0].font, line.segments[0].cluster)
                .unwrap();
            prop_assert!(width <= max_width + 1e-3 || first_alone > max_width);
        }
    }

    #[test]
    fn prop_layout_is_deterministic(text in mixed_text(), width in 100.0f32..800.0) {
        let params = LayoutParams::default()
            .with_box(width, 300.0)
            .with_margins(Margins::uniform(10.0));
        let fonts = common::fonts();
        let first = layout_text(&text, &fonts, &params).unwrap();
        let second = layout_text(&text, &fonts, &params).unwrap();
        prop_assert_eq!(first, second);
    }
}
