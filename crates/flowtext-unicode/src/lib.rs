// this_file: crates/flowtext-unicode/src/lib.rs

//! Finds the emoji sequences that must be laid out as one unit.
//!
//! A flag, a skin-toned hand or a family joined by ZWJ is several
//! codepoints but one picture. Font fallback runs per codepoint, so
//! these sequences are located up front and kept whole.

use icu_properties::{
    props::{ExtendedPictographic, RegionalIndicator},
    CodePointSetData, CodePointSetDataBorrowed,
};
use icu_segmenter::GraphemeClusterSegmenter;

/// U+20E3 COMBINING ENCLOSING KEYCAP, the tail of `1️⃣` and friends
const KEYCAP: char = '\u{20E3}';

/// A multi-codepoint emoji sequence, as a byte span of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiCluster {
    pub start: usize,
    pub len: usize,
}

impl EmojiCluster {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }

    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

/// Grapheme-aware scanner for multi-codepoint emoji
pub struct ClusterScanner {
    pictographic: CodePointSetDataBorrowed<'static>,
    regional: CodePointSetDataBorrowed<'static>,
}

impl ClusterScanner {
    /// Create a scanner with ICU data baked in.
    pub fn new() -> Self {
        Self {
            pictographic: CodePointSetData::new::<ExtendedPictographic>(),
            regional: CodePointSetData::new::<RegionalIndicator>(),
        }
    }

    /// All emoji grapheme clusters longer than one codepoint, in order.
    pub fn scan(&self, text: &str) -> Vec<EmojiCluster> {
        if text.is_empty() {
            return Vec::new();
        }

        let boundaries: Vec<usize> = GraphemeClusterSegmenter::new().segment_str(text).collect();
        let clusters: Vec<EmojiCluster> = boundaries
            .windows(2)
            .filter(|pair| self.is_emoji_sequence(&text[pair[0]..pair[1]]))
            .map(|pair| EmojiCluster {
                start: pair[0],
                len: pair[1] - pair[0],
            })
            .collect();

        log::trace!(
            "ClusterScanner: {} graphemes, {} emoji sequences",
            boundaries.len().saturating_sub(1),
            clusters.len()
        );
        clusters
    }

    /// Is this grapheme an emoji made of more than one codepoint?
    pub fn is_emoji_sequence(&self, grapheme: &str) -> bool {
        let mut chars = grapheme.chars();
        if chars.next().is_none() || chars.next().is_none() {
            return false;
        }

        grapheme
            .chars()
            .any(|ch| self.pictographic.contains(ch) || self.regional.contains(ch) || ch == KEYCAP)
    }
}

impl Default for ClusterScanner {
    fn default() -> Self {
        Self::new()
    }
}
