//! Font fallback: split text into runs that one font can draw

use flowtext_core::{types::Run, FontId, FontSet, Result};
use flowtext_unicode::ClusterScanner;

/// Assigns fonts to characters and merges neighbours into runs
///
/// Priority is strictly the order of the [`FontSet`]: the first font
/// with a glyph wins, and the default font takes whatever nobody covers.
/// Multi-codepoint emoji go to the set's emoji font as single runs.
pub struct Segmenter {
    scanner: ClusterScanner,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            scanner: ClusterScanner::new(),
        }
    }

    /// Partition `text` into runs; concatenating them gives `text` back
    pub fn segment(&self, text: &str, fonts: &FontSet) -> Result<Vec<Run>> {
        fonts.ensure_not_empty()?;
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let clusters = self.scanner.scan(text);
        let emoji_font = if clusters.is_empty() {
            FontId::DEFAULT
        } else {
            fonts.emoji_font().unwrap_or_else(|| {
                log::warn!(
                    "No font covers U+1F600; {} emoji sequences fall back to '{}'",
                    clusters.len(),
                    fonts.name_of(FontId::DEFAULT)
                );
                FontId::DEFAULT
            })
        };

        let mut runs: Vec<Run> = Vec::new();
        let mut pending = clusters.iter().peekable();
        let mut pos = 0;

        while pos < text.len() {
            if let Some(cluster) = pending.next_if(|cluster| cluster.start == pos) {
                runs.push(Run::cluster(cluster.as_str(text), emoji_font));
                pos = cluster.end();
                continue;
            }

            let Some(ch) = text[pos..].chars().next() else {
                break;
            };
            let font = fonts.resolve(ch);

            match runs.last_mut() {
                Some(prev) if !prev.cluster && prev.font == font && !prev.ends_with_newline() => {
                    prev.text.push(ch)
                },
                _ => runs.push(Run::new(ch, font)),
            }
            pos += ch.len_utf8();
        }

        log::debug!(
            "Segmenter: {} bytes -> {} runs ({} emoji sequences)",
            text.len(),
            runs.len(),
            clusters.len()
        );
        Ok(runs)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
