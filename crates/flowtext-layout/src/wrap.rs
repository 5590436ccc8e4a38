//! Greedy word wrapping over font runs
//!
//! Runs are cut into words that keep their trailing separator, then
//! packed left to right. A word goes on the current line when the line
//! is empty or when the word, minus trailing whitespace, still fits.
//! Words wider than the box get a line of their own and overflow it.

use flowtext_core::{
    types::{Line, Run, Segment, Word},
    Result,
};

use crate::measure::Metrics;

/// Whitespace that ends a word; no-break spaces stay inside it
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() && !matches!(ch, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

/// Cut text after every separator, so `"a b\n"` gives `["a ", "b\n"]`
pub fn split_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if is_separator(ch) {
            let end = idx + ch.len_utf8();
            tokens.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}

/// Break runs into words, moving adjacent newlines into break flags
pub fn words(runs: &[Run]) -> Vec<Word> {
    let mut words = Vec::new();

    for run in runs {
        if run.cluster {
            words.push(Word {
                text: run.text.clone(),
                font: run.font,
                cluster: true,
                break_before: false,
                break_after: false,
            });
            continue;
        }

        for token in split_tokens(&run.text) {
            let (body, break_after) = match token.strip_suffix('\n') {
                Some(body) => (body, true),
                None => (token, false),
            };
            let (body, break_before) = match body.strip_prefix('\n') {
                Some(body) => (body, true),
                None => (body, false),
            };

            words.push(Word {
                text: body.to_string(),
                font: run.font,
                cluster: false,
                break_before,
                break_after,
            });
        }
    }

    words
}

/// Where the next word goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Append to the current line
    Continue,
    /// Open a new line holding the word
    NewLine,
}

/// Lines built so far plus the width of the last one
#[derive(Debug, Clone, PartialEq)]
pub struct LineAccumulator {
    lines: Vec<Line>,
    width: f32,
}

impl LineAccumulator {
    pub fn new() -> Self {
        Self {
            lines: vec![Line::default()],
            width: 0.0,
        }
    }

    /// Width accumulated on the current line
    pub fn width(&self) -> f32 {
        self.width
    }

    fn current_is_empty(&self) -> bool {
        self.lines.last().map(Line::is_empty).unwrap_or(true)
    }

    /// Decide where a word of `fit_width` (trailing whitespace excluded) goes
    ///
    /// An empty word only carries a newline and always ends the current
    /// line, however full it already is.
    pub fn placement(&self, word: &Word, fit_width: f32, max_width: f32) -> Placement {
        if word.break_before {
            return Placement::NewLine;
        }
        if word.text.is_empty()
            || self.current_is_empty()
            || fit_width + self.width <= max_width
        {
            Placement::Continue
        } else {
            Placement::NewLine
        }
    }

    /// Place a word; `full_width` includes its trailing whitespace
    pub fn place(mut self, word: &Word, fit_width: f32, full_width: f32, max_width: f32) -> Self {
        let placement = self.placement(word, fit_width, max_width);
        log::trace!(
            "Wrapper: {:?} -> {:?} (fit {:.1}, line {:.1}, max {:.1})",
            word.text,
            placement,
            fit_width,
            self.width,
            max_width
        );

        match placement {
            Placement::Continue => {
                if let Some(line) = self.lines.last_mut() {
                    line.segments.push(Segment::from(word));
                }
                self.width += full_width;
            },
            Placement::NewLine => {
                self.lines.push(Line {
                    segments: vec![Segment::from(word)],
                });
                self.width = full_width;
            },
        }

        if word.break_after {
            self.lines.push(Line::default());
            self.width = 0.0;
        }

        self
    }

    /// Finished lines, minus the empty one a final newline leaves behind
    pub fn finish(mut self) -> Vec<Line> {
        if self.lines.last().is_some_and(Line::is_empty) {
            self.lines.pop();
        }
        self.lines
    }
}

impl Default for LineAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Packs words into lines no wider than `max_width` where possible
#[derive(Debug, Clone, Copy)]
pub struct Wrapper {
    max_width: f32,
}

impl Wrapper {
    pub fn new(max_width: f32) -> Self {
        Self { max_width }
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    pub fn wrap<M: Metrics>(&self, runs: &[Run], metrics: &M) -> Result<Vec<Line>> {
        let mut acc = LineAccumulator::new();

        for word in words(runs) {
            let fit_width = metrics.width(word.text.trim_end(), word.font, word.cluster)?;
            let full_width = metrics.width(&word.text, word.font, word.cluster)?;
            acc = acc.place(&word, fit_width, full_width, self.max_width);
        }

        let lines = acc.finish();
        log::debug!(
            "Wrapper: {} runs -> {} lines at max width {:.1}",
            runs.len(),
            lines.len(),
            self.max_width
        );
        Ok(lines)
    }
}
