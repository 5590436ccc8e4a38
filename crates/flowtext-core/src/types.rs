//! The data structures that flow from one layout pass to the next
//!
//! Every value here is derived per call and owned by the caller; fonts
//! are referenced through [`FontId`] handles into the caller's set.

use crate::font_set::FontId;

/// Maximal substring drawn with a single font
///
/// A run never continues past a `\n`, and a multi-codepoint emoji
/// cluster always forms a run of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub font: FontId,
    /// True when the run is one multi-codepoint emoji cluster
    pub cluster: bool,
}

impl Run {
    pub fn new(text: impl Into<String>, font: FontId) -> Self {
        Self {
            text: text.into(),
            font,
            cluster: false,
        }
    }

    /// A run holding one multi-codepoint emoji cluster
    pub fn cluster(text: impl Into<String>, font: FontId) -> Self {
        Self {
            text: text.into(),
            font,
            cluster: true,
        }
    }

    pub fn ends_with_newline(&self) -> bool {
        self.text.ends_with('\n')
    }
}

/// Wrap unit cut from a run, with its adjacent newlines stripped
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub font: FontId,
    pub cluster: bool,
    /// A `\n` preceded the word in the source
    pub break_before: bool,
    /// A `\n` followed the word in the source
    pub break_after: bool,
}

/// Piece of a line drawn with one font
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub font: FontId,
    pub cluster: bool,
}

impl From<&Word> for Segment {
    fn from(word: &Word) -> Self {
        Self {
            text: word.text.clone(),
            font: word.font,
            cluster: word.cluster,
        }
    }
}

/// One wrapped line before positioning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Visual content of the line, whitespace included
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// How lines sit inside the box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Align {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Align {
    type Err = crate::FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "center" | "centre" | "c" => Ok(Self::Center),
            "right" | "r" => Ok(Self::Right),
            other => Err(crate::FlowError::ConfigError(format!(
                "unknown alignment '{}': expected left, center or right",
                other
            ))),
        }
    }
}

/// Space kept clear on each side of the box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }
}

impl std::str::FromStr for Margins {
    type Err = crate::FlowError;

    /// Accepts `N` for all sides or `LEFT,TOP,RIGHT,BOTTOM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim().parse::<f32>().map_err(|_| {
                crate::FlowError::ConfigError(format!("invalid margin value '{}'", part.trim()))
            })
        };

        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [all] => Ok(Self::uniform(parse(all)?)),
            [left, top, right, bottom] => Ok(Self::new(
                parse(left)?,
                parse(top)?,
                parse(right)?,
                parse(bottom)?,
            )),
            _ => Err(crate::FlowError::ConfigError(format!(
                "margins must be N or LEFT,TOP,RIGHT,BOTTOM, got '{}'",
                s
            ))),
        }
    }
}

/// A segment with its draw position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedSegment {
    pub text: String,
    pub font: FontId,
    pub cluster: bool,
    /// Pen x where the segment starts
    pub x: f32,
    pub width: f32,
}

/// A line with its vertical placement and metrics
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub segments: Vec<PositionedSegment>,
    /// Baseline y, one line height below the previous baseline
    pub baseline: f32,
    /// Tallest line spacing among the line's fonts
    pub height: f32,
    /// Largest descent among the line's fonts
    pub descent: f32,
    /// Sum of segment widths
    pub width: f32,
    /// Pen x of the first segment after alignment
    pub x: f32,
}

impl PositionedLine {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Everything a renderer needs to draw the text
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub lines: Vec<PositionedLine>,
    /// Width available for content after margins
    pub max_width: f32,
    /// Last baseline plus the bottom margin
    pub total_height: f32,
    /// Height of the box the text was laid out for
    pub box_height: f32,
}

impl LayoutResult {
    /// Content runs past the bottom of the box
    pub fn overflows_height(&self) -> bool {
        self.total_height > self.box_height
    }

    /// Lines wider than the available width, by index
    pub fn overflowing_lines(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.width > self.max_width)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn segment_count(&self) -> usize {
        self.lines.iter().map(|line| line.segments.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_parses_case_insensitively() {
        assert_eq!("Center".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("r".parse::<Align>().unwrap(), Align::Right);
        assert!("justify".parse::<Align>().is_err());
    }

    #[test]
    fn margins_accept_one_or_four_values() {
        assert_eq!("50".parse::<Margins>().unwrap(), Margins::uniform(50.0));
        assert_eq!(
            "1, 2, 3, 4".parse::<Margins>().unwrap(),
            Margins::new(1.0, 2.0, 3.0, 4.0)
        );
        assert!("1,2".parse::<Margins>().is_err());
        assert!("wide".parse::<Margins>().is_err());
    }

    #[test]
    fn line_text_keeps_whitespace() {
        let line = Line {
            segments: vec![
                Segment {
                    text: "Hello ".into(),
                    font: FontId(0),
                    cluster: false,
                },
                Segment {
                    text: "world".into(),
                    font: FontId(0),
                    cluster: false,
                },
            ],
        };
        assert_eq!(line.text(), "Hello world");
        assert!(!line.is_empty());
    }
}
