//! Vertical stacking and horizontal alignment of wrapped lines

use flowtext_core::{
    types::{Align, Line, PositionedLine, PositionedSegment},
    FontId, LayoutParams, LayoutResult, Result,
};

use crate::measure::Metrics;

/// Turns wrapped lines into draw positions
///
/// The pen starts at the top margin and drops by a line's height before
/// the line is placed, so the first baseline sits one line height below
/// the margin. Mixed-font lines take the tallest font's spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLayout {
    pub start_x: f32,
    pub start_y: f32,
    pub max_width: f32,
    pub align: Align,
    pub bottom_margin: f32,
    pub box_height: f32,
}

impl LineLayout {
    pub fn from_params(params: &LayoutParams) -> Self {
        Self {
            start_x: params.margins.left,
            start_y: params.margins.top,
            max_width: params.max_width(),
            align: params.align,
            bottom_margin: params.margins.bottom,
            box_height: params.box_height,
        }
    }

    /// Pen x for the first segment of a line `line_width` wide
    ///
    /// Right alignment is measured from the box's left edge and does not
    /// add `start_x`.
    pub fn offset(&self, line_width: f32) -> f32 {
        match self.align {
            Align::Left => self.start_x,
            Align::Center => self.start_x + (self.max_width - line_width) / 2.0,
            Align::Right => self.max_width - line_width,
        }
    }

    pub fn layout<M: Metrics>(&self, lines: &[Line], metrics: &M) -> Result<LayoutResult> {
        let mut cursor = self.start_y;
        let mut positioned = Vec::with_capacity(lines.len());

        for line in lines {
            let (height, descent) = line_metrics(line, metrics)?;

            let widths = line
                .segments
                .iter()
                .map(|segment| metrics.width(&segment.text, segment.font, segment.cluster))
                .collect::<Result<Vec<f32>>>()?;
            let width: f32 = widths.iter().sum();
            let x = self.offset(width);

            cursor += height;

            let mut pen = x;
            let segments = line
                .segments
                .iter()
                .zip(widths)
                .map(|(segment, width)| {
                    let placed = PositionedSegment {
                        text: segment.text.clone(),
                        font: segment.font,
                        cluster: segment.cluster,
                        x: pen,
                        width,
                    };
                    pen += width;
                    placed
                })
                .collect();

            positioned.push(PositionedLine {
                segments,
                baseline: cursor,
                height,
                descent,
                width,
                x,
            });
        }

        Ok(LayoutResult {
            lines: positioned,
            max_width: self.max_width,
            total_height: cursor + self.bottom_margin,
            box_height: self.box_height,
        })
    }
}

/// Tallest spacing and deepest descent among a line's fonts
fn line_metrics<M: Metrics>(line: &Line, metrics: &M) -> Result<(f32, f32)> {
    if line.segments.is_empty() {
        return Ok((
            metrics.line_spacing(FontId::DEFAULT)?,
            metrics.descent(FontId::DEFAULT)?,
        ));
    }

    let mut height = 0.0f32;
    let mut descent = 0.0f32;
    for segment in &line.segments {
        height = height.max(metrics.line_spacing(segment.font)?);
        descent = descent.max(metrics.descent(segment.font)?);
    }
    Ok((height, descent))
}
