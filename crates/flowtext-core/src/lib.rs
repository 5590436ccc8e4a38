//! Flowtext Core: the vocabulary shared by every layout stage
//!
//! Text goes in as a string, comes out as lines of positioned runs. The
//! layout crates do the work; this crate defines what they exchange.
//!
//! ## The Pieces
//!
//! - [`Font`] - coverage and measurement for one face, supplied by the caller
//! - [`FontSet`] - fonts in fallback order, addressed by [`FontId`]
//! - [`types`] - runs, words, lines and the final [`LayoutResult`]
//! - [`LayoutParams`] - box size, margins and alignment
//! - [`Exporter`] - where a finished layout becomes bytes
//!
//! ```
//! use flowtext_core::{types::Align, LayoutParams, Margins};
//!
//! let params = LayoutParams::default()
//!     .with_box(600.0, 400.0)
//!     .with_margins(Margins::uniform(20.0))
//!     .with_align(Align::Center);
//!
//! assert_eq!(params.max_width(), 560.0);
//! ```

pub mod error;
pub mod font_set;
pub mod traits;
pub mod types;

pub use error::{FlowError, MeasureError, Result};
pub use font_set::{FontId, FontSet, REFERENCE_EMOJI};
pub use traits::{Exporter, Font};
pub use types::{Align, LayoutResult, Margins};

/// Where and how text should be laid out
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub box_width: f32,
    pub box_height: f32,
    pub margins: Margins,
    pub align: Align,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            box_width: 500.0,
            box_height: 200.0,
            margins: Margins::uniform(50.0),
            align: Align::Left,
        }
    }
}

impl LayoutParams {
    pub fn with_box(mut self, width: f32, height: f32) -> Self {
        self.box_width = width;
        self.box_height = height;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Width left for content once both side margins are taken
    pub fn max_width(&self) -> f32 {
        self.box_width - self.margins.left - self.margins.right
    }

    /// Rejects box sizes that are not numbers
    ///
    /// Margins that leave no content width are accepted: every word then
    /// gets a line of its own and overflows it.
    pub fn validate(&self) -> Result<()> {
        if !self.box_width.is_finite() || !self.box_height.is_finite() {
            return Err(FlowError::ConfigError(format!(
                "box size must be finite, got {}x{}",
                self.box_width, self.box_height
            )));
        }
        if self.max_width() <= 0.0 {
            log::warn!(
                "Margins {:?} leave no room in a box {} wide; every word will overflow",
                self.margins,
                self.box_width
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_demo_box() {
        let params = LayoutParams::default();
        assert_eq!(params.max_width(), 400.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn margins_wider_than_box_are_accepted() {
        let params = LayoutParams::default()
            .with_box(80.0, 80.0)
            .with_margins(Margins::uniform(40.0));
        assert_eq!(params.max_width(), 0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn non_finite_box_is_rejected() {
        let params = LayoutParams::default().with_box(f32::NAN, 80.0);
        assert!(matches!(params.validate(), Err(FlowError::ConfigError(_))));
        let params = LayoutParams::default().with_box(500.0, f32::INFINITY);
        assert!(matches!(params.validate(), Err(FlowError::ConfigError(_))));
    }
}
