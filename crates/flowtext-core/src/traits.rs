//! The contracts between the layout engine and its collaborators
//!
//! The engine never touches font files or pixels. It asks a [`Font`]
//! whether it can draw a character and how wide a string is, and it
//! hands the finished [`LayoutResult`] to an [`Exporter`].
//!
//! - [`Font`] - glyph coverage and measurement for one face at one size
//! - [`Exporter`] - turns a positioned layout into bytes

use crate::{error::Result, font_set::FontSet, types::LayoutResult};

/// Everything the layout engine needs to know about a font
///
/// All queries are read-only; implementations must be safe to share
/// across threads so independent layout calls can run concurrently.
///
/// ```ignore
/// struct Monospace;
///
/// impl Font for Monospace {
///     fn has_glyph(&self, ch: char) -> bool {
///         ch.is_ascii()
///     }
///
///     fn measure(&self, text: &str) -> Result<f32> {
///         Ok(text.chars().count() as f32 * 10.0)
///     }
///
///     fn line_spacing(&self) -> f32 {
///         20.0
///     }
///
///     fn descent(&self) -> f32 {
///         4.0
///     }
/// }
/// ```
pub trait Font: Send + Sync {
    /// Human-readable label used in logs and exports
    fn name(&self) -> &str {
        "font"
    }

    /// Does the font map this codepoint to a real glyph?
    fn has_glyph(&self, ch: char) -> bool;

    /// Horizontal advance of `text` in device units
    fn measure(&self, text: &str) -> Result<f32>;

    /// Recommended distance between consecutive baselines
    fn line_spacing(&self) -> f32;

    /// Distance from the baseline to the lowest descender, positive downwards
    fn descent(&self) -> f32;
}

/// The final step: positioned runs become files
pub trait Exporter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the layout as bytes; `fonts` resolves segment font ids
    fn export(&self, layout: &LayoutResult, fonts: &FontSet) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
