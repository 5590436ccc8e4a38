//! Flowtext - text layout with font fallback
//!
//! Flowtext turns a string into lines of positioned, single-font runs:
//!
//! 1. Font fallback picks, per character, the first font that can draw it
//! 2. Multi-codepoint emoji stay whole and go to the emoji font
//! 3. Words wrap greedily to the box width, honoring explicit newlines
//! 4. Lines stack by their tallest font and align left, center or right
//!
//! # Example
//!
//! ```ignore
//! use flowtext::prelude::*;
//! use flowtext::fontdb::FontLibrary;
//!
//! let fonts = FontLibrary::from_paths(&["Text.ttf", "Emoji.ttf"], 30.0)?.into_font_set();
//! let layout = LayoutEngine::new(LayoutParams::default()).layout("Hello 😀", &fonts)?;
//! println!("{} lines, {} high", layout.lines.len(), layout.total_height);
//! ```
//!
//! # Feature Flags
//!
//! - `fontdb`: load OpenType files as fonts
//! - `export`: JSON, SVG and text exporters

pub use flowtext_core::{error, traits, types, Font, FontId, FontSet, LayoutParams};
pub use flowtext_layout as layout;
pub use flowtext_unicode as unicode;

#[cfg(feature = "fontdb")]
pub use flowtext_fontdb as fontdb;

#[cfg(feature = "export")]
pub use flowtext_export as export;

/// Common imports for typical usage
pub mod prelude {
    pub use flowtext_core::{
        error::{FlowError, Result},
        traits::{Exporter, Font},
        types::{Align, LayoutResult, Margins},
        FontId, FontSet, LayoutParams,
    };
    pub use flowtext_layout::{layout_text, LayoutEngine, Segmenter};
}
