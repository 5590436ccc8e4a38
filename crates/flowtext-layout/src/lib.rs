//! Flowtext Layout: from a string to positioned runs
//!
//! Three passes, each a plain function of its input:
//!
//! 1. [`Segmenter`] - picks a font per character and merges neighbours into runs
//! 2. [`Wrapper`] - cuts runs into words and packs them into lines
//! 3. [`LineLayout`] - stacks the lines and aligns them inside the box
//!
//! [`LayoutEngine`] chains the three for a given [`LayoutParams`].
//!
//! ```ignore
//! use flowtext_layout::LayoutEngine;
//!
//! let engine = LayoutEngine::new(LayoutParams::default());
//! let layout = engine.layout("Hello 😀", &fonts)?;
//! if layout.overflows_height() {
//!     eprintln!("text does not fit");
//! }
//! ```

pub mod engine;
pub mod line;
pub mod measure;
pub mod segment;
pub mod wrap;

pub use engine::{layout_text, LayoutEngine};
pub use flowtext_core::LayoutParams;
pub use line::LineLayout;
pub use measure::Metrics;
pub use segment::Segmenter;
pub use wrap::{split_tokens, words, Wrapper};
