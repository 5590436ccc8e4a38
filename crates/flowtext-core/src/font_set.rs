//! Ordered font fallback list
//!
//! Position in the list is priority: the first font that covers a
//! character wins, and the first font overall is the default used when
//! nothing covers it. Fonts are identified by their position, so two
//! entries built from the same file are still distinct handles.

use std::sync::Arc;

use crate::{
    error::{FlowError, Result},
    traits::Font,
};

/// Codepoint every color emoji font is expected to cover
pub const REFERENCE_EMOJI: char = '\u{1F600}';

/// Non-owning handle to one entry of a [`FontSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(pub usize);

impl FontId {
    /// The first font in every set
    pub const DEFAULT: FontId = FontId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A finite, already-loaded list of fonts in fallback order
#[derive(Clone, Default)]
pub struct FontSet {
    fonts: Vec<Arc<dyn Font>>,
}

impl FontSet {
    /// Starts with no fonts
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Builds a set from fonts already in priority order
    pub fn from_fonts(fonts: Vec<Arc<dyn Font>>) -> Self {
        Self { fonts }
    }

    /// Appends a font at the lowest priority and returns its handle
    pub fn push(&mut self, font: Arc<dyn Font>) -> FontId {
        self.fonts.push(font);
        FontId(self.fonts.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Fails fast when there is nothing to fall back to
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.fonts.is_empty() {
            return Err(FlowError::EmptyFontSet);
        }
        Ok(())
    }

    /// Looks up a font by handle
    pub fn get(&self, id: FontId) -> Option<&Arc<dyn Font>> {
        self.fonts.get(id.0)
    }

    /// Looks up a font by handle, as an error when the handle is stale
    pub fn font(&self, id: FontId) -> Result<&dyn Font> {
        self.ensure_not_empty()?;
        self.fonts
            .get(id.0)
            .map(|font| font.as_ref())
            .ok_or_else(|| {
                FlowError::ConfigError(format!(
                    "font #{} is not part of a set of {}",
                    id.0,
                    self.fonts.len()
                ))
            })
    }

    /// Iterates fonts with their handles in priority order
    pub fn iter(&self) -> impl Iterator<Item = (FontId, &Arc<dyn Font>)> {
        self.fonts
            .iter()
            .enumerate()
            .map(|(index, font)| (FontId(index), font))
    }

    /// First font that has a glyph for `ch`
    pub fn first_covering(&self, ch: char) -> Option<FontId> {
        self.iter()
            .find(|(_, font)| font.has_glyph(ch))
            .map(|(id, _)| id)
    }

    /// First covering font, or the default when none covers `ch`
    pub fn resolve(&self, ch: char) -> FontId {
        self.first_covering(ch).unwrap_or(FontId::DEFAULT)
    }

    /// First font able to draw color emoji, judged by [`REFERENCE_EMOJI`]
    pub fn emoji_font(&self) -> Option<FontId> {
        self.first_covering(REFERENCE_EMOJI)
    }

    /// Display name for a handle, for logs and exports
    pub fn name_of(&self, id: FontId) -> &str {
        self.get(id).map(|font| font.name()).unwrap_or("unknown")
    }
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.fonts.iter().map(|font| font.name()))
            .finish()
    }
}

impl FromIterator<Arc<dyn Font>> for FontSet {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Font>>>(iter: I) -> Self {
        Self::from_fonts(iter.into_iter().collect())
    }
}
