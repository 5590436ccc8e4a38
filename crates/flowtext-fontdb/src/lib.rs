//! Where font files become measurable faces
//!
//! [`FontFace`] answers the layout engine's questions (coverage, advance,
//! line spacing) straight from the font's tables at one pixel size.
//! [`FontLibrary`] loads a list of files, in order, into a [`FontSet`].
//!
//! ## Memory Management
//!
//! Faces keep their raw bytes and parse a `FontRef` on demand. Parsing
//! is a cheap table-directory read, and it keeps faces `Send + Sync`
//! without self-referential borrows.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use read_fonts::ReadError;
use skrifa::{
    instance::{LocationRef, Size},
    string::StringId,
    FontRef, GlyphId, MetadataProvider,
};

use flowtext_core::{
    error::{FontLoadError, MeasureError, Result},
    Font, FontId, FontSet,
};

/// One face of a font file at a fixed pixel size
pub struct FontFace {
    data: Arc<Vec<u8>>,
    face_index: u32,
    size: f32,
    name: String,
}

impl FontFace {
    /// Opens a font file from disk at `size` pixels per em
    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        Self::from_file_index(path, 0, size)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        let fallback_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "font".to_string());

        Self::from_shared_data(Arc::new(data), face_index, size, &fallback_name, path)
    }

    /// Turns raw font bytes into a face
    pub fn from_data(data: Vec<u8>, size: f32) -> Result<Self> {
        Self::from_data_index(data, 0, size)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32, size: f32) -> Result<Self> {
        let fallback_name = format!("font#{}", face_index);
        Self::from_shared_data(
            Arc::new(data),
            face_index,
            size,
            &fallback_name,
            Path::new("<memory>"),
        )
    }

    fn from_shared_data(
        data: Arc<Vec<u8>>,
        face_index: u32,
        size: f32,
        fallback_name: &str,
        origin: &Path,
    ) -> Result<Self> {
        let font = FontRef::from_index(&data, face_index).map_err(|err| match err {
            ReadError::InvalidCollectionIndex(index) => FontLoadError::FaceIndexOutOfRange {
                path: origin.display().to_string(),
                index,
            },
            _ => FontLoadError::InvalidData,
        })?;

        let name = font
            .localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map(|family| family.to_string())
            .unwrap_or_else(|| fallback_name.to_string());

        log::debug!(
            "FontFace: loaded '{}' (face {}) from {} at {}px",
            name,
            face_index,
            origin.display(),
            size
        );

        Ok(Self {
            data,
            face_index,
            size,
            name,
        })
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Pixels per em used for every measurement
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Same face, another size; the font bytes are shared
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            data: Arc::clone(&self.data),
            face_index: self.face_index,
            size,
            name: self.name.clone(),
        }
    }

    fn font_ref(&self) -> std::result::Result<FontRef<'_>, ReadError> {
        FontRef::from_index(&self.data, self.face_index)
    }

    fn scaled_metrics(&self) -> Option<skrifa::metrics::Metrics> {
        let font = self.font_ref().ok()?;
        Some(font.metrics(Size::new(self.size), LocationRef::default()))
    }
}

impl Font for FontFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_glyph(&self, ch: char) -> bool {
        self.font_ref()
            .ok()
            .and_then(|font| font.charmap().map(ch))
            .is_some()
    }

    /// Sums scaled advances; unmapped characters use `.notdef`
    fn measure(&self, text: &str) -> Result<f32> {
        let font = self
            .font_ref()
            .map_err(|err| MeasureError::new(&self.name, text, err.to_string()))?;
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(Size::new(self.size), LocationRef::default());

        let mut width = 0.0;
        for ch in text.chars() {
            let glyph_id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
            width += glyph_metrics.advance_width(glyph_id).ok_or_else(|| {
                MeasureError::new(
                    &self.name,
                    text,
                    format!("no advance for glyph {} ({:?})", glyph_id.to_u32(), ch),
                )
            })?;
        }

        Ok(width)
    }

    /// Ascent to descent plus the line gap
    fn line_spacing(&self) -> f32 {
        self.scaled_metrics()
            .map(|m| m.ascent - m.descent + m.leading)
            .unwrap_or(self.size * 1.2)
    }

    fn descent(&self) -> f32 {
        self.scaled_metrics()
            .map(|m| m.descent.abs())
            .unwrap_or(self.size * 0.2)
    }
}

/// Your font list: files in the order they should be tried
pub struct FontLibrary {
    size: f32,
    fonts: FontSet,
    /// Parsed faces by canonical path, so a repeated file is read once.
    path_cache: HashMap<PathBuf, Arc<FontFace>>,
}

impl FontLibrary {
    /// Starts an empty library whose faces are all measured at `size`
    pub fn new(size: f32) -> Self {
        Self {
            size,
            fonts: FontSet::new(),
            path_cache: HashMap::new(),
        }
    }

    /// Loads every path in order; the first becomes the default font
    pub fn from_paths<P: AsRef<Path>>(paths: &[P], size: f32) -> Result<Self> {
        let mut library = Self::new(size);
        for path in paths {
            library.load_font(path)?;
        }
        Ok(library)
    }

    /// Appends a font file at the lowest priority
    ///
    /// Listing the same file twice yields two entries sharing one parsed face.
    pub fn load_font(&mut self, path: impl AsRef<Path>) -> Result<FontId> {
        let path = path.as_ref();
        let cache_key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        let face = match self.path_cache.get(&cache_key) {
            Some(face) => Arc::clone(face),
            None => {
                let face = Arc::new(FontFace::from_file(path, self.size)?);
                self.path_cache.insert(cache_key, Arc::clone(&face));
                face
            },
        };

        Ok(self.fonts.push(face))
    }

    /// Appends a font held in memory
    pub fn load_font_data(&mut self, data: Vec<u8>) -> Result<FontId> {
        let face = FontFace::from_data(data, self.size)?;
        Ok(self.fonts.push(Arc::new(face)))
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn font_set(&self) -> &FontSet {
        &self.fonts
    }

    pub fn into_font_set(self) -> FontSet {
        self.fonts
    }
}
