// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Font service: turns characters into segment outlines.
//!
//! Two backends implement [`GlyphSource`]: compiled TrueType/OpenType fonts
//! through `ttf-parser`, and UFO sources through `norad`. Both report
//! coordinates and advances in em units (divided by units-per-em), so a
//! glyph is roughly one unit tall whichever font it came from.

mod error;
mod ttf;
mod ufo;

pub use error::FontError;
pub use ttf::TtfFont;
pub use ufo::UfoFont;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use crate::model::Glyph;

/// Anything that can hand out glyph outlines by character.
pub trait GlyphSource: Send + Sync {
    /// Outline and advance for `ch`.
    ///
    /// Never fails: characters the font does not map fall back to the
    /// font's `.notdef` glyph, or to an empty glyph with zero advance.
    fn glyph(&self, ch: char) -> Glyph;

    /// Human readable font name, for logging
    fn name(&self) -> &str;
}

/// Font file kinds we know how to open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// Compiled TrueType or OpenType (`.ttf`, `.otf`)
    OpenType,
    /// Unified Font Object source directory (`.ufo`)
    Ufo,
}

impl FontFormat {
    /// Detect the format from the path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ttf" | "otf" => Some(FontFormat::OpenType),
            "ufo" => Some(FontFormat::Ufo),
            _ => None,
        }
    }
}

/// Open a font file, picking the backend from its extension
pub fn load_font(path: &Path) -> Result<Box<dyn GlyphSource>, FontError> {
    let font: Box<dyn GlyphSource> = match FontFormat::from_path(path) {
        Some(FontFormat::OpenType) => Box::new(TtfFont::load(path)?),
        Some(FontFormat::Ufo) => Box::new(UfoFont::load(path)?),
        None => {
            return Err(FontError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    tracing::info!("Loaded font: {} from {}", font.name(), path.display());
    Ok(font)
}

/// Loads each font path at most once.
///
/// Font cycling in the viewer revisits the same handful of files, so the
/// parsed fonts are kept around instead of being reopened per glyph.
#[derive(Default)]
pub struct FontCache {
    fonts: HashMap<PathBuf, Box<dyn GlyphSource>>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the font at `path`, loading it on first use
    pub fn get_or_load(&mut self, path: &Path) -> Result<&dyn GlyphSource, FontError> {
        let font = match self.fonts.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(load_font(path)?),
        };
        Ok(&**font)
    }

    /// Register an already-loaded font under `path`
    pub fn insert(&mut self, path: impl Into<PathBuf>, font: Box<dyn GlyphSource>) {
        self.fonts.insert(path.into(), font);
    }
}
