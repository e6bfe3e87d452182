// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! TrueType/OpenType glyph extraction through `ttf-parser`.
//!
//! The font bytes are owned here and a `ttf_parser::Face` is re-created for
//! each query; parsing the table directory is cheap and keeps the struct
//! free of self-references.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use kurbo::BezPath;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use super::{FontError, GlyphSource};
use crate::model::Glyph;

/// A compiled font file loaded into memory
pub struct TtfFont {
    name: String,
    bytes: Arc<[u8]>,
    units_per_em: f64,
}

impl TtfFont {
    /// Read and validate a `.ttf`/`.otf` file
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled Font")
            .to_string();
        Self::from_bytes(name, Arc::from(bytes), path)
    }

    /// Validate font data that is already in memory.
    ///
    /// `origin` is only used for error messages.
    pub fn from_bytes(name: String, bytes: Arc<[u8]>, origin: &Path) -> Result<Self, FontError> {
        let face = Face::parse(&bytes, 0).map_err(|e| FontError::Parse {
            path: PathBuf::from(origin),
            message: e.to_string(),
        })?;
        let units_per_em = f64::from(face.units_per_em());

        Ok(Self {
            name,
            bytes,
            units_per_em,
        })
    }

    fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.bytes, 0).ok()
    }
}

impl GlyphSource for TtfFont {
    fn glyph(&self, ch: char) -> Glyph {
        let Some(face) = self.face() else {
            return Glyph::empty(0.0);
        };

        // Unmapped characters draw the .notdef glyph, as font renderers do
        let glyph_id = face.glyph_index(ch).unwrap_or_else(|| {
            tracing::debug!("No glyph for {:?} in {}, using .notdef", ch, self.name);
            GlyphId(0)
        });

        let scale = 1.0 / self.units_per_em;
        let advance = face
            .glyph_hor_advance(glyph_id)
            .map(|adv| f64::from(adv) * scale)
            .unwrap_or(0.0);

        let mut builder = PathBuilder {
            path: BezPath::new(),
            scale,
        };
        // Whitespace glyphs have no outline; that is not an error
        if face.outline_glyph(glyph_id, &mut builder).is_none() {
            return Glyph::empty(advance);
        }

        Glyph::from_bezpath(&builder.path, advance)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Collects `ttf-parser` outline callbacks into a Kurbo path in em units.
struct PathBuilder {
    path: BezPath,
    scale: f64,
}

impl PathBuilder {
    fn pt(&self, x: f32, y: f32) -> (f64, f64) {
        (f64::from(x) * self.scale, f64::from(y) * self.scale)
    }
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (c, p) = (self.pt(x1, y1), self.pt(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, p) = (self.pt(x1, y1), self.pt(x2, y2), self.pt(x, y));
        self.path.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
