// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Left-to-right text layout on a single baseline.

use kurbo::Vec2;

use super::outline::append_glyph;
use crate::font::GlyphSource;
use crate::model::{ColorMode, ColorStyle, PrimitiveBatch};

/// Clear `batch` and lay `text` out into it, one glyph per `char`.
///
/// The pen starts at the origin and moves right by each glyph's advance.
/// There is no kerning and no line breaking. Returns the total advance.
pub fn layout_text(
    batch: &mut PrimitiveBatch,
    source: &dyn GlyphSource,
    text: &str,
    style: &ColorStyle,
    mode: ColorMode,
) -> f64 {
    batch.clear();

    let mut pen = Vec2::ZERO;
    for ch in text.chars() {
        let glyph = source.glyph(ch);
        tracing::debug!(
            "Laying out {:?} at x={:.3} ({} segments)",
            ch,
            pen.x,
            glyph.segment_count()
        );
        pen.x += append_glyph(batch, &glyph, pen, style, mode);
    }

    tracing::debug!(
        "Laid out {} chars with {} in {} vertices",
        text.chars().count(),
        source.name(),
        batch.vertex_count()
    );
    pen.x
}

/// A laid out string: its batch and total advance
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    pub batch: PrimitiveBatch,
    pub advance: f64,
}

impl TextLayout {
    pub fn new(
        source: &dyn GlyphSource,
        text: &str,
        style: &ColorStyle,
        mode: ColorMode,
    ) -> Self {
        let mut batch = PrimitiveBatch::new();
        let advance = layout_text(&mut batch, source, text, style, mode);
        Self { batch, advance }
    }
}
