// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline batcher: glyph segments into degree buckets.

use kurbo::Vec2;

use crate::model::{ColorMode, ColorStyle, Glyph, PrimitiveBatch};

/// Append every drawable segment of `glyph`, translated by `offset`, to the
/// bucket matching its degree.
///
/// Control points keep their order. Colors follow `mode`: either the bucket
/// base color for the whole segment, or base color on the endpoints and
/// `style.highlight` on the off-curve points. Malformed segments are
/// skipped. Returns the glyph's advance so the caller can move the pen.
pub fn append_glyph(
    batch: &mut PrimitiveBatch,
    glyph: &Glyph,
    offset: Vec2,
    style: &ColorStyle,
    mode: ColorMode,
) -> f64 {
    for segment in glyph.segments() {
        let Some(degree) = segment.classify() else {
            tracing::warn!(
                "Skipping segment with degree {} and {} points",
                segment.degree,
                segment.points.len()
            );
            continue;
        };

        let bucket = batch.bucket_mut(degree);
        for (index, point) in segment.points.iter().enumerate() {
            bucket.push(*point + offset, style.point_color(degree, index, mode));
        }
    }

    glyph.advance
}
