// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! The three scenes the viewer can show.
//!
//! Kettle and fish are hard-coded vector drawings, one made of quadratic
//! segments and one of cubics. The text scene lays out a message with the
//! current font. Each builder returns a fresh [`Frame`]: scene buffers are
//! always rebuilt from scratch, never patched.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::batching::{append_overlay, expand_to_lines, layout_text};
use crate::font::GlyphSource;
use crate::model::{Bucket, ColorMode, ColorStyle, Degree, PrimitiveBatch};
use crate::{settings, theme};

/// Which scene is on screen
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    #[default]
    Kettle,
    Fish,
    Text,
}

/// Anchors of the kettle, four quadratic segments
pub const KETTLE_QUADS: [Point; 12] = [
    Point::new(1.0, 1.0),
    Point::new(2.0, -1.0),
    Point::new(0.0, -1.0),
    Point::new(0.0, -1.0),
    Point::new(-2.0, -1.0),
    Point::new(-1.0, 1.0),
    Point::new(-1.0, 1.0),
    Point::new(0.0, 1.0),
    Point::new(1.0, 1.0),
    Point::new(1.2, 0.5),
    Point::new(2.5, 1.0),
    Point::new(1.3, -0.4),
];

/// Anchors of the fish, five cubic segments
pub const FISH_CUBICS: [Point; 20] = [
    Point::new(1.0, 1.0),
    Point::new(4.0, 0.0),
    Point::new(6.0, 2.0),
    Point::new(9.0, 1.0),
    Point::new(8.0, 2.0),
    Point::new(0.0, 8.0),
    Point::new(0.0, -2.0),
    Point::new(8.0, 4.0),
    Point::new(5.0, 3.0),
    Point::new(3.0, 2.0),
    Point::new(3.0, 3.0),
    Point::new(5.0, 2.0),
    Point::new(3.0, 2.2),
    Point::new(3.5, 2.7),
    Point::new(3.5, 3.3),
    Point::new(3.0, 3.8),
    Point::new(2.8, 3.5),
    Point::new(2.4, 3.8),
    Point::new(2.4, 3.2),
    Point::new(2.8, 3.5),
];

/// Shader uniforms that go with a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    /// Translation applied before scaling
    pub offset: Vec2,
    /// Horizontal pan, updated every tick
    pub scroll_offset: Vec2,
    pub scale: f64,
}

impl Uniforms {
    fn new(offset: (f64, f64), scale: f64) -> Self {
        Self {
            offset: Vec2::new(offset.0, offset.1),
            scroll_offset: Vec2::ZERO,
            scale,
        }
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new((0.0, 0.0), 1.0)
    }
}

/// Everything needed to draw one scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub batch: PrimitiveBatch,
    pub uniforms: Uniforms,
}

/// Grey control polygon for curve anchors of the given degree
fn control_polygon(points: &[Point], degree: Degree) -> Bucket {
    Bucket::filled(
        expand_to_lines(points, degree.order()),
        theme::overlay::CONTROL_POLYGON,
    )
}

/// The kettle: quadratic outline, optionally with its control points.
pub fn kettle(show_extras: bool) -> Frame {
    let mut batch = PrimitiveBatch::new();
    batch.quads = Bucket::filled(KETTLE_QUADS.to_vec(), theme::scene::KETTLE_FILL);

    if show_extras {
        batch.lines = control_polygon(&KETTLE_QUADS, Degree::Quad);
        append_overlay(
            &mut batch.quads,
            &KETTLE_QUADS,
            theme::overlay::KETTLE,
            Degree::Quad.order(),
        );
    }

    Frame {
        batch,
        uniforms: Uniforms::new(settings::scene::kettle::OFFSET, settings::scene::kettle::SCALE),
    }
}

/// The fish: cubic outline, optionally with its control points.
///
/// The overlay markers still go in the quad bucket, which the fish
/// otherwise leaves empty.
pub fn fish(show_extras: bool) -> Frame {
    let mut batch = PrimitiveBatch::new();
    batch.cubics = Bucket::filled(FISH_CUBICS.to_vec(), theme::scene::FISH_FILL);

    if show_extras {
        batch.lines = control_polygon(&FISH_CUBICS, Degree::Cubic);
        append_overlay(
            &mut batch.quads,
            &FISH_CUBICS,
            theme::overlay::FISH,
            Degree::Cubic.order(),
        );
    }

    Frame {
        batch,
        uniforms: Uniforms::new(settings::scene::fish::OFFSET, settings::scene::fish::SCALE),
    }
}

/// Lay `message` out with `source`, centered horizontally.
///
/// Returns the frame and the scaled text length, which bounds the pan.
pub fn text(
    source: &dyn GlyphSource,
    message: &str,
    scale: f64,
    style: &ColorStyle,
    mode: ColorMode,
) -> (Frame, f64) {
    let mut batch = PrimitiveBatch::new();
    let advance = layout_text(&mut batch, source, message, style, mode);
    let text_len = advance * scale;

    let uniforms = Uniforms::new((-text_len / 2.0, settings::text::BASELINE), scale);
    (Frame { batch, uniforms }, text_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contour, Glyph, Rgb, Segment};

    struct SquareFont;

    impl GlyphSource for SquareFont {
        fn glyph(&self, _ch: char) -> Glyph {
            let corners = [
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.0),
                Point::new(0.5, 0.5),
                Point::new(0.0, 0.5),
            ];
            let segments = (0..4)
                .map(|i| Segment::line(corners[i], corners[(i + 1) % 4]))
                .collect();
            Glyph::new(vec![Contour::new(segments)], 0.5)
        }

        fn name(&self) -> &str {
            "square"
        }
    }

    #[test]
    fn test_kettle_plain() {
        let frame = kettle(false);
        assert!(frame.batch.lines.is_empty());
        assert!(frame.batch.cubics.is_empty());
        assert_eq!(frame.batch.quads.points(), &KETTLE_QUADS);
        assert!(
            frame
                .batch
                .quads
                .colors()
                .iter()
                .all(|c| *c == theme::scene::KETTLE_FILL)
        );
        assert_eq!(frame.uniforms.scale, 0.35);
        assert_eq!(frame.uniforms.offset, Vec2::ZERO);
    }

    #[test]
    fn test_kettle_extras() {
        let frame = kettle(true);
        // two polygon edges per quad segment
        assert_eq!(frame.batch.lines.len(), 4 * 2 * 2);
        assert_eq!(frame.batch.quads.len(), 12 + 12 * 12);
        assert_eq!(frame.batch.quads.colors()[12], theme::overlay::KETTLE[0]);
        assert_eq!(frame.batch.quads.colors()[24], theme::overlay::KETTLE[1]);
        assert!(
            frame
                .batch
                .lines
                .colors()
                .iter()
                .all(|c| *c == Rgb::new(0.6, 0.6, 0.6))
        );
    }

    #[test]
    fn test_fish_extras_use_quad_bucket() {
        let plain = fish(false);
        assert!(plain.batch.quads.is_empty());
        assert_eq!(plain.batch.cubics.len(), 20);
        assert_eq!(plain.uniforms.offset, Vec2::new(-0.7, -0.5));

        let frame = fish(true);
        assert_eq!(frame.batch.lines.len(), 5 * 3 * 2);
        assert_eq!(frame.batch.quads.len(), 20 * 12);
        assert_eq!(frame.batch.cubics, plain.batch.cubics);
        assert_eq!(frame.batch.quads.colors()[12], theme::overlay::FISH[1]);
        assert_eq!(frame.batch.quads.colors()[3 * 12], theme::overlay::FISH[0]);
    }

    #[test]
    fn test_text_is_centered() {
        let (frame, text_len) = text(
            &SquareFont,
            "abcd",
            0.25,
            &theme::text::NORMAL,
            ColorMode::Uniform,
        );
        assert_eq!(text_len, 0.5);
        assert_eq!(frame.uniforms.offset, Vec2::new(-0.25, -0.2));
        assert_eq!(frame.uniforms.scale, 0.25);
        assert_eq!(frame.batch.lines.len(), 4 * 4 * 2);
    }

    #[test]
    fn test_scene_names() {
        let json = serde_json::to_string(&Scene::Fish).unwrap();
        assert_eq!(json, "\"fish\"");
    }
}
