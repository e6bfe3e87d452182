// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex colors and the per-bucket palette used when batching outlines.

use serde::{Deserialize, Serialize};

use super::batch::Degree;

/// An RGB color with components in `[0, 1]`, laid out the way the
/// vertex shader reads its color attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }
}

/// How colors are assigned to the control points of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Every point of a segment gets the bucket's base color
    #[default]
    Uniform,
    /// Endpoints get the base color, off-curve points get the highlight
    HighlightInterior,
}

/// Palette for the three degree buckets plus the off-curve highlight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStyle {
    pub line: Rgb,
    pub quad: Rgb,
    pub cubic: Rgb,
    pub highlight: Rgb,
}

impl ColorStyle {
    /// Base color for the bucket of the given degree
    pub fn base(&self, degree: Degree) -> Rgb {
        match degree {
            Degree::Line => self.line,
            Degree::Quad => self.quad,
            Degree::Cubic => self.cubic,
        }
    }

    /// Color of the control point at `index` in a segment of `degree`.
    pub fn point_color(&self, degree: Degree, index: usize, mode: ColorMode) -> Rgb {
        let is_endpoint = index == 0 || index == degree.order();
        match mode {
            ColorMode::HighlightInterior if !is_endpoint => self.highlight,
            _ => self.base(degree),
        }
    }
}
