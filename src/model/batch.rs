// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Vertex/color streams bucketed by curve degree.
//!
//! A `PrimitiveBatch` holds one `Bucket` per tessellation patch type.
//! Points and colors are only ever pushed in pairs, so every bucket keeps
//! `points.len() == colors.len()` by construction. Whole segments are
//! appended at once, so the quad and cubic buckets filled from outlines
//! hold multiples of 3 and 4 points.

use kurbo::Point;
use serde::Serialize;

use super::color::Rgb;

/// Curve degree, which selects the output bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    Line,
    Quad,
    Cubic,
}

impl Degree {
    /// All degrees in draw order
    pub const ALL: [Degree; 3] = [Degree::Line, Degree::Quad, Degree::Cubic];

    /// Classify a raw degree value, `None` for anything outside 1..=3
    pub fn from_order(order: usize) -> Option<Self> {
        match order {
            1 => Some(Degree::Line),
            2 => Some(Degree::Quad),
            3 => Some(Degree::Cubic),
            _ => None,
        }
    }

    /// Numeric degree (1, 2 or 3)
    pub fn order(self) -> usize {
        match self {
            Degree::Line => 1,
            Degree::Quad => 2,
            Degree::Cubic => 3,
        }
    }

    /// Control points per segment, which is also the GL patch size
    pub fn patch_vertices(self) -> usize {
        self.order() + 1
    }

    /// Value of the `mode` uniform the tessellation shaders switch on
    pub fn shader_mode(self) -> i32 {
        self.order() as i32 - 1
    }
}

/// Parallel point and color streams for one patch type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    points: Vec<Point>,
    colors: Vec<Rgb>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bucket where every point shares one color
    pub fn filled(points: Vec<Point>, color: Rgb) -> Self {
        let colors = vec![color; points.len()];
        Self { points, colors }
    }

    pub fn push(&mut self, point: Point, color: Rgb) {
        self.points.push(point);
        self.colors.push(color);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of vertices (the GL element count)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
    }
}

/// Line, quadratic and cubic buckets for one scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveBatch {
    pub lines: Bucket,
    pub quads: Bucket,
    pub cubics: Bucket,
}

impl PrimitiveBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, degree: Degree) -> &Bucket {
        match degree {
            Degree::Line => &self.lines,
            Degree::Quad => &self.quads,
            Degree::Cubic => &self.cubics,
        }
    }

    pub fn bucket_mut(&mut self, degree: Degree) -> &mut Bucket {
        match degree {
            Degree::Line => &mut self.lines,
            Degree::Quad => &mut self.quads,
            Degree::Cubic => &mut self.cubics,
        }
    }

    /// Empty all three buckets, keeping their allocations
    pub fn clear(&mut self) {
        for degree in Degree::ALL {
            self.bucket_mut(degree).clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        Degree::ALL.iter().all(|d| self.bucket(*d).is_empty())
    }

    /// Total vertex count across buckets
    pub fn vertex_count(&self) -> usize {
        Degree::ALL.iter().map(|d| self.bucket(*d).len()).sum()
    }
}
