// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Control point overlay.
//!
//! Every anchor gets the same small marker: 4 patches of 3 vertices built
//! from a ring of 8 offsets around the anchor. The marker goes into the
//! quadratic bucket, so each patch tessellates as a curved corner and the
//! four together read as a rounded diamond.

use kurbo::{Point, Vec2};

use crate::model::{Bucket, Rgb};
use crate::settings;

const R: f64 = settings::overlay::RADIUS;

/// Ring of offsets around an anchor, counter-clockwise from the left.
pub const DIAMOND_RING: [Vec2; 8] = [
    Vec2::new(-R, 0.0),
    Vec2::new(-R, R),
    Vec2::new(0.0, R),
    Vec2::new(R, R),
    Vec2::new(R, 0.0),
    Vec2::new(R, -R),
    Vec2::new(0.0, -R),
    Vec2::new(-R, -R),
];

/// Indices into [`DIAMOND_RING`], three per patch.
pub const DIAMOND_FAN: [usize; 12] = [0, 1, 2, 2, 3, 4, 4, 5, 6, 6, 7, 0];

/// Vertices emitted per anchor
pub const VERTICES_PER_ANCHOR: usize = DIAMOND_FAN.len();

/// The marker template translated to `anchor`
pub fn diamond_at(anchor: Point) -> impl Iterator<Item = Point> {
    DIAMOND_FAN.iter().map(move |&i| anchor + DIAMOND_RING[i])
}

/// Whether the anchor at `index` is the first or last point of its curve,
/// for anchors grouped `stride + 1` at a time.
pub fn is_endpoint(index: usize, stride: usize) -> bool {
    // a group of usize::MAX + 1 never wraps
    let spline = match stride.checked_add(1) {
        Some(group) => index % group,
        None => index,
    };
    spline == 0 || spline == stride
}

/// Markers for `points`, colored `colors[0]` on curve endpoints and
/// `colors[1]` on interior control points.
pub fn build_overlay(points: &[Point], colors: [Rgb; 2], stride: usize) -> Bucket {
    let mut bucket = Bucket::new();
    append_overlay(&mut bucket, points, colors, stride);
    bucket
}

/// Same as [`build_overlay`], appending into an existing bucket
pub fn append_overlay(bucket: &mut Bucket, points: &[Point], colors: [Rgb; 2], stride: usize) {
    for (index, anchor) in points.iter().enumerate() {
        let color = if is_endpoint(index, stride) {
            colors[0]
        } else {
            colors[1]
        };
        for vertex in diamond_at(*anchor) {
            bucket.push(vertex, color);
        }
    }
}
