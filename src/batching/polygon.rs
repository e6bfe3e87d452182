// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Control polygon edges for a stream of curve anchors.

use kurbo::Point;

/// Expand curve anchors into independent line segments.
///
/// `points` is read as consecutive runs of `degree + 1` control points (one
/// curve each). Every run contributes its `degree` edges as point pairs,
/// ready for the line bucket. A trailing partial run is dropped.
pub fn expand_to_lines(points: &[Point], degree: usize) -> Vec<Point> {
    let Some(run_len) = degree.checked_add(1) else {
        return Vec::new();
    };
    points
        .chunks_exact(run_len)
        .flat_map(|run| run.windows(2))
        .flat_map(|edge| [edge[0], edge[1]])
        .collect()
}
