// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph outlines as the font service hands them to the batcher.
//!
//! Outlines are flat lists of curve segments rather than point streams:
//! each `Segment` carries its own start point, so consecutive segments of a
//! contour repeat the shared on-curve point. That is the layout the
//! tessellation patches want.

use kurbo::{BezPath, PathEl, PathSeg, Point};

use super::batch::Degree;

/// One curve segment: `degree + 1` control points in order.
///
/// The degree is kept as the raw value reported by the font service. Only
/// degrees 1..=3 with a matching point count are drawn; see
/// [`Segment::classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub degree: u8,
    pub points: Vec<Point>,
}

impl Segment {
    pub fn new(degree: u8, points: Vec<Point>) -> Self {
        Self { degree, points }
    }

    pub fn line(p0: Point, p1: Point) -> Self {
        Self::new(1, vec![p0, p1])
    }

    pub fn quad(p0: Point, p1: Point, p2: Point) -> Self {
        Self::new(2, vec![p0, p1, p2])
    }

    pub fn cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self::new(3, vec![p0, p1, p2, p3])
    }

    /// The output bucket for this segment, or `None` if it is malformed
    /// (degree outside 1..=3, or a point count that does not match).
    pub fn classify(&self) -> Option<Degree> {
        Degree::from_order(self.degree as usize)
            .filter(|degree| degree.patch_vertices() == self.points.len())
    }
}

impl From<PathSeg> for Segment {
    fn from(seg: PathSeg) -> Self {
        match seg {
            PathSeg::Line(l) => Segment::line(l.p0, l.p1),
            PathSeg::Quad(q) => Segment::quad(q.p0, q.p1, q.p2),
            PathSeg::Cubic(c) => Segment::cubic(c.p0, c.p1, c.p2, c.p3),
        }
    }
}

/// One sub-path of a glyph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    pub segments: Vec<Segment>,
}

impl Contour {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

/// A glyph outline plus its horizontal pen advance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Glyph {
    pub contours: Vec<Contour>,
    pub advance: f64,
}

impl Glyph {
    pub fn new(contours: Vec<Contour>, advance: f64) -> Self {
        Self { contours, advance }
    }

    /// A glyph with nothing to draw, e.g. for an unmapped character
    pub fn empty(advance: f64) -> Self {
        Self::new(Vec::new(), advance)
    }

    /// Build a glyph from a Kurbo path, one contour per sub-path.
    ///
    /// A `ClosePath` whose end point differs from the sub-path start turns
    /// into a closing line segment, which is how Kurbo itself segments
    /// closed paths.
    pub fn from_bezpath(path: &BezPath, advance: f64) -> Self {
        let mut contours = Vec::new();
        let mut current = BezPath::new();

        for el in path.elements() {
            if matches!(el, PathEl::MoveTo(_)) && !current.is_empty() {
                push_contour(&mut contours, &current);
                current = BezPath::new();
            }
            current.push(*el);
        }
        push_contour(&mut contours, &current);

        Self::new(contours, advance)
    }

    /// All segments of all contours, in outline order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.contours.iter().flat_map(|c| c.segments.iter())
    }

    pub fn segment_count(&self) -> usize {
        self.contours.iter().map(|c| c.segments.len()).sum()
    }
}

fn push_contour(contours: &mut Vec<Contour>, subpath: &BezPath) {
    let segments: Vec<Segment> = subpath.segments().map(Segment::from).collect();
    if !segments.is_empty() {
        contours.push(Contour::new(segments));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_recognized_segments() {
        let p = Point::ZERO;
        assert_eq!(Segment::line(p, p).classify(), Some(Degree::Line));
        assert_eq!(Segment::quad(p, p, p).classify(), Some(Degree::Quad));
        assert_eq!(Segment::cubic(p, p, p, p).classify(), Some(Degree::Cubic));
    }

    #[test]
    fn test_classify_rejects_malformed_segments() {
        let p = Point::ZERO;
        assert_eq!(Segment::new(4, vec![p; 5]).classify(), None);
        assert_eq!(Segment::new(0, vec![p]).classify(), None);
        // Degree says quadratic but only two points arrived
        assert_eq!(Segment::new(2, vec![p, p]).classify(), None);
    }

    #[test]
    fn test_from_bezpath_splits_subpaths() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.quad_to((1.5, 0.5), (1.0, 1.0));
        path.curve_to((0.7, 1.2), (0.3, 1.2), (0.0, 1.0));
        path.close_path();
        path.move_to((5.0, 5.0));
        path.line_to((6.0, 5.0));
        path.line_to((5.0, 6.0));
        path.close_path();

        let glyph = Glyph::from_bezpath(&path, 0.75);
        assert_eq!(glyph.advance, 0.75);
        assert_eq!(glyph.contours.len(), 2);

        let degrees: Vec<u8> = glyph.contours[0].segments.iter().map(|s| s.degree).collect();
        // line, quad, cubic, then the closing line back to the origin
        assert_eq!(degrees, vec![1, 2, 3, 1]);

        let closing = &glyph.contours[0].segments[3];
        assert_eq!(closing.points, vec![Point::new(0.0, 1.0), Point::ZERO]);

        assert_eq!(glyph.contours[1].segments.len(), 3);
        assert_eq!(glyph.segment_count(), 7);
    }

    #[test]
    fn test_from_bezpath_empty() {
        let glyph = Glyph::from_bezpath(&BezPath::new(), 0.3);
        assert!(glyph.contours.is_empty());
        assert_eq!(glyph.segments().count(), 0);
    }

    #[test]
    fn test_segments_repeat_shared_points() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.line_to((1.0, 1.0));

        let glyph = Glyph::from_bezpath(&path, 1.0);
        let segments: Vec<&Segment> = glyph.segments().collect();
        assert_eq!(segments[0].points[1], segments[1].points[0]);
    }
}
