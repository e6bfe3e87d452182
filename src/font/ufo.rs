// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! UFO glyph extraction through `norad`.
//!
//! The default layer is converted once at load time into owned glyph data
//! (points, components, advance). Outlines are built on request: each
//! contour becomes a Kurbo sub-path placed by the accumulated transform,
//! which starts as the em scale and picks up each component's transform on
//! the way down.

use std::collections::HashMap;
use std::path::Path;

use kurbo::{Affine, BezPath, Point};
use norad::{Font, Glyph as NoradGlyph};

use super::{FontError, GlyphSource};
use crate::model::Glyph;
use crate::settings;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Point type classification, mirroring the UFO `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointType {
    Move,
    Line,
    OffCurve,
    Curve,
    QCurve,
}

impl PointType {
    fn is_on_curve(self) -> bool {
        self != PointType::OffCurve
    }
}

/// A point in a contour
#[derive(Debug, Clone)]
pub(crate) struct ContourPoint {
    pub x: f64,
    pub y: f64,
    pub point_type: PointType,
}

impl ContourPoint {
    fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A component reference to another glyph
#[derive(Debug, Clone)]
pub(crate) struct Component {
    /// Name of the referenced glyph
    pub base: String,
    pub transform: Affine,
}

/// Owned copy of one UFO glyph
#[derive(Debug, Clone, Default)]
pub(crate) struct UfoGlyph {
    pub width: f64,
    pub contours: Vec<Vec<ContourPoint>>,
    pub components: Vec<Component>,
}

// ============================================================================
// FONT
// ============================================================================

/// A UFO source font
#[derive(Debug, Clone)]
pub struct UfoFont {
    name: String,
    units_per_em: f64,
    glyphs: HashMap<String, UfoGlyph>,
    /// Character to glyph name, from each glyph's codepoints
    cmap: HashMap<char, String>,
}

impl UfoFont {
    /// Load a UFO from a directory path
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let font = Font::load(path).map_err(|source| FontError::Ufo {
            path: path.to_path_buf(),
            source,
        })?;

        let family_name = font
            .font_info
            .family_name
            .clone()
            .unwrap_or_else(|| "Untitled Font".to_string());
        let style_name = font
            .font_info
            .style_name
            .clone()
            .unwrap_or_else(|| "Regular".to_string());
        let units_per_em = font
            .font_info
            .units_per_em
            .map(|n| n.as_f64())
            .filter(|upem| *upem > 0.0)
            .unwrap_or(settings::font::DEFAULT_UNITS_PER_EM);

        let mut glyphs = HashMap::new();
        let mut cmap = HashMap::new();
        for norad_glyph in font.default_layer().iter() {
            let name = norad_glyph.name().to_string();
            for ch in norad_glyph.codepoints.iter() {
                cmap.insert(ch, name.clone());
            }
            glyphs.insert(name, convert_glyph(norad_glyph));
        }

        Ok(Self::from_parts(
            format!("{} {}", family_name, style_name),
            units_per_em,
            glyphs,
            cmap,
        ))
    }

    pub(crate) fn from_parts(
        name: String,
        units_per_em: f64,
        glyphs: HashMap<String, UfoGlyph>,
        cmap: HashMap<char, String>,
    ) -> Self {
        Self {
            name,
            units_per_em,
            glyphs,
            cmap,
        }
    }

    /// Append the outline of `glyph` mapped through `transform`, then
    /// descend into its components. Contours nested deeper than the
    /// component depth limit are dropped, which also breaks reference cycles.
    fn append_outline(
        &self,
        path: &mut BezPath,
        glyph: &UfoGlyph,
        transform: Affine,
        depth: usize,
    ) {
        let mut local = BezPath::new();
        for contour in &glyph.contours {
            append_contour_to_path(&mut local, contour);
        }
        let placed = transform * local;
        path.extend(placed.elements().iter().copied());

        if glyph.components.is_empty() {
            return;
        }
        if depth >= settings::font::MAX_COMPONENT_DEPTH {
            tracing::warn!("Ignoring components nested {} levels deep", depth + 1);
            return;
        }

        for component in &glyph.components {
            match self.glyphs.get(&component.base) {
                Some(base) => {
                    self.append_outline(path, base, transform * component.transform, depth + 1)
                }
                None => tracing::warn!("Component base glyph '{}' not found", component.base),
            }
        }
    }
}

impl GlyphSource for UfoFont {
    fn glyph(&self, ch: char) -> Glyph {
        let glyph = self
            .cmap
            .get(&ch)
            .and_then(|name| self.glyphs.get(name))
            .or_else(|| {
                tracing::debug!("No glyph for {:?} in {}, using .notdef", ch, self.name);
                self.glyphs.get(".notdef")
            });
        let Some(glyph) = glyph else {
            return Glyph::empty(0.0);
        };

        let mut path = BezPath::new();
        let to_em = Affine::scale(1.0 / self.units_per_em);
        self.append_outline(&mut path, glyph, to_em, 0);
        Glyph::from_bezpath(&path, glyph.width / self.units_per_em)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// NORAD CONVERSION
// ============================================================================

/// Convert a norad Glyph to our owned glyph
fn convert_glyph(norad_glyph: &NoradGlyph) -> UfoGlyph {
    let contours = norad_glyph
        .contours
        .iter()
        .map(|contour| contour.points.iter().map(convert_point).collect())
        .collect();

    let components = norad_glyph
        .components
        .iter()
        .map(|comp| {
            // norad's AffineTransform has: x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset
            let t = &comp.transform;
            Component {
                base: comp.base.to_string(),
                transform: Affine::new([
                    t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset,
                ]),
            }
        })
        .collect();

    UfoGlyph {
        width: norad_glyph.width,
        contours,
        components,
    }
}

fn convert_point(pt: &norad::ContourPoint) -> ContourPoint {
    let point_type = match pt.typ {
        norad::PointType::Move => PointType::Move,
        norad::PointType::Line => PointType::Line,
        norad::PointType::OffCurve => PointType::OffCurve,
        norad::PointType::Curve => PointType::Curve,
        norad::PointType::QCurve => PointType::QCurve,
    };
    ContourPoint {
        x: pt.x,
        y: pt.y,
        point_type,
    }
}

// ============================================================================
// CONTOUR TO PATH
// ============================================================================

/// Append a single UFO contour to a BezPath.
///
/// Closed contours are rotated to start on an on-curve point; off-curve
/// points that trail the last on-curve point curve back into the start.
/// A contour starting with a `move` point is open and is not closed.
pub(crate) fn append_contour_to_path(path: &mut BezPath, points: &[ContourPoint]) {
    if points.is_empty() {
        return;
    }

    let Some(start_idx) = points.iter().position(|p| p.point_type.is_on_curve()) else {
        append_implied_quad_ring(path, points);
        return;
    };

    // Rotate the points so we start at an on-curve point
    let rotated: Vec<&ContourPoint> = points[start_idx..]
        .iter()
        .chain(points[..start_idx].iter())
        .collect();

    let first = rotated[0];
    let is_open = first.point_type == PointType::Move;
    path.move_to(first.to_point());

    // Off-curve points seen since the last on-curve point
    let mut pending: Vec<Point> = Vec::new();
    for pt in &rotated[1..] {
        if pt.point_type == PointType::OffCurve {
            pending.push(pt.to_point());
        } else {
            add_segment(path, pt.point_type, &pending, pt.to_point());
            pending.clear();
        }
    }

    if is_open {
        return;
    }

    if !pending.is_empty() {
        add_segment(path, first.point_type, &pending, first.to_point());
    }
    path.close_path();
}

/// Add the segment ending at an on-curve point of type `typ`
fn add_segment(path: &mut BezPath, typ: PointType, off_curve: &[Point], end: Point) {
    match typ {
        PointType::Curve => add_curve_segment(path, off_curve, end),
        PointType::QCurve => add_quad_spline(path, off_curve, end),
        PointType::Move => path.move_to(end),
        PointType::Line | PointType::OffCurve => path.line_to(end),
    }
}

/// Add a cubic-style segment based on its control points
fn add_curve_segment(path: &mut BezPath, off_curve: &[Point], end: Point) {
    match off_curve {
        // No control points - treat as line
        [] => path.line_to(end),
        [cp] => path.quad_to(*cp, end),
        [cp1, cp2] => path.curve_to(*cp1, *cp2, end),
        // More than 2 control points shouldn't happen in UFO; use the last two
        [.., cp1, cp2] => path.curve_to(*cp1, *cp2, end),
    }
}

/// Add a TrueType-style quadratic spline.
///
/// Between two consecutive off-curve points there is an implied on-curve
/// point at their midpoint.
fn add_quad_spline(path: &mut BezPath, off_curve: &[Point], end: Point) {
    let Some((last, rest)) = off_curve.split_last() else {
        path.line_to(end);
        return;
    };

    for (i, cp) in rest.iter().enumerate() {
        let next = off_curve[i + 1];
        path.quad_to(*cp, cp.midpoint(next));
    }
    path.quad_to(*last, end);
}

/// A closed quadratic contour made only of off-curve points: every on-curve
/// point is implied.
fn append_implied_quad_ring(path: &mut BezPath, points: &[ContourPoint]) {
    if points.len() < 2 {
        return;
    }

    let pts: Vec<Point> = points.iter().map(ContourPoint::to_point).collect();
    let n = pts.len();
    path.move_to(pts[n - 1].midpoint(pts[0]));
    for i in 0..n {
        let next = pts[(i + 1) % n];
        path.quad_to(pts[i], pts[i].midpoint(next));
    }
    path.close_path();
}
