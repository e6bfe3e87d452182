// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors are linear RGB floats, the way they are uploaded as vertex
//! attributes: Rgb::new(r, g, b)

use crate::model::{ColorStyle, Rgb};

// ============================================================================
// BASE COLORS
// ============================================================================
const WHITE: Rgb = Rgb::WHITE;
const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
const MAGENTA: Rgb = Rgb::new(1.0, 0.0, 1.0);
const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);
const GREY: Rgb = Rgb::new(0.6, 0.6, 0.6);
const CHARCOAL: Rgb = Rgb::new(0.2, 0.2, 0.2);

// ============================================================================
// GLOBAL BACKGROUND
// ============================================================================
const APP_BACKGROUND: Rgb = CHARCOAL;

// ============================================================================
// TEXT PALETTES
// ============================================================================
// Normal: one soft green for every bucket
const TEXT_NORMAL: Rgb = Rgb::new(0.33, 0.7, 0.33);

// Highlight: one primary per bucket so the segment kinds can be told apart,
// with off-curve points in white
const TEXT_HIGHLIGHT_LINE: Rgb = RED;
const TEXT_HIGHLIGHT_QUAD: Rgb = GREEN;
const TEXT_HIGHLIGHT_CUBIC: Rgb = BLUE;
const OFF_CURVE_HIGHLIGHT: Rgb = WHITE;

// ============================================================================
// VECTOR SCENES
// ============================================================================
const KETTLE_FILL: Rgb = Rgb::new(0.0, 0.6, 0.9);
const FISH_FILL: Rgb = Rgb::new(1.0, 0.4, 0.1);

// ============================================================================
// CONTROL POINT OVERLAY
// ============================================================================
const CONTROL_POLYGON: Rgb = GREY;
const OVERLAY_ENDPOINT: Rgb = YELLOW;
const KETTLE_OVERLAY_INTERIOR: Rgb = MAGENTA;
const FISH_OVERLAY_INTERIOR: Rgb = CYAN;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color (the GL clear color)
pub mod app {
    use super::Rgb;
    pub const BACKGROUND: Rgb = super::APP_BACKGROUND;
}

/// Palettes for glyph outlines in the text scene
pub mod text {
    use super::ColorStyle;

    /// Uniform palette used when highlighting is off
    pub const NORMAL: ColorStyle = ColorStyle {
        line: super::TEXT_NORMAL,
        quad: super::TEXT_NORMAL,
        cubic: super::TEXT_NORMAL,
        highlight: super::OFF_CURVE_HIGHLIGHT,
    };

    /// Per-bucket palette used when highlighting is on
    pub const HIGHLIGHT: ColorStyle = ColorStyle {
        line: super::TEXT_HIGHLIGHT_LINE,
        quad: super::TEXT_HIGHLIGHT_QUAD,
        cubic: super::TEXT_HIGHLIGHT_CUBIC,
        highlight: super::OFF_CURVE_HIGHLIGHT,
    };
}

/// Colors for the hard-coded kettle and fish scenes
pub mod scene {
    use super::Rgb;
    pub const KETTLE_FILL: Rgb = super::KETTLE_FILL;
    pub const FISH_FILL: Rgb = super::FISH_FILL;
}

/// Control point overlay colors
///
/// Each pair is `[endpoint, interior]`: the first color marks on-curve
/// anchors, the second marks off-curve control points.
pub mod overlay {
    use super::Rgb;
    pub const CONTROL_POLYGON: Rgb = super::CONTROL_POLYGON;
    pub const KETTLE: [Rgb; 2] = [super::OVERLAY_ENDPOINT, super::KETTLE_OVERLAY_INTERIOR];
    pub const FISH: [Rgb; 2] = [super::OVERLAY_ENDPOINT, super::FISH_OVERLAY_INTERIOR];
}
