// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings. Colors belong in `theme.rs`.
//! Everything here is a default: the font list, messages and palettes can
//! be overridden from a TOML config file (see `config.rs`).

// ============================================================================
// FONT SETTINGS
// ============================================================================
/// Units per em assumed for UFO sources that do not declare one
const DEFAULT_UNITS_PER_EM: f64 = 1000.0;

/// Component references nested deeper than this are ignored
const MAX_COMPONENT_DEPTH: usize = 8;

// ============================================================================
// TEXT SCENE DEFAULTS
// ============================================================================
// Each font is paired with the scale that makes its messages fit the
// window; cycling fonts moves both together.
const DEFAULT_FONTS: &[(&str, f64)] = &[
    ("fonts/AlexBrush-Regular.ttf", 0.3),
    ("fonts/Comic_Sans.ttf", 0.25),
    ("fonts/Inconsolata.otf", 0.28),
    ("fonts/Lora-Bold.ttf", 0.24),
    ("fonts/Lora-BoldItalic.ttf", 0.25),
    ("fonts/Lora-Italic.ttf", 0.25),
    ("fonts/Lora-Regular.ttf", 0.25),
    ("fonts/OptimusPrinceps.ttf", 0.24),
    ("fonts/OptimusPrincepsSemiBold.ttf", 0.215),
    ("fonts/SourceSansPro-Black.otf", 0.26),
    ("fonts/SourceSansPro-Semibold.otf", 0.27),
    ("fonts/SourceSansPro-ExtraLight.otf", 0.29),
];

const DEFAULT_MESSAGES: &[&str] = &[
    "Cameron Hardy",
    "The quick brown fox jumps over the lazy dog.",
    "A phrase!",
    "there is no need to be upset",
];

/// Scale for fonts given on the command line without one
const DEFAULT_TEXT_SCALE: f64 = 0.25;

/// Vertical position of the text baseline in clip space
const TEXT_BASELINE: f64 = -0.2;

// ============================================================================
// VECTOR SCENE DEFAULTS
// ============================================================================
const KETTLE_OFFSET: (f64, f64) = (0.0, 0.0);
const KETTLE_SCALE: f64 = 0.35;

const FISH_OFFSET: (f64, f64) = (-0.7, -0.5);
const FISH_SCALE: f64 = 0.18;

// ============================================================================
// SCROLL SETTINGS
// ============================================================================
/// Scroll wheel deltas are divided by this before adding to the pan speed
const SCROLL_DIVISOR: f64 = 100.0;

/// How far past the text's half-width the pan travels before wrapping
const PAN_MARGIN: f64 = 1.0;

// ============================================================================
// CONTROL POINT OVERLAY
// ============================================================================
/// Half-size of the diamond marker drawn around each control point
const OVERLAY_RADIUS: f64 = 0.1;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Font loading settings
pub mod font {
    /// Units per em assumed when a UFO does not declare one
    pub const DEFAULT_UNITS_PER_EM: f64 = super::DEFAULT_UNITS_PER_EM;

    /// Maximum component nesting depth
    pub const MAX_COMPONENT_DEPTH: usize = super::MAX_COMPONENT_DEPTH;
}

/// Text scene defaults
pub mod text {
    /// Font paths paired with their display scale
    pub const FONTS: &[(&str, f64)] = super::DEFAULT_FONTS;

    /// Messages the text scene cycles through
    pub const MESSAGES: &[&str] = super::DEFAULT_MESSAGES;

    pub const DEFAULT_SCALE: f64 = super::DEFAULT_TEXT_SCALE;

    pub const BASELINE: f64 = super::TEXT_BASELINE;
}

/// Uniforms for the hard-coded vector scenes
pub mod scene {
    pub mod kettle {
        pub const OFFSET: (f64, f64) = super::super::KETTLE_OFFSET;
        pub const SCALE: f64 = super::super::KETTLE_SCALE;
    }

    pub mod fish {
        pub const OFFSET: (f64, f64) = super::super::FISH_OFFSET;
        pub const SCALE: f64 = super::super::FISH_SCALE;
    }
}

/// Horizontal text scrolling
pub mod scroll {
    pub const DIVISOR: f64 = super::SCROLL_DIVISOR;
    pub const PAN_MARGIN: f64 = super::PAN_MARGIN;
}

/// Control point overlay geometry
pub mod overlay {
    pub const RADIUS: f64 = super::OVERLAY_RADIUS;
}
