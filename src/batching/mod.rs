// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Turning outlines and anchors into vertex streams.

pub mod layout;
pub mod outline;
pub mod overlay;
pub mod polygon;

pub use layout::{TextLayout, layout_text};
pub use outline::append_glyph;
pub use overlay::{append_overlay, build_overlay};
pub use polygon::expand_to_lines;
