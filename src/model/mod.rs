// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline and vertex-batch data model

pub mod batch;
pub mod color;
pub mod outline;

pub use batch::{Bucket, Degree, PrimitiveBatch};
pub use color::{ColorMode, ColorStyle, Rgb};
pub use outline::{Contour, Glyph, Segment};
