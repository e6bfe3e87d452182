// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Flattened draw calls, ready for a GPU backend or a JSON dump.
//!
//! A renderer issues one patch draw per bucket, line then quad then cubic,
//! setting the `mode` uniform and the patch size before each. Positions
//! are interleaved `x, y` pairs and colors `r, g, b` triples, both `f32`.

use serde::Serialize;

use crate::model::{Bucket, Degree, PrimitiveBatch, Rgb};
use crate::scene::{Frame, Uniforms};
use crate::theme;

/// One `glDrawArrays(GL_PATCHES, ..)` worth of data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCall {
    pub degree: Degree,
    /// Value of the shader's `mode` uniform
    pub mode: i32,
    pub patch_vertices: usize,
    pub element_count: usize,
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl DrawCall {
    fn new(degree: Degree, bucket: &Bucket) -> Self {
        let positions = bucket
            .points()
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32])
            .collect();
        let colors = bucket.colors().iter().flat_map(|c| c.0).collect();

        Self {
            degree,
            mode: degree.shader_mode(),
            patch_vertices: degree.patch_vertices(),
            element_count: bucket.len(),
            positions,
            colors,
        }
    }
}

/// Uniform values as plain arrays
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniformValues {
    pub offset: [f32; 2],
    pub scroll_offset: [f32; 2],
    pub scale: f32,
}

impl From<&Uniforms> for UniformValues {
    fn from(uniforms: &Uniforms) -> Self {
        Self {
            offset: [uniforms.offset.x as f32, uniforms.offset.y as f32],
            scroll_offset: [
                uniforms.scroll_offset.x as f32,
                uniforms.scroll_offset.y as f32,
            ],
            scale: uniforms.scale as f32,
        }
    }
}

/// The draw calls for one frame plus the state they are drawn with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawList {
    pub clear_color: Rgb,
    pub uniforms: UniformValues,
    pub calls: Vec<DrawCall>,
}

impl DrawList {
    /// One call per bucket, in draw order. Empty buckets are kept so the
    /// list always has three entries.
    pub fn from_batch(batch: &PrimitiveBatch, uniforms: &Uniforms) -> Self {
        let calls = Degree::ALL
            .iter()
            .map(|degree| DrawCall::new(*degree, batch.bucket(*degree)))
            .collect();

        Self {
            clear_color: theme::app::BACKGROUND,
            uniforms: uniforms.into(),
            calls,
        }
    }

    pub fn from_frame(frame: &Frame) -> Self {
        Self::from_batch(&frame.batch, &frame.uniforms)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
