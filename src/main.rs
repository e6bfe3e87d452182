// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyphtess: glyph outlines batched into GPU tessellation patches

fn main() -> anyhow::Result<()> {
    glyphtess::run()
}
