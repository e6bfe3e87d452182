// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyphtess: glyph outlines batched into GPU tessellation patches
//!
//! Fonts are read into line, quadratic and cubic segments, which are packed
//! into per-degree vertex and color buckets for patch tessellation shaders.
//! A small viewer model drives three scenes (two vector drawings and a line
//! of text) the way a windowed front end would.

use clap::Parser;

pub mod batching;
pub mod cli;
pub mod config;
pub mod draw;
pub mod font;
pub mod model;
pub mod scene;
pub mod settings;
pub mod theme;
pub mod viewer;

/// Entry point for the glyphtess binary
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glyphtess=info".parse()?),
        )
        .init();

    let args = cli::Cli::parse();
    cli::execute(&args)
}
