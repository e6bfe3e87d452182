// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Command line front end.
//!
//! Builds one scene the way the interactive viewer would, optionally
//! scrolls it for a number of frames, then prints a per-bucket summary and
//! writes the draw list as JSON.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{Config, FontEntry};
use crate::draw::DrawList;
use crate::scene::Scene;
use crate::settings;
use crate::viewer::{UiState, Viewer};

#[derive(Debug, Parser)]
#[command(version, about = "Batch glyph outlines into GPU tessellation patches")]
pub struct Cli {
    /// TOML config with fonts, messages and palettes
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scene to build
    #[arg(short, long, value_enum, default_value_t = Scene::Kettle)]
    pub scene: Scene,

    /// Use this font (.ttf, .otf or .ufo) instead of the configured list
    #[arg(short, long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Override the selected font's scale
    #[arg(long)]
    pub scale: Option<f64>,

    /// Index into the font list (wraps)
    #[arg(long, default_value_t = 0)]
    pub font_index: usize,

    /// Index into the message list (wraps)
    #[arg(long, default_value_t = 0)]
    pub message_index: usize,

    /// Lay out this text instead of the configured messages
    #[arg(short, long)]
    pub text: Option<String>,

    /// Draw control polygons and point markers
    #[arg(long)]
    pub extras: bool,

    /// Highlight palette with off-curve points marked
    #[arg(long)]
    pub highlight: bool,

    /// Scroll wheel delta applied before ticking
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub scroll: f64,

    /// Frames to tick
    #[arg(long, default_value_t = 0)]
    pub frames: usize,

    /// Write the draw list as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Config after applying `--font`, `--scale` and `--text` overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(path) = &self.font {
            config.fonts = vec![FontEntry {
                path: path.clone(),
                scale: self.scale.unwrap_or(settings::text::DEFAULT_SCALE),
            }];
        } else if let Some(scale) = self.scale {
            let len = config.fonts.len();
            if let Some(entry) = config.fonts.get_mut(self.font_index % len.max(1)) {
                entry.scale = scale;
            }
        }

        if let Some(text) = &self.text {
            config.messages = vec![text.clone()];
        }

        config.validate()?;
        Ok(config)
    }

    pub fn initial_state(&self) -> UiState {
        UiState {
            scene: self.scene,
            font_index: self.font_index,
            message_index: if self.text.is_some() {
                0
            } else {
                self.message_index
            },
            show_extras: self.extras,
            highlight: self.highlight,
            ..UiState::default()
        }
    }
}

/// Run the command line: build, tick, report.
pub fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let mut viewer = Viewer::with_state(config, cli.initial_state())
        .context("Failed to build scene")?;

    viewer.scroll(cli.scroll);
    for _ in 0..cli.frames {
        viewer.tick();
    }

    let list = DrawList::from_frame(viewer.frame());
    print!("{}", summary(&viewer, &list));

    if let Some(path) = &cli.output {
        let json = list.to_json().context("Failed to serialize draw list")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote draw list to {}", path.display());
    }
    Ok(())
}

fn summary(viewer: &Viewer, list: &DrawList) -> String {
    let state = viewer.state();
    let mut out = String::new();
    let _ = writeln!(out, "scene: {:?}", state.scene);
    if state.scene == Scene::Text {
        let config = viewer.config();
        let _ = writeln!(
            out,
            "font: {} (scale {})",
            config.fonts[state.font_index].path.display(),
            config.fonts[state.font_index].scale
        );
        let _ = writeln!(out, "text: {:?}", config.messages[state.message_index]);
        let _ = writeln!(out, "text length: {:.4}", state.text_len);
    }
    for call in &list.calls {
        let _ = writeln!(
            out,
            "{:>5}: {} vertices in {} patches",
            format!("{:?}", call.degree).to_lowercase(),
            call.element_count,
            call.element_count / call.patch_vertices
        );
    }
    let _ = writeln!(out, "scroll offset: {:.4}", state.pan);
    out
}
