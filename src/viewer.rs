// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewer state and the operations input events map to.
//!
//! A windowing layer owns a [`Viewer`] and calls these methods from its key
//! and scroll handlers, then [`Viewer::tick`] once per frame. Every change
//! that affects geometry rebuilds the current [`Frame`] from scratch.

use kurbo::Vec2;

use crate::config::Config;
use crate::font::{FontCache, FontError};
use crate::model::ColorMode;
use crate::scene::{self, Frame, Scene};
use crate::settings;

/// Everything the input handlers can change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub scene: Scene,
    pub font_index: usize,
    pub message_index: usize,
    /// Draw control polygons and point markers on the vector scenes
    pub show_extras: bool,
    /// Use the per-bucket palette with highlighted off-curve points
    pub highlight: bool,
    /// Pan added per tick
    pub scroll_speed: f64,
    pub pan: f64,
    /// Width of the laid out text after scaling; zero on vector scenes
    pub text_len: f64,
}

pub struct Viewer {
    config: Config,
    state: UiState,
    fonts: FontCache,
    frame: Frame,
}

impl Viewer {
    /// Start on the kettle, which needs no font.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: UiState::default(),
            fonts: FontCache::new(),
            frame: scene::kettle(false),
        }
    }

    /// Start from a given state, loading a font if it shows text.
    pub fn with_state(config: Config, state: UiState) -> Result<Self, FontError> {
        let mut viewer = Self::new(config);
        let mut state = state;
        state.font_index %= viewer.config.fonts.len().max(1);
        state.message_index %= viewer.config.messages.len().max(1);
        viewer.apply(state)?;
        Ok(viewer)
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The font cache, for registering sources that are not on disk
    pub fn fonts_mut(&mut self) -> &mut FontCache {
        &mut self.fonts
    }

    pub fn select_scene(&mut self, scene: Scene) -> Result<(), FontError> {
        self.apply(UiState {
            scene,
            ..self.state.clone()
        })
    }

    /// Jump to a font by index (wrapping), whatever the scene.
    pub fn select_font(&mut self, index: usize) -> Result<(), FontError> {
        self.apply(UiState {
            font_index: index % self.config.fonts.len().max(1),
            ..self.state.clone()
        })
    }

    /// Jump to a message by index (wrapping), whatever the scene.
    pub fn select_message(&mut self, index: usize) -> Result<(), FontError> {
        self.apply(UiState {
            message_index: index % self.config.messages.len().max(1),
            ..self.state.clone()
        })
    }

    /// Next font and its scale; text scene only.
    pub fn next_font(&mut self) -> Result<bool, FontError> {
        self.step_font(1)
    }

    pub fn prev_font(&mut self) -> Result<bool, FontError> {
        self.step_font(-1)
    }

    /// Next message; text scene only.
    pub fn next_message(&mut self) -> Result<bool, FontError> {
        self.step_message(1)
    }

    pub fn prev_message(&mut self) -> Result<bool, FontError> {
        self.step_message(-1)
    }

    pub fn toggle_extras(&mut self) -> Result<(), FontError> {
        self.apply(UiState {
            show_extras: !self.state.show_extras,
            ..self.state.clone()
        })
    }

    pub fn toggle_highlight(&mut self) -> Result<(), FontError> {
        self.apply(UiState {
            highlight: !self.state.highlight,
            ..self.state.clone()
        })
    }

    /// Scroll wheel input accelerates the pan.
    pub fn scroll(&mut self, dy: f64) {
        self.state.scroll_speed += dy / settings::scroll::DIVISOR;
    }

    pub fn reset_scroll(&mut self) {
        self.state.scroll_speed = 0.0;
        self.state.pan = 0.0;
        self.frame.uniforms.scroll_offset = Vec2::ZERO;
    }

    /// Advance the pan by one frame, wrapping it around once the text has
    /// fully left the view. Returns the new scroll offset.
    pub fn tick(&mut self) -> Vec2 {
        let state = &mut self.state;
        let bound = state.text_len + settings::scroll::PAN_MARGIN;

        state.pan += state.scroll_speed;
        if state.pan > bound && state.scroll_speed > 0.0 {
            state.pan = -bound;
        } else if state.pan < -bound && state.scroll_speed <= 0.0 {
            state.pan = bound;
        }

        let offset = Vec2::new(state.pan, 0.0);
        self.frame.uniforms.scroll_offset = offset;
        offset
    }

    fn step_font(&mut self, step: isize) -> Result<bool, FontError> {
        if self.state.scene != Scene::Text {
            return Ok(false);
        }
        self.apply(UiState {
            font_index: wrap(self.state.font_index, step, self.config.fonts.len()),
            ..self.state.clone()
        })?;
        Ok(true)
    }

    fn step_message(&mut self, step: isize) -> Result<bool, FontError> {
        if self.state.scene != Scene::Text {
            return Ok(false);
        }
        self.apply(UiState {
            message_index: wrap(self.state.message_index, step, self.config.messages.len()),
            ..self.state.clone()
        })?;
        Ok(true)
    }

    /// Build the frame for `next` and switch to it. On error the current
    /// state and frame are left untouched.
    fn apply(&mut self, mut next: UiState) -> Result<(), FontError> {
        let (mut frame, text_len) = build_frame(&self.config, &mut self.fonts, &next)?;
        next.text_len = text_len;
        frame.uniforms.scroll_offset = Vec2::new(next.pan, 0.0);

        tracing::info!(
            "Rebuilt {:?} scene: {} line, {} quad, {} cubic vertices",
            next.scene,
            frame.batch.lines.len(),
            frame.batch.quads.len(),
            frame.batch.cubics.len()
        );

        self.state = next;
        self.frame = frame;
        Ok(())
    }
}

/// The frame `state` shows, plus its scaled text length
fn build_frame(
    config: &Config,
    fonts: &mut FontCache,
    state: &UiState,
) -> Result<(Frame, f64), FontError> {
    match state.scene {
        Scene::Kettle => Ok((scene::kettle(state.show_extras), 0.0)),
        Scene::Fish => Ok((scene::fish(state.show_extras), 0.0)),
        Scene::Text => {
            let (Some(entry), Some(message)) = (
                config.fonts.get(state.font_index),
                config.messages.get(state.message_index),
            ) else {
                tracing::warn!("No font or message configured for the text scene");
                return Ok((Frame::default(), 0.0));
            };

            let font = fonts.get_or_load(&entry.path)?;
            let (style, mode) = if state.highlight {
                (&config.palette.highlight, ColorMode::HighlightInterior)
            } else {
                (&config.palette.normal, ColorMode::Uniform)
            };
            Ok(scene::text(font, message, entry.scale, style, mode))
        }
    }
}

/// Step an index around a ring of `len` entries
fn wrap(index: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + step).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontEntry;
    use crate::font::GlyphSource;
    use crate::model::{Contour, Glyph, Segment};
    use kurbo::Point;
    use std::path::PathBuf;

    /// One unit-advance line per char
    struct BarFont;

    impl GlyphSource for BarFont {
        fn glyph(&self, _ch: char) -> Glyph {
            let bar = Segment::line(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
            Glyph::new(vec![Contour::new(vec![bar])], 1.0)
        }

        fn name(&self) -> &str {
            "bar"
        }
    }

    fn test_config() -> Config {
        Config {
            fonts: vec![
                FontEntry {
                    path: PathBuf::from("mem/one"),
                    scale: 0.5,
                },
                FontEntry {
                    path: PathBuf::from("mem/two"),
                    scale: 0.25,
                },
            ],
            messages: vec!["ab".into(), "abcd".into(), "a".into()],
            ..Config::default()
        }
    }

    fn text_viewer() -> Viewer {
        let mut viewer = Viewer::new(test_config());
        viewer
            .fonts_mut()
            .insert(PathBuf::from("mem/one"), Box::new(BarFont));
        viewer
            .fonts_mut()
            .insert(PathBuf::from("mem/two"), Box::new(BarFont));
        viewer.select_scene(Scene::Text).unwrap();
        viewer
    }

    #[test]
    fn test_starts_on_kettle() {
        let viewer = Viewer::new(test_config());
        assert_eq!(viewer.state().scene, Scene::Kettle);
        assert_eq!(viewer.frame().batch.quads.len(), 12);
    }

    #[test]
    fn test_text_scene_uses_font_scale() {
        let viewer = text_viewer();
        assert_eq!(viewer.state().text_len, 1.0);
        assert_eq!(viewer.frame().uniforms.scale, 0.5);
        assert_eq!(viewer.frame().uniforms.offset, Vec2::new(-0.5, -0.2));
    }

    #[test]
    fn test_font_cycle_wraps_and_moves_scale() {
        let mut viewer = text_viewer();
        assert!(viewer.next_font().unwrap());
        assert_eq!(viewer.state().font_index, 1);
        assert_eq!(viewer.frame().uniforms.scale, 0.25);

        assert!(viewer.next_font().unwrap());
        assert_eq!(viewer.state().font_index, 0);

        assert!(viewer.prev_font().unwrap());
        assert_eq!(viewer.state().font_index, 1);
    }

    #[test]
    fn test_message_cycle_wraps() {
        let mut viewer = text_viewer();
        assert!(viewer.prev_message().unwrap());
        assert_eq!(viewer.state().message_index, 2);
        assert!(viewer.next_message().unwrap());
        assert_eq!(viewer.state().message_index, 0);
        assert!(viewer.next_message().unwrap());
        assert_eq!(viewer.frame().batch.lines.len(), 8);
    }

    #[test]
    fn test_navigation_ignored_outside_text() {
        let mut viewer = Viewer::new(test_config());
        assert!(!viewer.next_font().unwrap());
        assert!(!viewer.prev_message().unwrap());
        assert_eq!(viewer.state().font_index, 0);
        assert_eq!(viewer.state().message_index, 0);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut viewer = Viewer::new(test_config());
        viewer.toggle_extras().unwrap();
        assert!(viewer.state().show_extras);
        assert!(!viewer.state().highlight);
        assert_eq!(viewer.frame().batch.lines.len(), 8);

        viewer.toggle_highlight().unwrap();
        assert!(viewer.state().highlight);
        viewer.toggle_extras().unwrap();
        assert!(!viewer.state().show_extras);
        assert!(viewer.frame().batch.lines.is_empty());
    }

    #[test]
    fn test_highlight_palette_in_text() {
        let mut viewer = text_viewer();
        let normal = viewer.config().palette.normal.line;
        assert_eq!(viewer.frame().batch.lines.colors()[0], normal);

        viewer.toggle_highlight().unwrap();
        let highlight = viewer.config().palette.highlight.line;
        assert_eq!(viewer.frame().batch.lines.colors()[0], highlight);
    }

    #[test]
    fn test_scroll_and_wrap_forward() {
        let mut viewer = text_viewer();
        // text_len is 1.0, so the pan wraps past 2.0
        viewer.scroll(50.0);
        assert_eq!(viewer.state().scroll_speed, 0.5);

        let offsets: Vec<f64> = (0..5).map(|_| viewer.tick().x).collect();
        assert_eq!(offsets, vec![0.5, 1.0, 1.5, 2.0, -2.0]);
        assert_eq!(viewer.frame().uniforms.scroll_offset, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_scroll_and_wrap_backward() {
        let mut viewer = text_viewer();
        viewer.scroll(-100.0);
        let offsets: Vec<f64> = (0..4).map(|_| viewer.tick().x).collect();
        assert_eq!(offsets, vec![-1.0, -2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_reset_scroll() {
        let mut viewer = text_viewer();
        viewer.scroll(25.0);
        viewer.tick();
        viewer.reset_scroll();
        assert_eq!(viewer.state().pan, 0.0);
        assert_eq!(viewer.tick(), Vec2::ZERO);
    }

    #[test]
    fn test_missing_font_is_an_error() {
        let mut viewer = Viewer::new(test_config());
        assert!(viewer.select_scene(Scene::Text).is_err());
    }

    #[test]
    fn test_failed_scene_change_keeps_previous_frame() {
        let mut config = test_config();
        config.fonts[0].path = PathBuf::from("/nonexistent/glyphtess/a.ttf");
        let mut viewer = Viewer::new(config);
        viewer.toggle_extras().unwrap();
        let before = viewer.frame().clone();

        assert!(viewer.select_scene(Scene::Text).is_err());
        assert_eq!(viewer.state().scene, Scene::Kettle);
        assert_eq!(viewer.state().text_len, 0.0);
        assert_eq!(viewer.frame(), &before);

        // still on the kettle, so text navigation stays inert
        assert!(!viewer.next_message().unwrap());
        assert_eq!(viewer.state().message_index, 0);
    }

    #[test]
    fn test_failed_font_step_keeps_current_font() {
        let mut viewer = text_viewer();
        viewer.next_message().unwrap();
        let before = viewer.frame().clone();
        let text_len = viewer.state().text_len;

        // "mem/two" was never registered and cannot be loaded from disk
        viewer.fonts = FontCache::new();
        viewer
            .fonts_mut()
            .insert(PathBuf::from("mem/one"), Box::new(BarFont));
        assert!(viewer.next_font().is_err());
        assert_eq!(viewer.state().font_index, 0);
        assert_eq!(viewer.state().text_len, text_len);
        assert_eq!(viewer.frame(), &before);
    }

    #[test]
    fn test_with_state_wraps_indices() {
        let state = UiState {
            font_index: 7,
            message_index: 4,
            ..UiState::default()
        };
        let viewer = Viewer::with_state(test_config(), state).unwrap();
        assert_eq!(viewer.state().font_index, 1);
        assert_eq!(viewer.state().message_index, 1);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 12), 11);
        assert_eq!(wrap(11, 1, 12), 0);
        assert_eq!(wrap(3, 1, 0), 0);
    }
}
