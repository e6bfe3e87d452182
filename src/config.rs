// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! User configuration loaded from TOML.
//!
//! Every field is optional; anything missing falls back to the defaults in
//! `settings.rs` and `theme.rs`. A minimal file looks like:
//!
//! ```toml
//! messages = ["Hello"]
//!
//! [[fonts]]
//! path = "fonts/Lora-Regular.ttf"
//! scale = 0.25
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ColorStyle;
use crate::{settings, theme};

/// Errors from reading or checking a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A font file and the scale its text is drawn at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontEntry {
    pub path: PathBuf,
    pub scale: f64,
}

/// Text palettes for the two highlight states
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palettes {
    pub normal: ColorStyle,
    pub highlight: ColorStyle,
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            normal: theme::text::NORMAL,
            highlight: theme::text::HIGHLIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fonts the text scene cycles through
    pub fonts: Vec<FontEntry>,
    /// Messages the text scene cycles through
    pub messages: Vec<String>,
    pub palette: Palettes,
}

impl Default for Config {
    fn default() -> Self {
        let fonts = settings::text::FONTS
            .iter()
            .map(|(path, scale)| FontEntry {
                path: PathBuf::from(path),
                scale: *scale,
            })
            .collect();
        let messages = settings::text::MESSAGES
            .iter()
            .map(|m| m.to_string())
            .collect();

        Self {
            fonts,
            messages,
            palette: Palettes::default(),
        }
    }
}

impl Config {
    /// Read and validate a config file.
    ///
    /// Relative font paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_fonts(base);
        }
        config.validate()?;

        tracing::info!(
            "Loaded config {} ({} fonts, {} messages)",
            path.display(),
            config.fonts.len(),
            config.messages.len()
        );
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Make relative font paths relative to `base`
    pub fn resolve_fonts(&mut self, base: &Path) {
        for entry in &mut self.fonts {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fonts.is_empty() {
            return Err(ConfigError::Invalid("at least one font is required".into()));
        }
        if self.messages.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one message is required".into(),
            ));
        }
        if let Some(entry) = self
            .fonts
            .iter()
            .find(|entry| !(entry.scale.is_finite() && entry.scale > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "font {} has non-positive scale {}",
                entry.path.display(),
                entry.scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fonts.len(), 12);
        assert_eq!(config.messages.len(), 4);
        assert_eq!(config.fonts[8].scale, 0.215);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            messages = ["Hello"]

            [[fonts]]
            path = "a.ttf"
            scale = 0.5

            [palette.normal]
            line = [1.0, 0.0, 0.0]
            quad = [1.0, 0.0, 0.0]
            cubic = [1.0, 0.0, 0.0]
            highlight = [1.0, 1.0, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.messages, vec!["Hello".to_string()]);
        assert_eq!(config.fonts[0].path, PathBuf::from("a.ttf"));
        assert_eq!(config.palette.normal.line, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(config.palette.highlight, theme::text::HIGHLIGHT);
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.messages.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.fonts.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.fonts[3].scale = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(Config::from_toml("fonts = 3").is_err());
    }

    #[test]
    fn test_resolve_relative_fonts() {
        let mut config = Config::from_toml(
            r#"
            [[fonts]]
            path = "a.ttf"
            scale = 0.5

            [[fonts]]
            path = "/abs/b.ttf"
            scale = 0.5
            "#,
        )
        .unwrap();
        config.resolve_fonts(Path::new("/cfg"));
        assert_eq!(config.fonts[0].path, PathBuf::from("/cfg/a.ttf"));
        assert_eq!(config.fonts[1].path, PathBuf::from("/abs/b.ttf"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
