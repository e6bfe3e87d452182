// Copyright 2025 the Glyphtess Authors
// SPDX-License-Identifier: Apache-2.0

//! Font loading errors

use std::path::PathBuf;

/// Errors that can occur while opening a font for glyph extraction.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to load UFO {path:?}")]
    Ufo {
        path: PathBuf,
        #[source]
        source: norad::error::FontLoadError,
    },

    #[error("unsupported font format {path:?} (expected .ttf, .otf or .ufo)")]
    UnsupportedFormat { path: PathBuf },
}
