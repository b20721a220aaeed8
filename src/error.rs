//! Error types for tv-placeholder.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that end a generation run.
#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// An I/O error occurred while writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The canvas could not be encoded as PNG.
    #[error("PNG encoding error: {0}")]
    Encode(String),
}

/// Reasons a named font could not be loaded.
///
/// These never end a run; font selection logs them and falls back to the
/// built-in font.
#[derive(Debug, Error)]
pub enum FontError {
    /// No file matching the font name was found.
    #[error("font '{0}' not found")]
    NotFound(String),

    /// The font file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the font file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a usable TrueType/OpenType font.
    #[error("invalid font data in {path}: {source}")]
    Invalid {
        /// Path of the font file.
        path: PathBuf,
        /// Parser error from `ab_glyph`.
        source: ab_glyph::InvalidFont,
    },
}
