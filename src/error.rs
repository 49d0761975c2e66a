//! Error types for the background generator

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating background assets
#[derive(Error, Debug)]
pub enum Error {
    /// No theme color configuration document was found.
    ///
    /// Fatal to the gradient batch: without declared palettes there is
    /// nothing to interpolate.
    #[error("no theme color configuration found under {0}")]
    ConfigMissing(PathBuf),

    /// The configuration document exists but could not be parsed
    #[error("malformed theme configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// A palette entry is not a valid 6-digit hex color
    #[error("malformed hex color {0:?}")]
    ColorFormat(String),

    /// A theme/mode declares an empty color list
    #[error("theme {theme:?} declares no {mode} colors")]
    EmptyPalette { theme: String, mode: &'static str },

    /// Failed to write an output file or create its directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid generator configuration (CLI arguments, sizes, style names)
    #[error("invalid configuration: {0}")]
    Config(String),
}
