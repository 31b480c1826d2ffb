//! Image aspect ratio expansion library.
//!
//! Expands a raster image to a target aspect ratio by centering it
//! horizontally on a solid-color canvas. The height never changes;
//! only the side margins are filled.

pub mod canvas;
pub mod color;
pub mod file;
pub mod options;

// Re-exports for convenience
pub use canvas::{centering_offset, expand, expanded_width};
pub use color::PaddingColor;
pub use file::{derive_output_path, expand_file};
pub use options::ExpandOptions;

use std::path::PathBuf;

/// Default target aspect ratio (width:height).
pub const DEFAULT_TARGET_RATIO: f64 = 1.91;

/// Default declared source aspect ratio (width:height).
///
/// Recorded for interface symmetry; the computation never consults it.
pub const DEFAULT_SOURCE_RATIO: f64 = 16.0;

/// Errors that can occur during image expansion.
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error("Invalid target ratio {0}: ratio must be positive")]
    InvalidTargetRatio(f64),

    #[error("Failed to open image {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Result type alias for expansion operations.
pub type Result<T> = std::result::Result<T, ExpandError>;
