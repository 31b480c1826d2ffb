//! Expansion configuration options.

use crate::color::PaddingColor;
use crate::{DEFAULT_SOURCE_RATIO, DEFAULT_TARGET_RATIO};

/// Configuration for a single expansion.
#[derive(Debug, Clone)]
pub struct ExpandOptions {
    /// Target aspect ratio (width:height) of the output canvas.
    pub target_ratio: f64,

    /// Color used for the padded side margins.
    pub padding_color: PaddingColor,

    /// Declared aspect ratio (width:height) of the source image.
    ///
    /// Recorded for interface symmetry with the target ratio; the
    /// computation derives everything from the actual pixel dimensions
    /// and never reads this.
    pub source_ratio: f64,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET_RATIO,
            padding_color: PaddingColor::Black,
            source_ratio: DEFAULT_SOURCE_RATIO,
        }
    }
}

impl ExpandOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the target aspect ratio.
    pub fn with_target_ratio(mut self, ratio: f64) -> Self {
        self.target_ratio = ratio;
        self
    }

    /// Builder: set the padding color.
    pub fn with_padding_color(mut self, color: PaddingColor) -> Self {
        self.padding_color = color;
        self
    }

    /// Builder: set the declared source aspect ratio.
    pub fn with_source_ratio(mut self, ratio: f64) -> Self {
        self.source_ratio = ratio;
        self
    }
}
