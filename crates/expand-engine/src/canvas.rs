//! Canvas allocation and centered composition.
//!
//! The canvas keeps the source height; only the width changes to reach
//! the target aspect ratio.

use image::{DynamicImage, RgbImage, RgbaImage, imageops};
use tracing::debug;

use crate::options::ExpandOptions;
use crate::{ExpandError, Result};

/// Canvas width for a given source height and target ratio.
///
/// Truncates rather than rounds, so a 100px-high image at ratio 1.91
/// yields a 191px-wide canvas.
pub fn expanded_width(height: u32, target_ratio: f64) -> u32 {
    (f64::from(height) * target_ratio) as u32
}

/// Horizontal offset that centers a `source_width` image on a
/// `canvas_width` canvas.
///
/// Uses floored division: a canvas narrower than the source yields a
/// negative offset, and the composite then crops the source edges evenly.
pub fn centering_offset(canvas_width: u32, source_width: u32) -> i64 {
    (i64::from(canvas_width) - i64::from(source_width)).div_euclid(2)
}

/// Expand `img` onto a solid-color canvas of the target aspect ratio.
///
/// The source is pasted centered with straight overwrite semantics:
/// RGBA sources keep their alpha values as-is, nothing is blended
/// against the background. Sources carrying alpha produce an RGBA
/// canvas; all other color types are normalized to RGB.
///
/// A target ratio narrower than the source's actual ratio produces a
/// canvas narrower than the source, which crops it horizontally rather
/// than padding it. Non-positive ratios are rejected.
pub fn expand(img: &DynamicImage, options: &ExpandOptions) -> Result<DynamicImage> {
    if options.target_ratio <= 0.0 {
        return Err(ExpandError::InvalidTargetRatio(options.target_ratio));
    }

    let (width, height) = (img.width(), img.height());
    let new_width = expanded_width(height, options.target_ratio);
    let x_offset = centering_offset(new_width, width);

    debug!(
        width,
        height,
        new_width,
        new_height = height,
        target_ratio = options.target_ratio,
        x_offset,
        "Expanding image to target aspect ratio"
    );

    let expanded = if img.color().has_alpha() {
        let mut canvas = RgbaImage::from_pixel(new_width, height, options.padding_color.rgba());
        imageops::replace(&mut canvas, &img.to_rgba8(), x_offset, 0);
        DynamicImage::ImageRgba8(canvas)
    } else {
        let mut canvas = RgbImage::from_pixel(new_width, height, options.padding_color.rgb());
        imageops::replace(&mut canvas, &img.to_rgb8(), x_offset, 0);
        DynamicImage::ImageRgb8(canvas)
    };

    Ok(expanded)
}
