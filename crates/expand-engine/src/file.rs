//! File-to-file expansion: load, expand, resolve the output path, save.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::canvas::expand;
use crate::options::ExpandOptions;
use crate::{ExpandError, Result};

/// Suffix appended to the input file stem when no output path is given.
const OUTPUT_SUFFIX: &str = "_expanded";

/// Derive the default output path for `input`.
///
/// Appends `_expanded` to the file stem, keeping directory and extension:
/// `photos/banner.png` becomes `photos/banner_expanded.png`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Expand the image at `input` and save the result.
///
/// When `output` is `None` the destination is derived next to the input.
/// The output format is inferred from the destination extension by the
/// image codec. Returns the path the canvas was written to.
pub fn expand_file(
    input: &Path,
    output: Option<&Path>,
    options: &ExpandOptions,
) -> Result<PathBuf> {
    let img = image::open(input).map_err(|source| ExpandError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    info!(
        "Loaded {} ({}x{})",
        input.display(),
        img.width(),
        img.height()
    );

    let expanded = expand(&img, options)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input),
    };

    expanded
        .save(&output_path)
        .map_err(|source| ExpandError::Save {
            path: output_path.clone(),
            source,
        })?;
    info!("Saved expanded image to {}", output_path.display());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaddingColor;
    use image::{Rgb, RgbImage};

    #[test]
    fn derive_output_path_appends_suffix_before_extension() {
        assert_eq!(
            derive_output_path(Path::new("photo.png")),
            PathBuf::from("photo_expanded.png")
        );
        assert_eq!(
            derive_output_path(Path::new("shots/banner.jpeg")),
            PathBuf::from("shots/banner_expanded.jpeg")
        );
    }

    #[test]
    fn derive_output_path_without_extension() {
        assert_eq!(
            derive_output_path(Path::new("photo")),
            PathBuf::from("photo_expanded")
        );
    }

    fn write_test_image(path: &Path, width: u32, height: u32) {
        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x % 256) as u8, (y % 256) as u8, 200]);
        }
        img.save(path).unwrap();
    }

    #[test]
    fn expand_file_derives_output_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("strip.png");
        write_test_image(&input, 100, 100);

        let saved = expand_file(&input, None, &ExpandOptions::default()).unwrap();
        assert_eq!(saved, dir.path().join("strip_expanded.png"));

        let out = image::open(&saved).unwrap();
        assert_eq!(out.width(), 191);
        assert_eq!(out.height(), 100);
    }

    #[test]
    fn expand_file_respects_explicit_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("strip.png");
        let output = dir.path().join("wide.png");
        write_test_image(&input, 50, 100);

        let options = ExpandOptions::new()
            .with_target_ratio(2.0)
            .with_padding_color(PaddingColor::White);
        let saved = expand_file(&input, Some(&output), &options).unwrap();
        assert_eq!(saved, output);

        let out = image::open(&saved).unwrap().to_rgb8();
        assert_eq!(out.width(), 200);
        // Left margin is white, pasted region starts at x = 75
        assert_eq!(*out.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(75, 0), Rgb([0, 0, 200]));
    }

    #[test]
    fn expand_file_round_trip_preserves_source_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gradient.png");
        write_test_image(&input, 64, 32);

        let options = ExpandOptions::new().with_target_ratio(4.0);
        let saved = expand_file(&input, None, &options).unwrap();

        let src = image::open(&input).unwrap().to_rgb8();
        let out = image::open(&saved).unwrap().to_rgb8();
        assert_eq!(out.width(), 128);
        let offset = (128 - 64) / 2;
        for y in 0..32 {
            for x in 0..64 {
                assert_eq!(out.get_pixel(x + offset, y), src.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn expand_file_unreadable_input_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        let err = expand_file(&missing, None, &ExpandOptions::default()).unwrap_err();
        match err {
            ExpandError::Open { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Open error, got {other:?}"),
        }
    }

    #[test]
    fn expand_file_undecodable_input_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("not_an_image.png");
        std::fs::write(&input, b"definitely not a png").unwrap();

        let err = expand_file(&input, None, &ExpandOptions::default()).unwrap_err();
        assert!(matches!(err, ExpandError::Open { .. }));
    }
}
