use std::path::{Path, PathBuf};

use thiserror::Error;

use super::map::DielectricMap;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Errors raised while turning an image file into a [`DielectricMap`].
#[derive(Error, Debug)]
pub enum MapError {
    /// The path could not be opened at all.
    #[error("cannot open {}", path.display())]
    Open { path: PathBuf, source: std::io::Error },

    /// The file opened but its bytes are not a decodable image.
    #[error("cannot decode {} as an image", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Load an image file and convert it to a dielectric map.
///
/// Any format the `image` crate can decode is accepted; pixels are converted
/// to 8-bit grayscale before the dielectric transform, so color input works
/// too. Fails with [`MapError`] when the path cannot be opened or the bytes
/// cannot be decoded. There is no partial result; the program cannot run
/// without this ground truth.
pub fn load_map(path: &Path) -> Result<DielectricMap, MapError> {
    let decoded = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(source) => MapError::Open {
            path: path.to_path_buf(),
            source,
        },
        other => MapError::Decode {
            path: path.to_path_buf(),
            source: other,
        },
    })?;

    let raster = decoded.into_luma8();
    Ok(DielectricMap::from_luma(&raster))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn loads_grayscale_png() {
        let path = temp_path("gpr_scope_loader_gray.png");
        let raster = image::GrayImage::from_raw(2, 2, vec![0, 255, 128, 64]).unwrap();
        raster.save(&path).expect("write test png");

        let map = load_map(&path).expect("load test png");
        assert_eq!((map.width(), map.height()), (2, 2));
        assert_eq!(map.value(0, 0), 1.0);
        assert_eq!(map.value(0, 1), 10.0);
        assert!((map.value(1, 0) - (1.0 + 128.0 / 255.0 * 9.0)).abs() < 1e-12);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn loads_color_png_through_luma_conversion() {
        let path = temp_path("gpr_scope_loader_rgb.png");
        let raster = image::RgbImage::from_fn(3, 2, |x, y| {
            image::Rgb([(x * 80) as u8, (y * 120) as u8, 200])
        });
        raster.save(&path).expect("write test png");

        let map = load_map(&path).expect("load test png");
        assert_eq!((map.width(), map.height()), (3, 2));
        for row in 0..map.height() {
            for col in 0..map.width() {
                let d = map.value(row, col);
                assert!((1.0..=10.0).contains(&d));
            }
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_path_reports_open_error() {
        let path = temp_path("gpr_scope_loader_does_not_exist.png");
        let err = load_map(&path).unwrap_err();
        assert!(matches!(err, MapError::Open { .. }), "got {err:?}");
    }

    #[test]
    fn non_image_bytes_report_decode_error() {
        let path = temp_path("gpr_scope_loader_garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_map(&path).unwrap_err();
        assert!(matches!(err, MapError::Decode { .. }), "got {err:?}");

        std::fs::remove_file(&path).ok();
    }
}
