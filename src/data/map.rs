use image::GrayImage;

// ---------------------------------------------------------------------------
// DielectricMap – the ground-truth grid
// ---------------------------------------------------------------------------

/// Dielectric constant assigned to intensity 0 (free space).
pub const DIELECTRIC_MIN: f64 = 1.0;
/// Dielectric constant assigned to intensity 255 (dense medium).
pub const DIELECTRIC_MAX: f64 = 10.0;

/// A per-pixel dielectric-constant grid derived from a grayscale raster.
///
/// Values lie in `[DIELECTRIC_MIN, DIELECTRIC_MAX]` and are stored row-major
/// with the origin at the top-left: the row index is depth, the column index
/// is the horizontal scan position. The grid is never mutated after
/// construction, and building it twice from the same raster yields
/// bit-identical cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DielectricMap {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

/// Map an 8-bit intensity sample to a dielectric constant.
///
/// The transform is affine: `d = 1.0 + (v / 255.0) * 9.0`, so intensity 0
/// becomes exactly 1.0 and intensity 255 exactly 10.0.
pub fn intensity_to_dielectric(v: u8) -> f64 {
    DIELECTRIC_MIN + (v as f64 / 255.0) * (DIELECTRIC_MAX - DIELECTRIC_MIN)
}

impl DielectricMap {
    /// Convert a decoded grayscale raster into a dielectric map of the same
    /// shape, applying [`intensity_to_dielectric`] to every sample.
    pub fn from_luma(image: &GrayImage) -> Self {
        let cells = image
            .as_raw()
            .iter()
            .map(|&v| intensity_to_dielectric(v))
            .collect();

        Self::from_cells(image.width() as usize, image.height() as usize, cells)
    }

    /// Build a map directly from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<f64>) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "cell count must match width * height"
        );
        DielectricMap {
            width,
            height,
            cells,
        }
    }

    /// Number of columns (horizontal scan positions).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (depth samples per column).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Dielectric constant at (row, col); row 0 is the surface.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.width + col]
    }

    /// Position of the cell's value within the dielectric range, in `[0, 1]`.
    /// Used for colormap lookup when rendering.
    pub fn normalized(&self, row: usize, col: usize) -> f64 {
        (self.value(row, col) - DIELECTRIC_MIN) / (DIELECTRIC_MAX - DIELECTRIC_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster_2x2() -> GrayImage {
        GrayImage::from_raw(2, 2, vec![0, 255, 128, 64]).unwrap()
    }

    #[test]
    fn intensity_endpoints_map_exactly() {
        assert_eq!(intensity_to_dielectric(0), 1.0);
        assert_eq!(intensity_to_dielectric(255), 10.0);
    }

    #[test]
    fn all_intensities_stay_in_dielectric_range() {
        for v in 0..=255u8 {
            let d = intensity_to_dielectric(v);
            assert!(
                (DIELECTRIC_MIN..=DIELECTRIC_MAX).contains(&d),
                "intensity {v} mapped to {d}"
            );
        }
    }

    #[test]
    fn from_luma_preserves_shape_and_transform() {
        let map = DielectricMap::from_luma(&raster_2x2());
        assert_eq!(map.width(), 2);
        assert_eq!(map.height(), 2);

        assert_eq!(map.value(0, 0), 1.0);
        assert_eq!(map.value(0, 1), 10.0);
        assert!((map.value(1, 0) - (1.0 + 128.0 / 255.0 * 9.0)).abs() < 1e-12);
        assert!((map.value(1, 1) - (1.0 + 64.0 / 255.0 * 9.0)).abs() < 1e-12);
    }

    #[test]
    fn conversion_is_deterministic() {
        let raster = raster_2x2();
        let a = DielectricMap::from_luma(&raster);
        let b = DielectricMap::from_luma(&raster);
        assert_eq!(a, b);
    }

    #[test]
    fn normalized_spans_unit_interval() {
        let map = DielectricMap::from_luma(&raster_2x2());
        assert_eq!(map.normalized(0, 0), 0.0);
        assert_eq!(map.normalized(0, 1), 1.0);
        assert!(map.normalized(1, 0) > 0.0 && map.normalized(1, 0) < 1.0);
    }

    #[test]
    #[should_panic(expected = "cell count")]
    fn from_cells_rejects_mismatched_shape() {
        DielectricMap::from_cells(3, 2, vec![1.0; 5]);
    }
}
