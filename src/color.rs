use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Colormaps: normalized dielectric value → Color32
// ---------------------------------------------------------------------------

/// Colormap applied to the dielectric map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMap {
    /// Dark = low dielectric, matching a plain grayscale rendering of the
    /// source raster.
    #[default]
    Grayscale,
    Viridis,
    Thermal,
}

impl ColorMap {
    pub const ALL: [ColorMap; 3] = [ColorMap::Grayscale, ColorMap::Viridis, ColorMap::Thermal];

    /// Display name for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            ColorMap::Grayscale => "Grayscale",
            ColorMap::Viridis => "Viridis",
            ColorMap::Thermal => "Thermal",
        }
    }

    /// Look up the colour for a normalized value `t ∈ [0, 1]`.
    pub fn color_at(&self, t: f64) -> Color32 {
        let t = t.clamp(0.0, 1.0) as f32;
        match self {
            ColorMap::Grayscale => Color32::from_gray((t * 255.0) as u8),
            ColorMap::Viridis => viridis_color(t),
            ColorMap::Thermal => thermal_color(t),
        }
    }
}

/// Polynomial approximation of the viridis colormap.
fn viridis_color(t: f32) -> Color32 {
    let r = (0.267 + 0.003 * t + 0.993 * t * t - 0.263 * t * t * t).clamp(0.0, 1.0);
    let g = (0.004 + 0.874 * t - 0.523 * t * t + 0.645 * t * t * t).clamp(0.0, 1.0);
    let b = (0.329 + 0.899 * t - 2.179 * t * t + 1.952 * t * t * t).clamp(0.0, 1.0);

    Color32::from_rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Cold-to-hot ramp: hue sweeps from blue (240°) down to red (0°).
fn thermal_color(t: f32) -> Color32 {
    let hue = (1.0 - t) * 240.0;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grayscale_endpoints() {
        assert_eq!(ColorMap::Grayscale.color_at(0.0), Color32::from_gray(0));
        assert_eq!(ColorMap::Grayscale.color_at(1.0), Color32::from_gray(255));
    }

    #[test]
    fn viridis_goes_dark_to_bright() {
        let c0 = ColorMap::Viridis.color_at(0.0);
        let c1 = ColorMap::Viridis.color_at(1.0);
        assert!(c0.r() < c1.r());
        assert!(c0.g() < c1.g());
    }

    #[test]
    fn thermal_goes_blue_to_red() {
        let cold = ColorMap::Thermal.color_at(0.0);
        let hot = ColorMap::Thermal.color_at(1.0);
        assert!(cold.b() > cold.r());
        assert!(hot.r() > hot.b());
    }

    #[test]
    fn out_of_range_values_clamp() {
        for cm in ColorMap::ALL {
            assert_eq!(cm.color_at(-0.5), cm.color_at(0.0));
            assert_eq!(cm.color_at(1.5), cm.color_at(1.0));
        }
    }
}
