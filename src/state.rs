use std::path::PathBuf;

use eframe::egui::TextureHandle;

use crate::color::ColorMap;
use crate::data::map::DielectricMap;
use crate::sweep::SweepController;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dielectric map (None until the user loads an image).
    pub map: Option<DielectricMap>,

    /// Source path of the loaded map, shown in the top bar.
    pub map_path: Option<PathBuf>,

    /// Antenna position and playback clock.
    pub sweep: SweepController,

    /// Active colormap for the map view.
    pub color_map: ColorMap,

    /// Cached GPU texture of the colormapped map.
    pub map_texture: Option<TextureHandle>,

    /// Set when the cached texture no longer matches the map or colormap.
    pub texture_dirty: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            map: None,
            map_path: None,
            sweep: SweepController::default(),
            color_map: ColorMap::default(),
            map_texture: None,
            texture_dirty: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a freshly loaded map: rewind the sweep, invalidate the texture.
    pub fn set_map(&mut self, map: DielectricMap, path: PathBuf) {
        self.sweep.stop();
        self.map = Some(map);
        self.map_path = Some(path);
        self.texture_dirty = true;
        self.status_message = None;
    }

    /// Switch colormap and invalidate the cached texture.
    pub fn set_color_map(&mut self, color_map: ColorMap) {
        if self.color_map != color_map {
            self.color_map = color_map;
            self.texture_dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_map() -> DielectricMap {
        DielectricMap::from_cells(2, 1, vec![1.0, 10.0])
    }

    #[test]
    fn set_map_rewinds_sweep_and_clears_status() {
        let mut state = AppState::default();
        state.sweep.seek(5, 10);
        state.status_message = Some("Error: previous failure".into());

        state.set_map(tiny_map(), PathBuf::from("demo.png"));

        assert_eq!(state.sweep.column(), 0);
        assert!(state.texture_dirty);
        assert!(state.status_message.is_none());
        assert_eq!(state.map_path.as_deref(), Some(std::path::Path::new("demo.png")));
    }

    #[test]
    fn colormap_change_marks_texture_dirty() {
        let mut state = AppState::default();
        state.set_map(tiny_map(), PathBuf::from("demo.png"));
        state.texture_dirty = false;

        state.set_color_map(ColorMap::Viridis);
        assert!(state.texture_dirty);

        state.texture_dirty = false;
        state.set_color_map(ColorMap::Viridis);
        assert!(!state.texture_dirty);
    }
}
