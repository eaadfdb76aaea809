use std::path::PathBuf;

use anyhow::Result;
use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::color::ColorMap;
use crate::state::AppState;
use crate::sweep::{SweepState, MAX_SCAN_RATE, MIN_SCAN_RATE};

// ---------------------------------------------------------------------------
// Left side panel – sweep controls
// ---------------------------------------------------------------------------

/// Render the sweep control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sweep");
    ui.separator();

    let width = match &state.map {
        Some(map) => map.width(),
        None => {
            ui.label("No map loaded.");
            return;
        }
    };

    // ---- Playback buttons ----
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("|<").on_hover_text("Rewind").clicked() {
            state.sweep.stop();
        }

        let play_text = match state.sweep.state() {
            SweepState::Playing => "||",
            _ => ">",
        };
        let play_hover = match state.sweep.state() {
            SweepState::Playing => "Pause",
            _ => "Play",
        };
        if ui.button(play_text).on_hover_text(play_hover).clicked() {
            state.sweep.toggle_play();
        }

        if ui.button("Stop").clicked() {
            state.sweep.stop();
        }
    });

    let state_text = match state.sweep.state() {
        SweepState::Stopped => "Stopped",
        SweepState::Playing => "Playing",
        SweepState::Paused => "Paused",
    };
    let state_color = match state.sweep.state() {
        SweepState::Stopped => Color32::GRAY,
        SweepState::Playing => Color32::GREEN,
        SweepState::Paused => Color32::YELLOW,
    };
    ui.colored_label(state_color, state_text);

    ui.separator();

    // ---- Scan rate ----
    ui.strong("Scan rate");
    ui.add(
        Slider::new(&mut state.sweep.scan_rate, MIN_SCAN_RATE..=MAX_SCAN_RATE)
            .logarithmic(true)
            .suffix(" col/s"),
    );

    // ---- Antenna column scrubber ----
    ui.add_space(4.0);
    ui.strong("Antenna column");
    let mut column = state.sweep.column();
    if ui
        .add(Slider::new(&mut column, 0..=width.saturating_sub(1)))
        .changed()
    {
        state.sweep.seek(column, width);
    }
    ui.label(format!(
        "{} / {} columns  ({:.0}%)",
        state.sweep.column() + 1,
        width,
        state.sweep.progress(width) * 100.0
    ));

    ui.checkbox(&mut state.sweep.loop_enabled, "Loop sweep");

    ui.separator();

    // ---- Colormap ----
    ui.strong("Colormap");
    let mut selected = state.color_map;
    egui::ComboBox::from_id_salt("color_map")
        .selected_text(selected.label())
        .show_ui(ui, |ui: &mut Ui| {
            for color_map in ColorMap::ALL {
                ui.selectable_value(&mut selected, color_map, color_map.label());
            }
        });
    state.set_color_map(selected);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_image_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(map), Some(path)) = (&state.map, &state.map_path) {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(format!("{name}: {}×{} px", map.width(), map.height()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_image_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open subsurface image")
        .add_filter("Images", &["png", "jpg", "jpeg"])
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = load_into_state(state, path) {
            log::error!("Failed to load image: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

fn load_into_state(state: &mut AppState, path: PathBuf) -> Result<()> {
    let map = crate::data::loader::load_map(&path)?;
    log::info!(
        "Loaded {} ({}×{} px)",
        path.display(),
        map.width(),
        map.height()
    );
    state.set_map(map, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::map::DielectricMap;

    fn tiny_map() -> DielectricMap {
        DielectricMap::from_cells(2, 1, vec![1.0, 10.0])
    }

    #[test]
    fn failed_dialog_load_keeps_previous_map() {
        let mut state = AppState::default();
        state.set_map(tiny_map(), PathBuf::from("previous.png"));
        state.texture_dirty = false;

        let missing = std::env::temp_dir().join("gpr_scope_panels_does_not_exist.png");
        assert!(load_into_state(&mut state, missing).is_err());

        assert_eq!(state.map, Some(tiny_map()));
        assert_eq!(
            state.map_path.as_deref(),
            Some(std::path::Path::new("previous.png"))
        );
        assert!(!state.texture_dirty);
    }
}
