use eframe::egui::{self, Color32, Stroke, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::data::map::DielectricMap;
use crate::data::trace::sample_column;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – dielectric map and radar trace, side by side
// ---------------------------------------------------------------------------

/// Render the sweep views in the central panel.
pub fn sweep_views(ui: &mut Ui, state: &mut AppState) {
    if state.map.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a grayscale image to start sweeping  (File → Open…)");
        });
        return;
    }

    refresh_map_texture(ui, state);

    let Some(map) = &state.map else { return };
    let Some(texture) = &state.map_texture else {
        return;
    };
    let column = state.sweep.column() % map.width();
    let tex_id = texture.id();

    ui.columns(2, |columns| {
        map_view(&mut columns[0], map, tex_id, column);
        trace_view(&mut columns[1], map, column);
    });
}

// ---------------------------------------------------------------------------
// Left column: the colormapped map with the antenna marker
// ---------------------------------------------------------------------------

fn map_view(ui: &mut Ui, map: &DielectricMap, tex_id: egui::TextureId, column: usize) {
    ui.heading("Ground Truth Dielectric Map");
    ui.colored_label(Color32::RED, format!("Antenna @ column {column}"));

    let size = ui.available_size();
    let response = ui.add(egui::Image::new((tex_id, size)));

    // Vertical marker at the antenna column, pixel centers at col + 0.5.
    let rect = response.rect;
    let x = rect.left() + (column as f32 + 0.5) / map.width() as f32 * rect.width();
    ui.painter().line_segment(
        [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
        Stroke::new(2.0, Color32::RED),
    );
}

// ---------------------------------------------------------------------------
// Right column: signal intensity vs. depth for the antenna column
// ---------------------------------------------------------------------------

fn trace_view(ui: &mut Ui, map: &DielectricMap, column: usize) {
    ui.heading("Simulated Radar Signal");

    let signal = match sample_column(map, column) {
        Ok(signal) => signal,
        Err(e) => {
            ui.colored_label(Color32::YELLOW, format!("No trace: {e}"));
            return;
        }
    };

    // Depth grows downward: plot it negated so the surface sits on top.
    let points: PlotPoints = signal
        .iter()
        .enumerate()
        .map(|(depth, &v)| [v, -(depth as f64)])
        .collect();

    Plot::new("signal_trace")
        .legend(Legend::default())
        .x_axis_label("Signal Intensity")
        .y_axis_label("Depth")
        .include_x(0.0)
        .include_x(1.05)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points)
                .name(format!("column {column}"))
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);
        });
}

// ---------------------------------------------------------------------------
// Texture cache
// ---------------------------------------------------------------------------

/// Re-rasterize the map into the cached texture when it is stale.
fn refresh_map_texture(ui: &Ui, state: &mut AppState) {
    if !state.texture_dirty && state.map_texture.is_some() {
        return;
    }
    let Some(map) = &state.map else { return };

    let img = rasterize_map(map, state.color_map);
    match &mut state.map_texture {
        Some(texture) => texture.set(img, egui::TextureOptions::NEAREST),
        None => {
            state.map_texture = Some(ui.ctx().load_texture(
                "dielectric_map",
                img,
                egui::TextureOptions::NEAREST,
            ))
        }
    }

    state.texture_dirty = false;
}

/// Push every cell through the colormap into an RGBA image.
fn rasterize_map(map: &DielectricMap, color_map: ColorMap) -> egui::ColorImage {
    let (w, h) = (map.width(), map.height());
    let mut rgba = Vec::with_capacity(w * h * 4);
    for row in 0..h {
        for col in 0..w {
            let c = color_map.color_at(map.normalized(row, col));
            rgba.extend_from_slice(&[c.r(), c.g(), c.b(), 255]);
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba)
}
