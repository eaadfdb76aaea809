use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GprScopeApp {
    pub state: AppState,
}

impl Default for GprScopeApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for GprScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance the antenna before drawing so both views agree on the column.
        if let Some(width) = self.state.map.as_ref().map(|m| m.width()) {
            self.state.sweep.tick(width);
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: sweep controls ----
        egui::SidePanel::left("sweep_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: map + trace ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sweep_views(ui, &mut self.state);
        });

        // Keep animating without waiting for input events.
        if self.state.sweep.is_playing() {
            ctx.request_repaint();
        }
    }
}
