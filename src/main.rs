mod app;
mod color;
mod data;
mod state;
mod sweep;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use app::GprScopeApp;
use data::map::DielectricMap;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // An image path on the command line is loaded before the window opens.
    // Without ground truth there is nothing to sweep, so a bad path is fatal.
    let initial = std::env::args().nth(1).map(PathBuf::from).map(|path| {
        match load_initial_map(&path) {
            Ok(map) => (map, path),
            Err(e) => {
                log::error!("{e:#}");
                std::process::exit(1);
            }
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GPR Scope – Sweep Visualizer",
        options,
        Box::new(move |_cc| {
            let mut app = GprScopeApp::default();
            if let Some((map, path)) = initial {
                app.state.set_map(map, path);
            }
            Ok(Box::new(app))
        }),
    )
}

fn load_initial_map(path: &Path) -> Result<DielectricMap> {
    let map = data::loader::load_map(path).context("cannot start without a dielectric map")?;
    log::info!(
        "Loaded {} ({}×{} px)",
        path.display(),
        map.width(),
        map.height()
    );
    Ok(map)
}
