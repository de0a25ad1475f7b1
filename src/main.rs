mod app;
mod data;
mod params;
mod state;
mod ui;

use std::path::PathBuf;

use app::CofScreenerApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();

    // Optional CSV path on the command line; a broken file here is fatal,
    // unlike failures from the in-app Open dialog.
    if let Some(arg) = std::env::args().nth(1) {
        let path = PathBuf::from(arg);
        match data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} candidates from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "COFs for Photocatalysis",
        options,
        Box::new(|_cc| Ok(Box::new(CofScreenerApp::new(state)))),
    )
}
