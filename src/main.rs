mod app;
mod color;
mod data;
mod export;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::DashboardApp;
use data::loader::{self, DEFAULT_DATASET};
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    // Load the default dataset if it sits in the working directory. A file
    // that exists but fails to parse aborts startup; an absent file starts
    // the app empty with File → Open available.
    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_DATASET);
    if default_path.exists() {
        let dataset = loader::load_csv(default_path)
            .with_context(|| format!("loading {DEFAULT_DATASET}"))?;
        log::info!("Loaded {} records from {DEFAULT_DATASET}", dataset.len());
        state.set_dataset(dataset);
    } else {
        log::info!("{DEFAULT_DATASET} not found, starting without a dataset");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Asylum Seekers Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))
}
