mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::RustyFalconApp;
use eframe::egui;

/// Fixed relative path of the launch records file, read once at startup.
/// Run `cargo run --bin generate_sample` to produce it.
const DATA_PATH: &str = "data/spacex_launch_dash.csv";

fn main() -> Result<()> {
    env_logger::init();

    // Load before opening the window: a bad dataset must not bring the UI up.
    let dataset = data::loader::load_csv(Path::new(DATA_PATH))
        .with_context(|| format!("loading launch records from {DATA_PATH}"))?;
    log::info!(
        "Loaded {} launch records from {} sites, payload {:.0}..{:.0} kg",
        dataset.len(),
        dataset.sites.len(),
        dataset.payload_bounds.min,
        dataset.payload_bounds.max,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Falcon – Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(RustyFalconApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
