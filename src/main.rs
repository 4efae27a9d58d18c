mod app;
mod chart;
mod color;
mod config;
mod data;
mod export;
mod reactive;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::LaunchDashApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    // The dashboard cannot run without its dataset.
    let dataset = data::loader::load(&config.data)
        .inspect_err(|e| log::error!("Failed to load launch records: {e}"))
        .with_context(|| format!("loading launch records from {}", config.data))?;
    let controls = config.initial_controls(&dataset);

    if let Some(path) = &config.export {
        let bundle = export::chart_bundle(&dataset, &controls);
        return export::write_bundle(&bundle, path);
    }

    let state = AppState::new(dataset, controls);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow!("dashboard window failed: {e}"))
}
