use anyhow::Context;
use clap::Parser;
use eframe::egui;
use photo_filter::app::PhotoFilterApp;
use photo_filter::config::{Cli, Config};
use photo_filter::state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    let mut state = AppState::new(config);
    if let Some(path) = &cli.image {
        // A bad startup image is reported like any other failed load.
        state.open_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(state.config.window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    log::info!("Application started");
    eframe::run_native(
        "Photo Filter",
        options,
        Box::new(|_cc| Ok(Box::new(PhotoFilterApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the UI event loop")?;

    log::info!("Application quit");
    Ok(())
}
