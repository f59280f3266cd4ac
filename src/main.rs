// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod file;
mod map;
mod state;
mod ui;
mod utils;

use app::ProfileMapperApp;
use file::FileManager;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = FileManager::new().load_settings();
    info!(load_delay_ms = settings.load_delay_ms, "starting profile mapper");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_title("Profile Mapper"),
        ..Default::default()
    };

    eframe::run_native(
        "Profile Mapper",
        options,
        Box::new(|_cc| Box::new(ProfileMapperApp::new(settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
