// src/main.rs
use anyhow::Result;
use eframe::egui;
use std::sync::Arc;

use uxstream_auditor::app::AuditorApp;
use uxstream_auditor::client::{AnalysisBackend, HttpAnalysisClient};
use uxstream_auditor::settings::ClientSettings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ClientSettings::load()?;
    let client = HttpAnalysisClient::new(&settings)?;
    let endpoint = client.endpoint().to_string();
    log::info!("Sending videos to {}", endpoint);

    let backend: Arc<dyn AnalysisBackend> = Arc::new(client);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("UXStream Auditor")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "UXStream Auditor",
        options,
        Box::new(move |_cc| Box::new(AuditorApp::new(backend, endpoint))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
