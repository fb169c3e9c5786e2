mod config;
mod errors;
mod export;
mod form;
mod models;
mod state;
mod templates;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::{PdfOptions, WkhtmltopdfConverter};
use crate::state::AppState;
use crate::ui::StudioApp;

fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Studio v{}", env!("CARGO_PKG_VERSION"));

    // Runtime for export tasks; the UI itself stays on the main thread.
    let runtime = tokio::runtime::Runtime::new()?;

    let converter = Arc::new(WkhtmltopdfConverter::new(config.converter_bin.clone()));
    info!("PDF converter: {}", config.converter_bin);

    let state = AppState {
        config,
        converter,
        pdf_options: PdfOptions::default(),
        runtime: runtime.handle().clone(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Resume Studio")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Studio",
        options,
        Box::new(move |_cc| Ok(Box::new(StudioApp::new(state)) as Box<dyn eframe::App>)),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))?;

    Ok(())
}
