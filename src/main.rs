use anyhow::Result;
use eframe::egui;
use tracing::info;

use ink_pad::app::PadApp;
use ink_pad::{logging, settings};

fn main() -> Result<()> {
    let settings = settings::load_or_init()?;
    logging::init(settings.debug_logging);
    info!(version = env!("CARGO_PKG_VERSION"), "starting ink pad");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([360.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Ink Pad",
        native_options,
        Box::new(move |_cc| Box::new(PadApp::new(settings))),
    )
    .map_err(|err| anyhow::anyhow!("event loop failed: {err}"))
}
