//! botpanel - an assistant chat panel built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and the tick-driven chat engine
//! - Backend thread: runs a Tokio runtime for webhook and image traffic
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use botpanel::app::BotPanelApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 680.0])
            .with_min_inner_size([380.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "botpanel",
        options,
        Box::new(|cc| Ok(Box::new(BotPanelApp::new(cc)))),
    )
}
