pub mod alerts;
pub mod app;
pub mod autocomplete;

use crate::config::AppConfig;
use crate::gui::alerts::AlertLevel;

/// Entry point: launch the native GUI window
pub fn run(config: AppConfig, startup_notices: Vec<(AlertLevel, String)>) -> crate::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("RosterBox — Roster name lookup")
            .with_inner_size([480.0, 440.0])
            .with_min_inner_size([360.0, 280.0]),
        ..Default::default()
    };

    eframe::run_native(
        "RosterBox",
        native_options,
        Box::new(move |cc| {
            let app = app::RosterApp::new(cc, config, startup_notices)?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| crate::RosterError::Gui(format!("GUI error: {}", e)))
}
