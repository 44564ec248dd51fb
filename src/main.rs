//! Entry point for the egui-based TruthLens client.

use eframe::egui;
use truthlens::egui_app::ui::{MIN_VIEWPORT_SIZE, TruthLensApp};
use truthlens::logging;
use truthlens::settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = settings::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Failed to load settings: {err}; using defaults");
        settings::Settings::default()
    });

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(760.0, 640.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "TruthLens",
        native_options,
        Box::new(move |_cc| match TruthLensApp::new(&settings) {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
