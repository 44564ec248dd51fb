use eframe::egui::{self, RichText};

use super::TruthLensApp;
use super::style;
use crate::app_dirs;

impl TruthLensApp {
    pub(super) fn render_about_page(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.heading(RichText::new("About TruthLens").color(palette.text_primary));
        ui.label(
            RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                .color(palette.text_muted),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "TruthLens submits headlines to a classification service and shows \
                 whether they read REAL or FAKE, with a confidence estimate. \
                 Verdicts can be flagged as accurate or wrong to help improve the model.",
            )
            .color(palette.text_primary),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("Service: {}", self.controller.server()))
                .color(palette.text_muted),
        );

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Open config folder").clicked() {
                open_app_dir(app_dirs::app_root_dir());
            }
            if ui.button("Open logs folder").clicked() {
                open_app_dir(app_dirs::logs_dir());
            }
        });
    }
}

fn open_app_dir(dir: Result<std::path::PathBuf, app_dirs::AppDirError>) {
    match dir {
        Ok(path) => {
            if let Err(err) = open::that(&path) {
                tracing::warn!("Failed to open {}: {err}", path.display());
            }
        }
        Err(err) => tracing::warn!("Failed to resolve application folder: {err}"),
    }
}
