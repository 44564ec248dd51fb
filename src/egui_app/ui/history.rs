use eframe::egui::{self, Frame, Margin, RichText};

use super::TruthLensApp;
use super::style;
use crate::egui_app::view_model::VerdictTone;
use crate::service::Verdict;

impl TruthLensApp {
    pub(super) fn render_history_page(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.heading(RichText::new("Session history").color(palette.text_primary));
        ui.label(
            RichText::new("Verdicts from this session. Nothing here is saved between launches.")
                .color(palette.text_muted),
        );
        ui.add_space(10.0);

        if self.controller.ui.history.is_empty() {
            ui.label(RichText::new("No predictions yet this session.").color(palette.text_muted));
            return;
        }

        let entries = self.controller.ui.history.entries().to_vec();
        for entry in &entries {
            let tone = match entry.label {
                Verdict::Real => VerdictTone::Real,
                Verdict::Fake => VerdictTone::Fake,
            };
            Frame::new()
                .fill(palette.bg_secondary)
                .stroke(style::card_stroke())
                .inner_margin(Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(entry.label.as_str())
                                .strong()
                                .color(style::verdict_color(tone)),
                        );
                        ui.add_space(8.0);
                        ui.label(RichText::new(&entry.headline).color(palette.text_primary));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(&entry.confidence).color(palette.text_muted));
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }
}
