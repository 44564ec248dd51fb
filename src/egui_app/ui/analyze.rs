use std::time::Instant;

use eframe::egui::{self, Frame, Margin, RichText};

use super::TruthLensApp;
use super::style;
use crate::egui_app::view_model::{self, VerdictTone};
use crate::service::FeedbackChoice;

impl TruthLensApp {
    pub(super) fn render_analyze_page(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.heading(RichText::new("Analyze a headline").color(palette.text_primary));
        ui.label(
            RichText::new("Paste a news headline to check whether it reads REAL or FAKE.")
                .color(palette.text_muted),
        );
        ui.add_space(10.0);

        let edit = ui.add(
            egui::TextEdit::singleline(&mut self.controller.ui.headline_input)
                .hint_text("Enter a news headline")
                .desired_width(f32::INFINITY),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(6.0);
        if ui.button("Analyze").clicked() || submitted {
            self.controller.submit_headline();
        }

        ui.add_space(14.0);
        self.render_verdict_card(ui);
        if self.controller.ui.feedback.visible {
            ui.add_space(10.0);
            self.render_feedback_prompt(ui);
        }
    }

    fn render_verdict_card(&mut self, ui: &mut egui::Ui) {
        let Some(view) = view_model::verdict_view(&self.controller.ui.verdict) else {
            return;
        };
        let palette = style::palette();
        let now = Instant::now();
        let scale = view_model::pulse_scale(self.controller.ui.verdict.pulse_progress(now));

        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::card_stroke())
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    if view.loading {
                        ui.add(egui::Spinner::new().size(28.0));
                    } else {
                        ui.label(
                            RichText::new(view.icon)
                                .size(30.0 * scale)
                                .color(style::verdict_color(view.tone)),
                        );
                    }
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&view.heading)
                            .size(24.0 * scale)
                            .strong()
                            .color(style::verdict_color(view.tone)),
                    );
                    ui.label(RichText::new(&view.detail).color(palette.text_muted));
                    if matches!(view.tone, VerdictTone::Real | VerdictTone::Fake) {
                        ui.add_space(6.0);
                        if ui.small_button("Copy result").clicked() {
                            ui.ctx()
                                .copy_text(format!("{} ({})", view.heading, view.detail));
                        }
                    }
                });
            });
    }

    fn render_feedback_prompt(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_tertiary)
            .stroke(style::card_stroke())
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Was this prediction accurate?").color(palette.text_primary),
                    );
                    if ui.button("Accurate").clicked() {
                        self.controller.submit_feedback(FeedbackChoice::Accurate);
                    }
                    if ui.button("Wrong").clicked() {
                        self.controller.submit_feedback(FeedbackChoice::Wrong);
                    }
                });
            });
    }
}
