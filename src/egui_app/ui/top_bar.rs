use eframe::egui::{self, Frame, Margin, RichText};

use super::TruthLensApp;
use super::style;

impl TruthLensApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::card_stroke())
                    .inner_margin(Margin::symmetric(10, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let toggle = ui.selectable_label(
                        self.controller.ui.menu.toggle_active,
                        RichText::new("☰").size(18.0),
                    );
                    if toggle.clicked() {
                        self.controller.toggle_menu();
                    }
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("TruthLens")
                            .strong()
                            .size(16.0)
                            .color(palette.text_primary),
                    );
                    ui.label(RichText::new("headline verification").color(palette.text_muted));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.controller.ui.menu.page.title())
                                .color(palette.text_muted),
                        );
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::card_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(badge_rect, 0.0, style::status_color(status.tone));
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }
}
