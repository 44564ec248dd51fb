use std::time::Instant;

use eframe::egui::{self, Align2, Frame, Id, Margin, Order, RichText};

use super::TruthLensApp;
use super::style;
use crate::egui_app::view_model;

const TOAST_WIDTH: f32 = 300.0;

impl TruthLensApp {
    /// Render notification toasts stacked below the top bar, newest last.
    ///
    /// Clicking a toast dismisses it early through the same exit phase the
    /// auto-expiry uses.
    pub(super) fn render_notifications(&mut self, ctx: &egui::Context, now: Instant) {
        if self.controller.ui.notifications.is_empty() {
            return;
        }
        let palette = style::palette();
        let views =
            view_model::notification_views(self.controller.ui.notifications.items(), now);
        let mut clicked = None;

        egui::Area::new(Id::new("notification_toasts"))
            .order(Order::Tooltip)
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 56.0))
            .show(ctx, |ui| {
                for (index, view) in views.iter().enumerate() {
                    ui.scope(|ui| {
                        ui.set_opacity(view.fade);
                        let response = Frame::new()
                            .fill(style::notification_fill(view.category))
                            .stroke(style::card_stroke())
                            .inner_margin(Margin::symmetric(12, 8))
                            .show(ui, |ui| {
                                ui.set_width(TOAST_WIDTH);
                                ui.label(
                                    RichText::new(&view.text).color(palette.text_primary),
                                );
                            })
                            .response;
                        if response.interact(egui::Sense::click()).clicked() {
                            clicked = Some(index);
                        }
                    });
                    ui.add_space(6.0);
                }
            });

        if let Some(index) = clicked {
            self.controller.ui.notifications.dismiss(index, now);
        }
    }
}
