use std::time::Instant;

use eframe::egui::{self, Color32, Frame, Id, LayerId, Margin, Order, RichText, Stroke};

use super::TruthLensApp;
use super::style;
use crate::egui_app::state::Page;

const MENU_PAGES: [Page; 3] = [Page::Analyze, Page::History, Page::About];
const MENU_WIDTH: f32 = 220.0;

impl TruthLensApp {
    /// Render the slide-over navigation menu and its dimmed backdrop.
    ///
    /// The menu keeps rendering while a delayed link close is pending; the
    /// controller's tick retires it once the deadline passes.
    pub(super) fn render_nav_menu(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.controller.ui.menu.open {
            return;
        }

        if self.controller.ui.menu.overlay_visible && nav_backdrop_clicked(ctx) {
            self.controller.close_menu();
        }

        let palette = style::palette();
        let viewport = ctx.viewport_rect();
        egui::Area::new(Id::new("nav_menu_panel"))
            .order(Order::Tooltip)
            .fixed_pos(viewport.min)
            .show(ctx, |ui| {
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(Stroke::new(1.0, palette.panel_outline))
                    .inner_margin(Margin::same(14))
                    .show(ui, |ui| {
                        ui.set_width(MENU_WIDTH);
                        ui.set_min_height(viewport.height() - 28.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new("TruthLens")
                                    .strong()
                                    .size(16.0)
                                    .color(palette.text_primary),
                            );
                            ui.add_space(12.0);
                            for page in MENU_PAGES {
                                let selected = self.controller.ui.menu.page == page;
                                if ui
                                    .selectable_label(
                                        selected,
                                        RichText::new(page.title()).size(14.0),
                                    )
                                    .clicked()
                                {
                                    self.controller.select_page(page, now);
                                }
                                ui.add_space(4.0);
                            }
                        });
                    });
            });
    }
}

/// Paint the dimmed overlay behind the menu and report clicks on it.
fn nav_backdrop_clicked(ctx: &egui::Context) -> bool {
    let rect = ctx.viewport_rect();
    let id = Id::new("nav_menu_backdrop");
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, id.with("paint")));
    painter.rect_filled(rect, 0.0, Color32::from_rgba_premultiplied(0, 0, 0, 120));
    let response = egui::Area::new(id.with("blocker"))
        .order(Order::Foreground)
        .fixed_pos(rect.min)
        .show(ctx, |ui| ui.allocate_rect(rect, egui::Sense::click()))
        .inner;
    response.clicked()
}
