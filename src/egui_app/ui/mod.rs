//! egui renderer for the TruthLens client.

mod about;
mod analyze;
mod history;
mod nav_menu;
mod notifications;
mod style;
mod top_bar;

use std::time::{Duration, Instant};

use eframe::egui;

use crate::egui_app::controller::Controller;
use crate::egui_app::state::{Page, VerdictPhase};
use crate::settings::Settings;

/// Smallest window the layout stays usable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(420.0, 480.0);

/// Renders the egui UI using the shared controller state.
pub struct TruthLensApp {
    controller: Controller,
    visuals_set: bool,
}

impl TruthLensApp {
    /// Create the app from persisted settings.
    pub fn new(settings: &Settings) -> Result<Self, String> {
        let server = settings
            .server_url()
            .map_err(|err| format!("Failed to resolve server URL: {err}"))?;
        Ok(Self {
            controller: Controller::new(server),
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_escape(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.handle_escape();
        }
    }

    fn observe_viewport(&mut self, ctx: &egui::Context) {
        let width = ctx.viewport_rect().width();
        self.controller.observe_viewport_width(width);
    }

    fn render_content(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(palette.bg_primary)
                    .inner_margin(egui::Margin::same(18)),
            )
            .show(ctx, |ui| {
                // Scroll lock: while the menu covers the page the content
                // stays put, so the scroll container is simply not offered.
                if self.controller.ui.menu.scroll_lock {
                    self.render_page(ui);
                } else {
                    egui::ScrollArea::vertical()
                        .id_salt("page_scroll")
                        .show(ui, |ui| self.render_page(ui));
                }
            });
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        match self.controller.ui.menu.page {
            Page::Analyze => self.render_analyze_page(ui),
            Page::History => self.render_history_page(ui),
            Page::About => self.render_about_page(ui),
        }
    }
}

impl eframe::App for TruthLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        let now = Instant::now();
        self.controller.poll_background_jobs();
        self.controller.tick(now);
        self.handle_escape(ctx);
        self.observe_viewport(ctx);

        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_content(ctx);
        self.render_nav_menu(ctx, now);
        self.render_notifications(ctx, now);

        // Notification clocks and the delayed menu close advance without any
        // input; background jobs report over a channel that is only drained
        // on repaint. Keep frames coming at a pace matched to what is live.
        let delay = if self.controller.wants_animation_frames(now)
            || self.controller.ui.verdict.phase == VerdictPhase::Loading
        {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        ctx.request_repaint_after(delay);
    }
}
