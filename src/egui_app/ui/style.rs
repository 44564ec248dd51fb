use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::{NotificationCategory, StatusTone};
use crate::egui_app::view_model::VerdictTone;

/// Fixed color scheme shared across panels.
#[allow(dead_code)]
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub danger: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 15, 18),
        bg_secondary: Color32::from_rgb(24, 26, 31),
        bg_tertiary: Color32::from_rgb(36, 39, 46),
        panel_outline: Color32::from_rgb(48, 52, 60),
        text_primary: Color32::from_rgb(210, 214, 220),
        text_muted: Color32::from_rgb(142, 148, 158),
        accent: Color32::from_rgb(120, 170, 255),
        success: Color32::from_rgb(96, 186, 130),
        danger: Color32::from_rgb(214, 84, 76),
        warning: Color32::from_rgb(208, 150, 62),
    }
}

/// Apply the fixed scheme on top of the dark visuals.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_flat(&mut visuals.widgets.inactive, palette);
    set_flat(&mut visuals.widgets.hovered, palette);
    set_flat(&mut visuals.widgets.active, palette);
    set_flat(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_flat(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
}

/// Outline used around card frames.
pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Color for the verdict icon and heading.
pub fn verdict_color(tone: VerdictTone) -> Color32 {
    let palette = palette();
    match tone {
        VerdictTone::Real => palette.success,
        VerdictTone::Fake => palette.danger,
        VerdictTone::Error => palette.warning,
        VerdictTone::Neutral => palette.text_muted,
    }
}

/// Fill color for a notification toast.
pub fn notification_fill(category: NotificationCategory) -> Color32 {
    match category {
        NotificationCategory::Success => Color32::from_rgb(36, 92, 60),
        NotificationCategory::Error => Color32::from_rgb(118, 44, 40),
    }
}

/// Color for the footer status badge.
pub fn status_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.bg_tertiary,
        StatusTone::Busy => palette.accent,
        StatusTone::Info => palette.success,
        StatusTone::Error => palette.danger,
    }
}
