//! Helpers to convert controller state into display-ready values.

use std::f32::consts::PI;
use std::time::Instant;

use crate::egui_app::state::{
    Notification, NotificationCategory, VerdictPanelState, VerdictPhase,
};
use crate::service::Verdict;

/// Color family for the verdict icon and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictTone {
    Real,
    Fake,
    Error,
    Neutral,
}

/// Display form of the result area.
#[derive(Clone, Debug, PartialEq)]
pub struct VerdictView {
    /// Icon glyph; empty while loading (a spinner is drawn instead).
    pub icon: &'static str,
    /// Color family for icon and heading.
    pub tone: VerdictTone,
    /// Large heading text.
    pub heading: String,
    /// Line under the heading (confidence, wait hint, or error message).
    pub detail: String,
    /// True while a request is in flight.
    pub loading: bool,
}

/// Convert the result area state into its display form.
///
/// Returns `None` while the area is hidden.
pub fn verdict_view(state: &VerdictPanelState) -> Option<VerdictView> {
    match &state.phase {
        VerdictPhase::Hidden => None,
        VerdictPhase::Loading => Some(VerdictView {
            icon: "",
            tone: VerdictTone::Neutral,
            heading: "Analyzing...".to_string(),
            detail: "Please wait while we process your request".to_string(),
            loading: true,
        }),
        VerdictPhase::Ready { label, confidence } => Some(VerdictView {
            icon: match label {
                Verdict::Real => "✔",
                Verdict::Fake => "✘",
            },
            tone: match label {
                Verdict::Real => VerdictTone::Real,
                Verdict::Fake => VerdictTone::Fake,
            },
            heading: label.as_str().to_string(),
            detail: format!("Confidence: {confidence}"),
            loading: false,
        }),
        VerdictPhase::Failed { message } => Some(VerdictView {
            icon: "⚠",
            tone: VerdictTone::Error,
            heading: "Error".to_string(),
            detail: message.clone(),
            loading: false,
        }),
    }
}

/// Scale factor for the one-shot verdict pulse.
///
/// Rises to 1.05 at the midpoint and settles back to 1.0, mirroring the
/// result card's pulse keyframes.
pub fn pulse_scale(progress: Option<f32>) -> f32 {
    match progress {
        Some(progress) => 1.0 + 0.05 * (progress.clamp(0.0, 1.0) * PI).sin(),
        None => 1.0,
    }
}

/// Display form of one notification toast.
#[derive(Clone, Debug)]
pub struct NotificationView {
    /// Message text.
    pub text: String,
    /// Visual category.
    pub category: NotificationCategory,
    /// Opacity factor; fades from 1.0 to 0.0 during the exit phase.
    pub fade: f32,
}

/// Convert live notifications into their display form, oldest first.
pub fn notification_views(items: &[Notification], now: Instant) -> Vec<NotificationView> {
    items
        .iter()
        .map(|item| NotificationView {
            text: item.text.clone(),
            category: item.category,
            fade: match item.exit_progress(now) {
                Some(progress) => 1.0 - progress,
                None => 1.0,
            },
        })
        .collect()
}
