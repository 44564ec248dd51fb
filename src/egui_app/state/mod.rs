//! Shared state types for the egui UI.

mod history;
mod menu;
mod notifications;
mod status;
mod verdict;

pub use history::*;
pub use menu::*;
pub use notifications::*;
pub use status::*;
pub use verdict::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Debug, Default)]
pub struct UiState {
    /// Current contents of the headline input field.
    pub headline_input: String,
    /// Result area contents and animation clock.
    pub verdict: VerdictPanelState,
    /// Feedback prompt shown after a successful prediction.
    pub feedback: FeedbackPromptState,
    /// Transient notification toasts.
    pub notifications: NotificationsState,
    /// Navigation menu state machine.
    pub menu: NavMenuState,
    /// Verdicts returned during this session.
    pub history: SessionHistoryState,
    /// Status line shown in the footer.
    pub status: StatusLineState,
}
