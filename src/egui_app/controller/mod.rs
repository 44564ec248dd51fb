//! Event handling and state transitions for the TruthLens UI.
//!
//! The controller owns everything the renderer draws plus the active
//! prediction identifier and the background-job channel. The renderer calls
//! the handlers here and never mutates state itself, so every transition in
//! this module is testable without a UI context.

mod feedback;
mod jobs;
mod menu;
mod predictions;
#[cfg(test)]
mod tests;

use std::time::Instant;

use url::Url;

use crate::egui_app::state::{StatusTone, UiState};
use crate::service::PredictionId;

use jobs::{ControllerJobs, JobMessage};

/// Maintains UI state and bridges the service client to the egui renderer.
pub struct Controller {
    /// State consumed by the renderer.
    pub ui: UiState,
    server: Url,
    active_prediction: Option<PredictionId>,
    jobs: ControllerJobs,
}

impl Controller {
    /// Create a controller talking to the service at `server`.
    pub fn new(server: Url) -> Self {
        Self {
            ui: UiState::default(),
            server,
            active_prediction: None,
            jobs: ControllerJobs::new(),
        }
    }

    /// Base URL of the classification service.
    pub fn server(&self) -> &Url {
        &self.server
    }

    /// Identifier currently eligible for feedback submission, if any.
    pub fn active_prediction(&self) -> Option<PredictionId> {
        self.active_prediction
    }

    /// Drain finished background jobs and apply their results.
    ///
    /// Results are applied in arrival order; when submissions overlap, the
    /// last-resolved response wins.
    pub fn poll_background_jobs(&mut self) {
        loop {
            match self.jobs.try_recv_message() {
                Ok(JobMessage::PredictionFinished(outcome)) => {
                    self.apply_prediction_outcome(outcome);
                }
                Ok(JobMessage::FeedbackFinished(outcome)) => {
                    self.apply_feedback_outcome(outcome);
                }
                Err(_) => break,
            }
        }
    }

    /// Advance every timer-driven piece of state.
    pub fn tick(&mut self, now: Instant) {
        self.ui.notifications.tick(now);
        self.ui.verdict.tick(now);
        self.ui.menu.tick(now);
    }

    /// True while anything is animating or waiting on a deadline.
    pub fn wants_animation_frames(&self, now: Instant) -> bool {
        !self.ui.notifications.is_empty()
            || self.ui.menu.close_pending()
            || self.ui.verdict.pulse_progress(now).is_some()
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }
}
