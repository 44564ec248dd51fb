use super::Controller;
use super::jobs::FeedbackOutcome;
use crate::egui_app::state::{NotificationCategory, StatusTone};
use crate::service::FeedbackChoice;

impl Controller {
    /// Submit the user's judgement of the active prediction.
    ///
    /// Requires an active prediction identifier; without one the action is
    /// blocked with a notification and no request is issued.
    pub fn submit_feedback(&mut self, choice: FeedbackChoice) {
        let Some(prediction_id) = self.active_prediction else {
            self.ui.notifications.push(
                NotificationCategory::Error,
                "No prediction to provide feedback for",
            );
            return;
        };

        tracing::info!(%prediction_id, choice = choice.as_str(), "Submitting feedback");
        let server = self.server.clone();
        self.jobs.begin_feedback(server, prediction_id, choice);
    }

    pub(super) fn apply_feedback_outcome(&mut self, outcome: FeedbackOutcome) {
        match outcome.result {
            Ok(()) => {
                tracing::info!(
                    prediction_id = %outcome.prediction_id,
                    choice = outcome.choice.as_str(),
                    "Feedback recorded"
                );
                self.ui.notifications.push(
                    NotificationCategory::Success,
                    "Thank you for your feedback!",
                );
                self.ui.feedback.visible = false;
                self.active_prediction = None;
                self.set_status("Feedback recorded", StatusTone::Info);
            }
            Err(err) => {
                // Identifier stays set so the user can retry.
                tracing::warn!("Feedback submission failed: {err}");
                self.ui.notifications.push(
                    NotificationCategory::Error,
                    "Failed to submit feedback. Please try again.",
                );
                self.set_status("Feedback failed", StatusTone::Error);
            }
        }
    }
}
