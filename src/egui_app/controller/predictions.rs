use std::time::Instant;

use super::Controller;
use super::jobs::PredictionOutcome;
use crate::egui_app::state::{
    HistoryEntry, NotificationCategory, StatusTone, VerdictPhase,
};

impl Controller {
    /// Submit the current headline input for classification.
    ///
    /// An empty or whitespace-only input is blocked with a validation
    /// notification and no request is issued.
    pub fn submit_headline(&mut self) {
        let headline = self.ui.headline_input.trim().to_string();
        if headline.is_empty() {
            self.ui.notifications.push(
                NotificationCategory::Error,
                "Please enter a headline to analyze",
            );
            return;
        }

        self.ui.verdict.phase = VerdictPhase::Loading;
        self.ui.feedback.visible = false;
        self.set_status("Analyzing headline...", StatusTone::Busy);
        tracing::info!(chars = headline.len(), "Submitting headline for prediction");
        let server = self.server.clone();
        self.jobs.begin_predict(server, headline);
    }

    pub(super) fn apply_prediction_outcome(&mut self, outcome: PredictionOutcome) {
        match outcome.result {
            Ok(response) => {
                tracing::info!(
                    label = response.result.as_str(),
                    confidence = %response.confidence,
                    "Prediction received"
                );
                self.ui.verdict.phase = VerdictPhase::Ready {
                    label: response.result,
                    confidence: response.confidence.clone(),
                };
                self.ui.verdict.start_pulse(Instant::now());
                self.active_prediction = Some(response.prediction_id);
                self.ui.feedback.visible = true;
                self.ui.history.record(HistoryEntry {
                    headline: outcome.headline,
                    label: response.result,
                    confidence: response.confidence,
                });
                self.set_status(
                    format!("Verdict: {}", response.result.as_str()),
                    StatusTone::Info,
                );
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                self.ui.verdict.phase = VerdictPhase::Failed {
                    message: err.user_message(),
                };
                self.ui.feedback.visible = false;
                // A failed attempt must not leave a stale identifier behind.
                self.active_prediction = None;
                self.ui.notifications.push(
                    NotificationCategory::Error,
                    "Failed to analyze headline. Please try again.",
                );
                self.set_status("Prediction failed", StatusTone::Error);
            }
        }
    }
}
