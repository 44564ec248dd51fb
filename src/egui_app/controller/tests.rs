use std::time::{Duration, Instant};

use url::Url;

use super::Controller;
use super::jobs::{FeedbackOutcome, PredictionOutcome};
use crate::egui_app::state::{NotificationCategory, Page, VerdictPhase};
use crate::egui_app::view_model;
use crate::service::{FeedbackChoice, FeedbackError, PredictError, PredictionId, PredictionResponse, Verdict};

fn dummy_controller() -> Controller {
    // Nothing listens here; tests never let a request actually run.
    Controller::new(Url::parse("http://127.0.0.1:9").unwrap())
}

fn ok_outcome(headline: &str, label: Verdict, confidence: &str, id: i64) -> PredictionOutcome {
    PredictionOutcome {
        headline: headline.to_string(),
        result: Ok(PredictionResponse {
            result: label,
            confidence: confidence.to_string(),
            prediction_id: PredictionId::new(id),
        }),
    }
}

fn failed_outcome(headline: &str, err: PredictError) -> PredictionOutcome {
    PredictionOutcome {
        headline: headline.to_string(),
        result: Err(err),
    }
}

#[test]
fn empty_headline_is_blocked_without_a_request() {
    let mut controller = dummy_controller();
    controller.ui.headline_input = "   ".to_string();
    controller.submit_headline();

    assert_eq!(controller.jobs.predict_requests, 0);
    assert_eq!(controller.ui.verdict.phase, VerdictPhase::Hidden);
    let items = controller.ui.notifications.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, NotificationCategory::Error);
    assert_eq!(items[0].text, "Please enter a headline to analyze");
}

#[test]
fn submission_enters_loading_and_hides_feedback_prompt() {
    let mut controller = dummy_controller();
    controller.ui.feedback.visible = true;
    controller.ui.headline_input = "Some headline".to_string();
    controller.submit_headline();

    assert_eq!(controller.jobs.predict_requests, 1);
    assert_eq!(controller.ui.verdict.phase, VerdictPhase::Loading);
    assert!(!controller.ui.feedback.visible);
}

#[test]
fn successful_prediction_reveals_feedback_and_activates_identifier() {
    let mut controller = dummy_controller();
    controller.apply_prediction_outcome(ok_outcome(
        "Scientists confirm water is wet",
        Verdict::Real,
        "97%",
        123,
    ));

    assert_eq!(controller.active_prediction(), Some(PredictionId::new(123)));
    assert!(controller.ui.feedback.visible);

    let view = view_model::verdict_view(&controller.ui.verdict).unwrap();
    assert_eq!(view.heading, "REAL");
    assert_eq!(view.detail, "Confidence: 97%");

    let history = controller.ui.history.entries();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].headline, "Scientists confirm water is wet");
    assert_eq!(history[0].label, Verdict::Real);
}

#[test]
fn failed_prediction_hides_feedback_and_clears_identifier() {
    let mut controller = dummy_controller();
    controller.apply_prediction_outcome(ok_outcome("earlier", Verdict::Real, "90%", 7));
    assert!(controller.active_prediction().is_some());

    controller.apply_prediction_outcome(failed_outcome(
        "later",
        PredictError::ServerError("Prediction failed: model unavailable".to_string()),
    ));

    assert!(!controller.ui.feedback.visible);
    assert_eq!(controller.active_prediction(), None);
    assert_eq!(
        controller.ui.verdict.phase,
        VerdictPhase::Failed {
            message: "Prediction failed: model unavailable".to_string()
        }
    );
    assert!(
        controller
            .ui
            .notifications
            .items()
            .iter()
            .any(|n| n.category == NotificationCategory::Error)
    );
}

#[test]
fn transport_failure_shows_generic_message() {
    let mut controller = dummy_controller();
    controller.apply_prediction_outcome(failed_outcome(
        "headline",
        PredictError::Transport("connection refused".to_string()),
    ));

    assert_eq!(
        controller.ui.verdict.phase,
        VerdictPhase::Failed {
            message: "Failed to analyze the headline. Please try again.".to_string()
        }
    );
}

#[test]
fn overlapping_predictions_apply_in_arrival_order() {
    let mut controller = dummy_controller();
    controller.apply_prediction_outcome(ok_outcome("first", Verdict::Real, "90%", 1));
    controller.apply_prediction_outcome(ok_outcome("second", Verdict::Fake, "60%", 2));

    assert_eq!(controller.active_prediction(), Some(PredictionId::new(2)));
    assert_eq!(
        controller.ui.verdict.phase,
        VerdictPhase::Ready {
            label: Verdict::Fake,
            confidence: "60%".to_string()
        }
    );
    assert_eq!(controller.ui.history.entries().len(), 2);
}

#[test]
fn feedback_without_active_prediction_is_blocked_without_a_request() {
    let mut controller = dummy_controller();
    controller.submit_feedback(FeedbackChoice::Accurate);

    assert_eq!(controller.jobs.feedback_requests, 0);
    let items = controller.ui.notifications.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "No prediction to provide feedback for");
}

#[test]
fn successful_feedback_clears_identifier_and_hides_prompt() {
    let mut controller = dummy_controller();
    controller.apply_prediction_outcome(ok_outcome("headline", Verdict::Fake, "88%", 9));

    controller.apply_feedback_outcome(FeedbackOutcome {
        prediction_id: PredictionId::new(9),
        choice: FeedbackChoice::Accurate,
        result: Ok(()),
    });

    assert_eq!(controller.active_prediction(), None);
    assert!(!controller.ui.feedback.visible);
    assert!(
        controller
            .ui
            .notifications
            .items()
            .iter()
            .any(|n| n.category == NotificationCategory::Success
                && n.text == "Thank you for your feedback!")
    );

    // The guard is re-armed for the next attempt.
    controller.submit_feedback(FeedbackChoice::Wrong);
    assert_eq!(controller.jobs.feedback_requests, 0);
}

#[test]
fn failed_feedback_keeps_identifier_for_retry() {
    let mut controller = dummy_controller();
    controller.apply_prediction_outcome(ok_outcome("headline", Verdict::Fake, "88%", 9));

    controller.apply_feedback_outcome(FeedbackOutcome {
        prediction_id: PredictionId::new(9),
        choice: FeedbackChoice::Wrong,
        result: Err(FeedbackError::ServerError("HTTP 500".to_string())),
    });

    assert_eq!(controller.active_prediction(), Some(PredictionId::new(9)));
    assert!(controller.ui.feedback.visible);
    assert!(
        controller
            .ui
            .notifications
            .items()
            .iter()
            .any(|n| n.text == "Failed to submit feedback. Please try again.")
    );
}

#[test]
fn escape_closes_only_an_open_menu() {
    let mut controller = dummy_controller();
    controller.handle_escape();
    assert!(!controller.ui.menu.open);

    controller.toggle_menu();
    controller.handle_escape();
    assert!(!controller.ui.menu.open);
}

#[test]
fn wide_viewport_closes_an_open_menu() {
    let mut controller = dummy_controller();
    controller.toggle_menu();
    controller.observe_viewport_width(700.0);
    assert!(controller.ui.menu.open);

    controller.observe_viewport_width(900.0);
    assert!(!controller.ui.menu.open);
}

#[test]
fn link_click_switches_page_and_closes_after_delay() {
    let t0 = Instant::now();
    let mut controller = dummy_controller();
    controller.toggle_menu();
    controller.select_page(Page::History, t0);

    assert_eq!(controller.ui.menu.page, Page::History);
    assert!(controller.ui.menu.open, "menu lingers during the delay");

    controller.tick(t0 + Duration::from_millis(150));
    assert!(!controller.ui.menu.open);
    assert!(!controller.ui.menu.scroll_lock);
}
