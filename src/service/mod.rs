//! Client for the TruthLens classification service.

mod api;

pub use api::{
    FeedbackChoice, FeedbackError, PredictError, PredictionId, PredictionResponse, Verdict,
    predict, submit_feedback,
};
