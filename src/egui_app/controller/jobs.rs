//! Background job plumbing for the controller.
//!
//! Each request runs on its own thread and reports back over a channel the
//! controller drains once per frame. Requests are deliberately not gated
//! against each other: overlapping submissions are allowed and their results
//! land in arrival order.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use url::Url;

use crate::service::{
    self, FeedbackChoice, FeedbackError, PredictError, PredictionId, PredictionResponse,
};

pub(crate) enum JobMessage {
    PredictionFinished(PredictionOutcome),
    FeedbackFinished(FeedbackOutcome),
}

#[derive(Debug)]
pub(crate) struct PredictionOutcome {
    /// Headline the request was made for, as submitted.
    pub(crate) headline: String,
    pub(crate) result: Result<PredictionResponse, PredictError>,
}

#[derive(Debug)]
pub(crate) struct FeedbackOutcome {
    pub(crate) prediction_id: PredictionId,
    pub(crate) choice: FeedbackChoice,
    pub(crate) result: Result<(), FeedbackError>,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    #[cfg(test)]
    pub(crate) predict_requests: usize,
    #[cfg(test)]
    pub(crate) feedback_requests: usize,
}

impl ControllerJobs {
    pub(crate) fn new() -> Self {
        let (message_tx, message_rx) = channel();
        Self {
            message_tx,
            message_rx,
            #[cfg(test)]
            predict_requests: 0,
            #[cfg(test)]
            feedback_requests: 0,
        }
    }

    pub(crate) fn begin_predict(&mut self, server: Url, headline: String) {
        #[cfg(test)]
        {
            self.predict_requests += 1;
        }
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service::predict(&server, &headline);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionOutcome {
                headline,
                result,
            }));
        });
    }

    pub(crate) fn begin_feedback(
        &mut self,
        server: Url,
        prediction_id: PredictionId,
        choice: FeedbackChoice,
    ) {
        #[cfg(test)]
        {
            self.feedback_requests += 1;
        }
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = service::submit_feedback(&server, prediction_id, choice);
            let _ = tx.send(JobMessage::FeedbackFinished(FeedbackOutcome {
                prediction_id,
                choice,
                result,
            }));
        });
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }
}
