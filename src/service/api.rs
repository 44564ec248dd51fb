//! Typed requests against the classification service endpoints.

use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Identifier assigned by the service to a stored prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PredictionId(i64);

impl PredictionId {
    /// Wrap a raw identifier value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PredictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Binary classification label returned by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Real,
    Fake,
}

impl Verdict {
    /// Wire and display form of the label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Fake => "FAKE",
        }
    }
}

/// User judgement of a prediction, as the service accepts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackChoice {
    Accurate,
    Wrong,
}

impl FeedbackChoice {
    /// Wire form of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accurate => "accurate",
            Self::Wrong => "wrong",
        }
    }
}

/// Successful response from the prediction endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct PredictionResponse {
    /// Classification label.
    pub result: Verdict,
    /// Confidence as a display string (e.g. `"97.24%"`).
    pub confidence: String,
    /// Identifier to submit feedback against.
    pub prediction_id: PredictionId,
}

/// Errors from the prediction endpoint.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The service rejected the input (HTTP 400).
    #[error("Invalid input: {0}")]
    BadRequest(String),
    /// The service failed to produce a prediction.
    #[error("Server error: {0}")]
    ServerError(String),
    /// The request never completed.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl PredictError {
    /// Message suitable for direct display in the result area.
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(message) | Self::ServerError(message) => message.clone(),
            Self::Transport(_) | Self::InvalidResponse(_) => {
                "Failed to analyze the headline. Please try again.".to_string()
            }
        }
    }
}

/// Errors from the feedback endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    /// The service rejected the submission (HTTP 400/404).
    #[error("Rejected: {0}")]
    Rejected(String),
    /// The service failed to record the feedback.
    #[error("Server error: {0}")]
    ServerError(String),
    /// The request never completed.
    #[error("HTTP error: {0}")]
    Transport(String),
}

/// Submit a headline for classification.
pub fn predict(server: &Url, headline: &str) -> Result<PredictionResponse, PredictError> {
    let url = endpoint_url(server, "predict");
    let response = match http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .send_form(&[("headline", headline)])
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let message = error_message(response, code);
            return Err(match code {
                400 => PredictError::BadRequest(message),
                _ => PredictError::ServerError(message),
            });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| PredictError::InvalidResponse(err.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|err| PredictError::InvalidResponse(err.to_string()))
}

/// Submit user feedback for a stored prediction.
pub fn submit_feedback(
    server: &Url,
    prediction_id: PredictionId,
    choice: FeedbackChoice,
) -> Result<(), FeedbackError> {
    let url = endpoint_url(server, "feedback");
    let id_value = prediction_id.to_string();
    let response = match http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .send_form(&[
            ("prediction_id", id_value.as_str()),
            ("feedback", choice.as_str()),
        ])
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let message = error_message(response, code);
            return Err(match code {
                400 | 404 => FeedbackError::Rejected(message),
                _ => FeedbackError::ServerError(message),
            });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(FeedbackError::Transport(err.to_string()));
        }
    };

    // Drain the acknowledgement body; its contents carry no client state.
    let _ = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES);
    Ok(())
}

fn endpoint_url(server: &Url, path: &str) -> String {
    format!("{}/{path}", server.as_str().trim_end_matches('/'))
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the server-supplied error message, falling back to the status code.
fn error_message(response: ureq::Response, code: u16) -> String {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES).unwrap_or_default();
    serde_json::from_slice::<ErrorBody>(&bytes)
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("HTTP {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned response and hand back the captured request text.
    fn serve_once(response: String) -> (Url, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (request_tx, request_rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let Ok(read) = stream.read(&mut buf) else {
                        break;
                    };
                    if read == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..read]);
                    if request_complete(&request) {
                        break;
                    }
                }
                let _ = stream.write_all(response.as_bytes());
                let _ = request_tx.send(String::from_utf8_lossy(&request).into_owned());
            }
        });
        let url = Url::parse(&format!("http://{}", addr)).unwrap();
        (url, request_rx)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("Content-Length: "))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= content_length
    }

    fn json_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[test]
    fn predict_decodes_success_response() {
        let body = r#"{"result": "REAL", "confidence": "97.24%", "prediction_id": 42}"#;
        let (url, requests) = serve_once(json_response("200 OK", body));
        let response = predict(&url, "Scientists confirm water is wet").unwrap();
        assert_eq!(response.result, Verdict::Real);
        assert_eq!(response.confidence, "97.24%");
        assert_eq!(response.prediction_id, PredictionId::new(42));

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /predict"));
        assert!(request.contains("headline=Scientists+confirm+water+is+wet"));
    }

    #[test]
    fn predict_maps_bad_request_with_server_message() {
        let body = r#"{"error": "Headline too short. Please enter a meaningful headline."}"#;
        let (url, _requests) = serve_once(json_response("400 Bad Request", body));
        let err = predict(&url, "hi").unwrap_err();
        match err {
            PredictError::BadRequest(message) => {
                assert_eq!(
                    message,
                    "Headline too short. Please enter a meaningful headline."
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn predict_falls_back_to_status_code_on_opaque_body() {
        let (url, _requests) = serve_once(json_response("500 Internal Server Error", "boom"));
        let err = predict(&url, "headline").unwrap_err();
        match err {
            PredictError::ServerError(message) => assert_eq!(message, "HTTP 500"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn predict_rejects_unknown_label() {
        let body = r#"{"result": "MAYBE", "confidence": "50%", "prediction_id": 1}"#;
        let (url, _requests) = serve_once(json_response("200 OK", body));
        let err = predict(&url, "headline").unwrap_err();
        assert!(matches!(err, PredictError::InvalidResponse(_)));
    }

    #[test]
    fn predict_reports_transport_failure() {
        // Nothing listens on this port; the connection is refused.
        let url = Url::parse("http://127.0.0.1:1").unwrap();
        let err = predict(&url, "headline").unwrap_err();
        assert!(matches!(err, PredictError::Transport(_)));
    }

    #[test]
    fn feedback_posts_identifier_and_category() {
        let body = r#"{"message": "Feedback submitted successfully"}"#;
        let (url, requests) = serve_once(json_response("200 OK", body));
        submit_feedback(&url, PredictionId::new(42), FeedbackChoice::Accurate).unwrap();

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /feedback"));
        assert!(request.contains("prediction_id=42"));
        assert!(request.contains("feedback=accurate"));
    }

    #[test]
    fn feedback_maps_missing_prediction_to_rejected() {
        let body = r#"{"error": "Prediction not found"}"#;
        let (url, _requests) = serve_once(json_response("404 Not Found", body));
        let err =
            submit_feedback(&url, PredictionId::new(7), FeedbackChoice::Wrong).unwrap_err();
        match err {
            FeedbackError::Rejected(message) => assert_eq!(message, "Prediction not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let server = Url::parse("http://127.0.0.1:5000/").unwrap();
        assert_eq!(endpoint_url(&server, "predict"), "http://127.0.0.1:5000/predict");
    }
}
