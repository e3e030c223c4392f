use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, error};
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use crate::config;
use crate::order_form::FormPayload;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Form Submitted Successfully";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";
pub const REJECTION_FALLBACK_MESSAGE: &str = "Submission was rejected. Please check your details and try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(SENDING_MESSAGE),
            SubmissionStatus::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Failed(message) => Some(message),
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    /// The one place a response or transport error becomes user-visible text.
    pub fn from_result(result: &Result<SubmitResponse, SubmitError>) -> Self {
        match result {
            Ok(response) if response.success => SubmissionStatus::Succeeded,
            Ok(response) => SubmissionStatus::Failed(
                response
                    .message
                    .as_deref()
                    .map(str::trim)
                    .filter(|message| !message.is_empty())
                    .unwrap_or(REJECTION_FALLBACK_MESSAGE)
                    .to_string(),
            ),
            Err(_) => SubmissionStatus::Failed(TRANSPORT_FAILURE_MESSAGE.to_string()),
        }
    }
}

/// Body returned by the form processor.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not build request body: {0}")]
    Body(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Outbound side of a submission. WASM futures are not `Send`.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post(&self, payload: &FormPayload) -> Result<SubmitResponse, SubmitError>;
}

/// Posts multipart form data to the configured form processor.
pub struct Web3FormsTransport {
    endpoint: String,
}

impl Web3FormsTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Web3FormsTransport {
    fn default() -> Self {
        Self::new(config::get_form_endpoint())
    }
}

fn to_form_data(payload: &FormPayload) -> Result<FormData, SubmitError> {
    let form_data = FormData::new().map_err(|e| SubmitError::Body(format!("{:?}", e)))?;
    for (name, value) in &payload.fields {
        form_data
            .append_with_str(name, value)
            .map_err(|e| SubmitError::Body(format!("{:?}", e)))?;
    }
    Ok(form_data)
}

#[async_trait(?Send)]
impl FormTransport for Web3FormsTransport {
    async fn post(&self, payload: &FormPayload) -> Result<SubmitResponse, SubmitError> {
        let body = to_form_data(payload)?;

        let response = Request::post(&self.endpoint)
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        debug!("Form endpoint answered with status {}", response.status());

        response
            .json::<SubmitResponse>()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))
    }
}

/// Performs exactly one attempt. Never retries.
pub async fn submit<T: FormTransport + ?Sized>(
    transport: &T,
    payload: &FormPayload,
) -> Result<SubmitResponse, SubmitError> {
    debug!(
        "Submitting {} order",
        payload.get("form_type").unwrap_or("unknown")
    );
    let result = transport.post(payload).await;
    match &result {
        Ok(response) if response.success => debug!("Order submitted"),
        Ok(response) => error!(
            "Form endpoint rejected submission: {}",
            serde_json::json!({ "success": response.success, "message": response.message })
        ),
        Err(e) => error!("Error submitting form: {}", e),
    }
    result
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays scripted outcomes and records every payload it was given.
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub outcomes: RefCell<VecDeque<Result<SubmitResponse, SubmitError>>>,
        pub sent: RefCell<Vec<FormPayload>>,
    }

    impl ScriptedTransport {
        pub fn replying(outcome: Result<SubmitResponse, SubmitError>) -> Self {
            let transport = Self::default();
            transport.outcomes.borrow_mut().push_back(outcome);
            transport
        }
    }

    #[async_trait(?Send)]
    impl FormTransport for ScriptedTransport {
        async fn post(&self, payload: &FormPayload) -> Result<SubmitResponse, SubmitError> {
            self.sent.borrow_mut().push(payload.clone());
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(SubmitError::Network("no scripted outcome".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::testing::ScriptedTransport;
    use super::*;

    fn payload() -> FormPayload {
        FormPayload {
            fields: vec![("name".to_string(), "Ada".to_string())],
        }
    }

    #[test]
    fn test_response_parsing() {
        let ok: SubmitResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);

        let rejected: SubmitResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid email","body":{}}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("Invalid email"));

        assert!(serde_json::from_str::<SubmitResponse>("<html>").is_err());
    }

    #[test]
    fn test_status_from_success() {
        let result = Ok(SubmitResponse { success: true, message: None });
        assert_eq!(SubmissionStatus::from_result(&result), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_status_from_rejection_is_server_message_verbatim() {
        let result = Ok(SubmitResponse {
            success: false,
            message: Some("Invalid email".to_string()),
        });
        let status = SubmissionStatus::from_result(&result);
        assert_eq!(status, SubmissionStatus::Failed("Invalid email".to_string()));
        assert_eq!(status.message(), Some("Invalid email"));
        assert!(!status.in_flight());
    }

    #[test]
    fn test_rejection_without_message_still_explains_itself() {
        for message in [None, Some(String::new()), Some("  ".to_string())] {
            let result = Ok(SubmitResponse { success: false, message });
            assert_eq!(
                SubmissionStatus::from_result(&result).message(),
                Some(REJECTION_FALLBACK_MESSAGE)
            );
        }
    }

    #[test]
    fn test_status_from_transport_error() {
        for error in [
            SubmitError::Network("offline".to_string()),
            SubmitError::Decode("expected value".to_string()),
            SubmitError::Body("FormData unavailable".to_string()),
        ] {
            let status = SubmissionStatus::from_result(&Err(error));
            assert_eq!(status.message(), Some(TRANSPORT_FAILURE_MESSAGE));
        }
    }

    #[test]
    fn test_sending_is_in_flight() {
        assert!(SubmissionStatus::Sending.in_flight());
        assert_eq!(SubmissionStatus::Sending.message(), Some("Sending..."));
        assert_eq!(SubmissionStatus::Idle.message(), None);
    }

    #[test]
    fn test_submit_makes_exactly_one_attempt() {
        let transport = ScriptedTransport::replying(Err(SubmitError::Network("reset".to_string())));
        let result = block_on(submit(&transport, &payload()));

        assert!(result.is_err());
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(transport.sent.borrow()[0], payload());
    }

    #[test]
    fn test_submit_passes_response_through() {
        let transport = ScriptedTransport::replying(Ok(SubmitResponse {
            success: true,
            message: Some("Email sent".to_string()),
        }));
        let result = block_on(submit(&transport, &payload())).unwrap();
        assert!(result.success);
    }
}
