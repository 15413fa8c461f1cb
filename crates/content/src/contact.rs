//! Contact message submission flow.
//!
//! A [`ContactForm`] moves `Idle -> Submitting -> Idle`; there is no
//! persistent failure state. Validation happens before any network call,
//! duplicate submits while one is in flight are ignored, and a failed POST
//! preserves the typed fields so the user can resubmit. Nothing here retries
//! automatically.

use async_trait::async_trait;
use folio_api::{ApiError, PortfolioClient};
use folio_types::ContactMessagePayload;
use thiserror::Error;
use tracing::debug;

/// Notice surfaced to the user, the toast analog of the original UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Local validation failure; surfaced as a notice, never sent anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Please complete all fields before sending.")]
pub struct ValidationError {
    /// Names of the fields that were empty after trimming.
    pub missing: Vec<&'static str>,
}

/// Destination of a validated payload. Implemented by [`PortfolioClient`];
/// tests substitute counting fakes.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, payload: &ContactMessagePayload) -> Result<(), ApiError>;
}

#[async_trait]
impl MessageSink for PortfolioClient {
    async fn send(&self, payload: &ContactMessagePayload) -> Result<(), ApiError> {
        self.post_contact_message(payload).await
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Result of attempting to start a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight; the attempt is ignored.
    InFlight,
    /// A required field is empty; no network call is made.
    Invalid(ValidationError),
    /// All fields valid; the trimmed payload is ready to send and the form
    /// is now Submitting.
    Ready(ContactMessagePayload),
}

/// The contact form's fields and submission state.
///
/// Owned exclusively by whichever view hosts the form; the split into
/// [`begin_submit`](Self::begin_submit) and [`complete`](Self::complete) lets
/// an event loop run the POST as a background task while the form stays
/// guarded against re-entrant submits.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
    state: SubmitState,
}

impl ContactForm {
    /// A form with every field pre-filled, as the CLI path uses it.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        project: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            project: project.into(),
            message: message.into(),
            state: SubmitState::Idle,
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Try to start a submission.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            debug!("ignoring duplicate submit while one is in flight");
            return SubmitAttempt::InFlight;
        }
        match self.validate() {
            Ok(payload) => {
                self.state = SubmitState::Submitting;
                SubmitAttempt::Ready(payload)
            }
            Err(error) => {
                debug!(missing = ?error.missing, "contact form failed validation");
                SubmitAttempt::Invalid(error)
            }
        }
    }

    /// Record the outcome of the in-flight POST and return the user notice.
    ///
    /// Success clears the form; failure preserves it for a manual retry.
    /// Either way the form returns to Idle.
    pub fn complete(&mut self, outcome: Result<(), ApiError>) -> Notice {
        self.state = SubmitState::Idle;
        match outcome {
            Ok(()) => {
                self.clear_fields();
                Notice::Success("Thanks! I’ll get back to you shortly.".to_string())
            }
            Err(error) => Notice::Error(error.to_string()),
        }
    }

    /// Validate, send, and complete in one call. Used by the CLI path where
    /// nothing else runs while the POST is outstanding.
    pub async fn submit(&mut self, sink: &dyn MessageSink) -> Notice {
        match self.begin_submit() {
            SubmitAttempt::InFlight => Notice::Error("A message is already being sent.".to_string()),
            SubmitAttempt::Invalid(error) => Notice::Error(error.to_string()),
            SubmitAttempt::Ready(payload) => {
                let outcome = sink.send(&payload).await;
                self.complete(outcome)
            }
        }
    }

    fn validate(&self) -> Result<ContactMessagePayload, ValidationError> {
        let payload = ContactMessagePayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            project: self.project.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        let mut missing = Vec::new();
        if payload.name.is_empty() {
            missing.push("name");
        }
        if payload.email.is_empty() {
            missing.push("email");
        }
        if payload.project.is_empty() {
            missing.push("project");
        }
        if payload.message.is_empty() {
            missing.push("message");
        }

        if missing.is_empty() { Ok(payload) } else { Err(ValidationError { missing }) }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.project.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink {
        calls: AtomicUsize,
        response: fn() -> Result<(), ApiError>,
    }

    impl CountingSink {
        fn new(response: fn() -> Result<(), ApiError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MessageSink for CountingSink {
        async fn send(&self, _payload: &ContactMessagePayload) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.response)()
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Engine", "Hello there")
    }

    #[tokio::test]
    async fn missing_field_is_rejected_with_zero_network_calls() {
        let sink = CountingSink::new(|| Ok(()));
        let mut form = filled_form();
        form.project = "   ".into();

        let notice = form.submit(&sink).await;
        assert_eq!(notice, Notice::Error("Please complete all fields before sending.".to_string()));
        assert_eq!(sink.calls(), 0);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn valid_form_sends_exactly_one_post_and_resets() {
        let sink = CountingSink::new(|| Ok(()));
        let mut form = filled_form();

        let notice = form.submit(&sink).await;
        assert_eq!(notice, Notice::Success("Thanks! I’ll get back to you shortly.".to_string()));
        assert_eq!(sink.calls(), 1);
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn duplicate_submit_while_in_flight_is_ignored() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(), SubmitAttempt::Ready(_)));
        assert_eq!(form.begin_submit(), SubmitAttempt::InFlight);
        assert_eq!(form.begin_submit(), SubmitAttempt::InFlight);

        form.complete(Ok(()));
        assert!(!form.is_submitting());
    }

    #[test]
    fn validation_names_every_missing_field() {
        let mut form = filled_form();
        form.email.clear();
        form.message = "   ".into();
        let SubmitAttempt::Invalid(error) = form.begin_submit() else {
            panic!("expected a validation failure");
        };
        assert_eq!(error.missing, ["email", "message"]);
        assert!(!form.is_submitting());
    }

    #[test]
    fn payload_fields_are_trimmed() {
        let mut form = ContactForm::new("  Ada  ", " ada@example.com ", " Engine ", " Hello ");
        let SubmitAttempt::Ready(payload) = form.begin_submit() else {
            panic!("expected a ready payload");
        };
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.project, "Engine");
        assert_eq!(payload.message, "Hello");
    }

    #[tokio::test]
    async fn server_detail_is_surfaced_verbatim_and_fields_survive() {
        let sink = CountingSink::new(|| {
            Err(ApiError::Rejected {
                message: "Email invalid".to_string(),
            })
        });
        let mut form = filled_form();

        let notice = form.submit(&sink).await;
        assert_eq!(notice, Notice::Error("Email invalid".to_string()));
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hello there");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn generic_failure_message_for_unparsable_bodies() {
        let sink = CountingSink::new(|| Err(ApiError::Status { status: 500 }));
        let mut form = filled_form();

        let notice = form.submit(&sink).await;
        assert_eq!(notice, Notice::Error("Request failed with status 500".to_string()));
    }
}
