//! Callback form submission state machine.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx──▶ Submitted (terminal)
//!   ▲                  │
//!   │                  └─failure─▶ Error(msg) ──submit──▶ Submitting
//! ```
//!
//! The form is editable in `Idle` and `Error`. `Submitting` and `Submitted`
//! reject further submissions.

use chrono::Utc;
use frontdesk_core::CallbackRequest;

use crate::client::LeadClient;
use crate::error::{FormError, LeadError};

/// Shown inline when the lead endpoint fails.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Sorry, we couldn't send your request. Please try again or call us directly.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Submitted,
    Error(String),
}

/// One rendered callback form. State is local to this value.
#[derive(Debug, Clone)]
pub struct CallbackForm {
    service_slug: String,
    suburb_slug: String,
    emergency: bool,
    state: FormState,
}

impl CallbackForm {
    #[must_use]
    pub fn new(
        service_slug: impl Into<String>,
        suburb_slug: impl Into<String>,
        emergency: bool,
    ) -> Self {
        Self {
            service_slug: service_slug.into(),
            suburb_slug: suburb_slug.into(),
            emergency,
            state: FormState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.state, FormState::Idle | FormState::Error(_))
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FormState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Confirmation text once submitted.
    #[must_use]
    pub fn confirmation(&self) -> Option<&'static str> {
        if self.state != FormState::Submitted {
            return None;
        }
        Some(if self.emergency {
            "Thanks! We'll call you back as soon as possible."
        } else {
            "Thanks! We'll call you back during office hours."
        })
    }

    /// Validates the fields and moves to `Submitting`, returning the request
    /// to send.
    ///
    /// # Errors
    ///
    /// - [`FormError::InFlight`] while a submission is pending.
    /// - [`FormError::AlreadySubmitted`] once submitted.
    /// - [`FormError::Validation`] for a blank name or phone; state is unchanged.
    pub fn begin_submit(&mut self, name: &str, phone: &str) -> Result<CallbackRequest, FormError> {
        match self.state {
            FormState::Submitting => return Err(FormError::InFlight),
            FormState::Submitted => return Err(FormError::AlreadySubmitted),
            FormState::Idle | FormState::Error(_) => {}
        }

        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(FormError::Validation("name"));
        }
        if phone.is_empty() {
            return Err(FormError::Validation("phone"));
        }

        self.state = FormState::Submitting;
        Ok(CallbackRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            service_slug: self.service_slug.clone(),
            suburb_slug: self.suburb_slug.clone(),
            emergency: self.emergency,
            timestamp: Utc::now(),
        })
    }

    /// Applies the outcome of a pending submission.
    ///
    /// The state only changes while the form is `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Submission`] carrying the lead error on failure;
    /// the form is then in `Error` with [`GENERIC_ERROR_MESSAGE`]. An outcome
    /// with nothing pending is rejected with [`FormError::AlreadySubmitted`]
    /// or [`FormError::NotSubmitting`] and leaves the state as it was.
    pub fn complete(&mut self, outcome: Result<(), LeadError>) -> Result<(), FormError> {
        match self.state {
            FormState::Submitting => {}
            FormState::Submitted => {
                tracing::debug!(?outcome, "dropping outcome for an already submitted form");
                return Err(FormError::AlreadySubmitted);
            }
            FormState::Idle | FormState::Error(_) => {
                tracing::debug!(?outcome, "dropping outcome with no submission pending");
                return Err(FormError::NotSubmitting);
            }
        }
        match outcome {
            Ok(()) => {
                self.state = FormState::Submitted;
                Ok(())
            }
            Err(err) => {
                self.state = FormState::Error(GENERIC_ERROR_MESSAGE.to_string());
                Err(FormError::Submission(err))
            }
        }
    }

    /// Validates, posts once via `client`, and records the outcome.
    ///
    /// # Errors
    ///
    /// See [`CallbackForm::begin_submit`] and [`CallbackForm::complete`].
    pub async fn submit(
        &mut self,
        client: &LeadClient,
        name: &str,
        phone: &str,
    ) -> Result<(), FormError> {
        let request = self.begin_submit(name, phone)?;
        let outcome = client.submit(&request).await;
        self.complete(outcome)
    }
}
