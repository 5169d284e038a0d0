use thiserror::Error;

/// Errors from posting a lead to the external endpoint.
#[derive(Debug, Error)]
pub enum LeadError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid lead base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Reasons a callback form submission did not reach `Submitted`.
#[derive(Debug, Error)]
pub enum FormError {
    /// A required field is blank. No request was sent.
    #[error("{0} is required")]
    Validation(&'static str),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("the callback request has already been submitted")]
    AlreadySubmitted,

    /// An outcome arrived with no submission pending.
    #[error("no submission is pending")]
    NotSubmitting,

    /// The lead endpoint rejected the request or could not be reached.
    #[error("lead submission failed: {0}")]
    Submission(#[from] LeadError),
}
