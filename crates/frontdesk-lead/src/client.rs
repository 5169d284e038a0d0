//! HTTP client for the external lead endpoint (`POST /api/lead`).

use std::time::Duration;

use frontdesk_core::CallbackRequest;
use reqwest::{Client, Url};

use crate::error::LeadError;

const LEAD_PATH: &str = "api/lead";

/// Posts [`CallbackRequest`]s as JSON. Any 2xx is success; every other status
/// and any transport failure is an error. No retries.
#[derive(Debug, Clone)]
pub struct LeadClient {
    client: Client,
    endpoint: Url,
}

impl LeadClient {
    /// Creates a client posting to `<base_url>/api/lead`.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`LeadError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, LeadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(LEAD_PATH))
            .map_err(|e| LeadError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one lead.
    ///
    /// # Errors
    ///
    /// - [`LeadError::Http`] on network failure or timeout.
    /// - [`LeadError::UnexpectedStatus`] on any non-2xx response.
    pub async fn submit(&self, request: &CallbackRequest) -> Result<(), LeadError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            service = %request.service_slug,
            suburb = %request.suburb_slug,
            emergency = request.emergency,
            "posting callback request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        Ok(())
    }
}
