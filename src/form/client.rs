//! HTTP client that submits the contact form to the contact endpoint.
//!
//! The form is validated locally first; an invalid form never leaves the
//! process. Like the provider client, this uses `ureq` and is synchronous.

use super::ContactForm;
use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::SubmitError;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Path of the contact endpoint, relative to the site base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// Successful response from the contact endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReceipt {
    pub success: bool,
    /// The provider response echoed back by the server.
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Client for posting contact forms to a running site.
#[derive(Clone)]
pub struct ContactFormClient {
    base_url: String,
    agent: Arc<ureq::Agent>,
}

impl ContactFormClient {
    /// Create a client for the site at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url: base_url.into(),
            agent: Arc::new(agent),
        }
    }

    fn build_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CONTACT_PATH)
    }

    /// Validate the form and, if valid, post the normalized submission to the
    /// contact endpoint. A blank phone goes out as `null`.
    ///
    /// # Errors
    ///
    /// - `SubmitError::Invalid` when local validation fails (no request made)
    /// - `SubmitError::Rejected` when the server answers with an error status
    /// - `SubmitError::Transport` when the server cannot be reached
    pub fn submit(&self, form: &ContactForm) -> Result<SubmitReceipt, SubmitError> {
        let submission = form.validate().map_err(SubmitError::Invalid)?;

        let url = self.build_url();
        tracing::debug!("POST {}", url);

        let body = serde_json::to_value(&submission)?;
        match self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
        {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;
                Ok(serde_json::from_str(&text)?)
            }
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ErrorEnvelope>(&text)
                    .map(|e| e.error)
                    .unwrap_or(text);
                Err(SubmitError::Rejected { status, message })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(SubmitError::Transport(transport.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let client = ContactFormClient::new("https://newsequence.com/");
        assert_eq!(client.build_url(), "https://newsequence.com/api/contact");
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        // Port 9 (discard) would fail if contacted; validation must short-circuit first.
        let client = ContactFormClient::new("http://127.0.0.1:9");
        let result = client.submit(&ContactForm::default());
        match result {
            Err(SubmitError::Invalid(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("Expected Invalid error, got: {:?}", other),
        }
    }
}
