//! HTTP client for the Resend transactional email API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! provider failures to [`ProviderError`].

mod async_wrapper;
pub use async_wrapper::{AsyncResendClient, EmailProvider};

use crate::config::{Config, DEFAULT_TIMEOUT_SECS};
use crate::error::{ProviderError, ProviderResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{OutboundEmail, ProviderResponse};
use std::sync::Arc;
use std::time::Duration;

/// Resend endpoint for sending a single email, relative to the API base URL.
pub const SEND_EMAIL_PATH: &str = "/emails";

/// HTTP client for the Resend API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the Resend API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a new ResendClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.resend_api_url.clone(),
            api_key: config.resend_api_key.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, ProviderError> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::debug!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a ProviderError.
    fn map_error(&self, error: ureq::Error) -> ProviderError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => ProviderError::Unauthorized,
                    429 => ProviderError::RateLimitExceeded,
                    _ => ProviderError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ProviderError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ProviderError::Timeout
                } else {
                    ProviderError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Send one email.
    ///
    /// An empty API key is not rejected here; the provider answers 401 and the
    /// call fails like any other delivery error.
    pub fn send_email(&self, email: &OutboundEmail) -> ProviderResult<ProviderResponse> {
        let body = serde_json::to_value(email)?;
        let response = self.post(SEND_EMAIL_PATH, &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| ProviderError::HttpError(e.to_string()))?;

        let accepted: ProviderResponse = serde_json::from_str(&response_body)?;
        Ok(accepted)
    }
}
