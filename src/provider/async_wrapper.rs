//! Async email provider capability and the blocking-pool adapter for Resend.
//!
//! [`EmailProvider`] is the only seam between the dispatcher and the outside
//! world. [`AsyncResendClient`] implements it by running the synchronous
//! [`ResendClient`] on tokio's blocking thread pool.

use super::ResendClient;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{OutboundEmail, ProviderResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability to deliver one email.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> ProviderResult<ProviderResponse>;
}

/// Async wrapper around synchronous ResendClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncResendClient {
    client: Arc<ResendClient>,
}

impl AsyncResendClient {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl EmailProvider for AsyncResendClient {
    async fn send(&self, email: &OutboundEmail) -> ProviderResult<ProviderResponse> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send_email(&email))
            .await
            .map_err(|e| ProviderError::HttpError(format!("Task join error: {}", e)))?
    }
}
