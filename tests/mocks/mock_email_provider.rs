use async_trait::async_trait;
use newsequence_contact::error::{ProviderError, ProviderResult};
use newsequence_contact::models::{OutboundEmail, ProviderResponse};
use newsequence_contact::provider::EmailProvider;
use std::sync::{Arc, Mutex};

/// Mock email provider for testing.
///
/// Records every email it is asked to send and answers with either a
/// canned response or a configured failure.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEmailProvider {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    failure: Arc<Mutex<Option<fn() -> ProviderError>>>,
}

#[allow(dead_code)]
impl MockEmailProvider {
    /// Create a provider that accepts every email.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a provider that rejects every email with the given error.
    pub fn failing(make_error: fn() -> ProviderError) -> Self {
        let provider = Self::new();
        *provider.failure.lock().unwrap() = Some(make_error);
        provider
    }

    /// Number of send calls made so far.
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Every email handed to the provider, in order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &OutboundEmail) -> ProviderResult<ProviderResponse> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());

        match *self.failure.lock().unwrap() {
            Some(make_error) => Err(make_error()),
            None => Ok(ProviderResponse::new(format!("email_{}", sent.len()))),
        }
    }
}
