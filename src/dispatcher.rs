//! Contact submission dispatcher.
//!
//! Server-side boundary between a posted contact form and the email
//! provider. The dispatcher repeats a minimal presence check on its own
//! (clients may skip form validation), renders the team notification and
//! hands exactly one email to the provider with the submitter on CC.

use crate::config::Config;
use crate::error::{DispatchError, DispatchResult};
use crate::metrics::Metrics;
use crate::models::{OutboundEmail, ProviderResponse};
use crate::provider::EmailProvider;
use crate::templates::{ContactNotification, EmailTemplate, Layout};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// JSON body of `POST /api/contact`.
///
/// Every field is optional here so that absence is reported as a missing
/// field rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Fields present and non-empty, borrowed out of a [`ContactPayload`].
struct RequiredFields<'a> {
    name: &'a str,
    email: &'a str,
    service: &'a str,
    message: &'a str,
}

impl ContactPayload {
    /// Read a payload from an arbitrary JSON value.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) count as absent. Other
    /// non-string values are kept in their JSON text form. A value that is
    /// not an object carries no fields.
    pub fn from_json(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(json_text);
        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            service: field("service"),
            message: field("message"),
        }
    }

    fn required(&self) -> Option<RequiredFields<'_>> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|v| !v.is_empty())
        }

        Some(RequiredFields {
            name: present(&self.name)?,
            email: present(&self.email)?,
            service: present(&self.service)?,
            message: present(&self.message)?,
        })
    }
}

fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Fixed addressing for contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    /// Sender, e.g. `New Sequence <contact@newsequence.com>`
    pub from: String,
    /// Internal operations address
    pub to: String,
}

impl From<&Config> for MailSettings {
    fn from(config: &Config) -> Self {
        Self {
            from: config.mail_from.clone(),
            to: config.mail_to.clone(),
        }
    }
}

/// Turns contact payloads into provider calls.
///
/// Built once at startup; holds no mutable state.
#[derive(Clone)]
pub struct ContactDispatcher {
    provider: Arc<dyn EmailProvider>,
    mail: MailSettings,
    metrics: Metrics,
}

impl ContactDispatcher {
    pub fn new(provider: Arc<dyn EmailProvider>, mail: MailSettings, metrics: Metrics) -> Self {
        Self {
            provider,
            mail,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the single email a payload turns into.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::MissingFields` if `name`, `email`, `service`
    /// or `message` is absent or empty.
    pub fn compose(&self, payload: &ContactPayload, layout: &Layout) -> DispatchResult<OutboundEmail> {
        let fields = payload.required().ok_or(DispatchError::MissingFields)?;

        let template = ContactNotification::new(
            fields.name,
            fields.email,
            payload.phone.as_deref(),
            fields.service,
            fields.message,
        );
        let rendered = template.render(layout);

        Ok(OutboundEmail {
            from: self.mail.from.clone(),
            to: vec![self.mail.to.clone()],
            cc: vec![fields.email.to_string()],
            subject: template.subject(),
            html: rendered.html,
            text: Some(rendered.text),
        })
    }

    /// Check, render and send one contact submission.
    ///
    /// No retry and no deduplication: every call that passes the presence
    /// check makes exactly one provider call.
    ///
    /// # Errors
    ///
    /// - `DispatchError::MissingFields` before any provider call
    /// - `DispatchError::Delivery` when the provider call fails
    pub async fn dispatch(&self, payload: &ContactPayload) -> DispatchResult<ProviderResponse> {
        self.metrics.record_submission();

        let email = match self.compose(payload, &Layout::current()) {
            Ok(email) => email,
            Err(e) => {
                tracing::debug!("Rejected contact submission: {}", e);
                self.metrics.record_rejected();
                return Err(e);
            }
        };

        match self.provider.send(&email).await {
            Ok(response) => {
                tracing::info!(id = %response.id, subject = %email.subject, "Contact email sent");
                self.metrics.record_email_sent();
                Ok(response)
            }
            Err(e) => {
                tracing::error!("Error sending email: {:?}", e);
                self.metrics.record_delivery_failure();
                Err(DispatchError::Delivery(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ProviderError, ProviderResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        sent: Mutex<Vec<OutboundEmail>>,
        fail: bool,
    }

    #[async_trait]
    impl EmailProvider for RecordingProvider {
        async fn send(&self, email: &OutboundEmail) -> ProviderResult<ProviderResponse> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail {
                Err(ProviderError::Unauthorized)
            } else {
                Ok(ProviderResponse::new("email_1"))
            }
        }
    }

    fn dispatcher(provider: Arc<RecordingProvider>) -> ContactDispatcher {
        ContactDispatcher::new(
            provider,
            MailSettings {
                from: "New Sequence <contact@newsequence.com>".to_string(),
                to: "team@newsequence.com".to_string(),
            },
            Metrics::new(),
        )
    }

    fn jane() -> ContactPayload {
        ContactPayload {
            name: Some("Jane".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some(String::new()),
            service: Some("photography".to_string()),
            message: Some("Interested in a shoot next week".to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_payload_sends_one_email_with_cc() {
        let provider = Arc::new(RecordingProvider::default());
        let dispatcher = dispatcher(provider.clone());

        let response = dispatcher.dispatch(&jane()).await.unwrap();
        assert_eq!(response.id, "email_1");

        let sent = provider.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, vec!["team@newsequence.com".to_string()]);
        assert_eq!(sent[0].cc, vec!["jane@example.com".to_string()]);
        assert_eq!(sent[0].subject, "New Contact Form Submission: photography");
        assert!(sent[0].html.contains("Not provided"));
    }

    #[tokio::test]
    async fn test_each_missing_field_is_rejected_without_sending() {
        let provider = Arc::new(RecordingProvider::default());
        let dispatcher = dispatcher(provider.clone());

        let variants = [
            ContactPayload { name: None, ..jane() },
            ContactPayload { email: Some(String::new()), ..jane() },
            ContactPayload { service: None, ..jane() },
            ContactPayload { message: Some(String::new()), ..jane() },
        ];

        for payload in &variants {
            let err = dispatcher.dispatch(payload).await.unwrap_err();
            assert!(matches!(err, DispatchError::MissingFields));
        }

        assert!(provider.sent.lock().unwrap().is_empty());
        assert_eq!(dispatcher.metrics().submissions_rejected_total(), 4);
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_delivery_error() {
        let provider = Arc::new(RecordingProvider {
            fail: true,
            ..Default::default()
        });
        let dispatcher = dispatcher(provider.clone());

        let err = dispatcher.dispatch(&jane()).await.unwrap_err();
        assert!(matches!(err, DispatchError::Delivery(ProviderError::Unauthorized)));
        assert_eq!(provider.sent.lock().unwrap().len(), 1);
        assert_eq!(dispatcher.metrics().delivery_failures_total(), 1);
    }

    #[tokio::test]
    async fn test_double_submit_sends_twice() {
        let provider = Arc::new(RecordingProvider::default());
        let dispatcher = dispatcher(provider.clone());

        dispatcher.dispatch(&jane()).await.unwrap();
        dispatcher.dispatch(&jane()).await.unwrap();
        assert_eq!(provider.sent.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_from_json_stringifies_and_drops_falsy_values() {
        let payload = ContactPayload::from_json(&serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "phone": 5551234,
            "service": 0,
            "message": null
        }));
        assert_eq!(payload.phone.as_deref(), Some("5551234"));
        assert_eq!(payload.service, None);
        assert_eq!(payload.message, None);
        assert!(payload.required().is_none());

        let payload = ContactPayload::from_json(&serde_json::json!(["Jane"]));
        assert_eq!(payload, ContactPayload::default());
    }

    #[test]
    fn test_presence_check_does_not_validate_format() {
        let provider = Arc::new(RecordingProvider::default());
        let payload = ContactPayload {
            name: Some("J".to_string()),
            email: Some("not-an-email".to_string()),
            message: Some("short".to_string()),
            ..jane()
        };
        let email = dispatcher(provider)
            .compose(&payload, &Layout::with_year(2025))
            .unwrap();
        assert_eq!(email.cc, vec!["not-an-email".to_string()]);
    }
}
