//! Error types for the New Sequence contact service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::form::FieldErrors;
use thiserror::Error;

/// Errors that can occur when talking to the email provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Provider error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// API key missing or rejected
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic provider error with context
    #[error("Provider error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the contact dispatcher.
///
/// Only two kinds exist: the request was missing a required field, or the
/// provider call failed. The HTTP layer maps them to fixed messages so that
/// provider details never reach the caller.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// One of `name`, `email`, `service` or `message` was absent or empty
    #[error("Missing required fields")]
    MissingFields,

    /// The request body was not JSON
    #[error("Unreadable request body: {0}")]
    UnreadableBody(String),

    /// The provider call failed
    #[error("Failed to send message: {0}")]
    Delivery(#[from] ProviderError),
}

impl DispatchError {
    /// Message returned to HTTP callers. Never includes provider details.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingFields => "Missing required fields",
            Self::UnreadableBody(_) | Self::Delivery(_) => "Failed to send message",
        }
    }
}

/// Errors returned by [`crate::form::ContactFormClient::submit`].
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form failed local validation; nothing was sent
    #[error("Form is invalid: {0}")]
    Invalid(FieldErrors),

    /// The endpoint answered with an error status
    #[error("Submission rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The endpoint could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with an unexpected body
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::Unauthorized;
        assert_eq!(err.to_string(), "Authentication failed");

        let err = ConfigError::MissingVar("RESEND_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: RESEND_API_KEY"
        );

        let err = DispatchError::MissingFields;
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_api_error_variants() {
        let err = ProviderError::ApiError {
            status: 422,
            message: "Invalid `to` field".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("Invalid `to` field"));
    }

    #[test]
    fn test_public_message_hides_provider_details() {
        let err = DispatchError::Delivery(ProviderError::ApiError {
            status: 401,
            message: "API key is invalid".to_string(),
        });
        assert_eq!(err.public_message(), "Failed to send message");
        assert!(!err.public_message().contains("API key"));
        assert_eq!(
            DispatchError::MissingFields.public_message(),
            "Missing required fields"
        );
        let err = DispatchError::UnreadableBody("expected value at line 1".to_string());
        assert_eq!(err.public_message(), "Failed to send message");
    }
}
