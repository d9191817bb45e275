//! New Sequence contact service.
//!
//! Backend for the New Sequence real-estate media site: validates contact
//! form input, accepts submissions on `POST /api/contact` and forwards each
//! one to the team through the Resend transactional email API, copying the
//! visitor on CC.
//!
//! # Architecture
//!
//! - **domain**: Value objects for email addresses, phone numbers and service codes
//! - **form**: Contact form validation and the client that posts it
//! - **templates**: Transactional email templates sharing one layout
//! - **models**: Outbound email and provider response types
//! - **provider**: Email provider capability and the Resend HTTP client
//! - **dispatcher**: Server-side presence check and provider call
//! - **server**: axum router and handlers
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **metrics**: Submission and provider call counters

pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod provider;
pub mod server;
pub mod templates;

pub use config::Config;
pub use dispatcher::{ContactDispatcher, ContactPayload, MailSettings};
pub use error::{ConfigError, DispatchError, ProviderError, SubmitError};
pub use form::{ContactForm, ContactFormClient, ContactSubmission, FieldErrors, FormField};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{OutboundEmail, ProviderResponse};
pub use provider::{AsyncResendClient, EmailProvider, ResendClient};
pub use server::{build_router, AppState};
pub use templates::{EmailTemplate, Layout, RenderedEmail};
