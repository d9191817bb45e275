//! Data models exchanged with the email provider.

pub mod email;

pub use email::{OutboundEmail, ProviderResponse};
