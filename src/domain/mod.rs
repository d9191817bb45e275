//! Domain value objects and types.
//!
//! Type-safe wrappers for the pieces of a contact submission. Value objects
//! validate at construction time so that an invalid email address or an
//! unknown service code cannot be mistaken for a checked one further down.

pub mod email;
pub mod errors;
pub mod phone;
pub mod service;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::{ContactPhone, NOT_PROVIDED};
pub use service::{service_label, Service};
