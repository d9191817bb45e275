//! Contact form validation and submission.
//!
//! [`ContactForm`] is the candidate record a visitor fills in. Calling
//! [`ContactForm::validate`] either yields a normalized [`ContactSubmission`]
//! or a [`FieldErrors`] map naming every failing field. Validation is a pure
//! function of the input; [`ContactFormClient`] is what actually posts a
//! valid form to `/api/contact`.

mod client;
pub use client::{ContactFormClient, SubmitReceipt};

use crate::domain::{ContactPhone, EmailAddress, Service};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Fields of the contact form, used to index validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation messages keyed by field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Raw contact form input, exactly as entered.
///
/// Serializes to the JSON body expected by `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

/// A contact form that passed validation.
///
/// Lives for the duration of one request and is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub phone: ContactPhone,
    pub service: Service,
    pub message: String,
}

impl ContactForm {
    /// Validate the form, collecting an error for every failing field.
    ///
    /// # Errors
    ///
    /// Returns the field-indexed messages when any rule fails.
    pub fn validate(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.chars().count() < NAME_MIN_CHARS {
            errors.insert(FormField::Name, "Name must be at least 2 characters");
        }

        let email = EmailAddress::new(self.email.as_str());
        if email.is_err() {
            errors.insert(FormField::Email, "Please enter a valid email address");
        }

        let service = Service::parse(self.service.as_str());
        if service.is_err() {
            errors.insert(FormField::Service, "Please select a service");
        }

        if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.insert(FormField::Message, "Message must be at least 10 characters");
        }

        match (email, service) {
            (Ok(email), Ok(service)) if errors.is_empty() => Ok(ContactSubmission {
                name: self.name.clone(),
                email,
                phone: ContactPhone::from_input(self.phone.as_deref()),
                service,
                message: self.message.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some(String::new()),
            service: "photography".to_string(),
            message: "Interested in a shoot next week".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_accepted() {
        let submission = valid_form().validate().unwrap();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.email.as_str(), "jane@example.com");
        assert_eq!(submission.phone, ContactPhone::NotProvided);
        assert_eq!(submission.service, Service::Photography);
    }

    #[test]
    fn test_minimum_lengths_are_inclusive() {
        let form = ContactForm {
            name: "Jo".to_string(),
            message: "0123456789".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let form = ContactForm {
            name: "É".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.contains(FormField::Name));

        let form = ContactForm {
            name: "Ée".to_string(),
            message: "ééééééééé".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(!errors.contains(FormField::Name));
        assert!(errors.contains(FormField::Message));
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(FormField::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            errors.get(FormField::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.get(FormField::Service), Some("Please select a service"));
        assert_eq!(
            errors.get(FormField::Message),
            Some("Message must be at least 10 characters")
        );
        assert!(!errors.contains(FormField::Phone));
    }

    #[test]
    fn test_unknown_service_is_accepted_verbatim() {
        let form = ContactForm {
            service: "aerial-survey".to_string(),
            ..valid_form()
        };
        let submission = form.validate().unwrap();
        assert_eq!(submission.service.label(), "aerial-survey");
    }

    #[test]
    fn test_missing_phone_defaults_to_not_provided() {
        let form = ContactForm {
            phone: None,
            ..valid_form()
        };
        let submission = form.validate().unwrap();
        assert_eq!(submission.phone.display_value(), "Not provided");
    }

    #[test]
    fn test_field_errors_serialize_by_field_name() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Email, "Please enter a valid email address");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["email"], "Please enter a valid email address");
        assert_eq!(
            errors.to_string(),
            "email: Please enter a valid email address"
        );
    }
}
