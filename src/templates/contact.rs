//! Contact form emails: the team notification and the client copy.

use super::{Body, EmailTemplate};
use crate::domain::{service_label, ContactPhone};

pub const PORTFOLIO_URL: &str = "https://newsequence.com/gallery";
pub const SUPPORT_PHONE: &str = "+31 6 19826246";

/// Props shared by both contact templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmailProps {
    pub name: String,
    pub email: String,
    /// Already defaulted; "Not provided" when the visitor left it blank.
    pub phone: String,
    /// Raw service code.
    pub service: String,
    pub message: String,
}

impl ContactEmailProps {
    fn service_display(&self) -> &str {
        service_label(&self.service)
    }
}

/// Email sent to the team for each contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotification(pub ContactEmailProps);

impl ContactNotification {
    /// Build from loosely checked fields; an empty phone becomes "Not provided".
    pub fn new(name: &str, email: &str, phone: Option<&str>, service: &str, message: &str) -> Self {
        Self(ContactEmailProps {
            name: name.to_string(),
            email: email.to_string(),
            phone: ContactPhone::from_input(phone).display_value().to_string(),
            service: service.to_string(),
            message: message.to_string(),
        })
    }

    /// Subject line; carries the raw service code.
    pub fn subject(&self) -> String {
        format!("New Contact Form Submission: {}", self.0.service)
    }
}

impl EmailTemplate for ContactNotification {
    fn preview_text(&self) -> String {
        format!("New contact form submission from {}", self.0.name)
    }

    fn heading(&self) -> String {
        "New Contact Form Submission".to_string()
    }

    fn write_body(&self, body: &mut Body) {
        let p = &self.0;
        body.paragraph("You have received a new message from your website contact form.")
            .begin_section()
            .section_header("Contact Details:")
            .detail("Name", &p.name)
            .detail("Email", &p.email)
            .detail("Phone", &p.phone)
            .detail("Service Interested In", p.service_display())
            .end_section()
            .divider()
            .begin_section()
            .section_header("Message:")
            .message(&p.message)
            .end_section()
            .button(&format!("mailto:{}", p.email), &format!("Reply to {}", p.name));
    }
}

/// Acknowledgment variant addressed to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAcknowledgment(pub ContactEmailProps);

impl EmailTemplate for ContactAcknowledgment {
    fn preview_text(&self) -> String {
        "Thank you for contacting New Sequence".to_string()
    }

    fn heading(&self) -> String {
        "Thank You for Contacting Us".to_string()
    }

    fn write_body(&self, body: &mut Body) {
        let p = &self.0;
        let service = p.service_display();
        body.paragraph(&format!("Hi {},", p.name))
            .paragraph(&format!(
                "Thank you for reaching out to New Sequence. We've received your inquiry about our {} services.",
                service.to_lowercase()
            ))
            .paragraph(
                "Our team will review your message and get back to you as soon as possible, usually within 1-2 business days.",
            )
            .paragraph("Here's a summary of the information you provided:")
            .begin_section()
            .detail("Service Requested", service)
            .strong_paragraph("Message:")
            .message(&p.message)
            .end_section()
            .paragraph(&format!(
                "If you need immediate assistance, please don't hesitate to call at {}.",
                SUPPORT_PHONE
            ))
            .button(PORTFOLIO_URL, "View Our Portfolio");
    }
}
