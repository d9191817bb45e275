//! Booking confirmation email.

use super::{Body, EmailTemplate};
use crate::domain::service_label;

pub const MANAGE_BOOKING_URL: &str = "https://newsequence.com/contact";

/// Confirmation sent once a shoot has been scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub name: String,
    pub date: String,
    pub time: String,
    /// Raw service code.
    pub service: String,
    pub location: String,
    pub notes: Option<String>,
}

impl BookingConfirmation {
    fn service_display(&self) -> &str {
        service_label(&self.service)
    }
}

impl EmailTemplate for BookingConfirmation {
    fn preview_text(&self) -> String {
        format!(
            "Your {} session is confirmed for {}",
            self.service_display(),
            self.date
        )
    }

    fn heading(&self) -> String {
        "Your Booking is Confirmed".to_string()
    }

    fn write_body(&self, body: &mut Body) {
        let service = self.service_display();
        body.paragraph(&format!("Hi {},", self.name))
            .paragraph(&format!(
                "Thank you for booking a {} session with New Sequence. Your appointment has been confirmed.",
                service.to_lowercase()
            ))
            .begin_section()
            .section_header("Appointment Details:")
            .detail("Date", &self.date)
            .detail("Time", &self.time)
            .detail("Service", service)
            .detail("Location", &self.location);

        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            body.strong_paragraph("Additional Notes:").message(notes);
        }

        body.end_section()
            .paragraph(
                "We've added this appointment to your calendar. You should receive a calendar invitation shortly.",
            )
            .divider()
            .strong_paragraph("What to expect next:")
            .paragraph(
                "Our team will reach out 24-48 hours before your appointment to confirm details and answer any questions you might have.",
            )
            .paragraph(
                "Need to make changes to your booking? No problem! You can reschedule or cancel your appointment up to 48 hours in advance.",
            )
            .button(MANAGE_BOOKING_URL, "Manage Booking")
            .paragraph("We look forward to working with you!")
            .paragraph("The New Sequence Team");
    }
}
