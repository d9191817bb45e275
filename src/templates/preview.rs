//! Sample renders of every template, served for manual preview.

use super::contact::ContactEmailProps;
use super::{
    BookingConfirmation, ContactAcknowledgment, ContactNotification, EmailTemplate, Layout,
    ProjectDelivery, RenderedEmail,
};

/// Names accepted by [`render_preview`].
pub const PREVIEW_NAMES: [&str; 4] = [
    "contact",
    "contact-client-copy",
    "booking-confirmation",
    "project-delivery",
];

fn sample_contact() -> ContactEmailProps {
    ContactEmailProps {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "+1 555 123 4567".to_string(),
        service: "photography".to_string(),
        message: "Hi, I'm interested in your photography services for an upcoming event."
            .to_string(),
    }
}

/// Render the named template with sample props, or `None` for an unknown name.
pub fn render_preview(name: &str, layout: &Layout) -> Option<RenderedEmail> {
    let email = match name {
        "contact" => ContactNotification(sample_contact()).render(layout),
        "contact-client-copy" => ContactAcknowledgment(sample_contact()).render(layout),
        "booking-confirmation" => BookingConfirmation {
            name: "Alex Johnson".to_string(),
            date: "June 5, 2025".to_string(),
            time: "2:00 PM".to_string(),
            service: "videography".to_string(),
            location: "123 Main St, San Diego, CA".to_string(),
            notes: Some(
                "Please arrive 10 minutes early and bring your storyboard notes.".to_string(),
            ),
        }
        .render(layout),
        "project-delivery" => ProjectDelivery {
            name: "Jane Doe".to_string(),
            project_name: "Modern Villa Showcase".to_string(),
            deliverables: vec![
                "Edited Photos".to_string(),
                "Drone Footage".to_string(),
                "Video Tour".to_string(),
            ],
            download_link: "https://newsequence.com/download/abc123".to_string(),
            expiry_date: "June 30, 2025".to_string(),
        }
        .render(layout),
        _ => return None,
    };
    Some(email)
}
