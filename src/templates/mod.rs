//! Transactional email templates.
//!
//! Every template renders into the shared [`Layout`] (logo header, heading,
//! company footer) and produces both an HTML and a plain-text body. Templates
//! hold no state; rendering is a pure function of the props and the layout.

pub mod booking;
pub mod contact;
pub mod delivery;
pub mod layout;
pub mod preview;

pub use booking::BookingConfirmation;
pub use contact::{ContactAcknowledgment, ContactNotification};
pub use delivery::ProjectDelivery;
pub use layout::{escape_html, Body, Layout};
pub use preview::{render_preview, PREVIEW_NAMES};

use serde::Serialize;

/// A fully rendered email document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEmail {
    /// Inbox preview line.
    pub preview: String,
    pub heading: String,
    pub html: String,
    pub text: String,
}

/// A template that renders inside the shared layout.
pub trait EmailTemplate {
    /// Inbox preview line.
    fn preview_text(&self) -> String;

    /// Heading shown above the content.
    fn heading(&self) -> String;

    /// Write the template content.
    fn write_body(&self, body: &mut Body);

    /// Render inside `layout`.
    fn render(&self, layout: &Layout) -> RenderedEmail {
        let mut body = Body::new();
        self.write_body(&mut body);
        layout.wrap(self.preview_text(), self.heading(), body)
    }
}
