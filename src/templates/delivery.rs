//! Project delivery email.

use super::{Body, EmailTemplate};

pub const REVIEW_URL: &str = "https://newsequence.com/review";

/// Sent when edited files are ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDelivery {
    pub name: String,
    pub project_name: String,
    pub deliverables: Vec<String>,
    pub download_link: String,
    pub expiry_date: String,
}

impl EmailTemplate for ProjectDelivery {
    fn preview_text(&self) -> String {
        format!(
            "Your {} project files are ready for download",
            self.project_name
        )
    }

    fn heading(&self) -> String {
        "Your Project Files Are Ready".to_string()
    }

    fn write_body(&self, body: &mut Body) {
        body.paragraph(&format!("Hi {},", self.name))
            .paragraph(&format!(
                "Great news! Your project files for {} are now ready for download.",
                self.project_name
            ))
            .begin_section()
            .section_header("Project Deliverables:")
            .list(&self.deliverables)
            .end_section()
            .paragraph(&format!(
                "Your files will be available for download until {}.",
                self.expiry_date
            ))
            .button(&self.download_link, "Download Files")
            .divider()
            .strong_paragraph("What's next?")
            .paragraph(
                "Please review the files and let us know if you need any revisions or have any questions.",
            )
            .paragraph("If you're happy with your project, we'd love to hear your feedback!")
            .button(REVIEW_URL, "Leave a Review")
            .paragraph("Thank you for choosing New Sequence for your real estate media needs!")
            .paragraph("The New Sequence Team");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Layout;

    #[test]
    fn test_delivery_lists_every_deliverable() {
        let delivery = ProjectDelivery {
            name: "Jane Doe".to_string(),
            project_name: "Modern Villa Showcase".to_string(),
            deliverables: vec!["Edited Photos".to_string(), "Drone Footage".to_string()],
            download_link: "https://newsequence.com/download/abc123".to_string(),
            expiry_date: "June 30, 2025".to_string(),
        };
        let email = delivery.render(&Layout::with_year(2025));

        assert_eq!(
            email.preview,
            "Your Modern Villa Showcase project files are ready for download"
        );
        assert!(email.html.contains("<li>Edited Photos</li><li>Drone Footage</li>"));
        assert!(email.text.contains("- Drone Footage\n"));
        assert!(email
            .html
            .contains(r#"href="https://newsequence.com/download/abc123""#));
        assert!(email.text.contains("until June 30, 2025."));
    }
}
