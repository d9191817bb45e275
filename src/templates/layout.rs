//! Shared header/footer wrapper and the content builder templates write into.

use super::RenderedEmail;
use chrono::Datelike;

pub const COMPANY_NAME: &str = "New Sequence";
pub const COMPANY_TAGLINE: &str = "New Sequence | Professional Real Estate Media";
pub const COMPANY_ADDRESS: &str = "123 Photography Lane, New York, NY 10001";
pub const COMPANY_PHONE_DISPLAY: &str = "(123) 456-7890";
pub const COMPANY_PHONE_HREF: &str = "tel:+1234567890";
pub const COMPANY_EMAIL: &str = "info@newsequence.com";
pub const LOGO_URL: &str = "https://newsequence.com/images/logo.png";
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Instagram", "https://instagram.com"),
    ("Facebook", "https://facebook.com"),
    ("LinkedIn", "https://linkedin.com"),
];

const STYLE_BODY: &str = "background-color:#f6f9fc;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Helvetica,Arial,sans-serif;margin:0;padding:0";
const STYLE_CONTAINER: &str = "max-width:600px;margin:0 auto;background-color:#ffffff";
const STYLE_HEADER: &str = "background-color:#f8fafc;padding:20px 0;text-align:center;border-bottom:1px solid #e2e8f0";
const STYLE_CONTENT: &str = "padding:40px 20px";
const STYLE_HEADING: &str = "font-size:24px;font-weight:bold;color:#1e293b;margin:0 0 24px";
const STYLE_FOOTER: &str = "background-color:#f8fafc;padding:20px;border-top:1px solid #e2e8f0";
const STYLE_FOOTER_TEXT: &str = "font-size:14px;color:#64748b;margin:0 0 8px;text-align:center";
const STYLE_LINK: &str = "color:#3b82f6;text-decoration:none";
const STYLE_COPYRIGHT: &str = "font-size:12px;color:#94a3b8;text-align:center;margin:16px 0 0";
const STYLE_TEXT: &str = "font-size:16px;line-height:24px;color:#334155;margin:0 0 16px";
const STYLE_SECTION: &str = "background-color:#f8fafc;padding:16px;border-radius:4px;margin:24px 0";
const STYLE_SECTION_HEADER: &str = "font-size:18px;font-weight:bold;margin:0 0 16px;color:#1e293b";
const STYLE_DETAIL: &str = "margin:0 0 8px;font-size:15px;color:#334155";
const STYLE_MESSAGE: &str = "white-space:pre-wrap;color:#334155;font-size:15px;line-height:22px";
const STYLE_DIVIDER: &str = "border-color:#e2e8f0;margin:24px 0";
const STYLE_BUTTON: &str = "background-color:#3b82f6;border-radius:4px;color:#ffffff;font-size:16px;font-weight:bold;text-decoration:none;display:inline-block;padding:12px 24px";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Content being written by a template, kept as parallel HTML and text.
///
/// Every method escapes its arguments; templates never hand raw markup in.
#[derive(Debug, Default)]
pub struct Body {
    html: String,
    text: String,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        self.html.push_str(&format!(r#"<p style="{}">{}</p>"#, STYLE_TEXT, escape_html(text)));
        self.push_text(text);
        self
    }

    /// A paragraph with a bold lead-in, e.g. "**What's next?**".
    pub fn strong_paragraph(&mut self, text: &str) -> &mut Self {
        self.html.push_str(&format!(
            r#"<p style="{}"><strong>{}</strong></p>"#,
            STYLE_TEXT,
            escape_html(text)
        ));
        self.push_text(text);
        self
    }

    pub fn begin_section(&mut self) -> &mut Self {
        self.html.push_str(&format!(r#"<div style="{}">"#, STYLE_SECTION));
        self
    }

    pub fn end_section(&mut self) -> &mut Self {
        self.html.push_str("</div>");
        self
    }

    pub fn section_header(&mut self, text: &str) -> &mut Self {
        self.html.push_str(&format!(
            r#"<p style="{}">{}</p>"#,
            STYLE_SECTION_HEADER,
            escape_html(text)
        ));
        self.push_text(text);
        self
    }

    /// A "Label: value" row.
    pub fn detail(&mut self, label: &str, value: &str) -> &mut Self {
        self.html.push_str(&format!(
            r#"<p style="{}"><strong>{}:</strong> {}</p>"#,
            STYLE_DETAIL,
            escape_html(label),
            escape_html(value)
        ));
        self.text.push_str(&format!("{}: {}\n", label, value));
        self
    }

    /// Free text that keeps its line breaks.
    pub fn message(&mut self, text: &str) -> &mut Self {
        self.html.push_str(&format!(
            r#"<p style="{}">{}</p>"#,
            STYLE_MESSAGE,
            escape_html(text)
        ));
        self.push_text(text);
        self
    }

    pub fn list(&mut self, items: &[String]) -> &mut Self {
        self.html.push_str("<ul>");
        for item in items {
            self.html.push_str(&format!("<li>{}</li>", escape_html(item)));
            self.text.push_str(&format!("- {}\n", item));
        }
        self.html.push_str("</ul>");
        self.text.push('\n');
        self
    }

    pub fn divider(&mut self) -> &mut Self {
        self.html.push_str(&format!(r#"<hr style="{}" />"#, STYLE_DIVIDER));
        self.text.push_str("----\n\n");
        self
    }

    pub fn button(&mut self, href: &str, label: &str) -> &mut Self {
        self.html.push_str(&format!(
            r#"<div style="text-align:center;margin:32px 0 16px"><a href="{}" style="{}">{}</a></div>"#,
            escape_html(href),
            STYLE_BUTTON,
            escape_html(label)
        ));
        self.text.push_str(&format!("{}: {}\n\n", label, href));
        self
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push_str("\n\n");
    }
}

/// The shared header/footer wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    year: i32,
}

impl Layout {
    /// Layout stamped with the current year.
    pub fn current() -> Self {
        Self {
            year: chrono::Utc::now().year(),
        }
    }

    /// Layout stamped with a fixed copyright year.
    pub fn with_year(year: i32) -> Self {
        Self { year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    fn copyright(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, COMPANY_NAME)
    }

    /// Wrap template content with the header and footer.
    pub fn wrap(&self, preview: String, heading: String, body: Body) -> RenderedEmail {
        let mut html = String::with_capacity(body.html.len() + 4096);
        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\" />");
        html.push_str(&format!("<title>{}</title></head>", escape_html(&heading)));
        html.push_str(&format!(r#"<body style="{}">"#, STYLE_BODY));
        // Hidden inbox preview
        html.push_str(&format!(
            r#"<div style="display:none;max-height:0;overflow:hidden">{}</div>"#,
            escape_html(&preview)
        ));
        html.push_str(&format!(r#"<div style="{}">"#, STYLE_CONTAINER));
        html.push_str(&format!(
            r#"<div style="{}"><img src="{}" alt="{}" width="150" height="40" /></div>"#,
            STYLE_HEADER, LOGO_URL, COMPANY_NAME
        ));
        html.push_str(&format!(
            r#"<div style="{}"><h1 style="{}">{}</h1>{}</div>"#,
            STYLE_CONTENT,
            STYLE_HEADING,
            escape_html(&heading),
            body.html
        ));
        self.write_footer(&mut html);
        html.push_str("</div></body></html>");

        let mut text = String::with_capacity(body.text.len() + 512);
        text.push_str(&format!("{}\n\n{}", heading, body.text));
        text.push_str(&format!("--\n{}\n{}\n", COMPANY_TAGLINE, COMPANY_ADDRESS));
        text.push_str(&format!("{} | {}\n", COMPANY_PHONE_DISPLAY, COMPANY_EMAIL));
        text.push_str(&self.copyright());
        text.push('\n');

        RenderedEmail {
            preview,
            heading,
            html,
            text,
        }
    }

    fn write_footer(&self, html: &mut String) {
        html.push_str(&format!(
            r#"<div style="{}"><hr style="{}" />"#,
            STYLE_FOOTER,
            STYLE_DIVIDER
        ));
        html.push_str(&format!(r#"<p style="{}">{}</p>"#, STYLE_FOOTER_TEXT, COMPANY_TAGLINE));
        html.push_str(&format!(r#"<p style="{}">{}</p>"#, STYLE_FOOTER_TEXT, COMPANY_ADDRESS));
        html.push_str(&format!(
            r#"<p style="{st}"><a href="{}" style="{lk}">{}</a> | <a href="mailto:{e}" style="{lk}">{e}</a></p>"#,
            COMPANY_PHONE_HREF,
            COMPANY_PHONE_DISPLAY,
            st = STYLE_FOOTER_TEXT,
            lk = STYLE_LINK,
            e = COMPANY_EMAIL,
        ));
        html.push_str(&format!(r#"<p style="{}">"#, STYLE_FOOTER_TEXT));
        for (name, href) in SOCIAL_LINKS {
            html.push_str(&format!(
                r#"<a href="{}" style="{};margin:0 8px">{}</a>"#,
                href, STYLE_LINK, name
            ));
        }
        html.push_str("</p>");
        html.push_str(&format!(
            r#"<p style="{}">{}</p></div>"#,
            STYLE_COPYRIGHT,
            escape_html(&self.copyright())
        ));
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::current()
    }
}
