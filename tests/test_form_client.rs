//! Tests for ContactFormClient against a mocked contact endpoint.

use mockito::{Matcher, Server};
use newsequence_contact::{ContactForm, ContactFormClient, FormField, SubmitError};
use serde_json::json;

fn jane() -> ContactForm {
    ContactForm {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        phone: None,
        service: "photography".to_string(),
        message: "Interested in a shoot next week".to_string(),
    }
}

#[test]
fn test_submit_posts_normalized_submission() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api/contact")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "phone": null,
            "service": "photography",
            "message": "Interested in a shoot next week"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "data": {"id": "email_1"}}"#)
        .create();

    let form = ContactForm {
        phone: Some(String::new()),
        ..jane()
    };
    let client = ContactFormClient::new(server.url());
    let receipt = client.submit(&form).unwrap();

    mock.assert();
    assert!(receipt.success);
    assert_eq!(receipt.data["id"], "email_1");
}

#[test]
fn test_invalid_form_makes_no_request() {
    let mut server = Server::new();
    let mock = server.mock("POST", "/api/contact").expect(0).create();

    let form = ContactForm {
        email: "jane@".to_string(),
        ..jane()
    };
    let client = ContactFormClient::new(server.url());

    match client.submit(&form) {
        Err(SubmitError::Invalid(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.contains(FormField::Email));
        }
        other => panic!("Expected Invalid error, got: {:?}", other),
    }
    mock.assert();
}

#[test]
fn test_server_error_is_reported_with_message() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/api/contact")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Failed to send message"}"#)
        .create();

    let client = ContactFormClient::new(server.url());
    match client.submit(&jane()) {
        Err(SubmitError::Rejected { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to send message");
        }
        other => panic!("Expected Rejected error, got: {:?}", other),
    }
}
