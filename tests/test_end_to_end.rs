//! Full pipeline: form client -> HTTP server -> dispatcher -> Resend client,
//! with the Resend API mocked by mockito.

use mockito::Matcher;
use newsequence_contact::server::{build_router, AppState};
use newsequence_contact::{
    AsyncResendClient, Config, ContactDispatcher, ContactForm, ContactFormClient, EmailProvider,
    MailSettings, Metrics, ResendClient, SubmitError,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

async fn spawn_site(resend_url: String, metrics: Metrics) -> SocketAddr {
    let config = Config {
        resend_api_url: resend_url,
        resend_api_key: "re_test_key".to_string(),
        ..Config::default()
    };
    let resend = ResendClient::new(&config, metrics.clone());
    let provider = Arc::new(AsyncResendClient::new(resend)) as Arc<dyn EmailProvider>;
    let dispatcher = ContactDispatcher::new(
        provider,
        MailSettings {
            from: "New Sequence <contact@newsequence.com>".to_string(),
            to: "team@newsequence.com".to_string(),
        },
        metrics,
    );
    let app = build_router(Arc::new(AppState { dispatcher }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

fn jane() -> ContactForm {
    ContactForm {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        phone: Some(String::new()),
        service: "photography".to_string(),
        message: "Interested in a shoot next week".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn form_submission_reaches_provider_with_cc() {
    let mut resend = mockito::Server::new_async().await;
    let mock = resend
        .mock("POST", "/emails")
        .match_header("authorization", "Bearer re_test_key")
        .match_body(Matcher::PartialJson(json!({
            "to": ["team@newsequence.com"],
            "cc": ["jane@example.com"],
            "subject": "New Contact Form Submission: photography"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "49a3999c"}"#)
        .expect(1)
        .create_async()
        .await;

    let metrics = Metrics::new();
    let addr = spawn_site(resend.url(), metrics.clone()).await;

    let client = ContactFormClient::new(format!("http://{}", addr));
    let receipt = tokio::task::spawn_blocking(move || client.submit(&jane()))
        .await
        .expect("join")
        .expect("submit");

    mock.assert_async().await;
    assert!(receipt.success);
    assert_eq!(receipt.data["id"], "49a3999c");
    assert_eq!(metrics.emails_sent_total(), 1);
    assert_eq!(metrics.http_requests_total(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bad_credentials_surface_as_generic_failure() {
    let mut resend = mockito::Server::new_async().await;
    let _mock = resend
        .mock("POST", "/emails")
        .with_status(401)
        .with_body(r#"{"message": "API key is invalid"}"#)
        .create_async()
        .await;

    let metrics = Metrics::new();
    let addr = spawn_site(resend.url(), metrics.clone()).await;

    let client = ContactFormClient::new(format!("http://{}", addr));
    let result = tokio::task::spawn_blocking(move || client.submit(&jane()))
        .await
        .expect("join");

    match result {
        Err(SubmitError::Rejected { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to send message");
        }
        other => panic!("Expected Rejected error, got: {:?}", other),
    }
    assert_eq!(metrics.delivery_failures_total(), 1);
}
