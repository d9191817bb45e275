//! New Sequence contact service - Main entry point
//!
//! Loads configuration, builds the Resend client and the contact dispatcher
//! once, then serves the HTTP API until interrupted.

use anyhow::Result;
use newsequence_contact::server::{run_server, AppState};
use newsequence_contact::{
    AsyncResendClient, Config, ContactDispatcher, EmailProvider, MailSettings, Metrics,
    ResendClient,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (RUST_LOG wins over LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");
    info!(
        "Starting contact service with provider URL: {}",
        config.resend_api_url
    );
    if config.api_key_missing() {
        warn!("RESEND_API_KEY is not set; contact submissions will fail to send");
    }

    let metrics = Metrics::new();
    let resend = ResendClient::new(&config, metrics.clone());
    let provider = Arc::new(AsyncResendClient::new(resend)) as Arc<dyn EmailProvider>;
    let dispatcher = ContactDispatcher::new(provider, MailSettings::from(&config), metrics.clone());

    let state = Arc::new(AppState { dispatcher });

    if let Err(e) = run_server(state, config.bind_addr).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    let summary = metrics.summary();
    info!(
        submissions = summary.submissions_total,
        rejected = summary.submissions_rejected_total,
        sent = summary.emails_sent_total,
        failed = summary.delivery_failures_total,
        provider_avg_ms = summary.http_duration_avg_ms,
        "Contact service shutdown complete"
    );
    Ok(())
}
