//! Configuration management for the contact service.
//!
//! Configuration is read once at startup from environment variables (and a
//! `.env` file when present) and is read-only afterwards.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM: &str = "New Sequence <contact@newsequence.com>";
pub const DEFAULT_TO: &str = "team@newsequence.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the contact service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resend API base URL
    pub resend_api_url: String,

    /// Resend API key. Empty when unset; delivery then fails per request.
    pub resend_api_key: String,

    /// Sender of contact notifications
    pub mail_from: String,

    /// Internal address that receives contact notifications
    pub mail_to: String,

    /// Address the HTTP server binds to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RESEND_API_KEY`: Provider API key (not validated up front)
    /// - `RESEND_API_URL`: Provider base URL (default: https://api.resend.com)
    /// - `CONTACT_FROM`: Sender address (default: New Sequence <contact@newsequence.com>)
    /// - `CONTACT_TO`: Internal recipient (default: team@newsequence.com)
    /// - `BIND_ADDR`: Listen address (default: 0.0.0.0:3000)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let resend_api_key = env::var("RESEND_API_KEY").unwrap_or_default();

        let resend_api_url =
            env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !resend_api_url.starts_with("http://") && !resend_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "RESEND_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let mail_from = env::var("CONTACT_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string());
        if mail_from.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FROM".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let mail_to = env::var("CONTACT_TO").unwrap_or_else(|_| DEFAULT_TO.to_string());
        if !EmailAddress::is_valid(&mail_to) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_TO".to_string(),
                reason: format!("Must be a valid email address, got: {}", mail_to),
            });
        }

        let bind_addr = Self::parse_bind_addr()?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", DEFAULT_TIMEOUT_SECS)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            resend_api_url,
            resend_api_key,
            mail_from,
            mail_to,
            bind_addr,
            request_timeout,
            log_level,
        })
    }

    /// True when no provider key was configured.
    pub fn api_key_missing(&self) -> bool {
        self.resend_api_key.trim().is_empty()
    }

    fn parse_bind_addr() -> ConfigResult<SocketAddr> {
        let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        raw.parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("Must be a socket address like 0.0.0.0:3000, got: {}", raw),
            })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            resend_api_url: DEFAULT_API_URL.to_string(),
            resend_api_key: String::new(),
            mail_from: DEFAULT_FROM.to_string(),
            mail_to: DEFAULT_TO.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            request_timeout: DEFAULT_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}
