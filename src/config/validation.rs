//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - The host must be an absolute http(s) URL
//! - Timeouts must be non-zero, the user agent non-empty
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientSettings → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientSettings;

/// A single semantic problem in a settings file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("http_host '{host}' is not a valid URL: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("http_host '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("transport.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("transport.user_agent must not be empty")]
    EmptyUserAgent,
}

pub fn validate_settings(settings: &ClientSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(host) = &settings.http_host {
        match Url::parse(host) {
            Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
                errors.push(ValidationError::UnsupportedScheme(host.clone()));
            }
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::InvalidHost {
                host: host.clone(),
                reason: e.to_string(),
            }),
        }
    }

    let transport = &settings.transport;
    if transport.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeout_secs"));
    }
    if transport.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_timeout_secs"));
    }
    if transport.user_agent.trim().is_empty() {
        errors.push(ValidationError::EmptyUserAgent);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
