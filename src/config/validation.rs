//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. All violations are
//! collected and returned together rather than stopping at the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("listener.port must not be 0")]
    ZeroPort,

    #[error("upstream.url '{url}' is not a valid URL: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("upstream.url '{url}' must use http or https, got '{scheme}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("upstream.timeout_secs must be greater than 0 when set")]
    ZeroTimeout,

    #[error("limits.max_body_bytes must be greater than 0 when set")]
    ZeroBodyLimit,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                errors.push(ValidationError::UnsupportedScheme {
                    url: config.upstream.url.clone(),
                    scheme: url.scheme().to_string(),
                });
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_bytes == Some(0) {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
