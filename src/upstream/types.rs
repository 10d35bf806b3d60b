//! Forward outcome types and upstream error definitions.

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode};
use std::error::Error as StdError;
use thiserror::Error;

/// Content type assumed when the upstream response carries none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// A response received from upstream, copied back to the caller unchanged.
#[derive(Debug, Clone)]
pub struct ForwardedResponse {
    pub status: StatusCode,
    pub body: Bytes,
    pub content_type: HeaderValue,
}

/// Any failure while issuing the forward call or reading its response.
///
/// Causes are not distinguished; `description` is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct ForwardFailure {
    pub description: String,
}

impl ForwardFailure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<reqwest::Error> for ForwardFailure {
    // reqwest's top-level message omits the cause ("error sending request
    // for url ..."), so the source chain is folded in.
    fn from(err: reqwest::Error) -> Self {
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { description }
    }
}

/// Errors building the upstream client at startup.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
