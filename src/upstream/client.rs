//! Upstream JSON-RPC client.
//!
//! # Responsibilities
//! - POST inbound bodies verbatim to the configured endpoint
//! - Force `Content-Type: application/json` on every outbound request
//! - Copy back status, body and content type
//! - Collapse every transport error into a single `ForwardFailure`

use axum::body::Bytes;
use axum::http::{header::CONTENT_TYPE, HeaderValue};
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::types::{ForwardFailure, ForwardedResponse, UpstreamError, DEFAULT_CONTENT_TYPE};

/// Client for the single upstream endpoint.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: Url,
}

impl UpstreamClient {
    /// Build a client for the configured URL. No timeout is applied unless
    /// `timeout_secs` is set.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let url = Url::parse(&config.url).map_err(|source| UpstreamError::InvalidUrl {
            url: config.url.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Forward `body` to upstream and buffer the full response.
    pub async fn forward(&self, body: Bytes) -> Result<ForwardedResponse, ForwardFailure> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        let body = response.bytes().await?;

        Ok(ForwardedResponse {
            status,
            body,
            content_type,
        })
    }
}
