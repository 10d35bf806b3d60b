//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! POST /he-proxy body (raw bytes)
//!     → client.rs (POST to upstream, Content-Type forced to JSON)
//!     → Ok(ForwardedResponse { status, body, content_type })
//!     → Err(ForwardFailure { description })
//! ```

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{ForwardFailure, ForwardedResponse, UpstreamError, DEFAULT_CONTENT_TYPE};
