//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, body limit)
//!     → handlers.rs
//!         GET  /          → static health JSON
//!         OPTIONS /he-proxy → 204, answered locally
//!         POST /he-proxy  → upstream client
//!     → response.rs (JSON bodies, forwarded response)
//!     → security::cors (CORS headers on the proxy route)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer, ServerError, PROXY_PATH};
