//! Hive Engine CORS proxy library.
//!
//! Relays browser JSON-RPC POSTs to a single upstream endpoint and adds the
//! cross-origin headers browsers need to read the answer.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
