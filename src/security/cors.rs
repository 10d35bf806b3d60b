//! Cross-origin response headers.
//!
//! # Responsibilities
//! - Define the fixed CORS header set sent by the proxy route
//! - Attach it to every response of a route, whatever the handler returned
//!
//! # Design Decisions
//! - Header values are static; there is no per-origin allowlist
//! - Headers are set (overriding) after the handler runs, so upstream
//!   responses, error bodies and extractor rejections all carry them
//! - `CorsLayer` emits the allow-* headers on preflight only; every proxy
//!   response needs all four, so `SetResponseHeaderLayer` is used instead

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderName, HeaderValue};
use axum::routing::MethodRouter;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";
pub const ALLOW_METHODS: &str = "POST,OPTIONS";
/// One day, in seconds.
pub const MAX_AGE: &str = "86400";

/// The four headers attached to every proxy-route response.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN)),
        (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS)),
        (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS)),
        (ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE)),
    ]
}

/// Wrap every method of `route` (including its 405 fallback) so responses
/// carry the full CORS header set.
pub fn with_cors_headers<S>(route: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    cors_headers()
        .into_iter()
        .fold(route, |route, (name, value)| {
            route.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

/// Let browsers read any response of `router` cross-origin. Routes that
/// already set `Access-Control-Allow-Origin` keep their value.
pub fn allow_any_origin<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    ))
}
