//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, body limit, CORS headers)
//! - Serve on a listener until shutdown

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ProxyConfig;
use crate::http::handlers;
use crate::lifecycle::shutdown::shutdown_requested;
use crate::security::cors;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Path browsers POST JSON-RPC payloads to.
pub const PROXY_PATH: &str = "/he-proxy";

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("upstream setup failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ServerError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        let router = Self::build_router(&config, AppState { upstream });

        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        let proxy_route = cors::with_cors_headers(
            post(handlers::forward).options(handlers::preflight),
        );

        let body_limit = match config.limits.max_body_bytes {
            Some(max) => DefaultBodyLimit::max(max),
            None => DefaultBodyLimit::disable(),
        };

        let router = Router::new()
            .route("/", get(handlers::health))
            .route(PROXY_PATH, proxy_route)
            .with_state(state)
            .layer(body_limit);

        cors::allow_any_origin(router)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// A clone of the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires or the process receives a termination signal.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_requested(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    fn test_server() -> HttpServer {
        let mut config = ProxyConfig::default();
        // Port 9 (discard) on localhost: nothing should ever be sent there.
        config.upstream.url = "http://127.0.0.1:9/rpc".into();
        config.upstream.timeout_secs = Some(2);
        config.limits.max_body_bytes = Some(16);
        HttpServer::new(config).unwrap()
    }

    fn assert_cors(headers: &header::HeaderMap) {
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type,Authorization"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST,OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    }

    #[tokio::test]
    async fn health_route_returns_fixed_json() {
        let response = test_server()
            .router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(response.headers().contains_key("x-request-id"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "msg": "Hive Engine CORS Proxy running!" }));
    }

    #[tokio::test]
    async fn preflight_is_answered_locally() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(PROXY_PATH)
            .header(header::ORIGIN, "https://example.org")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::from("ignored"))
            .unwrap();

        let response = test_server().router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_cors(response.headers());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn unsupported_method_still_carries_cors_headers() {
        let response = test_server()
            .router()
            .oneshot(Request::get(PROXY_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_cors(response.headers());
    }

    #[tokio::test]
    async fn oversized_body_is_rejected_with_cors_headers() {
        let request = Request::post(PROXY_PATH)
            .body(Body::from(vec![b'x'; 64]))
            .unwrap();

        let response = test_server().router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_cors(response.headers());
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let response = test_server()
            .router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
