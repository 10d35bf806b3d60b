//! Shared utilities for integration testing.

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Response,
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use he_cors_proxy::{HttpServer, ProxyConfig, Shutdown};

/// A request as the mock upstream saw it.
#[derive(Debug, Clone)]
pub struct Captured {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// What the mock upstream should answer with.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
    pub delay: Option<Duration>,
}

impl Canned {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: Some("application/json; charset=utf-8"),
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }
}

#[derive(Clone)]
struct MockState {
    captured: Arc<Mutex<Vec<Captured>>>,
    canned: Canned,
}

/// Start a programmable mock upstream on an ephemeral port, serving
/// `POST /rpc`. Returns its address and the log of received requests.
pub async fn start_mock_upstream(canned: Canned) -> (SocketAddr, Arc<Mutex<Vec<Captured>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        captured: captured.clone(),
        canned,
    };

    let app = Router::new()
        .route("/rpc", post(mock_rpc))
        .with_state(state)
        .layer(DefaultBodyLimit::disable());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, captured)
}

async fn mock_rpc(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    state.captured.lock().unwrap().push(Captured {
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    if let Some(delay) = state.canned.delay {
        tokio::time::sleep(delay).await;
    }

    let mut builder = Response::builder().status(StatusCode::from_u16(state.canned.status).unwrap());
    if let Some(content_type) = state.canned.content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(state.canned.body.clone())).unwrap()
}

/// An address with nothing listening on it.
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// A proxy configuration forwarding to `upstream`'s `/rpc`.
pub fn config_for(upstream: SocketAddr) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.upstream.url = format!("http://{}/rpc", upstream);
    config
}

/// Start the proxy on an ephemeral port. Keep the returned `Shutdown`
/// alive for as long as the proxy should run; the handle resolves once
/// the server has stopped.
pub async fn start_proxy(config: ProxyConfig) -> (SocketAddr, Shutdown, JoinHandle<()>) {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown, handle)
}

/// Client that never goes through an environment HTTP proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Assert the four CORS headers are present with their exact values.
pub fn assert_cors_headers(headers: &reqwest::header::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type,Authorization");
    assert_eq!(headers["access-control-allow-methods"], "POST,OPTIONS");
    assert_eq!(headers["access-control-max-age"], "86400");
}

