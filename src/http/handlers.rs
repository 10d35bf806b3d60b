//! Route handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use std::time::Instant;

use crate::http::response::{json_response, HealthBody, HEALTH_MESSAGE};
use crate::http::server::AppState;

/// `GET /`
pub async fn health() -> Response {
    json_response(StatusCode::OK, &HealthBody { msg: HEALTH_MESSAGE })
}

/// `OPTIONS /he-proxy`: answered locally, never forwarded.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// `POST /he-proxy`: relay the body upstream and copy the answer back.
pub async fn forward(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let start_time = Instant::now();
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    tracing::debug!(
        request_id = %request_id,
        body_len = body.len(),
        upstream = %state.upstream.url(),
        "Forwarding request"
    );

    match state.upstream.forward(body).await {
        Ok(forwarded) => {
            tracing::debug!(
                request_id = %request_id,
                status = %forwarded.status,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Upstream responded"
            );
            forwarded.into_response()
        }
        Err(failure) => {
            tracing::warn!(
                request_id = %request_id,
                error = %failure,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "Upstream request failed"
            );
            failure.into_response()
        }
    }
}
