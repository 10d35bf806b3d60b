//! Response construction.
//!
//! # Responsibilities
//! - Define the fixed JSON body schemas (`{msg}` and `{error}`)
//! - Serialize them explicitly with `Content-Type: application/json`
//! - Turn forward outcomes into client responses
//!
//! CORS headers are not added here; the route layers own them.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::upstream::{ForwardFailure, ForwardedResponse, DEFAULT_CONTENT_TYPE};

/// Message returned by the health route.
pub const HEALTH_MESSAGE: &str = "Hive Engine CORS Proxy running!";

/// Health route body: `{"msg": "..."}`.
#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub msg: &'static str,
}

/// Failure body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `body` as JSON with the given status.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

impl IntoResponse for ForwardedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        response.headers_mut().insert(CONTENT_TYPE, self.content_type);
        response
    }
}

impl IntoResponse for ForwardFailure {
    fn into_response(self) -> Response {
        json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ErrorBody {
                error: self.description,
            },
        )
    }
}
