//! `/api/*` reverse proxy to the REST backend.
//!
//! DESIGN
//! ======
//! Requests are forwarded verbatim: same method, same path and query, same
//! body. Only the headers the backend actually reads are carried across
//! (`authorization`, `content-type`, `accept`). The backend's status,
//! `content-type` and body come back unchanged, so the browser sees exactly
//! what the backend said.
//!
//! Failures that never reach the backend are answered with the backend's
//! own error shape, `{"error": "..."}`, so the client renders them the same
//! way it renders backend errors.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the backend. Everything else stays at the host.
pub const FORWARDED_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while proxying a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or the exchange broke mid-way.
    #[error("backend unavailable: {0}")]
    Upstream(String),

    /// The backend did not answer within the request timeout.
    #[error("backend timed out")]
    Timeout,

    /// The incoming request body could not be read (too large, aborted).
    #[error("{message}")]
    Body { status: StatusCode, message: String },
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Body { status, .. } => *status,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Body { status: rejection.status(), message: rejection.body_text() }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Backend URL for an incoming request URI: `{base}{path}?{query}`.
#[must_use]
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Subset of `incoming` that is forwarded to the backend.
#[must_use]
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in incoming.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

// =============================================================================
// HANDLER
// =============================================================================

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let body = body.map_err(|rejection| {
        tracing::warn!(%method, path = uri.path(), error = %rejection, "proxy request body rejected");
        ProxyError::from(rejection)
    })?;

    let url = upstream_url(&state.backend_url, &uri);
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, path = uri.path(), error = %e, "backend request failed");
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, path = uri.path(), error = %e, "backend body read failed");
        ProxyError::from(e)
    })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
