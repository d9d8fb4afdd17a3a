use std::net::SocketAddr;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{any, get};

use super::*;
use crate::config::HostConfig;
use crate::routes::api_routes;

// =============================================================================
// PURE HELPERS
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/tasks/7?include=subtasks".parse().unwrap();
    assert_eq!(upstream_url("http://backend:5000", &uri), "http://backend:5000/api/tasks/7?include=subtasks");
}

#[test]
fn upstream_url_tolerates_trailing_slash_on_base() {
    let uri: Uri = "/api/auth/me".parse().unwrap();
    assert_eq!(upstream_url("http://backend:5000/", &uri), "http://backend:5000/api/auth/me");
}

#[test]
fn forwarded_headers_keeps_only_allowlisted() {
    let mut incoming = HeaderMap::new();
    incoming.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    incoming.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
    incoming.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    incoming.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(header::COOKIE).is_none());
    assert!(out.get(header::HOST).is_none());
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    let body = ProxyError::Body { status: StatusCode::PAYLOAD_TOO_LARGE, message: "too big".into() };
    assert_eq!(body.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body.to_string(), "too big");
}

// =============================================================================
// ROUND TRIP
// =============================================================================

/// Minimal stand-in for the REST backend.
fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/auth/me",
            get(|headers: HeaderMap| async move {
                match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
                    Some(auth) => (StatusCode::OK, Json(serde_json::json!({ "authorization": auth }))),
                    None => (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": "Authorization required" }))),
                }
            }),
        )
        .route(
            "/api/echo",
            any(|method: Method, uri: Uri, headers: HeaderMap, body: String| async move {
                Json(serde_json::json!({
                    "method": method.as_str(),
                    "query": uri.query(),
                    "body": body,
                    "cookie": headers.get(header::COOKIE).is_some(),
                }))
            }),
        )
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn proxy_state(backend_url: String) -> AppState {
    let config = HostConfig { backend_url, ..HostConfig::default() };
    AppState::new(&config).unwrap()
}

#[tokio::test]
async fn forwards_authorization_and_returns_backend_json() {
    let backend = serve(fake_backend()).await;
    let proxy = serve(api_routes(proxy_state(format!("http://{backend}")), 1024)).await;

    let resp = reqwest::Client::new()
        .get(format!("http://{proxy}/api/auth/me"))
        .header("Authorization", "Bearer token-123")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["authorization"], "Bearer token-123");
}

#[tokio::test]
async fn passes_backend_error_status_through() {
    let backend = serve(fake_backend()).await;
    let proxy = serve(api_routes(proxy_state(format!("http://{backend}")), 1024)).await;

    let resp = reqwest::get(format!("http://{proxy}/api/auth/me")).await.unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Authorization required");
}

#[tokio::test]
async fn forwards_method_query_and_body_but_not_cookies() {
    let backend = serve(fake_backend()).await;
    let proxy = serve(api_routes(proxy_state(format!("http://{backend}")), 1024)).await;

    let resp = reqwest::Client::new()
        .put(format!("http://{proxy}/api/echo?x=1"))
        .header("Cookie", "sid=secret")
        .body("hello")
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["query"], "x=1");
    assert_eq!(body["body"], "hello");
    assert_eq!(body["cookie"], false);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway_with_error_body() {
    let proxy = serve(api_routes(proxy_state("http://127.0.0.1:1".into()), 1024)).await;

    let resp = reqwest::get(format!("http://{proxy}/api/tasks")).await.unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("backend unavailable"));
}

#[tokio::test]
async fn oversized_body_is_rejected_before_forwarding() {
    let proxy = serve(api_routes(proxy_state("http://127.0.0.1:1".into()), 16)).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{proxy}/api/upload"))
        .body(vec![b'x'; 64])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = serve(api_routes(proxy_state("http://127.0.0.1:1".into()), 16)).await;
    let resp = reqwest::get(format!("http://{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
