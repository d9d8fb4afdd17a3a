use super::*;

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn task_endpoints_format_expected_paths() {
    assert_eq!(task_endpoint("t1"), "/api/tasks/t1");
    assert_eq!(subtasks_endpoint("t1"), "/api/tasks/t1/subtasks");
    assert_eq!(subtask_endpoint("s9"), "/api/subtasks/s9");
}

#[test]
fn failed_message_formats_status() {
    assert_eq!(failed_message("login", 500), "login failed: 500");
}

#[test]
fn error_from_body_prefers_backend_message() {
    let err = error_from_body("login", 401, r#"{"error": "Invalid email or password"}"#);
    assert_eq!(err, ApiError::Status { status: 401, message: "Invalid email or password".to_owned() });
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(err.is_unauthorized());
}

#[test]
fn error_from_body_falls_back_on_non_json_or_blank_error() {
    assert_eq!(error_from_body("save", 502, "<html>Bad Gateway</html>").to_string(), "save failed: 502");
    assert_eq!(error_from_body("save", 400, r#"{"error": "  "}"#).to_string(), "save failed: 400");
    assert_eq!(error_from_body("save", 400, r#"{"message": "nope"}"#).to_string(), "save failed: 400");
}

#[test]
fn rate_limit_detection_uses_status_or_text() {
    assert!(ApiError::Status { status: 429, message: "slow down".into() }.is_rate_limited());
    assert!(
        ApiError::Status { status: 500, message: "Failed to generate ideas: Rate limit exceeded".into() }
            .is_rate_limited()
    );
    assert!(ApiError::Status { status: 500, message: "upstream returned 429".into() }.is_rate_limited());
    assert!(!ApiError::Network("offline".into()).is_rate_limited());
}

#[test]
fn only_401_is_unauthorized() {
    assert!(!ApiError::Status { status: 403, message: "Forbidden".into() }.is_unauthorized());
    assert!(!ApiError::Unavailable(UNAVAILABLE_ON_SERVER.into()).is_unauthorized());
}

#[test]
fn message_or_uses_fallback_only_for_blank_text() {
    let blank = ApiError::Status { status: 400, message: "  ".into() };
    assert_eq!(blank.message_or("Login failed. Please try again."), "Login failed. Please try again.");
    let real = ApiError::Status { status: 401, message: "Invalid credentials".into() };
    assert_eq!(real.message_or("fallback"), "Invalid credentials");
    assert_eq!(ApiError::Network("offline".into()).message_or("fallback"), "network error: offline");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_stubs_report_unavailable() {
    let err = block_on_ready(list_tasks("token")).unwrap_err();
    assert_eq!(err, ApiError::Unavailable("not available on server".to_owned()));
}

/// Drive a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should resolve immediately"),
    }
}
