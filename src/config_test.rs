use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.backend_url, "http://localhost:5000");
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 180, connect_secs: 10 });
    assert_eq!(cfg.max_upload_bytes, 26 * 1024 * 1024);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.test/"),
        ("BACKEND_REQUEST_TIMEOUT_SECS", "42"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", " 7 "),
        ("MAX_UPLOAD_BYTES", "1024"),
    ]))
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.max_upload_bytes, 1024);
}

#[test]
fn from_lookup_rejects_non_numeric_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { key: "PORT".into(), value: "eighty".into() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn from_lookup_rejects_blank_backend_url() {
    let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "  / ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyBackendUrl);
}

#[test]
fn from_lookup_rejects_non_http_backend_url() {
    let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "ftp://files")])).unwrap_err();
    assert!(matches!(err, ConfigError::BackendScheme(ref url) if url == "ftp://files"));
}

#[test]
fn trailing_slashes_are_all_trimmed() {
    assert_eq!(parse_backend_url(Some("http://backend:5000///")).unwrap(), "http://backend:5000");
}
