use super::*;

const USER_JSON: &str = r#"{"id":"u1","email":"ada@example.com","name":"Ada Lovelace","avatar_url":null}"#;

#[test]
fn parse_session_requires_both_halves() {
    assert!(parse_session(None, Some(USER_JSON)).is_none());
    assert!(parse_session(Some("tok".to_owned()), None).is_none());
}

#[test]
fn parse_session_rejects_blank_token_and_bad_user() {
    assert!(parse_session(Some("  ".to_owned()), Some(USER_JSON)).is_none());
    assert!(parse_session(Some("tok".to_owned()), Some("{not json")).is_none());
    assert!(parse_session(Some("tok".to_owned()), Some(r#"{"id":"u1"}"#)).is_none());
}

#[test]
fn parse_session_builds_stored_pair() {
    let session = parse_session(Some("tok".to_owned()), Some(USER_JSON)).unwrap();
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.name, "Ada Lovelace");
    assert_eq!(session.user.status_message, None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_is_empty_outside_browser() {
    save("tok", &parse_session(Some("tok".to_owned()), Some(USER_JSON)).unwrap().user);
    assert!(load().is_none());
    clear();
}
