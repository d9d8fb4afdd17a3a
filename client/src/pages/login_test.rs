use super::*;

#[test]
fn validate_login_trims_email() {
    assert_eq!(
        validate_login("  user@example.com ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("   ", "secret"), Err("Email and password are required"));
    assert_eq!(validate_login("a@b.com", ""), Err("Email and password are required"));
}

#[test]
fn password_is_not_trimmed() {
    assert_eq!(validate_login("a@b.com", " pw "), Ok(("a@b.com".to_owned(), " pw ".to_owned())));
}
