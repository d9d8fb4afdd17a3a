use super::*;

#[test]
fn empty_password_has_no_rating() {
    assert_eq!(password_strength(""), None);
}

#[test]
fn strength_counts_rules() {
    // lowercase only: no rule met
    assert_eq!(password_strength("abc"), None);
    // length only
    assert_eq!(password_strength("abcdefgh"), Some(Strength::Weak));
    // length + mixed case
    assert_eq!(password_strength("abcdEFGH"), Some(Strength::Weak));
    // length + mixed case + digit
    assert_eq!(password_strength("abcdEFG1"), Some(Strength::Medium));
    assert_eq!(password_strength("abcdEF1!"), Some(Strength::Strong));
}

#[test]
fn strength_meter_values() {
    assert_eq!(Strength::Weak.percent(), 33);
    assert_eq!(Strength::Medium.percent(), 66);
    assert_eq!(Strength::Strong.percent(), 100);
    assert_eq!(Strength::Medium.label(), "Medium");
}

#[test]
fn mismatch_is_reported_before_length() {
    assert_eq!(validate_signup("short", "other", false), Err("Passwords do not match"));
}

#[test]
fn length_is_reported_before_terms() {
    assert_eq!(
        validate_signup("short", "short", false),
        Err("Password must be at least 8 characters long")
    );
}

#[test]
fn terms_must_be_accepted() {
    assert_eq!(
        validate_signup("longenough", "longenough", false),
        Err("Please agree to the Terms of Service and Privacy Policy")
    );
    assert_eq!(validate_signup("longenough", "longenough", true), Ok(()));
}
