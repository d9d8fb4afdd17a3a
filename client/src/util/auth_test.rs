use super::*;
use crate::net::types::User;

fn ada() -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada Lovelace".to_owned(),
        avatar_url: None,
        status_message: None,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::restoring()));
}

#[test]
fn should_not_redirect_when_signed_in() {
    let state = AuthState::signed_in("tok".to_owned(), ada());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_when_user_present_but_token_missing() {
    let state = AuthState { user: Some(ada()), token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("Ada Lovelace"), "AL");
    assert_eq!(initials("grace brewster murray hopper"), "GB");
    assert_eq!(initials("  cher "), "C");
    assert_eq!(initials(""), "");
}

#[test]
fn navbar_initial_is_first_letter_only() {
    assert_eq!(first_initial("ada lovelace"), "A");
    assert_eq!(first_initial("  émile"), "É");
    assert_eq!(first_initial(""), "");
}
