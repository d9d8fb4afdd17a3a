use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        avatar_url: None,
        status_message: None,
    }
}

#[test]
fn restoring_state_is_loading_and_anonymous() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn from_session_none_is_loaded_and_signed_out() {
    let state = AuthState::from_session(None);
    assert_eq!(state, AuthState::default());
    assert!(!state.loading);
}

#[test]
fn from_session_some_is_authenticated() {
    let state = AuthState::from_session(Some(StoredSession { token: "tok".to_owned(), user: user() }));
    assert!(state.is_authenticated());
    assert_eq!(state.bearer_token().as_deref(), Some("tok"));
}

#[test]
fn token_without_user_is_not_authenticated() {
    let state = AuthState { user: None, token: Some("tok".to_owned()), loading: false };
    assert!(!state.is_authenticated());
    assert_eq!(state.bearer_token(), None);
}
