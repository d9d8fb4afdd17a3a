//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. Route guards read it to
//! decide on login redirects, REST callers read the bearer token from it, and
//! the navbar renders identity from it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::session::StoredSession;

/// Authentication state tracking the current user, its token and whether the
/// stored session is still being restored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// State before the persisted session has been read.
    #[must_use]
    pub fn restoring() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Loaded state built from whatever the browser had stored.
    #[must_use]
    pub fn from_session(session: Option<StoredSession>) -> Self {
        match session {
            Some(StoredSession { token, user }) => Self::signed_in(token, user),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn signed_in(token: String, user: User) -> Self {
        Self { user: Some(user), token: Some(token), loading: false }
    }

    /// Both halves must be present; a token without a user is not a session.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Bearer token for authenticated calls, when signed in.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        if self.is_authenticated() { self.token.clone() } else { None }
    }
}
