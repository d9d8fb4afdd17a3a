//! Persisted browser session: the `auth_token` / `user` key pair.
//!
//! DESIGN
//! ======
//! The token is stored as a raw string and the user as JSON, matching what
//! the backend hands out at login. A pair is only usable when both halves
//! are present and the user parses; anything else is treated as logged out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Build a session from the two stored values.
pub fn parse_session(token: Option<String>, user_json: Option<&str>) -> Option<StoredSession> {
    let token = token.filter(|t| !t.trim().is_empty())?;
    let user = serde_json::from_str::<User>(user_json?).ok()?;
    Some(StoredSession { token, user })
}

/// Read the persisted session, if any.
pub fn load() -> Option<StoredSession> {
    let user_json = storage::load_raw(USER_KEY);
    parse_session(storage::load_raw(TOKEN_KEY), user_json.as_deref())
}

pub fn save(token: &str, user: &User) {
    storage::save_raw(TOKEN_KEY, token);
    storage::save_json(USER_KEY, user);
}

/// Replace only the stored user, e.g. after `/api/auth/me` refreshed it.
pub fn save_user(user: &User) {
    storage::save_json(USER_KEY, user);
}

pub fn clear() {
    storage::remove(TOKEN_KEY);
    storage::remove(USER_KEY);
}
