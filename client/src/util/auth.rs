//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior,
//! and every sign-in/sign-out path must keep the signal and `localStorage`
//! in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::session;

/// True once auth has loaded and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Persist a fresh session and publish it to the auth signal.
pub fn complete_sign_in(auth: RwSignal<AuthState>, token: String, user: User) {
    session::save(&token, &user);
    auth.set(AuthState::signed_in(token, user));
}

/// Drop the local session, tell the backend (best effort) and go home.
pub fn sign_out<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    let token = auth.get_untracked().token;
    session::clear();
    auth.set(AuthState::default());

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                crate::net::api::logout(&token).await;
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = token;

    navigate("/", NavigateOptions::default());
}

/// Avatar initials: first letter of each name word, upper-cased, at most two.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Single-letter avatar for the navbar.
pub fn first_initial(name: &str) -> String {
    name.trim_start().chars().next().map(char::to_uppercase).into_iter().flatten().collect()
}
