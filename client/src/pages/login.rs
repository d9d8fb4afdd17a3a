//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;

pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

/// Trimmed `(email, password)`, or the message to show.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(pair) => pair,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok((token, user)) => {
                        crate::util::auth::complete_sign_in(auth, token, user);
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.message_or(LOGIN_FALLBACK))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"AI Hackathon Helper"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your projects"</p>
                <h2 class="auth-card__title">"Welcome Back"</h2>
                <ErrorBanner message=error />
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email Address"</span>
                        <input
                            class="input"
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="input"
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-card__divider">"or"</div>
                <A href="/" attr:class="btn btn--block">"Continue as Guest"</A>
                <p class="auth-card__switch">
                    "Don't have an account? " <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
