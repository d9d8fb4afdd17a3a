//! Account creation page with client-side checks and a strength meter.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";

/// Password strength bucket shown under the password field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Meter fill, percent.
    pub fn percent(self) -> u8 {
        match self {
            Self::Weak => 33,
            Self::Medium => 66,
            Self::Strong => 100,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Weak => "strength__fill strength__fill--weak",
            Self::Medium => "strength__fill strength__fill--medium",
            Self::Strong => "strength__fill strength__fill--strong",
        }
    }
}

/// One point each for length, mixed case, a digit and a symbol. No points
/// hides the meter.
pub fn password_strength(password: &str) -> Option<Strength> {
    let rules = [
        password.chars().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_lowercase()) && password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    match rules.iter().filter(|met| **met).count() {
        0 => None,
        1 | 2 => Some(Strength::Weak),
        3 => Some(Strength::Medium),
        _ => Some(Strength::Strong),
    }
}

/// Checks run in a fixed order; the first failure wins.
pub fn validate_signup(password: &str, confirm: &str, agreed: bool) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long");
    }
    if !agreed {
        return Err("Please agree to the Terms of Service and Privacy Policy");
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let agreed = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let strength = move || password.with(|p| password_strength(p));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let password_value = password.get_untracked();
        if let Err(message) = validate_signup(&password_value, &confirm.get_untracked(), agreed.get_untracked()) {
            error.set(Some(message.to_owned()));
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&name_value, &email_value, &password_value).await {
                    Ok((token, user)) => {
                        crate::util::auth::complete_sign_in(auth, token, user);
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.message_or(SIGNUP_FALLBACK))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"AI Hackathon Helper"</h1>
                <p class="auth-card__subtitle">"Create your account to get started"</p>
                <h2 class="auth-card__title">"Sign Up"</h2>
                <ErrorBanner message=error />
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Full Name"</span>
                        <input
                            class="input"
                            type="text"
                            required
                            placeholder="John Doe"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                    {move || {
                        strength()
                            .map(|s| {
                                view! {
                                    <div class="strength">
                                        <div class="strength__track">
                                            <div class=s.class() style=format!("width: {}%", s.percent())></div>
                                        </div>
                                        <span class="strength__label">{s.label()}</span>
                                    </div>
                                }
                            })
                    }}
                    <label class="field">
                        <span class="field__label">"Confirm Password"</span>
                        <input
                            class="input"
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || agreed.get()
                            on:change=move |ev| agreed.set(event_target_checked(&ev))
                        />
                        <span>"I agree to the Terms of Service and Privacy Policy"</span>
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
