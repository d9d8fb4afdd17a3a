//! Dashboard profile card for the signed-in user.

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::auth::initials;

pub const DEFAULT_STATUS: &str = "Ready to build amazing projects!";

#[component]
pub fn UserProfile(#[prop(into)] user: Signal<Option<User>>) -> impl IntoView {
    move || {
        user.get().map(|user| {
            let status = user
                .status_message
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_owned());
            view! {
                <div class="profile-card">
                    <div class="profile-card__avatar">
                        <span>{initials(&user.name)}</span>
                        <span class="profile-card__online"></span>
                    </div>
                    <h3 class="profile-card__name">{user.name.clone()}</h3>
                    <p class="profile-card__email">{user.email.clone()}</p>
                    <p class="profile-card__status">{status}</p>
                </div>
            }
        })
    }
}
