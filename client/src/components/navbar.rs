//! Top navigation bar with auth-aware links and a mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{first_initial, sign_out};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let authenticated = move || auth.get().is_authenticated();
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let close_menu = move |_: leptos::ev::MouseEvent| menu_open.set(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        sign_out(auth, &navigate);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <span class="navbar__logo">"🚀"</span>
                    <span>"AI Hackathon Helper"</span>
                </A>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    <A href="/" attr:class="navbar__link" on:click=close_menu>"Home"</A>
                    <A href="/evaluate" attr:class="navbar__link" on:click=close_menu>"Evaluate Project"</A>
                    <A href="/generate" attr:class="navbar__link" on:click=close_menu>"Generate Ideas"</A>
                    <Show when=authenticated>
                        <A href="/dashboard" attr:class="navbar__link" on:click=close_menu>"Dashboard"</A>
                    </Show>
                    <Show
                        when=authenticated
                        fallback=move || {
                            view! {
                                <A href="/login" attr:class="navbar__link" on:click=close_menu>"Login"</A>
                                <A href="/signup" attr:class="btn btn--primary" on:click=close_menu>"Sign Up"</A>
                            }
                        }
                    >
                        <span class="navbar__user">
                            <span class="avatar avatar--small">{move || first_initial(&user_name())}</span>
                            <span>{user_name}</span>
                        </span>
                        <button class="btn btn--secondary" on:click=on_logout.clone()>"Logout"</button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
