//! Inline error banner used by forms and the dashboard.

use leptos::prelude::*;

/// Renders `message` when present. With `on_dismiss`, shows a close button.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{move || message.get().unwrap_or_default()}</span>
                {on_dismiss
                    .map(|cb| {
                        view! {
                            <button
                                class="error-banner__close"
                                aria-label="Dismiss"
                                on:click=move |_| cb.run(())
                            >
                                "✕"
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}
