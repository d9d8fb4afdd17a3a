//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    dashboard::DashboardPage, evaluate::EvaluatePage, evaluate_results::EvaluateResultsPage, home::HomePage,
    ideas::IdeasPage, login::LoginPage, questionnaire::QuestionnairePage, signup::SignupPage,
};
use crate::state::{auth::AuthState, results::ResultsState};
use crate::util::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and results contexts, restores the stored session and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let results = RwSignal::new(ResultsState::default());
    provide_context(auth);
    provide_context(results);

    restore_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/hackhelper.css"/>
        <Title text="Hackathon Helper"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("evaluate") view=EvaluatePage/>
                    <Route
                        path=(StaticSegment("evaluate"), StaticSegment("results"), ParamSegment("id"))
                        view=EvaluateResultsPage
                    />
                    <Route path=StaticSegment("generate") view=QuestionnairePage/>
                    <Route path=(StaticSegment("ideas"), ParamSegment("id")) view=IdeasPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Load the persisted session once in the browser, then revalidate its token.
///
/// Effects never run during SSR, so the server always renders the
/// `loading` state and hydration picks up from there.
fn restore_session(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        let state = AuthState::from_session(session::load());
        let token = state.token.clone();
        auth.set(state);

        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = token {
                leptos::task::spawn_local(revalidate_session(auth, token));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });
}

/// A 401 means the stored token is dead; anything else keeps the session.
#[cfg(feature = "hydrate")]
async fn revalidate_session(auth: RwSignal<AuthState>, token: String) {
    let still_current = |state: &AuthState| state.token.as_deref() == Some(token.as_str());
    match crate::net::api::fetch_current_user(&token).await {
        Ok(user) => {
            if still_current(&auth.get_untracked()) {
                session::save_user(&user);
                auth.update(|state| state.user = Some(user));
            }
        }
        Err(e) if e.is_unauthorized() => {
            if still_current(&auth.get_untracked()) {
                log::info!("stored session rejected, signing out");
                session::clear();
                auth.set(AuthState::default());
            }
        }
        Err(e) => log::warn!("session check: {e}"),
    }
}
