//! Generated idea batch for `/ideas/:id`.
//!
//! Resolution follows the evaluation results page: context first, then the
//! `localStorage` cache, both gated on mount. Each card can be saved for
//! later or turned straight into a dashboard task; either action needs a
//! signed-in user and sends anonymous visitors to `/login`.

#[cfg(test)]
#[path = "ideas_test.rs"]
mod ideas_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::Idea;
use crate::state::auth::AuthState;
use crate::state::results::{ResultsState, should_return_to_form};

/// How long "Saved!" stays up after Save for Later.
const SAVED_NOTICE_MS: u32 = 2000;
/// Pause before Start Building moves to the dashboard.
const REDIRECT_DELAY_MS: u32 = 1000;

/// `(label, modifier)` for a 0-100 match score.
pub fn match_badge(score: u32) -> (&'static str, &'static str) {
    match score {
        90.. => ("💚 BEST MATCH", "best"),
        80..=89 => ("💛 GREAT FIT", "great"),
        70..=79 => ("🧡 GOOD FIT", "good"),
        _ => ("💙 CONSIDER", "consider"),
    }
}

/// First `n` whitespace-separated words.
pub fn leading_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

pub fn domain_label(domain: Option<&str>) -> &str {
    domain.map(str::trim).filter(|d| !d.is_empty()).unwrap_or("General")
}

/// Tech preview on a collapsed card.
pub fn tech_preview(stack: &[String]) -> String {
    stack.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveAction {
    SaveForLater,
    StartBuilding,
}

impl SaveAction {
    pub fn creates_task(self) -> bool {
        matches!(self, Self::StartBuilding)
    }
}

/// Per-card progress of a save request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    Saving(SaveAction),
    Saved(SaveAction),
    Failed(String),
}

impl SaveState {
    /// Buttons stay locked while a request is in flight or just succeeded.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Saving(_) | Self::Saved(_))
    }

    pub fn button_label(&self, action: SaveAction) -> &'static str {
        match (self, action) {
            (Self::Saving(_), _) => "Saving...",
            (Self::Saved(SaveAction::StartBuilding), SaveAction::StartBuilding) => "✓ Saved! Redirecting...",
            (Self::Saved(_), _) => "✓ Saved!",
            (_, SaveAction::StartBuilding) => "Start Building This Idea",
            (_, SaveAction::SaveForLater) => "💾 Save for Later",
        }
    }
}

#[component]
pub fn IdeasPage() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    let requested = Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()));
    let batch = Memo::new(move |_| {
        if !mounted.get() {
            return None;
        }
        results.with(|r| r.ideas_for(requested.get().as_deref()))
    });

    let back = navigate.clone();
    Effect::new(move || {
        if mounted.get() && should_return_to_form(batch.get().as_ref(), requested.get().as_deref()) {
            back("/generate", NavigateOptions::default());
        }
    });

    let selected = RwSignal::new(None::<usize>);

    move || match batch.get() {
        Some(batch) => {
            let count = batch.ideas.len();
            let cards = batch
                .ideas
                .into_iter()
                .enumerate()
                .map(|(index, idea)| {
                    view! { <IdeaCard batch_id=batch.id.clone() index=index idea=idea selected=selected /> }
                })
                .collect_view();
            let navigate = navigate.clone();
            view! {
                <div class="page ideas">
                    <div class="results__toolbar">
                        <A href="/generate" attr:class="link-back">"← Back to Questions"</A>
                        <button class="btn" on:click=move |_| navigate("/generate", NavigateOptions::default())>
                            "Generate New Ideas"
                        </button>
                    </div>
                    <header class="page__header page__header--center">
                        <h1>"🎉 Here Are Your Personalized Ideas!"</h1>
                        <p class="page__lead">
                            {format!("Based on your profile, we generated {count} tailored project ideas")}
                        </p>
                    </header>
                    <div class="ideas__list">{cards}</div>
                </div>
            }
            .into_any()
        }
        None if mounted.get() && requested.get().is_some() => view! {
            <div class="page page--narrow page--center">
                <h2>"Ideas not found"</h2>
                <p class="page__lead">"These ideas are no longer cached in your browser."</p>
                <A href="/generate" attr:class="btn btn--primary">"Generate Ideas"</A>
            </div>
        }
        .into_any(),
        None => view! { <div class="page page--center">"Loading..."</div> }.into_any(),
    }
}

#[component]
fn IdeaCard(batch_id: String, index: usize, idea: Idea, selected: RwSignal<Option<usize>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let state = RwSignal::new(SaveState::Idle);
    let expanded = move || selected.get() == Some(index);

    let save = move |action: SaveAction| {
        if state.with_untracked(SaveState::is_locked) {
            return;
        }
        let Some(token) = auth.get_untracked().bearer_token() else {
            navigate("/login", NavigateOptions::default());
            return;
        };
        state.set(SaveState::Saving(action));

        #[cfg(feature = "hydrate")]
        {
            let request = crate::net::types::SaveProjectRequest::idea(&batch_id, index, action.creates_task());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::save_project(&token, &request).await {
                    Ok(_) => {
                        state.set(SaveState::Saved(action));
                        match action {
                            SaveAction::StartBuilding => {
                                crate::util::delay::sleep_ms(REDIRECT_DELAY_MS).await;
                                navigate("/dashboard", NavigateOptions::default());
                            }
                            SaveAction::SaveForLater => {
                                crate::util::delay::sleep_ms(SAVED_NOTICE_MS).await;
                                state.set(SaveState::Idle);
                            }
                        }
                    }
                    Err(e) => {
                        log::warn!("save idea {index}: {e}");
                        let fallback = match action {
                            SaveAction::StartBuilding => "Failed to start building. Please try again.",
                            SaveAction::SaveForLater => "Failed to save idea. Please try again.",
                        };
                        state.set(SaveState::Failed(e.message_or(fallback)));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, &batch_id, REDIRECT_DELAY_MS, SAVED_NOTICE_MS);
            state.set(SaveState::Idle);
        }
    };
    let start = save.clone();
    let later = save;

    let (badge, badge_mod) = match_badge(idea.match_score);
    let stats = [
        ("Complexity", idea.feasibility.complexity.clone()),
        ("Domain", domain_label(idea.domain.as_deref()).to_owned()),
        ("Time Fit", leading_words(&idea.feasibility.time_fit, 3)),
        ("Impact", leading_words(&idea.impact.scale, 1)),
    ]
    .into_iter()
    .map(|(label, value)| {
        view! {
            <div class="idea__stat">
                <div class="idea__stat-label">{label}</div>
                <div class="idea__stat-value">{value}</div>
            </div>
        }
    })
    .collect_view();

    let statement = idea.problem.statement.clone();
    let preview = tech_preview(&idea.technical.tech_stack);
    let details = StoredValue::new(idea.clone());

    view! {
        <article
            class="card idea"
            class:idea--selected=expanded
            on:click=move |_| selected.update(|s| *s = if *s == Some(index) { None } else { Some(index) })
        >
            <div class="idea__head">
                <span class=format!("badge badge--match-{badge_mod}")>
                    {format!("{badge} ({}% fit)", idea.match_score)}
                </span>
                <h2>{idea.name.clone()}</h2>
                <p class="idea__tagline">{idea.tagline.clone()}</p>
            </div>
            <div class="idea__stats">{stats}</div>

            <Show
                when=expanded
                fallback=move || {
                    view! {
                        <div class="idea__summary">
                            <h3>"The Problem:"</h3>
                            <p class="clamp-2">{statement.clone()}</p>
                            <div class="idea__summary-foot">
                                <span>{format!("⚡ {preview}")}</span>
                                <span class="link">"View Full Details →"</span>
                            </div>
                        </div>
                    }
                }
            >
                {details.with_value(|idea| idea_details(idea.clone()))}
                <div class="idea__actions" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="btn btn--primary btn--grow"
                        class:btn--success=move || state.with(|s| *s == SaveState::Saved(SaveAction::StartBuilding))
                        disabled=move || state.with(SaveState::is_locked)
                        on:click={
                            let start = start.clone();
                            move |_| start(SaveAction::StartBuilding)
                        }
                    >
                        {move || state.with(|s| s.button_label(SaveAction::StartBuilding))}
                    </button>
                    <button
                        class="btn"
                        class:btn--success=move || state.with(|s| *s == SaveState::Saved(SaveAction::SaveForLater))
                        disabled=move || state.with(SaveState::is_locked)
                        on:click={
                            let later = later.clone();
                            move |_| later(SaveAction::SaveForLater)
                        }
                    >
                        {move || state.with(|s| s.button_label(SaveAction::SaveForLater))}
                    </button>
                </div>
                {move || match state.get() {
                    SaveState::Failed(message) => Some(view! { <p class="form-error">{message}</p> }),
                    _ => None,
                }}
            </Show>
        </article>
    }
}

fn idea_details(idea: Idea) -> impl IntoView {
    let bullets = |items: Vec<String>| items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view();
    let chips = idea
        .technical
        .tech_stack
        .into_iter()
        .map(|tech| view! { <span class="chip">{tech}</span> })
        .collect_view();
    let phases = [
        ("Phase 1", "green", idea.roadmap.phase1),
        ("Phase 2", "yellow", idea.roadmap.phase2),
        ("Phase 3", "blue", idea.roadmap.phase3),
    ]
    .into_iter()
    .map(|(label, tone, phase)| {
        view! {
            <div class=format!("phase phase--{tone}")>
                <div class="phase__head">
                    <strong>{label}</strong>
                    <span class="phase__hours">{format!("({})", phase.hours)}</span>
                </div>
                <ul>{bullets(phase.tasks)}</ul>
            </div>
        }
    })
    .collect_view();
    let wow = idea
        .wow_factors
        .into_iter()
        .map(|factor| view! { <div class="wow">{format!("⚡ {factor}")}</div> })
        .collect_view();

    view! {
        <div class="idea__details">
            <section>
                <h3>"❓ The Problem"</h3>
                <p>{idea.problem.statement}</p>
                <p class="muted"><strong>"Why it matters: "</strong>{idea.problem.why_matters}</p>
                <p class="muted"><strong>"Current gaps: "</strong>{idea.problem.current_gaps}</p>
            </section>
            <section>
                <h3>"💡 Your Solution"</h3>
                <p>{idea.solution.description}</p>
                <strong>"Key Features:"</strong>
                <ul>{bullets(idea.solution.key_features)}</ul>
                <div class="callout">
                    <strong>"Unique Value:"</strong>
                    <p>{idea.solution.value_proposition}</p>
                </div>
            </section>
            <section>
                <h3>"🛠️ Technical Approach"</h3>
                <div class="two-col">
                    <div>
                        <strong>"Tech Stack:"</strong>
                        <div class="chips">{chips}</div>
                    </div>
                    <div>
                        <strong>"Key Components:"</strong>
                        <ul>{bullets(idea.technical.components)}</ul>
                    </div>
                </div>
                <strong>"Architecture:"</strong>
                <p>{idea.technical.architecture}</p>
            </section>
            <section>
                <h3>"⏱️ Implementation Roadmap"</h3>
                <div class="phases">{phases}</div>
            </section>
            <section>
                <h3>"✨ Wow Factors"</h3>
                <div class="wow-grid">{wow}</div>
            </section>
        </div>
    }
}
