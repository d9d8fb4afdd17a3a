//! Evaluation report for `/evaluate/results/:id`.
//!
//! DESIGN
//! ======
//! The report is resolved from the results context, falling back to the
//! `localStorage` cache, and only after the page has mounted in the browser.
//! The server therefore always renders the loading state, which keeps
//! hydration consistent with a cache the server cannot see.

#[cfg(test)]
#[path = "evaluate_results_test.rs"]
mod evaluate_results_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_banner::ErrorBanner;
use crate::components::radar_chart::RadarChart;
use crate::net::types::{EvaluationResponse, Pitch};
use crate::state::auth::AuthState;
use crate::state::results::{ResultsState, should_return_to_form};

/// How long the "Saved!" confirmation stays up.
const SAVED_NOTICE_MS: u32 = 3000;

/// `(label, modifier)` for a readiness level. Unknown levels read as demo-ready.
pub fn readiness_badge(level: &str) -> (&'static str, &'static str) {
    match level {
        "exceptional" => ("Exceptional", "exceptional"),
        "winner_potential" => ("Winner Potential", "winner_potential"),
        "competition_ready" => ("Competition-Ready", "competition_ready"),
        "early_prototype" => ("Early Prototype", "early_prototype"),
        _ => ("Demo-Ready", "demo_ready"),
    }
}

/// `code_quality` -> `code quality`.
pub fn detail_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Width of a 0-10 score bar, percent.
pub fn ten_point_percent(score: f64) -> f64 {
    (score * 10.0).clamp(0.0, 100.0)
}

/// Whole numbers without a decimal, anything else to one place.
pub fn format_score(score: f64) -> String {
    if score.fract().abs() < f64::EPSILON { format!("{score:.0}") } else { format!("{score:.1}") }
}

/// Severity modifier for `high` / `medium` / anything else.
pub fn level_class(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "high" => "high",
        "medium" => "medium",
        _ => "low",
    }
}

#[component]
pub fn EvaluateResultsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let results = expect_context::<RwSignal<ResultsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    let requested = Memo::new(move |_| params.with(|p| p.get("id")).filter(|id| !id.is_empty()));
    let evaluation = Memo::new(move |_| {
        if !mounted.get() {
            return None;
        }
        results.with(|r| r.evaluation_for(requested.get().as_deref()))
    });

    Effect::new(move || {
        if mounted.get() && should_return_to_form(evaluation.get().as_ref(), requested.get().as_deref()) {
            navigate("/evaluate", NavigateOptions::default());
        }
    });

    move || match evaluation.get() {
        Some(report) => view! { <Report report=report auth=auth /> }.into_any(),
        None if mounted.get() && requested.get().is_some() => view! {
            <div class="page page--narrow page--center">
                <h2>"Evaluation not found"</h2>
                <p class="page__lead">"This result is no longer cached in your browser."</p>
                <A href="/evaluate" attr:class="btn btn--primary">"Evaluate a Project"</A>
            </div>
        }
        .into_any(),
        None => view! { <div class="page page--center">"Loading..."</div> }.into_any(),
    }
}

#[component]
fn Report(report: EvaluationResponse, auth: RwSignal<AuthState>) -> impl IntoView {
    let navigate = use_navigate();
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let project_id = report.id.clone();
    let on_save = move |_| {
        if saving.get_untracked() || saved.get_untracked() {
            return;
        }
        let Some(token) = auth.get_untracked().bearer_token() else {
            return;
        };
        saving.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let request = crate::net::types::SaveProjectRequest::evaluation(&project_id);
            leptos::task::spawn_local(async move {
                match crate::net::api::save_project(&token, &request).await {
                    Ok(_) => {
                        saving.set(false);
                        saved.set(true);
                        crate::util::delay::sleep_ms(SAVED_NOTICE_MS).await;
                        saved.set(false);
                    }
                    Err(e) => {
                        log::warn!("save evaluation: {e}");
                        error.set(Some(e.message_or("Could not save to dashboard")));
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, &project_id);
            saving.set(false);
        }
    };

    let on_print = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        }
    };

    let (readiness, readiness_mod) = readiness_badge(&report.readiness_level);
    let scores = &report.scores;
    let stat_cards = [
        ("🎯", "Technical", scores.technical),
        ("💡", "Innovation", scores.innovation),
        ("📈", "Impact", scores.impact),
        ("✅", "Execution", scores.execution),
    ]
    .into_iter()
    .map(|(icon, label, score)| {
        view! {
            <div class="stat-card">
                <div class="stat-card__icon">{icon}</div>
                <div class="stat-card__value">{format!("{}/10", format_score(score))}</div>
                <div class="stat-card__label">{label}</div>
            </div>
        }
    })
    .collect_view();
    let radar_values = vec![scores.technical, scores.innovation, scores.impact, scores.execution];

    let detailed = scores
        .detailed
        .iter()
        .map(|(key, value)| {
            view! {
                <div class="detail-bar">
                    <span class="detail-bar__label">{detail_label(key)}</span>
                    <div class="detail-bar__track">
                        <div class="detail-bar__fill" style=format!("width: {:.0}%", ten_point_percent(*value))></div>
                    </div>
                    <span class="detail-bar__value">{format!("{}/10", format_score(*value))}</span>
                </div>
            }
        })
        .collect_view();

    let strengths = report
        .analysis
        .strengths
        .iter()
        .map(|s| {
            view! {
                <div class="finding finding--strength">
                    <h3>{s.title.clone()}</h3>
                    <p>{s.description.clone()}</p>
                    <span class=format!("finding__tag finding__tag--{}", level_class(&s.impact))>
                        {format!("{} IMPACT", s.impact.to_uppercase())}
                    </span>
                </div>
            }
        })
        .collect_view();

    let improvements = report
        .analysis
        .improvements
        .iter()
        .map(|i| {
            view! {
                <div class=format!("finding finding--improvement finding--{}", level_class(&i.priority))>
                    <div class="finding__head">
                        <h3>{i.title.clone()}</h3>
                        <span class=format!("finding__tag finding__tag--{}", level_class(&i.priority))>
                            {format!("{} PRIORITY", i.priority.to_uppercase())}
                        </span>
                    </div>
                    <p>{i.description.clone()}</p>
                </div>
            }
        })
        .collect_view();

    let quick_wins = report
        .recommendations
        .quick_wins
        .iter()
        .map(|w| {
            view! {
                <div class="quick-win">
                    <h3>{w.action.clone()}</h3>
                    <p><strong>"Why: "</strong>{w.why.clone()}</p>
                    <p><strong>"How: "</strong>{w.how.clone()}</p>
                    <p class="quick-win__time">{format!("⏱ {}", w.time_estimate)}</p>
                </div>
            }
        })
        .collect_view();

    let pitch = report.recommendations.pitch.clone().filter(|p| !p.is_empty()).map(pitch_section);
    let classification = &report.analysis.classification;
    let overall = report.overall_score;

    view! {
        <div class="page results">
            <div class="results__toolbar">
                <A href="/evaluate" attr:class="link-back">"← Back to Input"</A>
                <div class="results__actions">
                    <Show when=move || auth.with(AuthState::is_authenticated)>
                        <button
                            class="btn btn--primary"
                            class:btn--success=move || saved.get()
                            disabled=move || saving.get() || saved.get()
                            on:click=on_save.clone()
                        >
                            {move || {
                                if saving.get() {
                                    "Saving..."
                                } else if saved.get() {
                                    "Saved!"
                                } else {
                                    "Save to Dashboard"
                                }
                            }}
                        </button>
                    </Show>
                    <button
                        class="btn"
                        on:click=move |_| navigate("/evaluate", NavigateOptions::default())
                    >
                        "↻ Re-evaluate"
                    </button>
                    <button class="btn" on:click=on_print>"Export PDF"</button>
                </div>
            </div>
            <ErrorBanner message=error on_dismiss=Callback::new(move |()| error.set(None)) />

            <section class="card">
                <h1>"Evaluation Results"</h1>
                <p class="results__domain">
                    {classification.primary_domain.clone()}
                    {(!classification.tech_categories.is_empty())
                        .then(|| format!(" • {}", classification.tech_categories.join(", ")))}
                </p>
            </section>

            <section class="card score">
                <h2>"Overall Score"</h2>
                <div class="score__value">
                    <span class="score__number">{format_score(overall)}</span>
                    <span class="score__max">"/100"</span>
                </div>
                <span class=format!("badge badge--{readiness_mod}")>{readiness}</span>
                <div class="progress progress--large">
                    <div class="progress__fill" style=format!("width: {:.0}%", overall.clamp(0.0, 100.0))></div>
                </div>
            </section>

            <section class="stat-grid">{stat_cards}</section>

            <section class="card">
                <h2>"📋 Executive Summary"</h2>
                <p>{report.analysis.executive_summary.clone()}</p>
            </section>

            <section class="card">
                <h2>"📊 Detailed Scores"</h2>
                <RadarChart labels=vec!["Technical", "Innovation", "Impact", "Execution"] values=radar_values />
                <div class="detail-bars">{detailed}</div>
            </section>

            <section class="card">
                <h2>"✅ Top Strengths"</h2>
                <div class="findings">{strengths}</div>
            </section>

            <section class="card">
                <h2>"⚠️ Areas for Improvement"</h2>
                <div class="findings">{improvements}</div>
            </section>

            <section class="card">
                <h2>"⚡ Quick Wins (1-2 hours)"</h2>
                <div class="quick-wins">{quick_wins}</div>
            </section>

            {pitch}
        </div>
    }
}

fn pitch_section(pitch: Pitch) -> impl IntoView {
    let list = |items: Vec<String>| items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view();
    let questions = pitch
        .anticipated_questions
        .into_iter()
        .map(|q| {
            view! {
                <div class="pitch__qa">
                    <p class="pitch__question">{format!("Q: {}", q.question)}</p>
                    <p class="pitch__answer">{format!("A: {}", q.answer)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="card pitch">
            <h2>"🎤 Pitch Suggestions"</h2>
            <h3>"One-liner Elevator Pitch:"</h3>
            <p class="pitch__elevator">{format!("\"{}\"", pitch.elevator_pitch)}</p>
            <h3>"Key Points"</h3>
            <ul>{list(pitch.key_points)}</ul>
            <h3>"Demo Flow"</h3>
            <ol>{list(pitch.demo_flow)}</ol>
            <h3>"Anticipated Questions"</h3>
            {questions}
        </section>
    }
}
