//! Project evaluation form with text, upload, GitHub and quick-entry tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tab ends in the same `POST /api/evaluate`. The tabs only differ in
//! how the description is produced: typed, extracted from uploaded files,
//! pulled from a repository README, or composed from three short answers.
//! The response is remembered in the results context and cache before
//! navigating to `/evaluate/results/{id}`.

#[cfg(test)]
#[path = "evaluate_test.rs"]
mod evaluate_test;

use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::{GithubRepo, ProjectEvaluationRequest};
use crate::state::results::ResultsState;

pub const MIN_DESCRIPTION_WORDS: usize = 100;
pub const MAX_UPLOAD_FILES: usize = 10;
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;
pub const EVALUATE_FALLBACK: &str = "Failed to evaluate project";

const TEAM_SIZES: [u8; 5] = [1, 2, 3, 4, 5];

// =============================================================================
// FORM MODEL
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvalTab {
    #[default]
    Text,
    Upload,
    Github,
    Quick,
}

impl EvalTab {
    pub const ALL: [Self; 4] = [Self::Text, Self::Upload, Self::Github, Self::Quick];

    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Upload => "Upload",
            Self::Github => "GitHub",
            Self::Quick => "Quick",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Text => "📝",
            Self::Upload => "📤",
            Self::Github => "🐙",
            Self::Quick => "⚡",
        }
    }
}

/// Fields shared by every tab.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalForm {
    pub name: String,
    pub tech_stack: String,
    pub theme: String,
    pub time_available: u32,
    pub team_size: u8,
}

impl Default for EvalForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            tech_stack: String::new(),
            theme: String::new(),
            time_available: 48,
            team_size: 1,
        }
    }
}

impl EvalForm {
    /// Request body for `description`; blank optional fields are omitted.
    pub fn to_request(&self, description: String) -> ProjectEvaluationRequest {
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        };
        ProjectEvaluationRequest {
            name: self.name.trim().to_owned(),
            description,
            tech_stack: optional(&self.tech_stack),
            theme: optional(&self.theme),
            time_available: self.time_available,
            team_size: self.team_size,
            github_url: None,
        }
    }
}

/// Fill description, stack and URL from a fetched repository.
pub fn apply_github(mut request: ProjectEvaluationRequest, repo: GithubRepo, url: &str) -> ProjectEvaluationRequest {
    request.description = repo.readme;
    request.tech_stack = (!repo.languages.is_empty()).then(|| repo.languages.join(", "));
    request.github_url = Some(url.trim().to_owned());
    request
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn compose_quick_description(problem: &str, solution: &str, features: &str) -> String {
    format!("Problem: {problem}\n\nSolution: {solution}\n\nKey Features:\n{features}")
}

pub fn join_upload_texts(texts: &[String]) -> String {
    texts.join("\n\n")
}

/// Final gate before `POST /api/evaluate`.
pub fn validate_evaluation(request: &ProjectEvaluationRequest) -> Result<(), String> {
    if request.name.trim().is_empty() || request.description.trim().is_empty() {
        return Err("Project name and description are required".to_owned());
    }
    let words = word_count(&request.description);
    if words < MIN_DESCRIPTION_WORDS {
        return Err(format!(
            "Description must be at least {MIN_DESCRIPTION_WORDS} words (currently {words} words)"
        ));
    }
    Ok(())
}

/// Name and byte size of a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
}

/// Which files of a new pick or drop join the selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadScreen {
    /// Indices into the incoming batch, in order.
    pub accepted: Vec<usize>,
    /// Names the rejected files; `None` when the whole batch fits.
    pub error: Option<String>,
}

/// Screen `incoming` against a selection that already holds `current` files.
///
/// Files over the size cap are rejected one by one. Once the selection
/// reaches [`MAX_UPLOAD_FILES`] the remaining files are rejected too.
pub fn screen_uploads(current: usize, incoming: &[PickedFile]) -> UploadScreen {
    let mut accepted = Vec::new();
    let mut oversized = Vec::new();
    let mut over_count = Vec::new();
    for (i, file) in incoming.iter().enumerate() {
        if file.size > MAX_UPLOAD_BYTES {
            oversized.push(file.name.as_str());
        } else if current + accepted.len() >= MAX_UPLOAD_FILES {
            over_count.push(file.name.as_str());
        } else {
            accepted.push(i);
        }
    }

    let mut problems = Vec::new();
    match oversized.as_slice() {
        [] => {}
        [one] => problems.push(format!("{one} is larger than 25 MB")),
        many => problems.push(format!("{} are larger than 25 MB", many.join(", "))),
    }
    if !over_count.is_empty() {
        problems.push(format!(
            "You can upload at most {MAX_UPLOAD_FILES} files; skipped {}",
            over_count.join(", ")
        ));
    }
    UploadScreen { accepted, error: (!problems.is_empty()).then(|| problems.join(". ")) }
}

/// `12.3 KB`, rounded to a tenth.
pub fn size_label(bytes: u64) -> String {
    let tenths = (bytes * 10 + 512) / 1024;
    format!("{}.{} KB", tenths / 10, tenths % 10)
}

pub fn team_label(size: u8) -> String {
    if size >= 5 { "5+".to_owned() } else { size.to_string() }
}

// =============================================================================
// BROWSER GLUE
// =============================================================================

/// Browser file handles, kept in pick order alongside the `PickedFile` list.
#[cfg(feature = "hydrate")]
type UploadStore = StoredValue<Vec<web_sys::File>, leptos::reactive::owner::LocalStorage>;

#[cfg(feature = "hydrate")]
fn file_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[cfg(feature = "hydrate")]
fn picked_file(file: &web_sys::File) -> PickedFile {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    PickedFile { name: file.name(), size }
}

/// Append the accepted part of a pick or drop to the selection.
#[cfg(feature = "hydrate")]
fn add_files(
    incoming: Vec<web_sys::File>,
    uploads: UploadStore,
    picked: RwSignal<Vec<PickedFile>>,
    error: RwSignal<Option<String>>,
) {
    if incoming.is_empty() {
        return;
    }
    let meta: Vec<PickedFile> = incoming.iter().map(picked_file).collect();
    let screen = screen_uploads(picked.with_untracked(Vec::len), &meta);
    let (files, meta): (Vec<_>, Vec<_>) = incoming
        .into_iter()
        .zip(meta)
        .enumerate()
        .filter(|(i, _)| screen.accepted.contains(i))
        .map(|(_, pair)| pair)
        .unzip();
    uploads.update_value(|u| u.extend(files));
    picked.update(|p| p.extend(meta));
    error.set(screen.error);
}

/// Where the description comes from, captured at submit time.
enum Source {
    Ready(String),
    #[cfg(feature = "hydrate")]
    Files(Vec<web_sys::File>),
    Github(String),
}

#[cfg(feature = "hydrate")]
async fn build_request(form: EvalForm, source: Source) -> Result<ProjectEvaluationRequest, crate::net::api::ApiError> {
    use crate::net::api;

    match source {
        Source::Ready(description) => Ok(form.to_request(description)),
        Source::Files(files) => {
            let texts = futures::future::try_join_all(files.iter().map(api::upload_file)).await?;
            Ok(form.to_request(join_upload_texts(&texts)))
        }
        Source::Github(url) => {
            let repo = api::fetch_github_repo(url.trim()).await?;
            Ok(apply_github(form.to_request(String::new()), repo, &url))
        }
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn EvaluatePage() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();
    let navigate = use_navigate();

    let tab = RwSignal::new(EvalTab::default());
    let form = RwSignal::new(EvalForm::default());
    let description = RwSignal::new(String::new());
    let github_url = RwSignal::new(String::new());
    let problem = RwSignal::new(String::new());
    let solution = RwSignal::new(String::new());
    let features = RwSignal::new(String::new());
    let picked = RwSignal::new(Vec::<PickedFile>::new());
    let file_input = NodeRef::<html::Input>::new();
    #[cfg(feature = "hydrate")]
    let uploads: UploadStore = StoredValue::new_local(Vec::new());
    let drag_active = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();
        let source = match tab.get_untracked() {
            EvalTab::Text => Source::Ready(description.get_untracked()),
            EvalTab::Quick => Source::Ready(compose_quick_description(
                &problem.get_untracked(),
                &solution.get_untracked(),
                &features.get_untracked(),
            )),
            #[cfg(feature = "hydrate")]
            EvalTab::Upload => Source::Files(uploads.get_value()),
            #[cfg(not(feature = "hydrate"))]
            EvalTab::Upload => Source::Ready(String::new()),
            EvalTab::Github => Source::Github(github_url.get_untracked()),
        };
        let early = match &source {
            Source::Ready(text) => validate_evaluation(&snapshot.to_request(text.clone())),
            Source::Github(url) if url.trim().is_empty() => Err("GitHub repository URL is required".to_owned()),
            _ if snapshot.name.trim().is_empty() => Err("Project name and description are required".to_owned()),
            _ => Ok(()),
        };
        if let Err(message) = early {
            error.set(Some(message));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match build_request(snapshot, source).await {
                    Ok(request) => match validate_evaluation(&request) {
                        Ok(()) => crate::net::api::evaluate_project(&request)
                            .await
                            .map_err(|e| e.message_or(EVALUATE_FALLBACK)),
                        Err(message) => Err(message),
                    },
                    Err(e) => Err(e.message_or(EVALUATE_FALLBACK)),
                };
                match outcome {
                    Ok(evaluation) => {
                        let path = format!("/evaluate/results/{}", evaluation.id);
                        results.update(|r| r.remember_evaluation(evaluation));
                        navigate(&path, leptos_router::NavigateOptions::default());
                    }
                    Err(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, results, snapshot, source);
            busy.set(false);
        }
    };

    let tabs = EvalTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    type="button"
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == t
                    on:click=move |_| tab.set(t)
                >
                    <span>{t.icon()}</span>
                    <span>{t.label()}</span>
                </button>
            }
        })
        .collect_view();

    let name_field = move || {
        view! {
            <label class="field">
                <span class="field__label">"Project Name *"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="e.g., HealthTrack AI"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </label>
        }
    };

    let team_options = TEAM_SIZES
        .into_iter()
        .map(|size| {
            view! {
                <label class="radio">
                    <input
                        type="radio"
                        name="team_size"
                        prop:checked=move || form.with(|f| f.team_size == size)
                        on:change=move |_| form.update(|f| f.team_size = size)
                    />
                    {team_label(size)}
                </label>
            }
        })
        .collect_view();

    let text_tab = view! {
        <div class="form-stack">
            {name_field}
            <label class="field">
                <span class="field__label">"Project Description * (minimum 100 words)"</span>
                <textarea
                    class="input input--tall"
                    placeholder="Describe your project: problem, solution, features, impact..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <span class="field__hint">{move || format!("{} words", description.with(|d| word_count(d)))}</span>
            </label>
            <label class="field">
                <span class="field__label">"Tech Stack"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="e.g., React, Node.js, PostgreSQL, OpenAI"
                    prop:value=move || form.with(|f| f.tech_stack.clone())
                    on:input=move |ev| form.update(|f| f.tech_stack = event_target_value(&ev))
                />
            </label>
            <div class="form-row">
                <label class="field">
                    <span class="field__label">"Hackathon Theme"</span>
                    <input
                        class="input"
                        type="text"
                        placeholder="e.g., Healthcare Innovation"
                        prop:value=move || form.with(|f| f.theme.clone())
                        on:input=move |ev| form.update(|f| f.theme = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Time Available (hours)"</span>
                    <input
                        class="input"
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.time_available.to_string())
                        on:input=move |ev| {
                            if let Ok(hours) = event_target_value(&ev).parse::<u32>() {
                                form.update(|f| f.time_available = hours);
                            }
                        }
                    />
                </label>
            </div>
            <div class="field">
                <span class="field__label">"Team Size"</span>
                <div class="radio-row">{team_options}</div>
            </div>
        </div>
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        {
            add_files(file_list(ev.data_transfer().and_then(|dt| dt.files())), uploads, picked, error);
        }
    };

    let on_pick = move |_: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get_untracked() {
                add_files(file_list(input.files()), uploads, picked, error);
                input.set_value("");
            }
        }
    };

    let remove_file = move |index: usize| {
        #[cfg(feature = "hydrate")]
        {
            uploads.update_value(|u| {
                if index < u.len() {
                    u.remove(index);
                }
            });
        }
        picked.update(|p| {
            if index < p.len() {
                p.remove(index);
            }
        });
    };

    let upload_tab = view! {
        <div class="form-stack">
            {name_field}
            <div
                class="dropzone"
                class:dropzone--active=move || drag_active.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
                on:click=move |_| {
                    if let Some(input) = file_input.get_untracked() {
                        input.click();
                    }
                }
            >
                <input
                    node_ref=file_input
                    class="dropzone__input"
                    type="file"
                    multiple
                    accept=".md,.txt,.pdf,.docx,.py,.js,.ts,.rs,.java,.go"
                    on:change=on_pick
                />
                <p class="dropzone__title">"Drag & drop files here, or click to browse"</p>
                <p class="dropzone__hint">"Supported: .md, .txt, .pdf, .docx, code files (.py, .js, etc.)"</p>
                <p class="dropzone__hint">"Max 10 files, 25MB each"</p>
            </div>
            <Show when=move || picked.with(|p| !p.is_empty())>
                <div class="file-list">
                    <p class="file-list__title">"Uploaded Files:"</p>
                    <For
                        each=move || picked.get().into_iter().enumerate()
                        key=|(i, f)| (*i, f.name.clone())
                        children=move |(index, file): (usize, PickedFile)| {
                            view! {
                                <div class="file-list__row">
                                    <span>{format!("{} ({})", file.name, size_label(file.size))}</span>
                                    <button
                                        type="button"
                                        class="btn btn--icon"
                                        title="Remove"
                                        on:click=move |_| remove_file(index)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    };

    let github_tab = view! {
        <div class="form-stack">
            {name_field}
            <label class="field">
                <span class="field__label">"GitHub Repository URL *"</span>
                <input
                    class="input"
                    type="url"
                    placeholder="https://github.com/username/repository"
                    prop:value=move || github_url.get()
                    on:input=move |ev| github_url.set(event_target_value(&ev))
                />
                <span class="field__hint">"We'll automatically fetch your README and detect languages"</span>
            </label>
        </div>
    };

    let quick_tab = view! {
        <div class="form-stack">
            {name_field}
            <label class="field">
                <span class="field__label">"❓ What problem does it solve?"</span>
                <textarea
                    class="input"
                    rows="3"
                    placeholder="Describe the problem your project addresses..."
                    prop:value=move || problem.get()
                    on:input=move |ev| problem.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span class="field__label">"💡 What's your solution?"</span>
                <textarea
                    class="input"
                    rows="3"
                    placeholder="Explain how your project solves the problem..."
                    prop:value=move || solution.get()
                    on:input=move |ev| solution.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span class="field__label">"🛠️ Tech stack used?"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="e.g., React, Python, Firebase"
                    prop:value=move || form.with(|f| f.tech_stack.clone())
                    on:input=move |ev| form.update(|f| f.tech_stack = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"⚡ Key features (3-5)?"</span>
                <textarea
                    class="input"
                    rows="3"
                    placeholder="List your main features..."
                    prop:value=move || features.get()
                    on:input=move |ev| features.set(event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    };

    let navigate_home = use_navigate();

    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <h1>"Evaluate Your Project"</h1>
                <p class="page__lead">"Get comprehensive AI-powered feedback on your hackathon project"</p>
            </header>
            <nav class="tabs">{tabs}</nav>
            <ErrorBanner message=error on_dismiss=Callback::new(move |()| error.set(None)) />
            <form class="card" on:submit=on_submit>
                <div class:hidden=move || tab.get() != EvalTab::Text>{text_tab}</div>
                <div class:hidden=move || tab.get() != EvalTab::Upload>{upload_tab}</div>
                <div class:hidden=move || tab.get() != EvalTab::Github>{github_tab}</div>
                <div class:hidden=move || tab.get() != EvalTab::Quick>{quick_tab}</div>
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn"
                        disabled=move || busy.get()
                        on:click=move |_| navigate_home("/", leptos_router::NavigateOptions::default())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Analyzing..." } else { "Evaluate Project →" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
