//! Five-step questionnaire that feeds idea generation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Answers accumulate in one `RwSignal<QuestionnaireData>`. Steps 1 and 2
//! have required fields checked on "Next"; the submit re-checks them because
//! the form can be submitted from the last step only. A successful
//! `POST /api/generate-ideas` is remembered in the results context and
//! cache before navigating to `/ideas/{id}`.

#[cfg(test)]
#[path = "questionnaire_test.rs"]
mod questionnaire_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::net::types::QuestionnaireData;
use crate::pages::evaluate::team_label;
use crate::state::results::ResultsState;

pub const TOTAL_STEPS: u8 = 5;
pub const MAX_DOMAINS: usize = 3;
pub const GENERATE_FALLBACK: &str = "Failed to generate ideas";

// =============================================================================
// OPTIONS
// =============================================================================

const SKILL_LEVELS: [(&str, &str); 4] = [
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
    ("expert", "Expert"),
];

const PRIMARY_SKILLS: [(&str, &str); 7] = [
    ("Frontend Development", "Frontend Development"),
    ("Backend Development", "Backend Development"),
    ("Full Stack Development", "Full Stack Development"),
    ("Mobile Development", "Mobile Development"),
    ("Data Science / ML", "Data Science / ML"),
    ("UI/UX Design", "UI/UX Design"),
    ("DevOps / Cloud", "DevOps / Cloud"),
];

const LANGUAGES: [&str; 10] = [
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "C++",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "PHP",
];

const FRAMEWORKS: [&str; 10] = [
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "React Native",
    "Flutter",
];

const TIME_OPTIONS: [(u32, &str); 5] = [
    (12, "12 hours or less"),
    (24, "24 hours"),
    (48, "48 hours (weekend)"),
    (72, "3-4 days"),
    (168, "One week"),
];

const GOALS: [(&str, &str); 5] = [
    ("win", "Win"),
    ("learn", "Learn"),
    ("portfolio", "Portfolio"),
    ("solve_problem", "Solve problem"),
    ("network", "Network"),
];

const DOMAINS: [&str; 10] = [
    "Healthcare",
    "Education",
    "Finance",
    "Environment",
    "Social Impact",
    "Gaming",
    "E-commerce",
    "Productivity",
    "Communication",
    "Transportation",
];

const EMERGING_TECH: [&str; 6] = [
    "AI & Machine Learning",
    "Blockchain & Web3",
    "AR/VR",
    "IoT",
    "Quantum Computing",
    "5G & Edge Computing",
];

const PROJECT_TYPES: [(&str, &str); 6] = [
    ("consumer_app", "Consumer Application (B2C)"),
    ("business_tool", "Business Tool (B2B)"),
    ("developer_tool", "Developer Tool"),
    ("game", "Game or Entertainment"),
    ("data_viz", "Data Visualization"),
    ("educational", "Educational Tool"),
];

const PLATFORMS: [&str; 5] = [
    "Web application",
    "Mobile app",
    "Desktop application",
    "Browser extension",
    "API/Backend only",
];

const UI_IMPORTANCE: [(&str, &str); 4] = [
    ("very_important", "Very important - I want stunning UI"),
    ("important", "Important - Clean and professional"),
    ("medium", "Somewhat important - Functional and decent"),
    ("not_important", "Not important - Function over form"),
];

const AI_PREFERENCE: [(&str, &str); 4] = [
    ("required", "Must be AI-powered"),
    ("preferred", "AI would be great"),
    ("optional", "AI is optional"),
    ("no", "Prefer traditional programming"),
];

const AUDIENCES: [&str; 7] = [
    "Students",
    "Professionals",
    "Businesses",
    "Elderly people",
    "Children/Parents",
    "Developers",
    "General public",
];

const CHANGES: [&str; 7] = [
    "Make something more efficient",
    "Make something more accessible",
    "Create entertainment",
    "Solve environmental issue",
    "Improve health/wellness",
    "Enhance education",
    "Foster connections",
];

// =============================================================================
// FIELD ACCESS
// =============================================================================

/// Single-choice answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceField {
    SkillLevel,
    PrimarySkill,
    PrimaryGoal,
    ProjectType,
    UiImportance,
    AiPreference,
}

impl ChoiceField {
    pub fn get(self, data: &QuestionnaireData) -> &str {
        match self {
            Self::SkillLevel => &data.skill_level,
            Self::PrimarySkill => &data.primary_skill,
            Self::PrimaryGoal => &data.primary_goal,
            Self::ProjectType => &data.project_type,
            Self::UiImportance => &data.ui_importance,
            Self::AiPreference => &data.ai_preference,
        }
    }

    pub fn set(self, data: &mut QuestionnaireData, value: String) {
        let slot = match self {
            Self::SkillLevel => &mut data.skill_level,
            Self::PrimarySkill => &mut data.primary_skill,
            Self::PrimaryGoal => &mut data.primary_goal,
            Self::ProjectType => &mut data.project_type,
            Self::UiImportance => &mut data.ui_importance,
            Self::AiPreference => &mut data.ai_preference,
        };
        *slot = value;
    }

    fn input_name(self) -> &'static str {
        match self {
            Self::SkillLevel => "skill_level",
            Self::PrimarySkill => "primary_skill",
            Self::PrimaryGoal => "primary_goal",
            Self::ProjectType => "project_type",
            Self::UiImportance => "ui_importance",
            Self::AiPreference => "ai_preference",
        }
    }
}

/// Multi-select answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiField {
    Languages,
    Frameworks,
    DomainInterests,
    EmergingTech,
    Platform,
    TargetAudience,
    DesiredChange,
}

impl MultiField {
    pub fn get(self, data: &QuestionnaireData) -> &[String] {
        match self {
            Self::Languages => &data.languages,
            Self::Frameworks => &data.frameworks,
            Self::DomainInterests => &data.domain_interests,
            Self::EmergingTech => &data.emerging_tech,
            Self::Platform => &data.platform,
            Self::TargetAudience => &data.target_audience,
            Self::DesiredChange => &data.desired_change,
        }
    }

    fn get_mut(self, data: &mut QuestionnaireData) -> &mut Vec<String> {
        match self {
            Self::Languages => &mut data.languages,
            Self::Frameworks => &mut data.frameworks,
            Self::DomainInterests => &mut data.domain_interests,
            Self::EmergingTech => &mut data.emerging_tech,
            Self::Platform => &mut data.platform,
            Self::TargetAudience => &mut data.target_audience,
            Self::DesiredChange => &mut data.desired_change,
        }
    }

    /// Selection cap, if any.
    pub fn limit(self) -> Option<usize> {
        matches!(self, Self::DomainInterests).then_some(MAX_DOMAINS)
    }

    /// Add `value` if absent, remove it if present. Adding past the cap is a no-op.
    pub fn toggle(self, data: &mut QuestionnaireData, value: &str) {
        let limit = self.limit();
        let list = self.get_mut(data);
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
        } else if limit.is_none_or(|max| list.len() < max) {
            list.push(value.to_owned());
        }
    }

    /// Unselected options are locked once the cap is reached.
    pub fn is_locked(self, data: &QuestionnaireData, value: &str) -> bool {
        let list = self.get(data);
        self.limit().is_some_and(|max| list.len() >= max) && !list.iter().any(|v| v == value)
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Required fields for `step` (1-based).
pub fn validate_step(step: u8, data: &QuestionnaireData) -> Result<(), &'static str> {
    match step {
        1 if data.primary_skill.is_empty() => Err("Please select your strongest skill"),
        1 if data.languages.is_empty() => Err("Please select at least one programming language"),
        2 if data.primary_goal.is_empty() => Err("Please select your primary goal"),
        _ => Ok(()),
    }
}

pub fn validate_submission(data: &QuestionnaireData) -> Result<(), &'static str> {
    if data.primary_skill.is_empty() || data.primary_goal.is_empty() || data.languages.is_empty() {
        return Err("Please fill in all required fields");
    }
    Ok(())
}

pub fn progress_percent(step: u8) -> u32 {
    u32::from(step.min(TOTAL_STEPS)) * 100 / u32::from(TOTAL_STEPS)
}

/// Error shown above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormError {
    pub message: String,
    pub rate_limited: bool,
}

impl FormError {
    pub fn validation(message: &str) -> Self {
        Self { message: message.to_owned(), rate_limited: false }
    }

    pub fn from_api(err: &ApiError) -> Self {
        Self { message: err.message_or(GENERATE_FALLBACK), rate_limited: err.is_rate_limited() }
    }

    pub fn heading(&self) -> &'static str {
        if self.rate_limited { "API Rate Limit Reached" } else { "Error Generating Ideas" }
    }
}

// =============================================================================
// INPUT GROUPS
// =============================================================================

fn radio_group(
    data: RwSignal<QuestionnaireData>,
    field: ChoiceField,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    options
        .iter()
        .map(|(value, label)| {
            view! {
                <label class="radio radio--stacked">
                    <input
                        type="radio"
                        name=field.input_name()
                        value=*value
                        prop:checked=move || data.with(|d| field.get(d) == *value)
                        on:change=move |_| data.update(|d| field.set(d, (*value).to_owned()))
                    />
                    <span>{*label}</span>
                </label>
            }
        })
        .collect_view()
}

fn select_field(
    data: RwSignal<QuestionnaireData>,
    field: ChoiceField,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let choices = options
        .iter()
        .map(|(value, label)| {
            view! {
                <option value=*value selected=move || data.with(|d| field.get(d) == *value)>
                    {*label}
                </option>
            }
        })
        .collect_view();
    view! {
        <select class="input" on:change=move |ev| data.update(|d| field.set(d, event_target_value(&ev)))>
            <option value="" selected=move || data.with(|d| field.get(d).is_empty())>"Select..."</option>
            {choices}
        </select>
    }
}

fn checkbox_group(
    data: RwSignal<QuestionnaireData>,
    field: MultiField,
    options: &'static [&'static str],
) -> impl IntoView {
    let boxes = options
        .iter()
        .copied()
        .map(|value| {
            view! {
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || data.with(|d| field.get(d).iter().any(|v| v == value))
                        disabled=move || data.with(|d| field.is_locked(d, value))
                        on:change=move |_| data.update(|d| field.toggle(d, value))
                    />
                    {value}
                </label>
            }
        })
        .collect_view();
    view! { <div class="checkbox-grid">{boxes}</div> }
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn QuestionnairePage() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();
    let navigate = use_navigate();

    let step = RwSignal::new(1_u8);
    let data = RwSignal::new(QuestionnaireData::default());
    let error = RwSignal::new(None::<FormError>);
    let busy = RwSignal::new(false);

    let on_next = move |_| {
        if let Err(message) = data.with_untracked(|d| validate_step(step.get_untracked(), d)) {
            error.set(Some(FormError::validation(message)));
            return;
        }
        error.set(None);
        step.update(|s| *s = (*s + 1).min(TOTAL_STEPS));
    };
    let on_prev = move |_| {
        error.set(None);
        step.update(|s| *s = s.saturating_sub(1).max(1));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let answers = data.get_untracked();
        if let Err(message) = validate_submission(&answers) {
            error.set(Some(FormError::validation(message)));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::generate_ideas(&answers).await {
                    Ok(ideas) => {
                        let path = format!("/ideas/{}", ideas.id);
                        results.update(|r| r.remember_ideas(ideas));
                        navigate(&path, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("generate ideas: {e}");
                        error.set(Some(FormError::from_api(&e)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, results, answers);
            busy.set(false);
        }
    };

    let step_one = move || {
        let team = [1_u8, 2, 3, 4, 5]
            .into_iter()
            .map(|size| {
                view! {
                    <label class="radio">
                        <input
                            type="radio"
                            name="team_size"
                            prop:checked=move || data.with(|d| d.team_size == size)
                            on:change=move |_| data.update(|d| d.team_size = size)
                        />
                        {team_label(size)}
                    </label>
                }
            })
            .collect_view();
        view! {
            <h2>"About You - Technical Background"</h2>
            <div class="field">
                <span class="field__label">"What's your coding experience? *"</span>
                {radio_group(data, ChoiceField::SkillLevel, &SKILL_LEVELS)}
            </div>
            <div class="field">
                <span class="field__label">"Your strongest skill? *"</span>
                {select_field(data, ChoiceField::PrimarySkill, &PRIMARY_SKILLS)}
            </div>
            <div class="field">
                <span class="field__label">"Programming languages? * (select all that apply)"</span>
                {checkbox_group(data, MultiField::Languages, &LANGUAGES)}
            </div>
            <div class="field">
                <span class="field__label">"Frameworks you know? (optional)"</span>
                {checkbox_group(data, MultiField::Frameworks, &FRAMEWORKS)}
            </div>
            <div class="field">
                <span class="field__label">"Team size?"</span>
                <div class="radio-row">{team}</div>
            </div>
        }
    };

    let step_two = move || {
        let times = TIME_OPTIONS
            .into_iter()
            .map(|(hours, label)| {
                view! {
                    <option value=hours.to_string() selected=move || data.with(|d| d.time_available == hours)>
                        {label}
                    </option>
                }
            })
            .collect_view();
        view! {
            <h2>"Hackathon Context"</h2>
            <div class="field">
                <span class="field__label">"How much time do you have? *"</span>
                <select
                    class="input"
                    on:change=move |ev| {
                        if let Ok(hours) = event_target_value(&ev).parse::<u32>() {
                            data.update(|d| d.time_available = hours);
                        }
                    }
                >
                    {times}
                </select>
            </div>
            <label class="field">
                <span class="field__label">"Hackathon theme? (optional)"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="e.g., Healthcare Innovation, Climate Action"
                    prop:value=move || data.with(|d| d.theme.clone())
                    on:input=move |ev| data.update(|d| d.theme = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Required technologies? (optional)"</span>
                <input
                    class="input"
                    type="text"
                    placeholder="e.g., Must use OpenAI API, Blockchain required"
                    prop:value=move || data.with(|d| d.required_tech.clone())
                    on:input=move |ev| data.update(|d| d.required_tech = event_target_value(&ev))
                />
            </label>
            <div class="field">
                <span class="field__label">"What's your primary goal? *"</span>
                {radio_group(data, ChoiceField::PrimaryGoal, &GOALS)}
            </div>
        }
    };

    let step_three = move || {
        view! {
            <h2>"Interests & Passion"</h2>
            <div class="field">
                <span class="field__label">"Which domains excite you? (select up to 3)"</span>
                {checkbox_group(data, MultiField::DomainInterests, &DOMAINS)}
            </div>
            <label class="field">
                <span class="field__label">"What problems frustrate you in daily life? (optional)"</span>
                <textarea
                    class="input"
                    rows="3"
                    placeholder="Think about annoyances, inefficiencies, or challenges you face regularly..."
                    prop:value=move || data.with(|d| d.personal_frustrations.clone())
                    on:input=move |ev| data.update(|d| d.personal_frustrations = event_target_value(&ev))
                ></textarea>
            </label>
            <div class="field">
                <span class="field__label">"What emerging technologies interest you?"</span>
                {checkbox_group(data, MultiField::EmergingTech, &EMERGING_TECH)}
            </div>
        }
    };

    let step_four = move || {
        view! {
            <h2>"Project Preferences"</h2>
            <div class="field">
                <span class="field__label">"What type of project appeals to you?"</span>
                {select_field(data, ChoiceField::ProjectType, &PROJECT_TYPES)}
            </div>
            <div class="field">
                <span class="field__label">"Preferred platform?"</span>
                {checkbox_group(data, MultiField::Platform, &PLATFORMS)}
            </div>
            <div class="field">
                <span class="field__label">"How important is visual design/UI?"</span>
                {radio_group(data, ChoiceField::UiImportance, &UI_IMPORTANCE)}
            </div>
            <div class="field">
                <span class="field__label">"Do you want to use AI/ML?"</span>
                {radio_group(data, ChoiceField::AiPreference, &AI_PREFERENCE)}
            </div>
        }
    };

    let step_five = move || {
        view! {
            <h2>"Impact & Audience"</h2>
            <div class="field">
                <span class="field__label">"Who should benefit from your project?"</span>
                {checkbox_group(data, MultiField::TargetAudience, &AUDIENCES)}
            </div>
            <div class="field">
                <span class="field__label">"What change do you want to create?"</span>
                {checkbox_group(data, MultiField::DesiredChange, &CHANGES)}
            </div>
        }
    };

    let current_step = move || match step.get() {
        1 => step_one().into_any(),
        2 => step_two().into_any(),
        3 => step_three().into_any(),
        4 => step_four().into_any(),
        _ => step_five().into_any(),
    };

    view! {
        <div class="page page--narrow">
            <header class="page__header page__header--center">
                <h1>"🎯 Let's Find Your Perfect Project Idea"</h1>
                <p class="page__lead">"Answer a few questions to get personalized hackathon project ideas"</p>
            </header>

            <div class="stepper">
                <div class="stepper__labels">
                    <span>{move || format!("Step {} of {TOTAL_STEPS}", step.get())}</span>
                    <span>{move || format!("{}%", progress_percent(step.get()))}</span>
                </div>
                <div class="progress">
                    <div class="progress__fill" style=move || format!("width: {}%", progress_percent(step.get()))></div>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="error-panel" role="alert">
                                <h3 class="error-panel__heading">{err.heading()}</h3>
                                <p>{err.message.clone()}</p>
                                {err
                                    .rate_limited
                                    .then(|| {
                                        view! {
                                            <div class="error-panel__help">
                                                <p>"What you can do:"</p>
                                                <ul>
                                                    <li>"Wait 1-2 minutes and try again"</li>
                                                    <li>"The API has usage limits to prevent abuse"</li>
                                                </ul>
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}

            <form class="card form-stack" on:submit=on_submit>
                {current_step}
                <div class="form-actions form-actions--split">
                    <button type="button" class="btn" disabled=move || step.get() == 1 on:click=on_prev>
                        "← Previous"
                    </button>
                    <Show
                        when=move || step.get() < TOTAL_STEPS
                        fallback=move || {
                            view! {
                                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                                    {move || if busy.get() { "Generating Ideas..." } else { "Generate Ideas ✨" }}
                                </button>
                            }
                        }
                    >
                        <button type="button" class="btn btn--primary" on:click=on_next>
                            "Next →"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
