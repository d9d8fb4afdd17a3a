//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON. Anything the backend may omit is either
//! `Option` or `#[serde(default)]`, so one missing field degrades a single
//! widget instead of failing the whole screen.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// AUTH
// =============================================================================

/// Authenticated user identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
}

/// Body of a successful `POST /api/auth/login` or `/api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// =============================================================================
// TASKS
// =============================================================================

/// Kanban column a task sits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Draft,
    InProgress,
    Editing,
    Done,
}

impl TaskStatus {
    /// Board column order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::InProgress, Self::Editing, Self::Done];

    /// Wire value, as used in `PUT /api/tasks/:id`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Editing => "editing",
            Self::Done => "done",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    #[must_use]
    pub fn column_title(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::InProgress => "IN PROGRESS",
            Self::Editing => "EDITING",
            Self::Done => "DONE",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Main,
    #[default]
    Secondary,
    Tertiary,
}

impl TaskPriority {
    pub const ALL: [Self; 3] = [Self::Main, Self::Secondary, Self::Tertiary];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }

    /// Card header label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Main => "Main Task",
            Self::Secondary => "Secondary Task",
            Self::Tertiary => "Tertiary Task",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order_index: Option<i64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskInteractions {
    pub comments: u32,
    pub views: u32,
    pub attachments: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Percent complete, 0-100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub interactions: TaskInteractions,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Partial update body for `PUT /api/tasks/:id`. `None` fields are left
/// untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl TaskUpdate {
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    #[must_use]
    pub fn favorite(is_favorite: bool) -> Self {
        Self { is_favorite: Some(is_favorite), ..Self::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub progress: u8,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<NewSubtask>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewSubtask {
    pub title: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub completed: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SubtaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// `{message, task_id}` from `POST /api/tasks`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedTask {
    pub task_id: String,
}

/// `{message, subtask_id}` from `POST /api/tasks/:id/subtasks`.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedSubtask {
    pub subtask_id: String,
}

// =============================================================================
// SAVED PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavedKind {
    Evaluation,
    Idea,
}

impl SavedKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Evaluation => "Evaluation",
            Self::Idea => "Idea",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedProject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SavedKind,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub idea_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SavedProjectList {
    #[serde(default)]
    pub saved_projects: Vec<SavedProject>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaveProjectRequest {
    #[serde(rename = "type")]
    pub kind: SavedKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_task: Option<bool>,
}

impl SaveProjectRequest {
    /// Save an evaluation; the backend creates a linked task by default.
    #[must_use]
    pub fn evaluation(project_id: &str) -> Self {
        Self {
            kind: SavedKind::Evaluation,
            project_id: Some(project_id.to_owned()),
            idea_id: None,
            idea_index: None,
            create_task: None,
        }
    }

    /// Save one idea out of a generated batch.
    #[must_use]
    pub fn idea(idea_id: &str, idea_index: usize, create_task: bool) -> Self {
        Self {
            kind: SavedKind::Idea,
            project_id: None,
            idea_id: Some(idea_id.to_owned()),
            idea_index: Some(idea_index),
            create_task: Some(create_task),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SaveProjectResponse {
    #[serde(default)]
    pub message: String,
    pub saved_id: String,
    #[serde(default)]
    pub task_id: Option<String>,
}

// =============================================================================
// SCHEDULE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub id: String,
    pub title: String,
    /// `HH:MM`.
    pub start_time: String,
    /// `HH:MM`.
    pub end_time: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScheduleList {
    #[serde(default)]
    pub schedule: Vec<ScheduleBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewScheduleBlock {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    /// `YYYY-MM-DD`; the backend defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// `{message, ...}` acknowledgement. Only the message is of interest.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// EVALUATION
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectEvaluationRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Hours.
    pub time_available: u32,
    pub team_size: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub id: String,
    pub overall_score: f64,
    #[serde(default)]
    pub readiness_level: String,
    #[serde(default)]
    pub scores: EvaluationScores,
    #[serde(default)]
    pub analysis: EvaluationAnalysis,
    #[serde(default)]
    pub recommendations: Recommendations,
}

/// Dimension averages on a 0-10 scale plus the raw per-criterion scores.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationScores {
    pub technical: f64,
    pub innovation: f64,
    pub impact: f64,
    pub execution: f64,
    pub detailed: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationAnalysis {
    pub classification: Classification,
    pub executive_summary: String,
    pub strengths: Vec<Strength>,
    pub improvements: Vec<Improvement>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    pub primary_domain: String,
    pub secondary_domains: Vec<String>,
    pub tech_categories: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strength {
    pub title: String,
    pub description: String,
    /// `high` / `medium` / `low`.
    pub impact: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Improvement {
    pub title: String,
    pub description: String,
    /// `high` / `medium` / `low`.
    pub priority: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendations {
    pub quick_wins: Vec<QuickWin>,
    pub improvements: Vec<Improvement>,
    pub pitch: Option<Pitch>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickWin {
    pub action: String,
    pub why: String,
    pub how: String,
    pub time_estimate: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pitch {
    pub elevator_pitch: String,
    pub key_points: Vec<String>,
    pub demo_flow: Vec<String>,
    pub anticipated_questions: Vec<PitchQuestion>,
}

impl Pitch {
    /// The backend sends `{}` when the model produced no pitch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elevator_pitch.is_empty()
            && self.key_points.is_empty()
            && self.demo_flow.is_empty()
            && self.anticipated_questions.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchQuestion {
    pub question: String,
    pub answer: String,
}

// =============================================================================
// IDEA GENERATION
// =============================================================================

/// Questionnaire answers posted to `/api/generate-ideas`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireData {
    pub skill_level: String,
    pub primary_skill: String,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub team_size: u8,
    pub time_available: u32,
    pub theme: String,
    pub required_tech: String,
    pub primary_goal: String,
    pub domain_interests: Vec<String>,
    pub personal_frustrations: String,
    pub emerging_tech: Vec<String>,
    pub project_type: String,
    pub platform: Vec<String>,
    pub ui_importance: String,
    pub ai_preference: String,
    pub target_audience: Vec<String>,
    pub desired_change: Vec<String>,
}

impl Default for QuestionnaireData {
    fn default() -> Self {
        Self {
            skill_level: "intermediate".to_owned(),
            primary_skill: String::new(),
            languages: Vec::new(),
            frameworks: Vec::new(),
            team_size: 1,
            time_available: 48,
            theme: String::new(),
            required_tech: String::new(),
            primary_goal: String::new(),
            domain_interests: Vec::new(),
            personal_frustrations: String::new(),
            emerging_tech: Vec::new(),
            project_type: String::new(),
            platform: Vec::new(),
            ui_importance: "medium".to_owned(),
            ai_preference: "optional".to_owned(),
            target_audience: Vec::new(),
            desired_change: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdeaResponse {
    pub id: String,
    #[serde(default)]
    pub ideas: Vec<Idea>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Idea {
    pub name: String,
    pub tagline: String,
    pub domain: Option<String>,
    pub problem: IdeaProblem,
    pub solution: IdeaSolution,
    pub technical: IdeaTechnical,
    pub roadmap: Roadmap,
    pub feasibility: Feasibility,
    pub differentiation: Differentiation,
    pub impact: IdeaImpact,
    pub wow_factors: Vec<String>,
    pub getting_started: Option<GettingStarted>,
    /// 0-100.
    pub match_score: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaProblem {
    pub statement: String,
    pub why_matters: String,
    pub current_gaps: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaSolution {
    pub description: String,
    pub key_features: Vec<String>,
    pub value_proposition: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaTechnical {
    pub tech_stack: Vec<String>,
    pub architecture: String,
    pub components: Vec<String>,
    pub apis: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roadmap {
    pub phase1: RoadmapPhase,
    pub phase2: RoadmapPhase,
    pub phase3: RoadmapPhase,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapPhase {
    pub hours: String,
    pub tasks: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feasibility {
    pub complexity: String,
    pub learning_curve: String,
    pub time_fit: String,
    pub risks: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Differentiation {
    pub unique_factors: Vec<String>,
    pub judge_appeal: String,
    pub competition: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaImpact {
    pub beneficiaries: String,
    pub scale: String,
    pub real_world: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GettingStarted {
    pub steps: Vec<String>,
    pub resources: Vec<String>,
    pub boilerplate: String,
}

// =============================================================================
// EVALUATION INPUT SOURCES
// =============================================================================

/// Extracted text from `POST /api/upload`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub text: String,
}

/// README and language list from `POST /api/github-fetch`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GithubRepo {
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub languages: Vec<String>,
}
