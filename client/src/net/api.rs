//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always against
//! relative `/api/...` URLs that the host proxies to the backend.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<T, ApiError>`. A non-2xx response carries the
//! backend's `{"error": "..."}` message when there is one, so pages can show
//! it verbatim; otherwise the message is `"<operation> failed: <status>"`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use gloo_net::http::Request;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use super::types::{
    EvaluationResponse, GithubRepo, IdeaResponse, NewScheduleBlock, NewSubtask, NewTask, ProjectEvaluationRequest,
    QuestionnaireData, SaveProjectRequest, SaveProjectResponse, SavedProject, ScheduleBlock, SubtaskUpdate, Task,
    TaskUpdate, User,
};
#[cfg(feature = "hydrate")]
use super::types::{
    Ack, AuthResponse, CreatedSubtask, CreatedTask, LoginRequest, SavedProjectList, ScheduleList, SignupRequest,
    TaskList, UploadResponse,
};

/// Message carried by every SSR stub.
pub const UNAVAILABLE_ON_SERVER: &str = "not available on server";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by REST helpers. `Display` is the user-facing text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Rate limiting is reported either by status or only in the message text
    /// (the backend wraps upstream model errors in a 500).
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        if matches!(self, Self::Status { status: 429, .. }) {
            return true;
        }
        let text = self.to_string().to_ascii_lowercase();
        text.contains("rate limit") || text.contains("429")
    }

    /// Text for an error banner, or `fallback` when there is nothing to say.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        let text = self.to_string();
        if text.trim().is_empty() { fallback.to_owned() } else { text }
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

// =============================================================================
// HELPERS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn subtasks_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}/subtasks")
}

#[cfg(any(test, feature = "hydrate"))]
fn subtask_endpoint(subtask_id: &str) -> String {
    format!("/api/subtasks/{subtask_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn failed_message(operation: &str, status: u16) -> String {
    format!("{operation} failed: {status}")
}

/// Map a non-2xx response body to an [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(operation: &str, status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| failed_message(operation, status));
    ApiError::Status { status, message }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Unavailable(UNAVAILABLE_ON_SERVER.to_owned()))
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer, error_from_body};

    pub(super) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &bearer(token))
    }

    fn network(operation: &str, err: &gloo_net::Error) -> ApiError {
        log::warn!("{operation}: {err}");
        ApiError::Network(err.to_string())
    }

    async fn check(operation: &str, resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_body(operation, status, &body))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(operation: &str, resp: Response) -> Result<T, ApiError> {
        let resp = check(operation, resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send with no body and decode the JSON answer.
    pub(super) async fn send_empty<T: DeserializeOwned>(operation: &str, builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await.map_err(|e| network(operation, &e))?;
        read_json(operation, resp).await
    }

    /// Send `body` as JSON and decode the JSON answer.
    pub(super) async fn send_json<B: Serialize, T: DeserializeOwned>(
        operation: &str,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| network(operation, &e))?;
        read_json(operation, resp).await
    }

    pub(super) async fn send_form<T: DeserializeOwned>(
        operation: &str,
        builder: RequestBuilder,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = builder.body(form).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| network(operation, &e))?;
        read_json(operation, resp).await
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in via `POST /api/auth/login`. Returns the bearer token and its user.
///
/// # Errors
///
/// Returns the backend's message (e.g. invalid credentials) or a transport error.
pub async fn login(email: &str, password: &str) -> Result<(String, User), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email, password };
        let resp: AuthResponse = transport::send_json("login", Request::post("/api/auth/login"), &body).await?;
        Ok((resp.token, resp.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        unavailable()
    }
}

/// Register via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns the backend's message (e.g. email already registered) or a transport error.
pub async fn signup(name: &str, email: &str, password: &str) -> Result<(String, User), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignupRequest { name, email, password };
        let resp: AuthResponse = transport::send_json("signup", Request::post("/api/auth/signup"), &body).await?;
        Ok((resp.token, resp.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        unavailable()
    }
}

/// Validate `token` and fetch its user from `GET /api/auth/me`.
///
/// # Errors
///
/// [`ApiError::is_unauthorized`] is true when the token is no longer valid.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send_empty("session check", transport::authorized(Request::get("/api/auth/me"), token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        unavailable()
    }
}

/// Invalidate the session server-side via `POST /api/auth/logout`. Best effort.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::post("/api/auth/logout"), token);
        if let Err(e) = transport::send_empty::<Ack>("logout", builder).await {
            log::warn!("logout: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

// =============================================================================
// EVALUATION + IDEAS
// =============================================================================

/// Submit a project for AI evaluation via `POST /api/evaluate`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn evaluate_project(request: &ProjectEvaluationRequest) -> Result<EvaluationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send_json("evaluation", Request::post("/api/evaluate"), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        unavailable()
    }
}

/// Extract text from one document via multipart `POST /api/upload`.
///
/// # Errors
///
/// Returns the backend's message (e.g. unsupported type, too large) or a transport error.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: &web_sys::File) -> Result<String, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    let resp: UploadResponse = transport::send_form("upload", Request::post("/api/upload"), form).await?;
    Ok(resp.text)
}

/// Fetch README + languages of a public repository via `POST /api/github-fetch`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn fetch_github_repo(url: &str) -> Result<GithubRepo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "url": url });
        transport::send_json("GitHub fetch", Request::post("/api/github-fetch"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        unavailable()
    }
}

/// Generate personalized ideas via `POST /api/generate-ideas`.
///
/// # Errors
///
/// Returns the backend's message or a transport error. See
/// [`ApiError::is_rate_limited`].
pub async fn generate_ideas(answers: &QuestionnaireData) -> Result<IdeaResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        transport::send_json("idea generation", Request::post("/api/generate-ideas"), answers).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = answers;
        unavailable()
    }
}

// =============================================================================
// TASKS
// =============================================================================

/// List the user's tasks via `GET /api/tasks`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn list_tasks(token: &str) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let list: TaskList =
            transport::send_empty("load tasks", transport::authorized(Request::get("/api/tasks"), token)).await?;
        Ok(list.tasks)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        unavailable()
    }
}

/// Create a task via `POST /api/tasks`. Returns the new task id.
///
/// # Errors
///
/// Returns the backend's message (e.g. missing title) or a transport error.
pub async fn create_task(token: &str, task: &NewTask) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::post("/api/tasks"), token);
        let created: CreatedTask = transport::send_json("create task", builder, task).await?;
        Ok(created.task_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task);
        unavailable()
    }
}

/// Apply a partial update via `PUT /api/tasks/:id`.
///
/// # Errors
///
/// Returns the backend's message (e.g. task not found) or a transport error.
pub async fn update_task(token: &str, task_id: &str, update: &TaskUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::put(&task_endpoint(task_id)), token);
        transport::send_json::<_, Ack>("update task", builder, update).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id, update);
        unavailable()
    }
}

/// Delete a task via `DELETE /api/tasks/:id`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn delete_task(token: &str, task_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::delete(&task_endpoint(task_id)), token);
        transport::send_empty::<Ack>("delete task", builder).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id);
        unavailable()
    }
}

/// Add a subtask via `POST /api/tasks/:id/subtasks`. Returns the new subtask id.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn add_subtask(token: &str, task_id: &str, subtask: &NewSubtask) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::post(&subtasks_endpoint(task_id)), token);
        let created: CreatedSubtask = transport::send_json("add subtask", builder, subtask).await?;
        Ok(created.subtask_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id, subtask);
        unavailable()
    }
}

/// Toggle or rename a subtask via `PUT /api/subtasks/:id`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn update_subtask(token: &str, subtask_id: &str, update: &SubtaskUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::put(&subtask_endpoint(subtask_id)), token);
        transport::send_json::<_, Ack>("update subtask", builder, update).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, subtask_id, update);
        unavailable()
    }
}

// =============================================================================
// SAVED PROJECTS + SCHEDULE
// =============================================================================

/// Save an evaluation or idea via `POST /api/saved-projects`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn save_project(token: &str, request: &SaveProjectRequest) -> Result<SaveProjectResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::post("/api/saved-projects"), token);
        transport::send_json("save", builder, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        unavailable()
    }
}

/// List saved items via `GET /api/saved-projects`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn list_saved_projects(token: &str) -> Result<Vec<SavedProject>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::get("/api/saved-projects"), token);
        let list: SavedProjectList = transport::send_empty("load saved projects", builder).await?;
        Ok(list.saved_projects)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        unavailable()
    }
}

/// Today's schedule via `GET /api/schedule`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn list_schedule(token: &str) -> Result<Vec<ScheduleBlock>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::get("/api/schedule"), token);
        let list: ScheduleList = transport::send_empty("load schedule", builder).await?;
        Ok(list.schedule)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        unavailable()
    }
}

/// Add a schedule block via `POST /api/schedule`.
///
/// # Errors
///
/// Returns the backend's message or a transport error.
pub async fn add_schedule_block(token: &str, block: &NewScheduleBlock) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = transport::authorized(Request::post("/api/schedule"), token);
        transport::send_json::<_, Ack>("add schedule block", builder, block).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, block);
        unavailable()
    }
}
