//! Task dashboard: kanban board plus profile, analytics and saved items.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Once auth has resolved it loads
//! tasks, saved projects and today's schedule over REST. Every mutation from
//! the board is sent to the backend and followed by a task reload; status and
//! favourite changes are applied locally first so the card does not jump back
//! while the request is in flight.
//!
//! ERROR HANDLING
//! ==============
//! A failed request is logged and surfaced in a dismissible banner. Layout,
//! open forms and already-loaded data stay as they are.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::analytics_widgets::AnalyticsWidgets;
use crate::components::error_banner::ErrorBanner;
use crate::components::kanban_board::KanbanBoard;
use crate::components::new_task_form::NewTaskForm;
use crate::components::saved_items::SavedItems;
use crate::components::user_profile::UserProfile;
use crate::net::types::{NewScheduleBlock, NewSubtask, NewTask, SubtaskUpdate, TaskStatus, TaskUpdate};
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::util::auth::install_unauth_redirect;

/// Banner text for each dashboard request, used when the backend gives none.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardOp {
    LoadTasks,
    LoadSaved,
    LoadSchedule,
    CreateTask,
    UpdateTask,
    DeleteTask,
    AddSubtask,
    UpdateSubtask,
    AddScheduleBlock,
}

impl DashboardOp {
    pub fn fallback(self) -> &'static str {
        match self {
            Self::LoadTasks => "Could not load tasks",
            Self::LoadSaved => "Could not load saved items",
            Self::LoadSchedule => "Could not load today's plan",
            Self::CreateTask => "Could not create task",
            Self::UpdateTask => "Could not update task",
            Self::DeleteTask => "Could not delete task",
            Self::AddSubtask => "Could not add subtask",
            Self::UpdateSubtask => "Could not update subtask",
            Self::AddScheduleBlock => "Could not add schedule block",
        }
    }
}

/// Subtask added from a card: untyped, not yet done.
pub fn quick_subtask(title: &str) -> Option<NewSubtask> {
    let title = title.trim();
    (!title.is_empty()).then(|| NewSubtask { title: title.to_owned(), ..NewSubtask::default() })
}

pub fn completion_update(completed: bool) -> SubtaskUpdate {
    SubtaskUpdate { completed: Some(completed), ..SubtaskUpdate::default() }
}

// =============================================================================
// REQUEST PLUMBING
// =============================================================================

#[cfg(feature = "hydrate")]
fn report(dash: RwSignal<DashboardState>, op: DashboardOp, err: &crate::net::api::ApiError) {
    log::warn!("dashboard {op:?}: {err}");
    dash.update(|d| d.error = Some(err.message_or(op.fallback())));
}

#[cfg(feature = "hydrate")]
async fn reload_tasks(token: &str, dash: RwSignal<DashboardState>) {
    match crate::net::api::list_tasks(token).await {
        Ok(tasks) => dash.update(|d| {
            d.tasks = tasks;
            d.tasks_loaded = true;
        }),
        Err(e) => {
            report(dash, DashboardOp::LoadTasks, &e);
            dash.update(|d| d.tasks_loaded = true);
        }
    }
}

#[cfg(feature = "hydrate")]
async fn reload_saved(token: &str, dash: RwSignal<DashboardState>) {
    match crate::net::api::list_saved_projects(token).await {
        Ok(saved) => dash.update(|d| d.saved = saved),
        Err(e) => report(dash, DashboardOp::LoadSaved, &e),
    }
}

#[cfg(feature = "hydrate")]
async fn reload_schedule(token: &str, dash: RwSignal<DashboardState>) {
    match crate::net::api::list_schedule(token).await {
        Ok(schedule) => dash.update(|d| d.schedule = schedule),
        Err(e) => report(dash, DashboardOp::LoadSchedule, &e),
    }
}

/// Run one mutation, report a failure, then refresh tasks either way.
#[cfg(feature = "hydrate")]
fn mutate_then_reload<F, T>(token: String, dash: RwSignal<DashboardState>, op: DashboardOp, request: F)
where
    F: std::future::Future<Output = Result<T, crate::net::api::ApiError>> + 'static,
{
    leptos::task::spawn_local(async move {
        if let Err(e) = request.await {
            report(dash, op, &e);
        }
        reload_tasks(&token, dash).await;
    });
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let dash = RwSignal::new(DashboardState::default());
    let adding = RwSignal::new(None::<TaskStatus>);

    let token = move || auth.with_untracked(AuthState::bearer_token);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() || !auth.with(AuthState::is_authenticated) {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        {
            if let Some(token) = token() {
                leptos::task::spawn_local(async move {
                    reload_tasks(&token, dash).await;
                    reload_saved(&token, dash).await;
                    reload_schedule(&token, dash).await;
                });
            }
        }
    });

    let on_move = Callback::new(move |(task_id, status): (String, TaskStatus)| {
        let Some(token) = token() else { return };
        let update = TaskUpdate::status(status);
        dash.update(|d| {
            d.apply_update(&task_id, &update);
        });
        #[cfg(feature = "hydrate")]
        {
            mutate_then_reload(token.clone(), dash, DashboardOp::UpdateTask, async move {
                crate::net::api::update_task(&token, &task_id, &update).await
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_toggle_favorite = Callback::new(move |(task_id, is_favorite): (String, bool)| {
        let Some(token) = token() else { return };
        let update = TaskUpdate::favorite(is_favorite);
        dash.update(|d| {
            d.apply_update(&task_id, &update);
        });
        #[cfg(feature = "hydrate")]
        {
            mutate_then_reload(token.clone(), dash, DashboardOp::UpdateTask, async move {
                crate::net::api::update_task(&token, &task_id, &update).await
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_delete = Callback::new(move |task_id: String| {
        let Some(token) = token() else { return };
        dash.update(|d| d.remove_task(&task_id));
        #[cfg(feature = "hydrate")]
        {
            mutate_then_reload(token.clone(), dash, DashboardOp::DeleteTask, async move {
                crate::net::api::delete_task(&token, &task_id).await
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    let on_toggle_subtask = Callback::new(move |(subtask_id, completed): (String, bool)| {
        let Some(token) = token() else { return };
        let update = completion_update(completed);
        #[cfg(feature = "hydrate")]
        {
            mutate_then_reload(token.clone(), dash, DashboardOp::UpdateSubtask, async move {
                crate::net::api::update_subtask(&token, &subtask_id, &update).await
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, subtask_id, update);
    });

    let on_add_subtask = Callback::new(move |(task_id, title): (String, String)| {
        let Some(subtask) = quick_subtask(&title) else { return };
        let Some(token) = token() else { return };
        #[cfg(feature = "hydrate")]
        {
            mutate_then_reload(token.clone(), dash, DashboardOp::AddSubtask, async move {
                crate::net::api::add_subtask(&token, &task_id, &subtask).await
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, task_id, subtask);
    });

    let on_create = Callback::new(move |task: NewTask| {
        let Some(token) = token() else { return };
        adding.set(None);
        #[cfg(feature = "hydrate")]
        {
            mutate_then_reload(token.clone(), dash, DashboardOp::CreateTask, async move {
                crate::net::api::create_task(&token, &task).await
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, task);
    });

    let on_add_block = Callback::new(move |block: NewScheduleBlock| {
        let Some(token) = token() else { return };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::add_schedule_block(&token, &block).await {
                    Ok(()) => reload_schedule(&token, dash).await,
                    Err(e) => report(dash, DashboardOp::AddScheduleBlock, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, block);
    });

    let tasks = Signal::derive(move || dash.with(|d| d.tasks.clone()));
    let layout = Signal::derive(move || dash.with(|d| d.layout));
    let error = Signal::derive(move || dash.with(|d| d.error.clone()));
    let user = Signal::derive(move || auth.with(|a| a.user.clone()));

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="page page--center">
                        {move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}
                    </div>
                }
            }
        >
            <Show
                when=move || dash.with(|d| d.tasks_loaded)
                fallback=|| view! { <div class="page page--center dashboard__loading">"Loading your dashboard..."</div> }
            >
                <div class="dashboard">
                    <header class="dashboard__header">
                        <h1>"Task Management"</h1>
                        <span class="dashboard__crumbs">"Tasks › Today"</span>
                        <span class="dashboard__spacer"></span>
                        <button
                            class="btn btn--icon"
                            title="Toggle View"
                            on:click=move |_| dash.update(|d| d.layout = d.layout.toggled())
                        >
                            {move || dash.with(|d| d.layout.toggle_icon())}
                        </button>
                    </header>
                    <ErrorBanner
                        message=error
                        on_dismiss=Callback::new(move |()| dash.update(|d| d.error = None))
                    />

                    <div class="dashboard__body">
                        <main class="dashboard__main">
                            {move || {
                                adding
                                    .get()
                                    .map(|status| {
                                        view! {
                                            <NewTaskForm
                                                status=status
                                                on_create=on_create
                                                on_cancel=Callback::new(move |()| adding.set(None))
                                            />
                                        }
                                    })
                            }}
                            <KanbanBoard
                                tasks=tasks
                                layout=layout
                                on_move=on_move
                                on_toggle_favorite=on_toggle_favorite
                                on_delete=on_delete
                                on_toggle_subtask=on_toggle_subtask
                                on_add_subtask=on_add_subtask
                                on_add=Callback::new(move |status| adding.set(Some(status)))
                            />
                        </main>

                        <aside class="dashboard__sidebar">
                            <UserProfile user=user />
                            <AnalyticsWidgets
                                tasks=tasks
                                schedule=Signal::derive(move || dash.with(|d| d.schedule.clone()))
                                on_add_block=on_add_block
                            />
                            <SavedItems saved=Signal::derive(move || dash.with(|d| d.saved.clone())) />
                        </aside>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
