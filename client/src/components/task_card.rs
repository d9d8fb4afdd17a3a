//! Kanban task card: priority, subtasks, progress and quick actions.
//!
//! DESIGN
//! ======
//! The card is display-only; every mutation is reported through a callback
//! so the dashboard can send it to the backend and reload. The root element
//! carries `data-task-id` so saved items can scroll to it.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;

use crate::net::types::{Subtask, Task, TaskPriority, TaskStatus};

/// Subtasks shown before collapsing to "+N more".
pub const VISIBLE_SUBTASKS: usize = 3;

/// Subtask colors the stylesheet knows; anything else renders grey.
const SUBTASK_COLORS: [&str; 5] = ["blue", "purple", "pink", "yellow", "teal"];

pub fn subtask_badge_class(color: Option<&str>) -> String {
    match color {
        Some(c) if SUBTASK_COLORS.contains(&c) => format!("subtask__badge subtask__badge--{c}"),
        _ => "subtask__badge subtask__badge--grey".to_owned(),
    }
}

/// Returns `(visible, hidden_count)`.
pub fn visible_subtasks(subtasks: &[Subtask]) -> (&[Subtask], usize) {
    let shown = subtasks.len().min(VISIBLE_SUBTASKS);
    (&subtasks[..shown], subtasks.len() - shown)
}

fn priority_class(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Main => "task-card task-card--main",
        TaskPriority::Secondary => "task-card task-card--secondary",
        TaskPriority::Tertiary => "task-card task-card--tertiary",
    }
}

#[component]
pub fn TaskCard(
    task: Task,
    /// `(task_id)` when a drag starts on this card.
    on_drag_start: Callback<String>,
    /// `(task_id, new_favorite)`.
    on_toggle_favorite: Callback<(String, bool)>,
    /// `(task_id)`.
    on_delete: Callback<String>,
    /// `(subtask_id, new_completed)`.
    on_toggle_subtask: Callback<(String, bool)>,
    /// `(task_id, title)`.
    on_add_subtask: Callback<(String, String)>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let adding = RwSignal::new(false);
    let draft = RwSignal::new(String::new());

    let id = task.id.clone();
    let (shown, hidden) = visible_subtasks(&task.subtasks);
    let subtasks = shown
        .iter()
        .map(|subtask| {
            let subtask_id = subtask.id.clone();
            let completed = subtask.completed;
            let label = subtask.kind.clone().filter(|k| !k.is_empty()).unwrap_or_else(|| "•".to_owned());
            view! {
                <li class="subtask" class:subtask--done=completed>
                    <span class=subtask_badge_class(subtask.color.as_deref())>{label}</span>
                    <span class="subtask__title">{subtask.title.clone()}</span>
                    <button
                        class="subtask__check"
                        title=if completed { "Mark as not done" } else { "Mark as done" }
                        on:click=move |_| on_toggle_subtask.run((subtask_id.clone(), !completed))
                    >
                        {if completed { "✓" } else { "○" }}
                    </button>
                </li>
            }
        })
        .collect_view();

    let on_drag = {
        let id = id.clone();
        move |ev: leptos::ev::DragEvent| {
            #[cfg(feature = "hydrate")]
            {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &id);
                }
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &ev;
            on_drag_start.run(id.clone());
        }
    };

    let favorite = task.is_favorite;
    let on_favorite = {
        let id = id.clone();
        move |_| on_toggle_favorite.run((id.clone(), !favorite))
    };
    let on_delete_click = {
        let id = id.clone();
        move |_| {
            menu_open.set(false);
            on_delete.run(id.clone());
        }
    };
    let on_subtask_submit = {
        let id = id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let title = draft.get_untracked().trim().to_owned();
            if title.is_empty() {
                return;
            }
            on_add_subtask.run((id.clone(), title));
            draft.set(String::new());
            adding.set(false);
        }
    };

    let progress = task.progress.min(100);
    let interactions = task.interactions;

    view! {
        <article class=priority_class(task.priority) draggable="true" data-task-id=id on:dragstart=on_drag>
            <header class="task-card__header">
                <h4 class="task-card__priority">{task.priority.label()}</h4>
                <div class="task-card__menu">
                    <button
                        class="task-card__menu-toggle"
                        aria-label="Task menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "⋮"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="task-card__menu-popup">
                            <button class="task-card__delete" on:click=on_delete_click.clone()>"Delete"</button>
                        </div>
                    </Show>
                </div>
            </header>
            <p class="task-card__title">{task.title.clone()}</p>
            {task.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p class="task-card__desc">{d}</p> })}
            <ul class="task-card__subtasks">{subtasks}</ul>
            {(hidden > 0).then(|| view! { <p class="task-card__more">{format!("+{hidden} more")}</p> })}
            <Show
                when=move || adding.get()
                fallback=move || {
                    view! {
                        <button class="task-card__add-subtask" on:click=move |_| adding.set(true)>
                            "+ Subtask"
                        </button>
                    }
                }
            >
                <form class="task-card__subtask-form" on:submit=on_subtask_submit.clone()>
                    <input
                        class="input input--small"
                        placeholder="Subtask title"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                </form>
            </Show>
            {(task.status == TaskStatus::InProgress)
                .then(|| {
                    view! {
                        <div class="task-card__progress">
                            <div class="task-card__progress-label">
                                <span>"Progress"</span>
                                <span>{format!("{progress}%")}</span>
                            </div>
                            <div class="progress">
                                <div class="progress__fill" style=format!("width: {progress}%")></div>
                            </div>
                        </div>
                    }
                })}
            {(task.status == TaskStatus::Editing)
                .then(|| view! { <p class="task-card__approval">"Awaiting approval"</p> })}
            <footer class="task-card__footer">
                <span class="task-card__stats">
                    <span title="Comments">{format!("💬 {}", interactions.comments)}</span>
                    <span title="Views">{format!("👁 {}", interactions.views)}</span>
                    {(interactions.attachments > 0)
                        .then(|| view! { <span title="Attachments">{format!("📎 {}", interactions.attachments)}</span> })}
                </span>
                <button
                    class="task-card__favorite"
                    class:task-card__favorite--on=favorite
                    aria-label="Toggle favorite"
                    on:click=on_favorite
                >
                    {if favorite { "★" } else { "☆" }}
                </button>
            </footer>
        </article>
    }
}
