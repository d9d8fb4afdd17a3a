//! Four-column kanban board with drag-and-drop status moves.
//!
//! DESIGN
//! ======
//! The board holds only the transient drag state (which card is in flight
//! and which column is highlighted). A drop resolves to a `(task_id,
//! status)` move through [`drop_move`]; the dashboard owns persistence.

#[cfg(test)]
#[path = "kanban_board_test.rs"]
mod kanban_board_test;

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::net::types::{Task, TaskPriority, TaskStatus};
use crate::state::dashboard::BoardLayout;

/// Resolve a drop of `dragged` onto the `target` column.
///
/// Returns `None` when nothing is being dragged, the task is unknown, or the
/// task already sits in `target`.
pub fn drop_move(tasks: &[Task], dragged: Option<&str>, target: TaskStatus) -> Option<(String, TaskStatus)> {
    let id = dragged?;
    let task = tasks.iter().find(|t| t.id == id)?;
    (task.status != target).then(|| (task.id.clone(), target))
}

/// Keyed-list identity: a card re-renders when anything it draws changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CardKey {
    id: String,
    updated_at: Option<String>,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    is_favorite: bool,
    progress: u8,
    counts: (u32, u32, u32),
    subtasks: Vec<SubtaskKey>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SubtaskKey {
    id: String,
    title: String,
    kind: Option<String>,
    color: Option<String>,
    completed: bool,
}

fn card_key(task: &Task) -> CardKey {
    CardKey {
        id: task.id.clone(),
        updated_at: task.updated_at.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        status: task.status,
        priority: task.priority,
        is_favorite: task.is_favorite,
        progress: task.progress,
        counts: (task.interactions.comments, task.interactions.views, task.interactions.attachments),
        subtasks: task
            .subtasks
            .iter()
            .map(|s| SubtaskKey {
                id: s.id.clone(),
                title: s.title.clone(),
                kind: s.kind.clone(),
                color: s.color.clone(),
                completed: s.completed,
            })
            .collect(),
    }
}

fn column_class(status: TaskStatus) -> String {
    format!("kanban__column kanban__column--{}", status.as_str())
}

#[component]
pub fn KanbanBoard(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] layout: Signal<BoardLayout>,
    /// `(task_id, new_status)` after a drop onto another column.
    on_move: Callback<(String, TaskStatus)>,
    on_toggle_favorite: Callback<(String, bool)>,
    on_delete: Callback<String>,
    on_toggle_subtask: Callback<(String, bool)>,
    on_add_subtask: Callback<(String, String)>,
    /// "Add Task" pressed at the bottom of a column.
    on_add: Callback<TaskStatus>,
) -> impl IntoView {
    let dragged = RwSignal::new(None::<String>);
    let drop_target = RwSignal::new(None::<TaskStatus>);
    let on_drag_start = Callback::new(move |id: String| dragged.set(Some(id)));

    let columns = TaskStatus::ALL
        .into_iter()
        .map(|status| {
            let column_tasks = move || tasks.get().into_iter().filter(|t| t.status == status).collect::<Vec<_>>();
            let count = move || tasks.with(|all| all.iter().filter(|t| t.status == status).count());
            let on_drop = move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                drop_target.set(None);
                let dragged_id = dragged.get_untracked();
                dragged.set(None);
                if let Some(change) = tasks.with_untracked(|all| drop_move(all, dragged_id.as_deref(), status)) {
                    on_move.run(change);
                }
            };

            view! {
                <section
                    class=column_class(status)
                    class:kanban__column--target=move || drop_target.get() == Some(status)
                    on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                    on:dragenter=move |_| drop_target.set(Some(status))
                    on:drop=on_drop
                >
                    <header class="kanban__header">
                        <h3 class="kanban__title">{status.column_title()}</h3>
                        <span class="kanban__count">{count}</span>
                    </header>
                    <div
                        class="kanban__cards"
                        class:kanban__cards--list=move || layout.get() == BoardLayout::List
                    >
                        <For each=column_tasks key=card_key let:task>
                            <TaskCard
                                task=task
                                on_drag_start=on_drag_start
                                on_toggle_favorite=on_toggle_favorite
                                on_delete=on_delete
                                on_toggle_subtask=on_toggle_subtask
                                on_add_subtask=on_add_subtask
                            />
                        </For>
                        <button class="kanban__add" on:click=move |_| on_add.run(status)>
                            "+ Add Task"
                        </button>
                    </div>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="kanban" on:dragend=move |_| drop_target.set(None)>
            {columns}
        </div>
    }
}
