//! Inline form for adding a task to the board.

#[cfg(test)]
#[path = "new_task_form_test.rs"]
mod new_task_form_test;

use leptos::prelude::*;

use crate::net::types::{NewTask, TaskPriority, TaskStatus};

/// Build the create payload, or the message to show.
pub fn validate_new_task(
    title: &str,
    description: &str,
    priority: TaskPriority,
    status: TaskStatus,
) -> Result<NewTask, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Task title is required");
    }
    let description = description.trim();
    Ok(NewTask {
        title: title.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        status,
        priority,
        ..NewTask::default()
    })
}

#[component]
pub fn NewTaskForm(
    /// Column the task lands in.
    #[prop(into)]
    status: Signal<TaskStatus>,
    on_create: Callback<NewTask>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(TaskPriority::default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_new_task(
            &title.get_untracked(),
            &description.get_untracked(),
            priority.get_untracked(),
            status.get_untracked(),
        ) {
            Ok(task) => {
                error.set(None);
                title.set(String::new());
                description.set(String::new());
                on_create.run(task);
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    let priority_options = TaskPriority::ALL
        .into_iter()
        .map(|p| view! { <option value=p.as_str() selected=move || priority.get() == p>{p.label()}</option> })
        .collect_view();

    view! {
        <form class="new-task" on:submit=on_submit>
            <h3 class="new-task__title">
                {move || format!("New task in {}", status.get().column_title())}
            </h3>
            <input
                class="input"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="input new-task__desc"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            ></textarea>
            <select
                class="input"
                on:change=move |ev| {
                    if let Some(p) = TaskPriority::parse(&event_target_value(&ev)) {
                        priority.set(p);
                    }
                }
            >
                {priority_options}
            </select>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="new-task__actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary">"Create Task"</button>
            </div>
        </form>
    }
}
