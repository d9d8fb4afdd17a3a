//! Saved evaluations and ideas in the dashboard sidebar.

#[cfg(test)]
#[path = "saved_items_test.rs"]
mod saved_items_test;

use leptos::prelude::*;

use crate::net::types::{SavedKind, SavedProject};

/// Rows shown before collapsing to "+N more".
pub const MAX_SAVED_ROWS: usize = 5;

/// Returns `(visible, hidden_count)`.
pub fn visible_saved(saved: &[SavedProject]) -> (&[SavedProject], usize) {
    let shown = saved.len().min(MAX_SAVED_ROWS);
    (&saved[..shown], saved.len() - shown)
}

/// Caption under the item name, e.g. `Idea • Has Task`.
pub fn saved_caption(item: &SavedProject) -> String {
    let mut caption = item.kind.label().to_owned();
    if item.task_id.is_some() {
        caption.push_str(" • Has Task");
    }
    caption
}

/// Smooth-scroll the task card for `task_id` into the middle of the view.
fn scroll_to_task(task_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let selector = format!("[data-task-id=\"{task_id}\"]");
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten());
        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = task_id;
}

#[component]
pub fn SavedItems(#[prop(into)] saved: Signal<Vec<SavedProject>>) -> impl IntoView {
    let rows = move || {
        saved.with(|all| {
            let (shown, hidden) = visible_saved(all);
            let items = shown
                .iter()
                .map(|item| {
                    let task_id = item.task_id.clone();
                    let icon = match item.kind {
                        SavedKind::Idea => "💡",
                        SavedKind::Evaluation => "📄",
                    };
                    view! {
                        <li
                            class="saved__row"
                            class:saved__row--linked=task_id.is_some()
                            on:click=move |_| {
                                if let Some(id) = &task_id {
                                    scroll_to_task(id);
                                }
                            }
                        >
                            <span class="saved__icon">{icon}</span>
                            <div class="saved__text">
                                <p class="saved__name">{item.name.clone()}</p>
                                <p class="saved__caption">{saved_caption(item)}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <ul class="saved__list">{items}</ul>
                {(hidden > 0).then(|| view! { <p class="saved__more">{format!("+{hidden} more")}</p> })}
            }
        })
    };

    view! {
        <section class="widget saved">
            <h3 class="widget__title">"Saved Items"</h3>
            <Show
                when=move || saved.with(|s| !s.is_empty())
                fallback=|| view! { <p class="widget__empty">"No saved items yet"</p> }
            >
                {rows}
            </Show>
        </section>
    }
}
