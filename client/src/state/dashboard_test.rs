use super::*;
use crate::net::types::{TaskInteractions, TaskPriority, TaskStatus};

fn task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("Task {id}"),
        description: None,
        status,
        priority: TaskPriority::Secondary,
        progress: 0,
        is_favorite: false,
        subtasks: Vec::new(),
        interactions: TaskInteractions::default(),
        created_at: None,
        updated_at: None,
    }
}

fn find<'a>(state: &'a DashboardState, id: &str) -> Option<&'a Task> {
    state.tasks.iter().find(|t| t.id == id)
}

fn state() -> DashboardState {
    DashboardState {
        tasks: vec![
            task("a", TaskStatus::Draft),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::Draft),
        ],
        ..DashboardState::default()
    }
}

#[test]
fn dashboard_state_defaults() {
    let state = DashboardState::default();
    assert!(state.tasks.is_empty());
    assert!(!state.tasks_loaded);
    assert_eq!(state.layout, BoardLayout::Grid);
    assert!(state.error.is_none());
}

#[test]
fn layout_toggles_back_and_forth() {
    assert_eq!(BoardLayout::Grid.toggled(), BoardLayout::List);
    assert_eq!(BoardLayout::List.toggled(), BoardLayout::Grid);
    assert_ne!(BoardLayout::Grid.toggle_icon(), BoardLayout::List.toggle_icon());
}

#[test]
fn apply_update_moves_and_favorites() {
    let mut state = state();
    assert!(state.apply_update("a", &TaskUpdate::status(TaskStatus::InProgress)));
    assert!(state.apply_update("a", &TaskUpdate::favorite(true)));
    let a = find(&state, "a").unwrap();
    assert_eq!(a.status, TaskStatus::InProgress);
    assert!(a.is_favorite);
    assert_eq!(a.title, "Task a");
}

#[test]
fn apply_update_clamps_progress_and_ignores_unknown_ids() {
    let mut state = state();
    let update = TaskUpdate { progress: Some(250), ..TaskUpdate::default() };
    assert!(state.apply_update("b", &update));
    assert_eq!(find(&state, "b").unwrap().progress, 100);
    assert!(!state.apply_update("zzz", &update));
}

#[test]
fn remove_task_drops_only_that_task() {
    let mut state = state();
    state.remove_task("b");
    assert_eq!(state.tasks.len(), 2);
    assert!(find(&state, "b").is_none());
}
