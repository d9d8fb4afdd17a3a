use super::*;
use crate::net::types::{Subtask, TaskInteractions, TaskPriority};

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

#[test]
fn drop_on_other_column_moves_task() {
    let tasks = vec![task("t1", TaskStatus::Draft), task("t2", TaskStatus::Done)];
    assert_eq!(
        drop_move(&tasks, Some("t1"), TaskStatus::InProgress),
        Some(("t1".to_owned(), TaskStatus::InProgress))
    );
}

#[test]
fn drop_on_same_column_is_ignored() {
    let tasks = vec![task("t1", TaskStatus::Editing)];
    assert_eq!(drop_move(&tasks, Some("t1"), TaskStatus::Editing), None);
}

#[test]
fn drop_without_drag_or_unknown_task_is_ignored() {
    let tasks = vec![task("t1", TaskStatus::Draft)];
    assert_eq!(drop_move(&tasks, None, TaskStatus::Done), None);
    assert_eq!(drop_move(&tasks, Some("missing"), TaskStatus::Done), None);
}

#[test]
fn card_key_changes_with_visible_fields() {
    let mut t = task("t1", TaskStatus::Draft);
    let before = card_key(&t);
    t.is_favorite = true;
    assert_ne!(card_key(&t), before);
}

#[test]
fn card_key_tracks_server_side_edits() {
    let base = task("t1", TaskStatus::Draft);
    let edits: [fn(&mut Task); 6] = [
        |t| t.title = "Renamed".to_owned(),
        |t| t.description = Some("New notes".to_owned()),
        |t| t.priority = TaskPriority::Main,
        |t| t.interactions.comments = 4,
        |t| t.updated_at = Some("2026-10-19T09:00:00Z".to_owned()),
        |t| t.subtasks.push(Subtask {
            id: "s1".to_owned(),
            title: "Wire login".to_owned(),
            kind: None,
            color: None,
            completed: false,
            order_index: None,
        }),
    ];
    for edit in edits {
        let mut changed = base.clone();
        edit(&mut changed);
        assert_ne!(card_key(&changed), card_key(&base), "{changed:?}");
    }
}

#[test]
fn card_key_tracks_subtask_renames() {
    let subtask = Subtask {
        id: "s1".to_owned(),
        title: "Draft schema".to_owned(),
        kind: Some("db".to_owned()),
        color: None,
        completed: false,
        order_index: Some(0),
    };
    let mut t = task("t1", TaskStatus::Editing);
    t.subtasks.push(subtask);
    let before = card_key(&t);
    t.subtasks[0].title = "Final schema".to_owned();
    assert_ne!(card_key(&t), before);
}

#[test]
fn column_class_uses_wire_name() {
    assert_eq!(column_class(TaskStatus::InProgress), "kanban__column kanban__column--in_progress");
}
