use super::*;

#[test]
fn blank_title_is_rejected() {
    assert_eq!(
        validate_new_task("   ", "desc", TaskPriority::Main, TaskStatus::Draft),
        Err("Task title is required")
    );
}

#[test]
fn valid_task_is_trimmed_and_placed_in_column() {
    let task = validate_new_task("  Ship demo ", "", TaskPriority::Main, TaskStatus::Editing).unwrap();
    assert_eq!(task.title, "Ship demo");
    assert_eq!(task.description, None);
    assert_eq!(task.status, TaskStatus::Editing);
    assert_eq!(task.priority, TaskPriority::Main);
    assert_eq!(task.progress, 0);
    assert!(!task.is_favorite);
    assert!(task.subtasks.is_empty());
}

#[test]
fn description_is_kept_when_present() {
    let task = validate_new_task("A", " notes ", TaskPriority::Tertiary, TaskStatus::Draft).unwrap();
    assert_eq!(task.description.as_deref(), Some("notes"));
}
