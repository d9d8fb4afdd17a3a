use super::*;

fn subtask(id: &str) -> Subtask {
    Subtask {
        id: id.to_owned(),
        title: format!("Sub {id}"),
        kind: None,
        color: None,
        completed: false,
        order_index: None,
    }
}

#[test]
fn visible_subtasks_caps_at_three() {
    let subs: Vec<_> = ["a", "b", "c", "d", "e"].into_iter().map(subtask).collect();
    let (shown, hidden) = visible_subtasks(&subs);
    assert_eq!(shown.len(), 3);
    assert_eq!(shown[2].id, "c");
    assert_eq!(hidden, 2);
}

#[test]
fn visible_subtasks_with_few_hides_nothing() {
    let subs = vec![subtask("a")];
    let (shown, hidden) = visible_subtasks(&subs);
    assert_eq!(shown.len(), 1);
    assert_eq!(hidden, 0);
    assert_eq!(visible_subtasks(&[]).1, 0);
}

#[test]
fn badge_class_falls_back_to_grey() {
    assert_eq!(subtask_badge_class(Some("teal")), "subtask__badge subtask__badge--teal");
    assert_eq!(subtask_badge_class(Some("#ff0000")), "subtask__badge subtask__badge--grey");
    assert_eq!(subtask_badge_class(None), "subtask__badge subtask__badge--grey");
}
