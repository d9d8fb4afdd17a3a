use super::*;

fn saved(id: &str, kind: SavedKind, task_id: Option<&str>) -> SavedProject {
    SavedProject {
        id: id.to_owned(),
        kind,
        name: format!("Item {id}"),
        created_at: None,
        task_id: task_id.map(str::to_owned),
        project_id: None,
        idea_id: None,
    }
}

#[test]
fn shows_at_most_five_rows() {
    let items: Vec<_> = (0..8).map(|i| saved(&i.to_string(), SavedKind::Idea, None)).collect();
    let (shown, hidden) = visible_saved(&items);
    assert_eq!(shown.len(), 5);
    assert_eq!(shown[4].id, "4");
    assert_eq!(hidden, 3);
}

#[test]
fn short_list_has_no_overflow() {
    let items = vec![saved("a", SavedKind::Evaluation, None)];
    assert_eq!(visible_saved(&items).1, 0);
}

#[test]
fn caption_mentions_linked_task() {
    assert_eq!(saved_caption(&saved("a", SavedKind::Idea, Some("t1"))), "Idea • Has Task");
    assert_eq!(saved_caption(&saved("b", SavedKind::Evaluation, None)), "Evaluation");
}
