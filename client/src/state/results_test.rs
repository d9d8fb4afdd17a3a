use super::*;

fn batch(id: &str) -> IdeaResponse {
    IdeaResponse { id: id.to_owned(), ideas: Vec::new() }
}

#[test]
fn resolve_prefers_in_memory_when_ids_match() {
    let memory = batch("a");
    let picked = resolve(Some(&memory), Some(batch("a")), Some("a")).unwrap();
    assert_eq!(picked.id, "a");
}

#[test]
fn resolve_falls_back_to_cache_for_other_id() {
    let memory = batch("old");
    let picked = resolve(Some(&memory), Some(batch("new")), Some("new")).unwrap();
    assert_eq!(picked.id, "new");
}

#[test]
fn resolve_rejects_stale_values() {
    let memory = batch("old");
    assert!(resolve(Some(&memory), Some(batch("older")), Some("new")).is_none());
}

#[test]
fn resolve_without_id_takes_whatever_exists() {
    assert_eq!(resolve(None, Some(batch("c")), None).unwrap().id, "c");
    assert!(resolve::<IdeaResponse>(None, None, None).is_none());
}

#[test]
fn return_to_form_only_without_value_and_id() {
    assert!(should_return_to_form::<IdeaResponse>(None, None));
    assert!(should_return_to_form::<IdeaResponse>(None, Some("")));
    assert!(!should_return_to_form::<IdeaResponse>(None, Some("x")));
    assert!(!should_return_to_form(Some(&batch("x")), None));
}

#[test]
fn remember_keeps_value_in_memory() {
    let mut state = ResultsState::default();
    state.remember_ideas(batch("z"));
    assert_eq!(state.ideas_for(Some("z")).unwrap().id, "z");
    assert!(state.ideas_for(Some("y")).is_none());
}
