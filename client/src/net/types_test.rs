use super::*;

#[test]
fn task_deserializes_with_missing_optional_fields() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": "t1",
        "title": "Build demo",
    }))
    .unwrap();
    assert_eq!(task.status, TaskStatus::Draft);
    assert_eq!(task.priority, TaskPriority::Secondary);
    assert_eq!(task.progress, 0);
    assert!(task.subtasks.is_empty());
    assert_eq!(task.interactions, TaskInteractions::default());
}

#[test]
fn task_deserializes_full_backend_row() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": "t2",
        "title": "Pitch deck",
        "description": "Slides",
        "status": "in_progress",
        "priority": "main",
        "progress": 40,
        "is_favorite": true,
        "subtasks": [
            {"id": "s1", "title": "Outline", "type": "design", "color": "#f00", "completed": true, "order_index": 0}
        ],
        "interactions": {"comments": 2, "views": 5, "attachments": 1},
        "created_at": "2025-01-01T00:00:00",
        "updated_at": null
    }))
    .unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, TaskPriority::Main);
    assert_eq!(task.subtasks[0].kind.as_deref(), Some("design"));
    assert!(task.subtasks[0].completed);
    assert_eq!(task.interactions.views, 5);
    assert_eq!(task.updated_at, None);
}

#[test]
fn task_status_wire_values_and_titles() {
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), "in_progress");
    assert_eq!(TaskStatus::parse("editing"), Some(TaskStatus::Editing));
    assert_eq!(TaskStatus::parse("archived"), None);
    let titles: Vec<_> = TaskStatus::ALL.iter().map(|s| s.column_title()).collect();
    assert_eq!(titles, ["DRAFT", "IN PROGRESS", "EDITING", "DONE"]);
}

#[test]
fn task_priority_labels() {
    assert_eq!(TaskPriority::Main.label(), "Main Task");
    assert_eq!(TaskPriority::Tertiary.label(), "Tertiary Task");
    assert_eq!(TaskPriority::parse("secondary"), Some(TaskPriority::Secondary));
}

#[test]
fn task_update_serializes_only_set_fields() {
    assert_eq!(
        serde_json::to_value(TaskUpdate::status(TaskStatus::Done)).unwrap(),
        serde_json::json!({ "status": "done" })
    );
    assert_eq!(
        serde_json::to_value(TaskUpdate::favorite(true)).unwrap(),
        serde_json::json!({ "is_favorite": true })
    );
}

#[test]
fn new_task_omits_empty_subtasks_and_description() {
    let task = NewTask { title: "Ship it".to_owned(), ..NewTask::default() };
    assert_eq!(
        serde_json::to_value(task).unwrap(),
        serde_json::json!({
            "title": "Ship it",
            "status": "draft",
            "priority": "secondary",
            "progress": 0,
            "is_favorite": false
        })
    );
}

#[test]
fn save_project_request_shapes() {
    assert_eq!(
        serde_json::to_value(SaveProjectRequest::evaluation("e1")).unwrap(),
        serde_json::json!({ "type": "evaluation", "project_id": "e1" })
    );
    assert_eq!(
        serde_json::to_value(SaveProjectRequest::idea("batch", 2, false)).unwrap(),
        serde_json::json!({ "type": "idea", "idea_id": "batch", "idea_index": 2, "create_task": false })
    );
}

#[test]
fn saved_project_reads_type_field() {
    let saved: SavedProject = serde_json::from_value(serde_json::json!({
        "id": "sp1",
        "type": "idea",
        "name": "Green Commute",
        "task_id": "t9",
        "idea_id": "batch"
    }))
    .unwrap();
    assert_eq!(saved.kind, SavedKind::Idea);
    assert_eq!(saved.kind.label(), "Idea");
    assert_eq!(saved.task_id.as_deref(), Some("t9"));
    assert_eq!(saved.project_id, None);
}

#[test]
fn evaluation_response_tolerates_sparse_analysis() {
    let eval: EvaluationResponse = serde_json::from_value(serde_json::json!({
        "id": "e1",
        "overall_score": 47.0,
        "readiness_level": "demo_ready",
        "scores": {
            "technical": 4.5,
            "innovation": 3.7,
            "impact": 5,
            "execution": 4,
            "detailed": {"code_quality": 5, "wow_factor": 3}
        },
        "analysis": {"executive_summary": "Solid start."},
        "recommendations": {"quick_wins": [{"action": "Add README"}], "pitch": {}}
    }))
    .unwrap();
    assert!((eval.scores.impact - 5.0).abs() < f64::EPSILON);
    assert_eq!(eval.scores.detailed.len(), 2);
    assert_eq!(eval.analysis.executive_summary, "Solid start.");
    assert!(eval.analysis.strengths.is_empty());
    assert_eq!(eval.recommendations.quick_wins[0].action, "Add README");
    assert!(eval.recommendations.pitch.as_ref().unwrap().is_empty());
}

#[test]
fn questionnaire_defaults_match_form_defaults() {
    let q = QuestionnaireData::default();
    assert_eq!(q.skill_level, "intermediate");
    assert_eq!(q.team_size, 1);
    assert_eq!(q.time_available, 48);
    assert_eq!(q.ui_importance, "medium");
    assert_eq!(q.ai_preference, "optional");
    assert!(q.languages.is_empty());
}

#[test]
fn idea_response_defaults_missing_sections() {
    let batch: IdeaResponse = serde_json::from_value(serde_json::json!({
        "id": "b1",
        "ideas": [{
            "name": "MediMind",
            "tagline": "Pill reminders that listen",
            "technical": {"tech_stack": ["React", "Flask"]},
            "match_score": 82
        }]
    }))
    .unwrap();
    let idea = &batch.ideas[0];
    assert_eq!(idea.domain, None);
    assert_eq!(idea.technical.tech_stack, ["React", "Flask"]);
    assert!(idea.feasibility.time_fit.is_empty());
    assert_eq!(idea.match_score, 82);
}
