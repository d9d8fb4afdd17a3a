use super::*;

fn answered() -> QuestionnaireData {
    QuestionnaireData {
        primary_skill: "Backend Development".to_owned(),
        languages: vec!["Rust".to_owned()],
        primary_goal: "learn".to_owned(),
        ..QuestionnaireData::default()
    }
}

#[test]
fn step_one_requires_skill_then_language() {
    let mut data = QuestionnaireData::default();
    assert_eq!(validate_step(1, &data), Err("Please select your strongest skill"));
    data.primary_skill = "UI/UX Design".to_owned();
    assert_eq!(validate_step(1, &data), Err("Please select at least one programming language"));
    data.languages.push("Go".to_owned());
    assert_eq!(validate_step(1, &data), Ok(()));
}

#[test]
fn step_two_requires_goal() {
    let mut data = answered();
    data.primary_goal.clear();
    assert_eq!(validate_step(2, &data), Err("Please select your primary goal"));
}

#[test]
fn later_steps_have_no_required_fields() {
    let data = QuestionnaireData::default();
    for step in 3..=TOTAL_STEPS {
        assert_eq!(validate_step(step, &data), Ok(()));
    }
}

#[test]
fn submission_rechecks_required_fields() {
    assert_eq!(validate_submission(&answered()), Ok(()));
    let missing_goal = QuestionnaireData { primary_goal: String::new(), ..answered() };
    assert_eq!(validate_submission(&missing_goal), Err("Please fill in all required fields"));
}

#[test]
fn progress_is_a_fifth_per_step() {
    assert_eq!(progress_percent(1), 20);
    assert_eq!(progress_percent(3), 60);
    assert_eq!(progress_percent(5), 100);
    assert_eq!(progress_percent(9), 100);
}

#[test]
fn toggle_adds_and_removes() {
    let mut data = QuestionnaireData::default();
    MultiField::Languages.toggle(&mut data, "Rust");
    MultiField::Languages.toggle(&mut data, "Go");
    assert_eq!(data.languages, vec!["Rust".to_owned(), "Go".to_owned()]);
    MultiField::Languages.toggle(&mut data, "Rust");
    assert_eq!(data.languages, vec!["Go".to_owned()]);
}

#[test]
fn domains_capped_at_three() {
    let mut data = QuestionnaireData::default();
    for domain in ["Healthcare", "Education", "Finance", "Gaming"] {
        MultiField::DomainInterests.toggle(&mut data, domain);
    }
    assert_eq!(data.domain_interests.len(), MAX_DOMAINS);
    assert!(MultiField::DomainInterests.is_locked(&data, "Gaming"));
    assert!(!MultiField::DomainInterests.is_locked(&data, "Finance"));

    MultiField::DomainInterests.toggle(&mut data, "Finance");
    assert!(!MultiField::DomainInterests.is_locked(&data, "Gaming"));
}

#[test]
fn uncapped_fields_never_lock() {
    let mut data = QuestionnaireData::default();
    for lang in LANGUAGES {
        MultiField::Languages.toggle(&mut data, lang);
    }
    assert_eq!(data.languages.len(), LANGUAGES.len());
    assert!(!MultiField::Languages.is_locked(&data, "Zig"));
}

#[test]
fn choice_fields_round_trip_through_accessors() {
    let mut data = QuestionnaireData::default();
    assert_eq!(ChoiceField::SkillLevel.get(&data), "intermediate");
    ChoiceField::ProjectType.set(&mut data, "game".to_owned());
    assert_eq!(data.project_type, "game");
    assert_eq!(ChoiceField::ProjectType.get(&data), "game");
}

#[test]
fn validation_errors_use_generic_heading() {
    let err = FormError::validation("Please fill in all required fields");
    assert!(!err.rate_limited);
    assert_eq!(err.heading(), "Error Generating Ideas");
}

#[test]
fn rate_limited_errors_use_rate_limit_heading() {
    let err = FormError { message: "slow down".to_owned(), rate_limited: true };
    assert_eq!(err.heading(), "API Rate Limit Reached");
}
