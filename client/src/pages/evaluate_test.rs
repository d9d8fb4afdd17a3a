use super::*;

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

fn named_form() -> EvalForm {
    EvalForm { name: "HealthTrack".to_owned(), ..EvalForm::default() }
}

#[test]
fn form_defaults_to_two_days_solo() {
    let form = EvalForm::default();
    assert_eq!(form.time_available, 48);
    assert_eq!(form.team_size, 1);
}

#[test]
fn word_count_splits_on_any_whitespace() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("  one\ttwo\n\nthree  "), 3);
}

#[test]
fn quick_description_layout() {
    assert_eq!(
        compose_quick_description("slow triage", "an AI nurse", "- chat\n- alerts"),
        "Problem: slow triage\n\nSolution: an AI nurse\n\nKey Features:\n- chat\n- alerts"
    );
}

#[test]
fn upload_texts_joined_by_blank_line() {
    assert_eq!(join_upload_texts(&["a".to_owned(), "b".to_owned()]), "a\n\nb");
}

#[test]
fn missing_name_or_description_is_required_error() {
    let empty_name = EvalForm::default().to_request(words(120));
    assert_eq!(
        validate_evaluation(&empty_name),
        Err("Project name and description are required".to_owned())
    );
    let empty_desc = named_form().to_request("   ".to_owned());
    assert_eq!(
        validate_evaluation(&empty_desc),
        Err("Project name and description are required".to_owned())
    );
}

#[test]
fn short_description_reports_current_count() {
    let request = named_form().to_request(words(99));
    assert_eq!(
        validate_evaluation(&request),
        Err("Description must be at least 100 words (currently 99 words)".to_owned())
    );
    assert_eq!(validate_evaluation(&named_form().to_request(words(100))), Ok(()));
}

#[test]
fn to_request_omits_blank_optionals() {
    let form = EvalForm { tech_stack: "  ".to_owned(), theme: " Health ".to_owned(), ..named_form() };
    let request = form.to_request("d".to_owned());
    assert_eq!(request.tech_stack, None);
    assert_eq!(request.theme.as_deref(), Some("Health"));
    assert_eq!(request.github_url, None);
}

#[test]
fn github_repo_fills_description_stack_and_url() {
    let repo = GithubRepo { readme: "# Readme".to_owned(), languages: vec!["Rust".to_owned(), "TypeScript".to_owned()] };
    let request = apply_github(named_form().to_request(String::new()), repo, " https://github.com/a/b ");
    assert_eq!(request.description, "# Readme");
    assert_eq!(request.tech_stack.as_deref(), Some("Rust, TypeScript"));
    assert_eq!(request.github_url.as_deref(), Some("https://github.com/a/b"));
}

fn file(name: &str, size: u64) -> PickedFile {
    PickedFile { name: name.to_owned(), size }
}

#[test]
fn upload_batch_within_limits_is_accepted_whole() {
    let screen = screen_uploads(0, &[file("a.md", 10), file("exact.pdf", MAX_UPLOAD_BYTES)]);
    assert_eq!(screen, UploadScreen { accepted: vec![0, 1], error: None });
}

#[test]
fn oversized_file_is_dropped_but_rest_of_batch_kept() {
    let screen = screen_uploads(
        0,
        &[file("a.md", 10), file("huge.pdf", MAX_UPLOAD_BYTES + 1), file("b.txt", 20)],
    );
    assert_eq!(screen.accepted, vec![0, 2]);
    assert_eq!(screen.error.as_deref(), Some("huge.pdf is larger than 25 MB"));
}

#[test]
fn every_oversized_file_is_named() {
    let big = MAX_UPLOAD_BYTES + 1;
    let screen = screen_uploads(0, &[file("x.pdf", big), file("y.docx", big)]);
    assert!(screen.accepted.is_empty());
    assert_eq!(screen.error.as_deref(), Some("x.pdf, y.docx are larger than 25 MB"));
}

#[test]
fn later_picks_append_until_the_cap() {
    let mut selection: Vec<PickedFile> = Vec::new();
    for batch in [vec![file("a.md", 1)], vec![file("b.md", 1)]] {
        let screen = screen_uploads(selection.len(), &batch);
        assert_eq!(screen.error, None);
        selection.extend(screen.accepted.iter().map(|&i| batch[i].clone()));
    }
    let names: Vec<_> = selection.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.md", "b.md"]);
}

#[test]
fn file_cap_counts_the_existing_selection() {
    let batch: Vec<_> = (0..4).map(|i| file(&format!("{i}.txt"), 1)).collect();
    let screen = screen_uploads(MAX_UPLOAD_FILES - 2, &batch);
    assert_eq!(screen.accepted, vec![0, 1]);
    assert_eq!(
        screen.error.as_deref(),
        Some("You can upload at most 10 files; skipped 2.txt, 3.txt")
    );

    let full = screen_uploads(MAX_UPLOAD_FILES, &[file("late.md", 1)]);
    assert!(full.accepted.is_empty());
}

#[test]
fn oversized_and_over_cap_messages_combine() {
    let screen = screen_uploads(MAX_UPLOAD_FILES, &[file("huge.pdf", MAX_UPLOAD_BYTES + 1), file("c.md", 1)]);
    assert!(screen.accepted.is_empty());
    assert_eq!(
        screen.error.as_deref(),
        Some("huge.pdf is larger than 25 MB. You can upload at most 10 files; skipped c.md")
    );
}

#[test]
fn size_label_rounds_to_tenths() {
    assert_eq!(size_label(0), "0.0 KB");
    assert_eq!(size_label(1024), "1.0 KB");
    assert_eq!(size_label(1536), "1.5 KB");
}

#[test]
fn team_five_is_open_ended() {
    assert_eq!(team_label(1), "1");
    assert_eq!(team_label(5), "5+");
}
