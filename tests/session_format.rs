use std::path::PathBuf;

use chapquiz::model::SavedSession;
use chapquiz::parser::parse_questions;
use chapquiz::persist;
use chapquiz::state::AppState;

const SOURCE: &str = "\
Chapter 1
1. First question?
A. yes
b. no
2. Second question?
A. this
B. that
c. other
Chapter 2
1. Another one?
A. sure
";

fn test_state() -> AppState {
    let chapters = parse_questions(SOURCE).unwrap();
    let mut state = AppState::new(chapters, "questions.txt".to_string(), "sha256:test".to_string());
    state.taker = "Alice".to_string();
    state.started_at = Some("2026-01-01T00:00:00+00:00".to_string());
    state
}

fn test_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("chapquiz-test-{}-{}", name, std::process::id()))
}

#[test]
fn test_saved_session_yaml_shape() {
    let mut state = test_state();
    state.start_chapter(0, 0);
    state.text_input = "a".to_string();
    state.submit_answer();
    state.advance_question();

    let session = persist::build_saved_session(&state);
    let yaml = serde_yaml::to_string(&session).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(doc["taker"].as_str(), Some("Alice"));
    assert_eq!(doc["source_file"].as_str(), Some("questions.txt"));
    assert_eq!(doc["source_hash"].as_str(), Some("sha256:test"));
    assert_eq!(doc["current_chapter"].as_u64(), Some(0));
    assert_eq!(doc["current_question"].as_u64(), Some(1));

    let chapters = doc["chapters"].as_sequence().unwrap();
    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0]["number"].as_u64(), Some(1));
    assert_eq!(chapters[0]["score"].as_u64(), Some(1));
    assert_eq!(chapters[0]["max_score"].as_u64(), Some(3));
    assert_eq!(chapters[0]["completed"].as_bool(), Some(false));

    let answers = chapters[0]["answers"].as_sequence().unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0]["question"].as_u64(), Some(1));
    assert_eq!(answers[0]["entered"].as_str(), Some("a"));
    assert_eq!(answers[0]["correct"].as_bool(), Some(true));
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = test_dir("roundtrip");
    persist::clear_session(&dir).unwrap();

    let mut state = test_state();
    state.start_chapter(0, 0);
    state.text_input = "a".to_string();
    state.submit_answer();
    state.advance_question();
    persist::save_session(&state, &dir).unwrap();

    let mut restored = test_state();
    restored.taker.clear();
    let loaded = persist::load_session(&mut restored, &dir).unwrap();
    assert!(loaded);

    assert_eq!(restored.taker, "Alice");
    assert_eq!(restored.current_chapter, 0);
    assert_eq!(restored.current_question, 1);
    assert!(restored.resume_available);
    assert_eq!(restored.progress[0].score, 1);
    assert_eq!(restored.progress[0].records.len(), 1);
    assert!(!restored.progress[0].completed);

    persist::clear_session(&dir).unwrap();
}

#[test]
fn test_load_without_save_is_ok_false() {
    let dir = test_dir("nosave");
    persist::clear_session(&dir).unwrap();

    let mut state = test_state();
    let loaded = persist::load_session(&mut state, &dir).unwrap();
    assert!(!loaded);
}

#[test]
fn test_changed_question_file_is_rejected() {
    let dir = test_dir("hash");
    persist::clear_session(&dir).unwrap();

    let state = test_state();
    persist::save_session(&state, &dir).unwrap();

    let chapters = parse_questions(SOURCE).unwrap();
    let mut other = AppState::new(
        chapters,
        "questions.txt".to_string(),
        "sha256:different".to_string(),
    );
    let err = persist::load_session(&mut other, &dir).unwrap_err();
    assert!(err.contains("--reset"), "unexpected error: {}", err);

    persist::clear_session(&dir).unwrap();
}

#[test]
fn test_stale_save_positions_are_clamped() {
    let chapters = parse_questions(SOURCE).unwrap();
    let mut state = AppState::new(chapters, "questions.txt".to_string(), "sha256:test".to_string());

    let session = SavedSession {
        taker: "Bob".to_string(),
        started_at: "2026-01-01T00:00:00+00:00".to_string(),
        saved_at: "2026-01-01T01:00:00+00:00".to_string(),
        source_file: "questions.txt".to_string(),
        source_hash: "sha256:test".to_string(),
        current_chapter: 1,
        current_question: 99,
        chapters: vec![chapquiz::model::SavedChapter {
            number: 1,
            score: 50,
            max_score: 3,
            current_question: 99,
            completed: false,
            answers: Vec::new(),
        }],
    };
    persist::apply_saved_session(&mut state, session);

    assert_eq!(state.current_chapter, 1);
    // Chapter 2 has one question; position clamps to the last index
    assert_eq!(state.current_question, 0);
    // Score clamps to the chapter's max
    assert_eq!(state.progress[0].score, 3);
    assert_eq!(state.progress[0].current_question, 2);
}

#[test]
fn test_saved_chapter_for_unknown_number_is_skipped() {
    let chapters = parse_questions(SOURCE).unwrap();
    let mut state = AppState::new(chapters, "questions.txt".to_string(), "sha256:test".to_string());

    let session = SavedSession {
        taker: "Bob".to_string(),
        started_at: "2026-01-01T00:00:00+00:00".to_string(),
        saved_at: "2026-01-01T01:00:00+00:00".to_string(),
        source_file: "questions.txt".to_string(),
        source_hash: "sha256:test".to_string(),
        current_chapter: 0,
        current_question: 0,
        chapters: vec![chapquiz::model::SavedChapter {
            number: 7,
            score: 1,
            max_score: 1,
            current_question: 1,
            completed: true,
            answers: Vec::new(),
        }],
    };
    persist::apply_saved_session(&mut state, session);

    assert_eq!(state.progress[0].score, 0);
    assert_eq!(state.progress[1].score, 0);
}
