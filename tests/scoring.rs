use chapquiz::parser::parse_questions;
use chapquiz::state::{split_answer_tokens, AppState, Screen, ScoreBand};

const SOURCE: &str = "\
Chapter 1
1. Pick both?
A. left
B. right
c. neither
Chapter 2
1. Pick one?
A. yes
b. no
";

fn test_state() -> AppState {
    let chapters = parse_questions(SOURCE).unwrap();
    AppState::new(chapters, "questions.txt".to_string(), "sha256:test".to_string())
}

#[test]
fn test_split_answer_tokens() {
    assert_eq!(split_answer_tokens("a b"), vec!["a", "b"]);
    assert_eq!(split_answer_tokens("A, B"), vec!["a", "b"]);
    assert_eq!(split_answer_tokens("  a ,, b  "), vec!["a", "b"]);
    // A repeated letter cannot score twice
    assert_eq!(split_answer_tokens("a a A"), vec!["a"]);
    assert!(split_answer_tokens("  , ").is_empty());
}

#[test]
fn test_submit_scores_each_correct_token() {
    let mut state = test_state();
    state.start_chapter(0, 0);
    state.text_input = "a c".to_string();
    state.submit_answer();

    let feedback = state.last_feedback.as_ref().unwrap();
    assert_eq!(feedback.gained, 1);
    assert_eq!(feedback.records.len(), 2);
    assert!(feedback.records[0].correct);
    assert!(!feedback.records[1].correct);
    assert_eq!(state.progress[0].score, 1);
}

#[test]
fn test_empty_submit_is_ignored() {
    let mut state = test_state();
    state.start_chapter(0, 0);
    state.text_input = "  ,  ".to_string();
    state.submit_answer();

    assert!(state.last_feedback.is_none());
    assert_eq!(state.progress[0].score, 0);
}

#[test]
fn test_finishing_last_question_completes_chapter() {
    let mut state = test_state();
    state.start_chapter(1, 0);
    state.text_input = "a".to_string();
    state.submit_answer();
    state.advance_question();

    assert!(state.progress[1].completed);
    assert_eq!(state.screen, Screen::ChapterResult);
}

#[test]
fn test_chapter_bands() {
    let mut state = test_state();
    assert_eq!(state.chapter_band(0), ScoreBand::Untouched);

    // Wrong answer only: attempted with zero score
    state.start_chapter(0, 0);
    state.text_input = "c".to_string();
    state.submit_answer();
    assert_eq!(state.chapter_band(0), ScoreBand::Zero);

    // One of two correct answers
    state.text_input = "a".to_string();
    state.last_feedback = None;
    state.submit_answer();
    assert_eq!(state.chapter_band(0), ScoreBand::Partial);

    // Both correct answers
    state.text_input = "b".to_string();
    state.last_feedback = None;
    state.submit_answer();
    assert_eq!(state.chapter_band(0), ScoreBand::Full);
}

#[test]
fn test_overall_score() {
    let mut state = test_state();
    state.start_chapter(0, 0);
    state.text_input = "a b".to_string();
    state.submit_answer();
    state.advance_question();

    let (score, max) = state.overall_score();
    assert_eq!(score, 2);
    assert_eq!(max, 3);
}

#[test]
fn test_restart_resets_chapter_progress() {
    let mut state = test_state();
    state.start_chapter(0, 0);
    state.text_input = "a b".to_string();
    state.submit_answer();
    state.advance_question();
    assert_eq!(state.progress[0].score, 2);

    state.start_chapter(0, 0);
    assert_eq!(state.progress[0].score, 0);
    assert!(state.progress[0].records.is_empty());
    assert!(!state.progress[0].completed);
}

#[test]
fn test_resume_keeps_chapter_progress() {
    let mut state = test_state();
    state.start_chapter(0, 0);
    state.text_input = "a".to_string();
    state.submit_answer();

    state.start_chapter(0, 1);
    assert_eq!(state.progress[0].score, 1);
    assert_eq!(state.current_question, 0);
}

#[test]
fn test_multi_char_token_never_scores() {
    let state = test_state();
    let question = &state.chapters[0].questions[0];
    assert!(question.is_correct("a"));
    assert!(question.is_correct("A"));
    assert!(!question.is_correct("ab"));
    assert!(!question.is_correct(""));
    assert!(!question.is_correct("left"));
}
