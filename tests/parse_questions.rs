use std::fs;

use chapquiz::parser::parse_questions;

#[test]
fn test_parse_fixture() {
    let content = fs::read_to_string("fixtures/questions.txt").expect("Cannot read fixture");
    let chapters = parse_questions(&content).unwrap();

    assert_eq!(chapters.len(), 3);
    assert_eq!(chapters[0].number, 1);
    assert_eq!(chapters[1].number, 2);
    assert_eq!(chapters[2].number, 3);

    assert_eq!(chapters[0].questions.len(), 2);
    assert_eq!(chapters[1].questions.len(), 2);
    assert_eq!(chapters[2].questions.len(), 1);

    // Question 1 of chapter 1: one correct answer, label lowercased
    let q1 = &chapters[0].questions[0];
    assert_eq!(q1.prompt, "1. Which call creates a new process on Unix?");
    assert_eq!(q1.answers.len(), 4);
    assert_eq!(q1.answers[1], "b. fork");
    assert_eq!(q1.correct, vec!['b']);

    // Question 2 of chapter 1: three correct answers
    let q2 = &chapters[0].questions[1];
    assert_eq!(q2.correct, vec!['a', 'b', 'd']);
    assert_eq!(q2.answers[0], "a. pipes");
    assert_eq!(q2.answers[2], "c. semicolons");

    // Max score sums correct answers per question
    assert_eq!(chapters[0].max_score(), 4);
    assert_eq!(chapters[1].max_score(), 3);
    assert_eq!(chapters[2].max_score(), 1);
}

#[test]
fn test_multiline_prompt() {
    let content = fs::read_to_string("fixtures/questions.txt").expect("Cannot read fixture");
    let chapters = parse_questions(&content).unwrap();

    let q = &chapters[1].questions[1];
    assert_eq!(
        q.prompt,
        "2. This prompt continues\nover a second line, asking which of these numbers are prime?"
    );
    assert_eq!(q.correct, vec!['b', 'd']);
}

#[test]
fn test_correct_answers_indistinguishable_in_display() {
    let content = fs::read_to_string("fixtures/questions.txt").expect("Cannot read fixture");
    let chapters = parse_questions(&content).unwrap();

    for chapter in &chapters {
        for question in &chapter.questions {
            for answer in &question.answers {
                let first = answer.chars().next().unwrap();
                assert!(
                    first.is_ascii_lowercase(),
                    "answer label leaked correctness: {}",
                    answer
                );
            }
        }
    }
}

#[test]
fn test_multi_digit_question_number() {
    let content = "Chapter 1\n12. A later question?\nA. yes\nb. no\n";
    let chapters = parse_questions(content).unwrap();

    assert_eq!(chapters[0].questions.len(), 1);
    assert_eq!(chapters[0].questions[0].prompt, "12. A later question?");
}

#[test]
fn test_digits_without_dot_are_not_a_question() {
    let content = "Chapter 1\n1. In which year was Unix released?\n1969 was the year\nA. 1969\nb. 1970\n";
    let chapters = parse_questions(content).unwrap();

    let q = &chapters[0].questions[0];
    // The bare-digits line extends the prompt instead of opening a question
    assert_eq!(
        q.prompt,
        "1. In which year was Unix released?\n1969 was the year"
    );
    assert_eq!(q.answers.len(), 2);
}

#[test]
fn test_question_without_answers_is_kept() {
    let content = "Chapter 1\n1. No options here?\n2. Real question?\nA. yes\n";
    let chapters = parse_questions(content).unwrap();

    assert_eq!(chapters[0].questions.len(), 2);
    assert!(chapters[0].questions[0].answers.is_empty());
    assert!(chapters[0].questions[0].correct.is_empty());
}

#[test]
fn test_invalid_chapter_number_is_an_error() {
    let err = parse_questions("Chapter one\n1. Q?\nA. yes\n").unwrap_err();
    assert!(err.contains("line 1"), "unexpected error: {}", err);
    assert!(err.contains("chapter number"), "unexpected error: {}", err);
}

#[test]
fn test_question_before_chapter_is_an_error() {
    let err = parse_questions("1. Orphan question?\nA. yes\n").unwrap_err();
    assert!(err.contains("line 1"), "unexpected error: {}", err);
}

#[test]
fn test_answer_before_question_is_ignored() {
    let content = "Chapter 1\na. stray answer\n1. Q?\nA. yes\n";
    let chapters = parse_questions(content).unwrap();

    assert_eq!(chapters[0].questions.len(), 1);
    assert_eq!(chapters[0].questions[0].answers, vec!["a. yes"]);
}

#[test]
fn test_chapter_without_questions_is_dropped() {
    let content = "Chapter 1\nChapter 2\n1. Q?\nA. yes\n";
    let chapters = parse_questions(content).unwrap();

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].number, 2);
}

#[test]
fn test_empty_input_yields_no_chapters() {
    assert!(parse_questions("").unwrap().is_empty());
    assert!(parse_questions("\n\n  \n").unwrap().is_empty());
}
