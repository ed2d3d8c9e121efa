use crate::model::{Chapter, Question};

/// Parse the flat question-file format into chapters.
///
/// Line classification, single pass:
/// - `Chapter N` starts a new chapter
/// - a digit run followed by `.` starts a new question
/// - a letter followed by `.` is a candidate answer; an uppercase letter
///   marks it correct and is lowercased for display
/// - any other non-blank line extends the prompt of an open question
pub fn parse_questions(content: &str) -> Result<Vec<Chapter>, String> {
    let mut chapters: Vec<Chapter> = Vec::new();
    let mut chapter_number: Option<u32> = None;
    let mut chapter_questions: Vec<Question> = Vec::new();

    let mut prompt = String::new();
    let mut answers: Vec<String> = Vec::new();
    let mut correct: Vec<char> = Vec::new();
    // True between a question header and its first answer line; continuation
    // lines extend the prompt only in this window.
    let mut prompt_open = false;

    for (idx, raw) in content.lines().enumerate() {
        let lineno = idx + 1;
        let line = raw.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("Chapter ") {
            finish_question(&mut chapter_questions, &mut prompt, &mut answers, &mut correct);
            prompt_open = false;
            if let Some(number) = chapter_number {
                if !chapter_questions.is_empty() {
                    chapters.push(Chapter {
                        number,
                        questions: std::mem::take(&mut chapter_questions),
                    });
                }
            }
            chapter_questions.clear();
            let number: u32 = rest.trim().parse().map_err(|_| {
                format!(
                    "line {}: chapter number must be an integer, got {:?}",
                    lineno,
                    rest.trim()
                )
            })?;
            chapter_number = Some(number);
        } else if starts_question(line) {
            if chapter_number.is_none() {
                return Err(format!(
                    "line {}: question before any chapter header",
                    lineno
                ));
            }
            finish_question(&mut chapter_questions, &mut prompt, &mut answers, &mut correct);
            prompt = line.trim().to_string();
            prompt_open = true;
        } else if let Some(label) = answer_label(line) {
            if prompt.is_empty() {
                // Answer line with no question to attach to.
                continue;
            }
            prompt_open = false;
            let mut text = line.trim().to_string();
            if label.is_ascii_uppercase() {
                correct.push(label.to_ascii_lowercase());
                text.replace_range(..1, &label.to_ascii_lowercase().to_string());
            }
            answers.push(text);
        } else if prompt_open {
            prompt.push('\n');
            prompt.push_str(line.trim());
        }
        // Anything else outside a prompt window is ignored.
    }

    finish_question(&mut chapter_questions, &mut prompt, &mut answers, &mut correct);
    if let Some(number) = chapter_number {
        if !chapter_questions.is_empty() {
            chapters.push(Chapter {
                number,
                questions: chapter_questions,
            });
        }
    }

    Ok(chapters)
}

fn finish_question(
    questions: &mut Vec<Question>,
    prompt: &mut String,
    answers: &mut Vec<String>,
    correct: &mut Vec<char>,
) {
    if prompt.is_empty() {
        answers.clear();
        correct.clear();
        return;
    }
    questions.push(Question {
        prompt: std::mem::take(prompt),
        answers: std::mem::take(answers),
        correct: std::mem::take(correct),
    });
}

/// A question header is a digit run immediately followed by `.`.
fn starts_question(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with('.')
}

/// An answer line is a single ASCII letter followed by `.`.
fn answer_label(line: &str) -> Option<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some('.')) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}
