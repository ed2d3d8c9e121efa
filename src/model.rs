use serde::{Deserialize, Serialize};

/// A named group of questions parsed from the question file.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub number: u32,
    pub questions: Vec<Question>,
}

impl Chapter {
    /// One point per correct answer, summed over all questions.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| q.correct.len() as u32).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    /// Full prompt text, including the leading "N." from the file.
    pub prompt: String,
    /// Candidate answers as displayed, e.g. "a. a borrow checker".
    pub answers: Vec<String>,
    /// Lowercased labels of the correct answers.
    pub correct: Vec<char>,
}

impl Question {
    /// An entered token scores iff it is a single letter in the correct set.
    pub fn is_correct(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.correct.contains(&c.to_ascii_lowercase()),
            _ => false,
        }
    }
}

/// One entered token and whether it scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// 1-based question position within the chapter.
    pub question: u32,
    pub entered: String,
    pub correct: bool,
}

/// Per-chapter session progress.
#[derive(Debug, Clone, Default)]
pub struct ChapterProgress {
    pub score: u32,
    pub current_question: usize,
    pub completed: bool,
    pub records: Vec<AnswerRecord>,
}

impl ChapterProgress {
    pub fn attempted(&self) -> bool {
        !self.records.is_empty() || self.completed
    }
}

/// Whole-session snapshot written to the save file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    pub taker: String,
    pub started_at: String,
    pub saved_at: String,
    pub source_file: String,
    pub source_hash: String,
    pub current_chapter: usize,
    pub current_question: usize,
    pub chapters: Vec<SavedChapter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedChapter {
    pub number: u32,
    pub score: u32,
    pub max_score: u32,
    pub current_question: usize,
    pub completed: bool,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}
