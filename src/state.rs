use crate::model::{AnswerRecord, Chapter, ChapterProgress, Question};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    NameEntry,
    ChapterSelect,
    Working,
    ChapterResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Resume,
    ConfirmRestart(usize),
    ConfirmQuit,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Navigation,
    AnswerInput,
    NameInput,
}

/// Color band for a chapter, derived from its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Full,
    Partial,
    Zero,
    Untouched,
}

/// Outcome of one answer submission, shown before advancing.
#[derive(Debug, Clone)]
pub struct SubmitFeedback {
    pub records: Vec<AnswerRecord>,
    pub gained: u32,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub taker: String,
    pub chapters: Vec<Chapter>,
    pub progress: Vec<ChapterProgress>,
    pub source_file: String,
    pub source_hash: String,
    pub current_chapter: usize,
    pub current_question: usize,
    pub chapter_cursor: usize,
    pub input_mode: InputMode,
    pub dialog_stack: Vec<Dialog>,
    pub text_input: String,
    pub text_cursor: usize,
    pub name_input: String,
    pub last_feedback: Option<SubmitFeedback>,
    pub resume_available: bool,
    pub started_at: Option<String>,
    pub elapsed_seconds: Option<i64>,
    pub sidebar_scroll: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(chapters: Vec<Chapter>, source_file: String, source_hash: String) -> Self {
        let progress = vec![ChapterProgress::default(); chapters.len()];
        Self {
            screen: Screen::ChapterSelect,
            taker: String::new(),
            chapters,
            progress,
            source_file,
            source_hash,
            current_chapter: 0,
            current_question: 0,
            chapter_cursor: 0,
            input_mode: InputMode::Navigation,
            dialog_stack: Vec::new(),
            text_input: String::new(),
            text_cursor: 0,
            name_input: String::new(),
            last_feedback: None,
            resume_available: false,
            started_at: None,
            elapsed_seconds: None,
            sidebar_scroll: 0,
            should_quit: false,
        }
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.chapters.get(self.current_chapter)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_chapter()?.questions.get(self.current_question)
    }

    pub fn chapter_band(&self, idx: usize) -> ScoreBand {
        let Some(chapter) = self.chapters.get(idx) else {
            return ScoreBand::Untouched;
        };
        let Some(progress) = self.progress.get(idx) else {
            return ScoreBand::Untouched;
        };
        if !progress.attempted() {
            ScoreBand::Untouched
        } else if progress.score >= chapter.max_score() && chapter.max_score() > 0 {
            ScoreBand::Full
        } else if progress.score > 0 {
            ScoreBand::Partial
        } else {
            ScoreBand::Zero
        }
    }

    /// (total score, total max score) across all chapters.
    pub fn overall_score(&self) -> (u32, u32) {
        let score = self.progress.iter().map(|p| p.score).sum();
        let max = self.chapters.iter().map(|c| c.max_score()).sum();
        (score, max)
    }

    pub fn band_counts(&self) -> BandCounts {
        let mut counts = BandCounts::default();
        for idx in 0..self.chapters.len() {
            match self.chapter_band(idx) {
                ScoreBand::Full => counts.full += 1,
                ScoreBand::Partial => counts.partial += 1,
                ScoreBand::Zero => counts.zero += 1,
                ScoreBand::Untouched => counts.untouched += 1,
            }
        }
        counts
    }

    /// Enter a chapter at the given question. Starting from the top resets
    /// that chapter's progress; resuming keeps it.
    pub fn start_chapter(&mut self, idx: usize, from_question: usize) {
        if idx >= self.chapters.len() {
            return;
        }
        if from_question == 0 {
            self.progress[idx] = ChapterProgress::default();
        }
        self.current_chapter = idx;
        self.current_question = from_question.min(
            self.chapters[idx].questions.len().saturating_sub(1),
        );
        self.text_input.clear();
        self.text_cursor = 0;
        self.last_feedback = None;
        self.resume_available = false;
        self.screen = Screen::Working;
        self.input_mode = InputMode::AnswerInput;
    }

    /// Score the current text input against the current question. Tokens are
    /// split on whitespace and commas, lowercased, and deduplicated so a
    /// repeated letter cannot score twice.
    pub fn submit_answer(&mut self) {
        let Some(question) = self.current_question().cloned() else {
            return;
        };
        let tokens = split_answer_tokens(&self.text_input);
        if tokens.is_empty() {
            return;
        }

        let qnum = self.current_question as u32 + 1;
        let mut records = Vec::with_capacity(tokens.len());
        let mut gained = 0u32;
        for token in tokens {
            let correct = question.is_correct(&token);
            if correct {
                gained += 1;
            }
            records.push(AnswerRecord {
                question: qnum,
                entered: token,
                correct,
            });
        }

        let progress = &mut self.progress[self.current_chapter];
        progress.score += gained;
        progress.records.extend(records.iter().cloned());
        self.last_feedback = Some(SubmitFeedback { records, gained });
        self.text_input.clear();
        self.text_cursor = 0;
        self.input_mode = InputMode::Navigation;
    }

    /// Move past the just-answered question; finishes the chapter when it was
    /// the last one.
    pub fn advance_question(&mut self) {
        self.last_feedback = None;
        let total = self
            .current_chapter()
            .map(|c| c.questions.len())
            .unwrap_or(0);
        let next = self.current_question + 1;
        let progress = &mut self.progress[self.current_chapter];
        if next >= total {
            progress.current_question = total;
            progress.completed = true;
            self.screen = Screen::ChapterResult;
            self.input_mode = InputMode::Navigation;
        } else {
            progress.current_question = next;
            self.current_question = next;
            self.input_mode = InputMode::AnswerInput;
        }
    }

    /// Leave the running chapter without finishing it; position is kept so
    /// the session can resume here.
    pub fn leave_chapter(&mut self) {
        self.last_feedback = None;
        self.text_input.clear();
        self.text_cursor = 0;
        self.chapter_cursor = self.current_chapter;
        self.screen = Screen::ChapterSelect;
        self.input_mode = InputMode::Navigation;
    }

    pub fn chapter_attempted(&self, idx: usize) -> bool {
        self.progress.get(idx).map(|p| p.attempted()).unwrap_or(false)
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog_stack.is_empty()
    }

    pub fn top_dialog(&self) -> Option<&Dialog> {
        self.dialog_stack.last()
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialog_stack.push(dialog);
    }

    pub fn pop_dialog(&mut self) -> Option<Dialog> {
        self.dialog_stack.pop()
    }
}

#[derive(Debug, Default)]
pub struct BandCounts {
    pub full: usize,
    pub partial: usize,
    pub zero: usize,
    pub untouched: usize,
}

/// Split an entered answer into lowercase tokens, first occurrence wins.
pub fn split_answer_tokens(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for part in input.split(|c: char| c.is_whitespace() || c == ',') {
        let token = part.trim().to_lowercase();
        if token.is_empty() || tokens.contains(&token) {
            continue;
        }
        tokens.push(token);
    }
    tokens
}
