use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use sha2::{Digest, Sha256};

use crate::model::{SavedChapter, SavedSession};
use crate::state::AppState;

const SESSION_FILE: &str = "session.yaml";

/// State directory for a question file, keyed by a hash of its canonical
/// path so distinct quizzes never share a session.
pub fn state_dir_for(question_file: &Path) -> PathBuf {
    let hash = compute_str_hash(&question_file.display().to_string());
    let key = &hash["sha256:".len()..][..16];
    match ProjectDirs::from("", "", "chapquiz") {
        Some(dirs) => dirs.data_dir().join(key),
        None => PathBuf::from(".chapquiz").join(key),
    }
}

pub fn save_session(state: &AppState, state_dir: &Path) -> Result<(), String> {
    fs::create_dir_all(state_dir)
        .map_err(|e| format!("Cannot create state dir: {}", e))?;

    let session = build_saved_session(state);
    let yaml = serde_yaml::to_string(&session)
        .map_err(|e| format!("Cannot serialize session: {}", e))?;
    atomic_write(&state_dir.join(SESSION_FILE), &yaml)?;

    Ok(())
}

pub fn build_saved_session(state: &AppState) -> SavedSession {
    let chapters = state
        .chapters
        .iter()
        .zip(state.progress.iter())
        .map(|(chapter, progress)| SavedChapter {
            number: chapter.number,
            score: progress.score,
            max_score: chapter.max_score(),
            current_question: progress.current_question,
            completed: progress.completed,
            answers: progress.records.clone(),
        })
        .collect();

    SavedSession {
        taker: state.taker.clone(),
        started_at: state
            .started_at
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
        saved_at: chrono::Utc::now().to_rfc3339(),
        source_file: state.source_file.clone(),
        source_hash: state.source_hash.clone(),
        current_chapter: state.current_chapter,
        current_question: state.current_question,
        chapters,
    }
}

/// Load a saved session into `state`. Returns Ok(false) when no save exists.
pub fn load_session(state: &mut AppState, state_dir: &Path) -> Result<bool, String> {
    let path = state_dir.join(SESSION_FILE);
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    let session: SavedSession = serde_yaml::from_str(&content)
        .map_err(|e| format!("Corrupt session file: {} (use --reset to start fresh)", e))?;

    if session.source_hash != state.source_hash {
        return Err(
            "Question file has changed since last session. Use --reset to start fresh."
                .to_string(),
        );
    }

    apply_saved_session(state, session);
    Ok(true)
}

/// Copy saved progress onto a freshly parsed state, clamping positions so a
/// stale save can never index past the current chapter list.
pub fn apply_saved_session(state: &mut AppState, session: SavedSession) {
    state.taker = session.taker;
    state.started_at = Some(session.started_at);

    for saved in session.chapters {
        let Some(idx) = state.chapters.iter().position(|c| c.number == saved.number) else {
            continue;
        };
        let questions = state.chapters[idx].questions.len();
        let progress = &mut state.progress[idx];
        progress.score = saved.score.min(state.chapters[idx].max_score());
        progress.current_question = saved.current_question.min(questions);
        progress.completed = saved.completed;
        progress.records = saved.answers;
    }

    if session.current_chapter < state.chapters.len() {
        state.current_chapter = session.current_chapter;
        let questions = state.chapters[session.current_chapter].questions.len();
        state.current_question = session.current_question.min(questions.saturating_sub(1));
        state.chapter_cursor = session.current_chapter;

        let mid_chapter = !state.progress[session.current_chapter].completed
            && (session.current_question > 0 || session.current_chapter > 0);
        state.resume_available = mid_chapter;
    }
}

pub fn clear_session(state_dir: &Path) -> Result<(), String> {
    if state_dir.exists() {
        fs::remove_dir_all(state_dir)
            .map_err(|e| format!("Cannot clear session: {}", e))?;
    }
    Ok(())
}

pub fn export_results(state: &AppState, path: &str) -> Result<(), String> {
    let session = build_saved_session(state);
    let yaml = serde_yaml::to_string(&session)
        .map_err(|e| format!("Cannot serialize session: {}", e))?;
    fs::write(path, &yaml).map_err(|e| format!("Cannot export: {}", e))?;
    Ok(())
}

pub fn print_status(state: &AppState) {
    println!("Quiz file: {}", state.source_file);
    if !state.taker.is_empty() {
        println!("Taker: {}", state.taker);
    }
    println!("Chapters: {}", state.chapters.len());
    for (idx, chapter) in state.chapters.iter().enumerate() {
        let progress = &state.progress[idx];
        let note = if progress.completed {
            " (complete)"
        } else if progress.attempted() {
            " (in progress)"
        } else {
            ""
        };
        println!(
            "  Chapter {}: {}/{}{}",
            chapter.number,
            progress.score,
            chapter.max_score(),
            note
        );
    }
    let (score, max) = state.overall_score();
    println!("Total: {}/{}", score, max);
}

fn atomic_write(path: &Path, content: &str) -> Result<(), String> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| format!("Cannot write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| format!("Cannot rename: {}", e))?;
    Ok(())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn compute_file_hash(path: &Path) -> Result<String, String> {
    let content =
        fs::read(path).map_err(|e| format!("Cannot read file {}: {}", path.display(), e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    let result = hasher.finalize();
    Ok(format!("sha256:{}", hex_encode(&result)))
}

pub fn compute_str_hash(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let result = hasher.finalize();
    format!("sha256:{}", hex_encode(&result))
}
