use clap::Parser;

use chapquiz::cli::Cli;
use chapquiz::persist::{self, compute_file_hash, state_dir_for};
use chapquiz::state::{AppState, Dialog, Screen};
use chapquiz::{parser, source, timer, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let question_path = source::resolve_source(&cli.path)?;

    let source_hash = compute_file_hash(&question_path)?;

    let content = std::fs::read_to_string(&question_path)
        .map_err(|e| format!("Cannot read question file: {}", e))?;

    let chapters = parser::parse_questions(&content)?;
    if chapters.is_empty() {
        return Err(format!("No chapters found in {}", question_path.display()));
    }

    let source_file = question_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let canonical = question_path
        .canonicalize()
        .unwrap_or_else(|_| question_path.clone());
    let state_dir = state_dir_for(&canonical);

    if cli.reset {
        persist::clear_session(&state_dir)?;
        eprintln!("Saved session cleared.");
    }

    let mut state = AppState::new(chapters, source_file, source_hash);

    if !cli.reset {
        match persist::load_session(&mut state, &state_dir) {
            Ok(true) => {
                // Session restored
            }
            Ok(false) => {
                // No saved session
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
            }
        }
    }

    if let Some(name) = cli.name {
        state.taker = name;
    }

    if cli.status {
        persist::print_status(&state);
        return Ok(());
    }

    if let Some(ref export_path) = cli.export {
        persist::export_results(&state, export_path)?;
        eprintln!("Results exported to {}", export_path);
        return Ok(());
    }

    // Determine initial screen
    if state.taker.is_empty() {
        state.screen = Screen::NameEntry;
        state.input_mode = chapquiz::state::InputMode::NameInput;
    } else {
        state.screen = Screen::ChapterSelect;
        if state.resume_available {
            state.push_dialog(Dialog::Resume);
        }
    }

    let timer_rx = timer::spawn_elapsed_timer();

    tui::run_tui(state, timer_rx, state_dir)?;

    Ok(())
}
