use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::persist;
use crate::state::*;
use crate::timer::TimerEvent;

pub fn run_tui(
    mut state: AppState,
    timer_rx: mpsc::Receiver<TimerEvent>,
    state_dir: std::path::PathBuf,
) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state, &timer_rx, &state_dir);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    timer_rx: &mpsc::Receiver<TimerEvent>,
    state_dir: &std::path::Path,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                handle_key(key, state, state_dir)?;
                // Auto-save once a named session exists
                if !state.taker.is_empty() {
                    let _ = persist::save_session(state, state_dir);
                }
            }
        }

        // Handle timer events
        while let Ok(ev) = timer_rx.try_recv() {
            let TimerEvent::Tick(secs) = ev;
            state.elapsed_seconds = Some(secs);
        }
    }

    Ok(())
}

fn handle_key(
    key: KeyEvent,
    state: &mut AppState,
    state_dir: &std::path::Path,
) -> Result<(), String> {
    // Handle dialog keys first
    if state.has_dialog() {
        return handle_dialog_key(key, state, state_dir);
    }

    match state.screen {
        Screen::NameEntry => handle_name_key(key, state),
        Screen::ChapterSelect => handle_select_key(key, state),
        Screen::Working => handle_working_key(key, state),
        Screen::ChapterResult => handle_result_key(key, state),
    }
}

fn handle_name_key(key: KeyEvent, state: &mut AppState) -> Result<(), String> {
    match key.code {
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.name_input.push(c);
        }
        KeyCode::Backspace => {
            state.name_input.pop();
        }
        KeyCode::Enter => {
            let name = state.name_input.trim();
            state.taker = if name.is_empty() {
                "John Doe".to_string()
            } else {
                name.to_string()
            };
            if state.started_at.is_none() {
                state.started_at = Some(chrono::Utc::now().to_rfc3339());
            }
            state.screen = Screen::ChapterSelect;
            state.input_mode = InputMode::Navigation;
        }
        _ => {}
    }
    Ok(())
}

fn handle_select_key(key: KeyEvent, state: &mut AppState) -> Result<(), String> {
    let total = state.chapters.len();
    match key.code {
        KeyCode::Up | KeyCode::Left => {
            state.chapter_cursor = state.chapter_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Right => {
            if state.chapter_cursor + 1 < total {
                state.chapter_cursor += 1;
            }
        }
        KeyCode::Home => {
            state.chapter_cursor = 0;
        }
        KeyCode::End => {
            state.chapter_cursor = total.saturating_sub(1);
        }
        KeyCode::Enter => {
            let idx = state.chapter_cursor;
            if state.chapter_attempted(idx) {
                state.push_dialog(Dialog::ConfirmRestart(idx));
            } else {
                state.start_chapter(idx, 0);
            }
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            state.push_dialog(Dialog::ConfirmQuit);
        }
        _ => {}
    }
    Ok(())
}

fn handle_working_key(key: KeyEvent, state: &mut AppState) -> Result<(), String> {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.push_dialog(Dialog::ConfirmQuit);
        return Ok(());
    }

    // Feedback shown: waiting to advance
    if state.last_feedback.is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.advance_question();
            }
            KeyCode::Esc => {
                state.leave_chapter();
            }
            KeyCode::Char('?') => {
                state.push_dialog(Dialog::Help);
            }
            _ => {}
        }
        return Ok(());
    }

    // Answer entry. Tokens are ASCII letter labels, so non-ASCII input is
    // dropped and cursor positions stay on char boundaries.
    match key.code {
        KeyCode::Char(c) if c.is_ascii() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.text_input.insert(state.text_cursor, c);
            state.text_cursor += 1;
        }
        KeyCode::Backspace => {
            if state.text_cursor > 0 {
                state.text_cursor -= 1;
                state.text_input.remove(state.text_cursor);
            }
        }
        KeyCode::Delete => {
            if state.text_cursor < state.text_input.len() {
                state.text_input.remove(state.text_cursor);
            }
        }
        KeyCode::Left => {
            if state.text_cursor > 0 {
                state.text_cursor -= 1;
            }
        }
        KeyCode::Right => {
            if state.text_cursor < state.text_input.len() {
                state.text_cursor += 1;
            }
        }
        KeyCode::Home => {
            state.text_cursor = 0;
        }
        KeyCode::End => {
            state.text_cursor = state.text_input.len();
        }
        KeyCode::Enter => {
            state.submit_answer();
        }
        KeyCode::Esc => {
            state.leave_chapter();
        }
        _ => {}
    }
    Ok(())
}

fn handle_result_key(key: KeyEvent, state: &mut AppState) -> Result<(), String> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            state.leave_chapter();
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.push_dialog(Dialog::ConfirmQuit);
        }
        _ => {}
    }
    Ok(())
}

fn handle_dialog_key(
    key: KeyEvent,
    state: &mut AppState,
    state_dir: &std::path::Path,
) -> Result<(), String> {
    let dialog = state.top_dialog().cloned();
    match dialog {
        Some(Dialog::Resume) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.pop_dialog();
                let chapter = state.current_chapter;
                let question = state.current_question;
                state.start_chapter(chapter, question);
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
                state.resume_available = false;
            }
            _ => {}
        },
        Some(Dialog::ConfirmRestart(idx)) => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.start_chapter(idx, 0);
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                if !state.taker.is_empty() {
                    let _ = persist::save_session(state, state_dir);
                }
                state.should_quit = true;
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => {
                state.pop_dialog();
            }
            _ => {}
        },
        None => {}
    }
    Ok(())
}
