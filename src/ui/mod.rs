pub mod dialog;
pub mod keybar;
pub mod layout;
pub mod name;
pub mod question;
pub mod result;
pub mod select;
pub mod sidebar;
pub mod statusbar;
pub mod titlebar;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    match state.screen {
        Screen::NameEntry => {
            name::draw_name_entry(f, area, state);
        }
        Screen::ChapterSelect => {
            draw_chrome(f, area, state);
            let layout = layout::compute_layout(area);
            select::draw_chapter_overview(f, layout.main, state);
        }
        Screen::Working => {
            draw_chrome(f, area, state);
            let layout = layout::compute_layout(area);
            question::draw_question(f, layout.main, state);
        }
        Screen::ChapterResult => {
            draw_chrome(f, area, state);
            let layout = layout::compute_layout(area);
            result::draw_chapter_result(f, layout.main, state);
        }
    }

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}

fn draw_chrome(f: &mut Frame, area: Rect, state: &AppState) {
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    sidebar::draw_sidebar(f, layout.sidebar, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);
}
