use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, ScoreBand};
use crate::ui::sidebar::band_color;

/// Main panel for the chapter-select screen: details of the chapter under
/// the cursor.
pub fn draw_chapter_overview(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    let Some(chapter) = state.chapters.get(state.chapter_cursor) else {
        let p = Paragraph::new("No chapters");
        f.render_widget(p, area);
        return;
    };
    let progress = &state.progress[state.chapter_cursor];
    let band = state.chapter_band(state.chapter_cursor);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  Chapter {}", chapter.number),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "  {} questions, {} points available",
        chapter.questions.len(),
        chapter.max_score()
    )));
    lines.push(Line::from(""));

    match band {
        ScoreBand::Untouched => {
            lines.push(Line::from(Span::styled(
                "  Not attempted yet.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                format!(
                    "  Score: {}/{}{}",
                    progress.score,
                    chapter.max_score(),
                    if progress.completed { "" } else { " (in progress)" }
                ),
                Style::default()
                    .fg(band_color(band))
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }

    lines.push(Line::from(""));
    let action = if state.chapter_attempted(state.chapter_cursor) {
        "  [Enter] Restart this chapter"
    } else {
        "  [Enter] Start this chapter"
    };
    lines.push(Line::from(Span::styled(
        action,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).block(Block::default());
    f.render_widget(widget, area);
}
