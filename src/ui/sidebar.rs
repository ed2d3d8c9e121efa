use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, Screen, ScoreBand};

pub fn band_icon(band: ScoreBand) -> (&'static str, Color) {
    match band {
        ScoreBand::Full => ("✓", Color::Green),
        ScoreBand::Partial => ("◐", Color::Yellow),
        ScoreBand::Zero => ("✗", Color::Red),
        ScoreBand::Untouched => ("·", Color::DarkGray),
    }
}

pub fn band_color(band: ScoreBand) -> Color {
    band_icon(band).1
}

pub fn draw_sidebar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(1) as usize; // -1 for right border
    let total = state.chapters.len();

    // Highlight the running chapter while working, the cursor otherwise
    let highlighted = match state.screen {
        Screen::Working | Screen::ChapterResult => state.current_chapter,
        _ => state.chapter_cursor,
    };

    // Auto-scroll to keep the highlighted chapter visible
    let scroll_offset = if highlighted >= state.sidebar_scroll + inner_height {
        highlighted.saturating_sub(inner_height.saturating_sub(1))
    } else if highlighted < state.sidebar_scroll {
        highlighted
    } else {
        state.sidebar_scroll
    };

    for (idx, chapter) in state.chapters.iter().enumerate().skip(scroll_offset) {
        if lines.len() >= inner_height {
            break;
        }

        let band = state.chapter_band(idx);
        let (icon, color) = band_icon(band);
        let progress = &state.progress[idx];
        let is_current = idx == highlighted;

        let bg = if is_current { Color::DarkGray } else { Color::Reset };
        let style = if is_current {
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(bg)
                .fg(Color::White)
        } else {
            Style::default().bg(bg)
        };

        let label = format!("Chapter {}", chapter.number);
        let score = format!("{}/{}", progress.score, chapter.max_score());
        // cursor(3) + icon(2) + label + pad + score + trailing space
        let used = 3 + 2 + label.len() + score.len() + 1;
        let pad = inner_width.saturating_sub(used).max(1);

        let line = Line::from(vec![
            Span::styled(if is_current { " ▸ " } else { "   " }.to_string(), style),
            Span::styled(format!("{} ", icon), Style::default().fg(color).bg(bg)),
            Span::styled(label, style),
            Span::styled(" ".repeat(pad), style),
            Span::styled(score, Style::default().fg(color).bg(bg)),
            Span::styled(" ", style),
        ]);
        lines.push(line);
    }

    while lines.len() < inner_height {
        lines.push(Line::from(""));
    }

    let sidebar_title = format!(" {} Chapters ", total);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .title(sidebar_title)
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, area);
}
