use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::sidebar::band_color;

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(chapter) = state.current_chapter() else {
        let p = Paragraph::new("No chapter").block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    };
    let Some(question) = chapter.questions.get(state.current_question) else {
        let p = Paragraph::new("No questions").block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
        return;
    };

    let total = chapter.questions.len();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(
            "  Chapter {} — question {} of {}",
            chapter.number,
            state.current_question + 1,
            total
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    // Prompt (may span several lines in the source file)
    let wrap_width = (area.width as usize).saturating_sub(4);
    for prompt_line in question.prompt.lines() {
        for wrapped in wrap_text(prompt_line, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
        }
    }
    lines.push(Line::from(""));

    // Candidate answers
    for answer in &question.answers {
        for (li, wrapped) in wrap_text(answer, wrap_width.saturating_sub(4)).iter().enumerate() {
            let prefix = if li == 0 { "  > " } else { "    " };
            lines.push(Line::from(format!("{}{}", prefix, wrapped)));
        }
    }
    lines.push(Line::from(""));

    if let Some(feedback) = &state.last_feedback {
        draw_feedback(&mut lines, state, feedback);
    } else {
        draw_input(&mut lines, area, state, question.correct.len());
    }

    let widget = Paragraph::new(lines).block(Block::default());
    f.render_widget(widget, area);
}

fn draw_input(lines: &mut Vec<Line>, area: Rect, state: &AppState, expected: usize) {
    lines.push(Line::from(Span::styled(
        format!("  Enter your answer ({})", expected),
        Style::default().fg(Color::Cyan),
    )));

    let dashes = area.width.saturating_sub(6) as usize;
    let inner = area.width.saturating_sub(8) as usize;
    let text = &state.text_input;
    let cursor = state.text_cursor.min(text.len());

    lines.push(Line::from(vec![
        Span::raw("  ┌"),
        Span::raw("─".repeat(dashes)),
        Span::raw("┐"),
    ]));

    let mut spans = vec![Span::raw("  │ ")];
    let shown = text.len().min(inner.saturating_sub(1));
    let before = &text[..cursor.min(shown)];
    spans.push(Span::styled(
        before.to_string(),
        Style::default().fg(Color::White),
    ));
    if cursor < shown {
        spans.push(Span::styled(
            text[cursor..cursor + 1].to_string(),
            Style::default().fg(Color::Black).bg(Color::White),
        ));
        spans.push(Span::styled(
            text[cursor + 1..shown].to_string(),
            Style::default().fg(Color::White),
        ));
    } else {
        spans.push(Span::styled(
            " ".to_string(),
            Style::default().fg(Color::Black).bg(Color::White),
        ));
    }
    let cells = if cursor < shown { shown } else { shown + 1 };
    spans.push(Span::raw(" ".repeat(inner.saturating_sub(cells))));
    spans.push(Span::raw(" │"));
    lines.push(Line::from(spans));

    lines.push(Line::from(vec![
        Span::raw("  └"),
        Span::raw("─".repeat(dashes)),
        Span::raw("┘"),
    ]));
}

fn draw_feedback(lines: &mut Vec<Line>, state: &AppState, feedback: &crate::state::SubmitFeedback) {
    for record in &feedback.records {
        let (mark, color) = if record.correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        lines.push(Line::from(Span::styled(
            format!("  {} {}", mark, record.entered),
            Style::default().fg(color),
        )));
    }
    lines.push(Line::from(""));

    let progress = &state.progress[state.current_chapter];
    let max = state
        .current_chapter()
        .map(|c| c.max_score())
        .unwrap_or(0);
    let band = state.chapter_band(state.current_chapter);
    lines.push(Line::from(Span::styled(
        format!("  Your score: {}/{}", progress.score, max),
        Style::default()
            .fg(band_color(band))
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter] Next question",
        Style::default().fg(Color::DarkGray),
    )));
}

/// Wrap text to fit within `width` columns, breaking at word boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}
