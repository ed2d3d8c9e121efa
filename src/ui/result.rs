use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::sidebar::band_color;

pub fn draw_chapter_result(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(chapter) = state.current_chapter() else {
        let p = Paragraph::new("No chapter");
        f.render_widget(p, area);
        return;
    };
    let progress = &state.progress[state.current_chapter];
    let band = state.chapter_band(state.current_chapter);

    let mut lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Chapter {} complete", chapter.number),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Your score: {}/{}", progress.score, chapter.max_score()),
            Style::default()
                .fg(band_color(band))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // Per-question breakdown of entered tokens
    for (idx, _) in chapter.questions.iter().enumerate() {
        let qnum = idx as u32 + 1;
        let records: Vec<_> = progress
            .records
            .iter()
            .filter(|r| r.question == qnum)
            .collect();

        let mut spans = vec![Span::raw(format!("  Question {:>2}: ", qnum))];
        if records.is_empty() {
            spans.push(Span::styled(
                "no answer".to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  "));
                }
                let (mark, color) = if record.correct {
                    ("✓", Color::Green)
                } else {
                    ("✗", Color::Red)
                };
                spans.push(Span::styled(
                    format!("{} {}", record.entered, mark),
                    Style::default().fg(color),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter] Back to chapters",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).block(Block::default());
    f.render_widget(widget, area);
}
