use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, InputMode, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let bindings: Vec<(&str, &str)> = match state.screen {
        Screen::NameEntry => vec![("Enter", "continue"), ("Ctrl+Q", "quit")],
        Screen::ChapterSelect => vec![
            ("arrows", "select"),
            ("Enter", "run chapter"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Screen::Working => match state.input_mode {
            InputMode::AnswerInput => vec![
                ("a-z", "answer"),
                ("Enter", "submit"),
                ("Esc", "back to chapters"),
                ("Ctrl+Q", "quit"),
            ],
            _ => vec![
                ("Enter", "next question"),
                ("Esc", "back to chapters"),
                ("Ctrl+Q", "quit"),
            ],
        },
        Screen::ChapterResult => vec![("Enter", "back to chapters"), ("Ctrl+Q", "quit")],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
