use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_name_entry(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to the quiz!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Your progress is saved automatically."),
        Line::from(""),
        Line::from(Span::styled(
            "What's your name?",
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(""),
    ];

    let box_width = (area.width.saturating_sub(8) as usize).min(40);
    let name_padded = format!("{:<width$}", state.name_input, width = box_width);

    lines.push(Line::from(vec![
        Span::raw("┌"),
        Span::raw("─".repeat(box_width)),
        Span::raw("┐"),
    ]));
    lines.push(Line::from(vec![
        Span::raw("│"),
        Span::styled(name_padded, Style::default().fg(Color::Yellow)),
        Span::raw("│"),
    ]));
    lines.push(Line::from(vec![
        Span::raw("└"),
        Span::raw("─".repeat(box_width)),
        Span::raw("┘"),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to continue",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(widget, area);
}
