use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;
use crate::timer::format_elapsed;

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let taker_text = if state.taker.is_empty() {
        String::new()
    } else {
        format!(" {} ", state.taker)
    };
    let taker_span = Span::styled(
        taker_text.clone(),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    );

    let timer_text = if let Some(secs) = state.elapsed_seconds {
        format!(" {} elapsed ", format_elapsed(secs))
    } else {
        String::new()
    };
    let timer_span = Span::styled(timer_text.clone(), Style::default().fg(Color::Rgb(200, 200, 120)));

    let title_text = format!("[ {} ]", state.source_file);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title: pad left so title sits in the middle of the full width
    let available = area.width as usize;
    let title_len = title_text.len();
    let center_pad = if available > title_len {
        (available - title_len) / 2
    } else {
        0
    };
    let left_pad = center_pad.saturating_sub(taker_text.len());
    // Right padding fills the gap between centered title and right-aligned timer
    let right_pad = available.saturating_sub(center_pad + title_len + timer_text.len());

    let line = Line::from(vec![
        taker_span,
        Span::raw(" ".repeat(left_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        timer_span,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
