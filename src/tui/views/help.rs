use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )])
}

/// Draw the modal help overlay listing the chart's keys.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(60, 60, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "gitgrowth - Help",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        heading("Range:"),
        Line::from("  + / =       Zoom in on the most recent half"),
        Line::from("  -           Zoom out"),
        Line::from("  ←/→ or j/k  Pan through history"),
        Line::from("  0 / Home    Show the whole history"),
        Line::from(""),
        heading("General:"),
        Line::from("  h, F1       Toggle this help"),
        Line::from("  q, Esc      Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
