//! Status bar with key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Key hints, in display order.
const HINTS: [(&str, &str); 4] = [
    ("Ctrl+R", "refresh"),
    ("↑↓", "scroll"),
    ("F1", "help"),
    ("Ctrl+C", "quit"),
];

/// Renders the key hint bar.
pub fn render_status_bar(area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(HINTS.len() * 3);
    for (index, (key, action)) in HINTS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" │ ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
