//! The idea input box.
//!
//! Shows the draft (or a placeholder), a character counter and the
//! submit hint. Long drafts scroll so the end stays visible.

use idea_board_protocol::MAX_IDEA_LENGTH;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Shown in place of an empty draft.
pub const PLACEHOLDER: &str = "Share your brilliant idea...";

/// Shown next to the counter.
pub const SUBMIT_HINT: &str = "Enter ✨ Submit Idea";

/// Renders the input box and returns where the cursor belongs.
///
/// The returned position is `None` when the box has no room for text.
pub fn render_input(draft: &str, area: Rect, buf: &mut Buffer) -> Option<Position> {
    let block = Block::default()
        .title(Span::styled(
            " New idea ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    block.render(area, buf);

    let hint = hint_line(draft.chars().count(), inner.width);
    let hint_width = u16::try_from(hint.width()).unwrap_or(u16::MAX);
    let [text_area, _, hint_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(hint_width),
    ])
    .areas(inner);

    Paragraph::new(hint).render(hint_area, buf);

    if text_area.width == 0 || text_area.height == 0 {
        return None;
    }

    if draft.is_empty() {
        Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(text_area, buf);
        return Some(Position::new(text_area.x, text_area.y));
    }

    // Leave one column for the cursor
    let visible = Line::from(visible_tail(draft, usize::from(text_area.width - 1)));
    let offset = u16::try_from(visible.width()).unwrap_or(u16::MAX);
    Paragraph::new(visible).render(text_area, buf);
    Some(Position::new(
        text_area.x + offset.min(text_area.width - 1),
        text_area.y,
    ))
}

/// Builds the counter and hint, dropping the hint when space is short.
fn hint_line(count: usize, width: u16) -> Line<'static> {
    let counter_style = if count >= MAX_IDEA_LENGTH {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let counter = Span::styled(format!("{count}/{MAX_IDEA_LENGTH}"), counter_style);

    let full = Line::from(vec![
        counter.clone(),
        Span::raw("  "),
        Span::styled(SUBMIT_HINT, Style::default().fg(Color::Green)),
    ]);
    if full.width() * 2 <= usize::from(width) {
        full
    } else {
        Line::from(counter)
    }
}

/// Returns the longest suffix of `text` that is at most `max_chars` long.
fn visible_tail(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    let skip = count - max_chars;
    text.char_indices()
        .nth(skip)
        .map_or("", |(index, _)| &text[index..])
}
