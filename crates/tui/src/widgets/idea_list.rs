//! The ideas list and the error line above it.

use idea_board_protocol::Idea;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::layout::{ERROR_HEIGHT, MAX_ERROR_HEIGHT};
use crate::state::BoardState;

/// Shown while the list is loading.
pub const LOADING_TEXT: &str = "🔄 Loading ideas...";

/// Shown when the backend has no ideas.
pub const EMPTY_TEXT: &str = "🌟 No ideas yet. Be the first to share one!";

/// Renders the ideas list.
///
/// While a fetch is outstanding only the loading indicator is shown.
/// Otherwise each idea gets its content, its timestamp and a blank line,
/// starting from the scroll offset.
pub fn render_idea_list(state: &BoardState, area: Rect, buf: &mut Buffer) {
    let title = if state.is_loading() {
        " Ideas ".to_string()
    } else {
        format!(" Ideas ({}) ", state.ideas.len())
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = if state.is_loading() {
        Paragraph::new(Span::styled(LOADING_TEXT, Style::default().fg(Color::Yellow)))
            .alignment(Alignment::Center)
    } else if state.ideas.is_empty() {
        Paragraph::new(Span::styled(EMPTY_TEXT, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
    } else {
        let lines: Vec<Line<'_>> = state
            .ideas
            .iter()
            .skip(state.scroll)
            .flat_map(idea_lines)
            .collect();
        Paragraph::new(lines)
    };

    paragraph
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn idea_lines(idea: &Idea) -> [Line<'_>; 3] {
    [
        Line::from(Span::styled(
            idea.content.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("📅 {}", idea.local_timestamp()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ]
}

/// Renders `Error: <message>` when there is an error to show.
///
/// Long messages wrap onto the rows given by [`error_line_height`].
pub fn render_error_line(error: Option<&str>, area: Rect, buf: &mut Buffer) {
    let Some(message) = error else {
        return;
    };
    Paragraph::new(Line::from(Span::styled(
        error_text(message),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: false })
    .render(area, buf);
}

/// Returns the rows the error line needs at `width`.
///
/// Always between [`ERROR_HEIGHT`] and [`MAX_ERROR_HEIGHT`].
#[must_use]
pub fn error_line_height(error: Option<&str>, width: u16) -> u16 {
    let Some(message) = error else {
        return ERROR_HEIGHT;
    };
    if width == 0 {
        return ERROR_HEIGHT;
    }

    let rows = Line::from(error_text(message))
        .width()
        .div_ceil(usize::from(width));
    // Breaking at word boundaries can take one row more than the raw width
    let rows = if rows > 1 { rows + 1 } else { rows };
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .clamp(ERROR_HEIGHT, MAX_ERROR_HEIGHT)
}

fn error_text(message: &str) -> String {
    format!("Error: {message}")
}
