//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `F1`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 36;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 17;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area behind it first.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────╮
/// │                                  │
/// │  Draft                           │
/// │  Type       Write your idea      │
/// │  Backspace  Delete a character   │
/// │  Ctrl+U     Clear the draft      │
/// │  Enter      Submit idea          │
/// │                                  │
/// │  Board                           │
/// │  ↑ / ↓      Scroll ideas         │
/// │  Ctrl+R     Refresh ideas        │
/// │  F1         Toggle help          │
/// │  Esc        Close help           │
/// │  Ctrl+C     Quit                 │
/// │                                  │
/// │  Press any key to close          │
/// ╰──────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use idea_board_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let binding = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Draft", header_style)),
        binding("Type", "Write your idea"),
        binding("Backspace", "Delete a character"),
        binding("Ctrl+U", "Clear the draft"),
        binding("Enter", "Submit idea"),
        Line::from(""),
        Line::from(Span::styled("  Board", header_style)),
        binding("↑ / ↓", "Scroll ideas"),
        binding("Ctrl+R", "Refresh ideas"),
        binding("F1", "Toggle help"),
        binding("Esc", "Close help"),
        binding("Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
