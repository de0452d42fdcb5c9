//! Footer with the branding line.

use idea_board_config::Branding;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

/// Renders `powered by <brand>` centered in `area`.
pub fn render_footer(branding: &Branding, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Span::styled(
        branding.footer(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(area, buf);
}
