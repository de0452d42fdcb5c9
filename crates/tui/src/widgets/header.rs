//! Header bar with the board title and the cloud badge.

use idea_board_protocol::CloudInfo;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The board title.
pub const TITLE: &str = "💡 Idea Board";

/// Renders the header: title on the left, cloud badge on the right.
///
/// The badge is left out entirely while the provider is unknown.
pub fn render_header(cloud: &CloudInfo, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let badge = cloud_badge(cloud);
    let badge_width = badge.as_ref().map_or(0, |line| line.width());
    let [title_area, badge_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(badge_width).unwrap_or(u16::MAX)),
    ])
    .areas(inner);

    Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .render(title_area, buf);

    if let Some(badge) = badge {
        Paragraph::new(badge)
            .alignment(Alignment::Right)
            .render(badge_area, buf);
    }
}

/// Builds the badge line, or `None` when the provider is unknown.
///
/// The region is appended when the backend reported one.
#[must_use]
pub fn cloud_badge(cloud: &CloudInfo) -> Option<Line<'static>> {
    if !cloud.is_known() {
        return None;
    }

    let provider = cloud.provider();
    let mut spans = vec![
        Span::raw(format!("{} ", provider.glyph())),
        Span::styled(
            provider.display_name(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(region) = cloud.known_region() {
        spans.push(Span::styled(
            format!(" · {region}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Some(Line::from(spans))
}
