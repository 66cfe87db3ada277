use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Render the highlighted "next watering" banner.
///
/// An empty message still renders the banner frame, matching the ready state
/// after a failed load.
pub fn render_banner(f: &mut Frame, area: Rect, message: Option<&str>) {
    let banner_line = Line::from(vec![
        Span::raw(format!("{} ", theme::WATERDROP)),
        Span::styled(
            message.unwrap_or("").to_string(),
            Style::default().fg(theme::BLUE),
        ),
    ]);

    let banner = Paragraph::new(banner_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BLUE_LIGHT)),
    );

    f.render_widget(banner, area);
}
