use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Render the top header: app title and plant count
pub fn render_header(f: &mut Frame, area: Rect, plant_count: usize) {
    let count_text = match plant_count {
        0 => String::new(),
        1 => " 1 plant".to_string(),
        n => format!(" {} plants", n),
    };

    let header_line = Line::from(vec![
        Span::styled(
            "My Plants",
            Style::default()
                .fg(theme::GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(count_text, Style::default().fg(theme::BODY_LIGHT)),
    ]);

    let header = Paragraph::new(header_line).block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}
