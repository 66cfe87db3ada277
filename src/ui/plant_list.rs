use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::logic::reminder::{format_distance, Locale};
use crate::storage::Plant;

use super::theme;

/// Truncate a string to a display width, appending "..." when cut
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.width().unwrap_or(0) + 3 > max_width {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Render the scrollable plant card list.
///
/// One two-line card per plant, keyed by storage order: name on the first
/// line, care hint and relative watering time on the second.
pub fn render_plant_list(
    f: &mut Frame,
    area: Rect,
    plants: &[Plant],
    list_state: &mut ListState,
    locale: Locale,
    now: DateTime<Utc>,
) {
    if plants.is_empty() {
        let empty = Paragraph::new("No plants to show.")
            .style(Style::default().fg(theme::BODY_LIGHT))
            .block(
                Block::default()
                    .title("Next watered")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::HEADING)),
            );
        f.render_widget(empty, area);
        return;
    }

    let hint_width = (area.width as usize).saturating_sub(28).max(10);

    let items: Vec<ListItem> = plants
        .iter()
        .map(|plant| {
            let name_line = Line::from(vec![
                Span::raw("🌱 "),
                Span::styled(
                    plant.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);

            let distance = format_distance(now, plant.notification, locale);
            let detail = if plant.water_tips.is_empty() {
                format!("  ↳ water in {}", distance)
            } else {
                format!(
                    "  ↳ {} - water in {}",
                    truncate_to_width(&plant.water_tips, hint_width),
                    distance
                )
            };

            let detail_line =
                Line::from(Span::styled(detail, Style::default().fg(theme::BODY_LIGHT)));

            ListItem::new(vec![name_line, detail_line])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Next watered")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::HEADING)),
        )
        .highlight_style(
            Style::default()
                .bg(ratatui::style::Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, list_state);
}
